//! IconScout 规则

use registry::Resolvable;

/// IconScout
#[derive(Resolvable)]
#[provider(name = "IconScout")]
#[rule(
    key = "iconscout",
    pattern = r"iconscout\.com/(?:[a-z]{2}/)?(?:free-)?(?:icon|illustration|3d-illustration|lottie-animation|icon-pack|3d-model)s?/(?:[^/?#]*[-_])?(\d+)(?:[/?#]|$)",
    group = 1
)]
pub struct IconScout;
