//! Yellow Images 规则

use registry::Resolvable;

/// Yellow Images
#[derive(Resolvable)]
#[provider(name = "Yellow Images")]
#[rule(
    key = "yellowimages",
    pattern = r"yellowimages\.com/(?:[a-z]{2}/)?stock/(?:[^/?#]*-)?(\d+)(?:[/?#]|$)",
    group = 1
)]
pub struct YellowImages;
