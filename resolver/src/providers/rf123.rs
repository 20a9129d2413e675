//! 123RF 规则

use registry::Resolvable;

/// 123RF
#[derive(Resolvable)]
#[provider(name = "123RF")]
#[rule(
    key = "123rf_video",
    pattern = r"123rf\.com/(?:[a-z]{2}/)?stock-footage/(?:[^/?#]*_)?(\d+)",
    group = 1
)]
#[rule(
    key = "123rf",
    pattern = r"123rf\.com/(?:[a-z]{2}/)?(?:free-)?(?:photo|vector|clipart|icon|stock-photo)_(\d+)_",
    group = 1
)]
pub struct Rf123;
