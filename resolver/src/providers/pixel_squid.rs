//! PixelSquid 规则

use registry::Resolvable;

/// PixelSquid
#[derive(Resolvable)]
#[provider(name = "PixelSquid")]
#[rule(
    key = "pixelsquid",
    pattern = r"pixelsquid\.com/(?:png|stock-images)/(?:[^/?#]*-)?(\d+)(?:[/?#]|$)",
    group = 1
)]
pub struct PixelSquid;
