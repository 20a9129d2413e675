//! Colourbox 规则

use registry::Resolvable;

/// Colourbox
#[derive(Resolvable)]
#[provider(name = "Colourbox")]
#[rule(
    key = "colourbox",
    pattern = r"colourbox\.com/(?:image|vector|video|preview)/(?:[^/?#]*-)?(\d+)(?:[/?#]|$)",
    group = 1
)]
pub struct Colourbox;
