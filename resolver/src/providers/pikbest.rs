//! Pikbest 规则

use registry::Resolvable;

/// Pikbest
#[derive(Resolvable)]
#[provider(name = "Pikbest")]
#[rule(
    key = "pikbest",
    pattern = r"pikbest\.com/(?:[a-z-]+/)*(?:[^/?#]*_)?(\d+)\.html",
    group = 1
)]
pub struct Pikbest;
