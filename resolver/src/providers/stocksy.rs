//! Stocksy 规则

use registry::Resolvable;

/// Stocksy
#[derive(Resolvable)]
#[provider(name = "Stocksy")]
#[rule(key = "stocksy", pattern = r"stocksy\.com/(\d+)", group = 1)]
pub struct Stocksy;
