//! Uplabs 规则

use registry::Resolvable;

/// Uplabs
#[derive(Resolvable)]
#[provider(name = "Uplabs")]
#[rule(key = "uplabs", pattern = r"uplabs\.com/posts/([\w-]+)", group = 1)]
pub struct Uplabs;
