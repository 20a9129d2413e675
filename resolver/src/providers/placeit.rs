//! Placeit 规则

use registry::Resolvable;

/// Placeit
#[derive(Resolvable)]
#[provider(name = "Placeit")]
#[rule(key = "placeit", pattern = r"placeit\.net/c/[\w-]+/stages/([\w-]+)", group = 1)]
pub struct Placeit;
