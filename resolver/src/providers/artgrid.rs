//! Artgrid 规则

use registry::Resolvable;

/// Artgrid
#[derive(Resolvable)]
#[provider(name = "Artgrid")]
#[rule(key = "artgrid", pattern = r"artgrid\.io/clip/(\d+)", group = 1)]
pub struct Artgrid;
