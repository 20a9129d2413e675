//! Rawpixel 规则

use registry::Resolvable;

/// Rawpixel
#[derive(Resolvable)]
#[provider(name = "Rawpixel")]
#[rule(key = "rawpixel", pattern = r"rawpixel\.com/image/(\d+)", group = 1)]
pub struct Rawpixel;
