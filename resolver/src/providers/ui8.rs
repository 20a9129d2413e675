//! UI8 规则

use registry::Resolvable;

/// UI8
#[derive(Resolvable)]
#[provider(name = "UI8")]
#[rule(key = "ui8", pattern = r"ui8\.net/[\w-]+/products/([\w-]+)", group = 1)]
pub struct Ui8;
