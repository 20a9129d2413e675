//! Craftwork 规则

use registry::Resolvable;

/// Craftwork
#[derive(Resolvable)]
#[provider(name = "Craftwork")]
#[rule(
    key = "craftwork",
    pattern = r"craftwork\.design/(?:[a-z]{2}/)?product/([\w-]+)",
    group = 1
)]
pub struct Craftwork;
