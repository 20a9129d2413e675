//! Pond5 规则

use registry::Resolvable;

/// Pond5
#[derive(Resolvable)]
#[provider(name = "Pond5")]
#[rule(
    key = "pond5",
    pattern = r"pond5\.com/(?:[a-z]{2}/)?(?:stock-footage|photo|royalty-free-music|sound-effects|after-effects|illustration|premiere-pro-templates)/(?:item/)?(\d+)",
    group = 1
)]
pub struct Pond5;
