//! Lovepik 规则

use registry::Resolvable;

/// Lovepik
#[derive(Resolvable)]
#[provider(name = "Lovepik")]
#[rule(
    key = "lovepik",
    pattern = r"lovepik\.com/(?:image|video|audio|template)-(\d+)/",
    group = 1
)]
pub struct Lovepik;
