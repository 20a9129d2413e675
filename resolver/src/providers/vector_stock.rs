//! VectorStock 规则

use registry::Resolvable;

/// VectorStock
#[derive(Resolvable)]
#[provider(name = "VectorStock")]
#[rule(
    key = "vectorstock",
    pattern = r"vectorstock\.com/[\w-]+/(?:[^/?#]*-)?vector-(\d+)",
    group = 1
)]
pub struct VectorStock;
