//! Creative Market 规则

use registry::Resolvable;

/// Creative Market
#[derive(Resolvable)]
#[provider(name = "Creative Market")]
#[rule(key = "creativemarket", pattern = r"creativemarket\.com/[\w.-]+/(\d+)-", group = 1)]
pub struct CreativeMarket;
