//! Creative Fabrica 规则

use registry::Resolvable;

/// Creative Fabrica, id 为产品 slug
#[derive(Resolvable)]
#[provider(name = "Creative Fabrica")]
#[rule(
    key = "creativefabrica",
    pattern = r"creativefabrica\.com/(?:[a-z]{2}/)?product/([\w-]+)",
    group = 1
)]
pub struct CreativeFabrica;
