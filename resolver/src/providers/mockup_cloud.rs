//! Mockup Cloud 规则

use registry::Resolvable;

/// Mockup Cloud
#[derive(Resolvable)]
#[provider(name = "Mockup Cloud")]
#[rule(
    key = "mockupcloud",
    pattern = r"mockupcloud\.com/(?:product|scene)/([\w-]+)",
    group = 1
)]
pub struct MockupCloud;
