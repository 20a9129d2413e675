//! FootageCrate 规则

use registry::Resolvable;

/// FootageCrate
#[derive(Resolvable)]
#[provider(name = "FootageCrate")]
#[rule(
    key = "footagecrate",
    pattern = r"footagecrate\.com/(?:[\w-]+-fx|sound-effects|fx)/([\w-]+)",
    group = 1
)]
pub struct FootageCrate;
