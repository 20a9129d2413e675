//! Epidemic Sound 规则

use registry::Resolvable;

/// Epidemic Sound
///
/// 曲目 id 为大小写混合的字母数字串.
#[derive(Resolvable)]
#[provider(name = "Epidemic Sound")]
#[rule(
    key = "epidemicsound",
    pattern = r"epidemicsound\.com/(?:[a-z]{2}/)?(?:track|sound-effects/tracks)/([A-Za-z0-9]+)",
    group = 1
)]
pub struct EpidemicSound;
