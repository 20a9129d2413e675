//! Soundstripe 规则

use registry::Resolvable;

/// Soundstripe
#[derive(Resolvable)]
#[provider(name = "Soundstripe")]
#[rule(
    key = "soundstripe",
    pattern = r"soundstripe\.com/(?:songs|sound-effects)/(\d+)",
    group = 1
)]
pub struct Soundstripe;
