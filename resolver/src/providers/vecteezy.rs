//! Vecteezy 规则

use registry::Resolvable;

/// Vecteezy
#[derive(Resolvable)]
#[provider(name = "Vecteezy")]
#[rule(
    key = "vecteezy",
    pattern = r"vecteezy\.com/(?:[a-z]{2}/)?(?:vector-art|photo|video|png|free-vector|free-photos)/(\d+)",
    group = 1
)]
pub struct Vecteezy;

#[test]
fn test_resolve() {
    use crate::resolve;

    let res = resolve("https://www.vecteezy.com/vector-art/1234567-floral-pattern");
    assert_eq!(res.provider(), Some("vecteezy"));
    assert_eq!(res.asset_id(), Some("1234567"));

    assert!(!resolve("https://www.vecteezy.com/free-vector/floral").is_matched());
}
