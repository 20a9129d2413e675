//! Pngtree 规则

use registry::Resolvable;

/// Pngtree
#[derive(Resolvable)]
#[provider(name = "Pngtree")]
#[rule(
    key = "pngtree",
    pattern = r"pngtree\.com/(?:[a-z]{2}/)?[a-z-]+/(?:[^/?#]*_)?(\d+)\.html",
    group = 1
)]
pub struct Pngtree;

#[test]
fn test_resolve() {
    use crate::resolve;

    let res = resolve("https://pngtree.com/freepng/red-apple_1234567.html");
    assert_eq!(res.provider(), Some("pngtree"));
    assert_eq!(res.asset_id(), Some("1234567"));

    let res = resolve("https://pngtree.com/freebackground/blue-sky_7654321.html?sol=downref");
    assert_eq!(res.asset_id(), Some("7654321"));
}
