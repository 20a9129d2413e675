//! Envato Elements 规则

use registry::Resolvable;

/// Envato Elements
///
/// id 为 slug 末尾的大写字母数字串.
#[derive(Resolvable)]
#[provider(name = "Envato Elements")]
#[rule(
    key = "envato",
    pattern = r"elements\.envato\.com/(?:[a-z]{2}/)?(?:[\w-]+/)*[\w-]*-([A-Z0-9]{5,})(?:[/?#]|$)",
    group = 1
)]
pub struct EnvatoElements;

#[test]
fn test_resolve() {
    use crate::resolve;

    let res = resolve("https://elements.envato.com/some-title-ABCD1234");
    assert_eq!(res.provider(), Some("envato"));
    assert_eq!(res.asset_id(), Some("ABCD1234"));

    let res = resolve("https://elements.envato.com/de/stock-video/ocean-waves-XYZ9876?utm_source=x");
    assert_eq!(res.asset_id(), Some("XYZ9876"));

    assert!(!resolve("https://elements.envato.com/stock-video").is_matched());
}
