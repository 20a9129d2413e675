//! iStock 规则

use registry::Resolvable;

/// iStock
///
/// 资源 id 为 `gm` 后的数字, 其后的数字是版本号.
#[derive(Resolvable)]
#[provider(name = "iStock")]
#[rule(
    key = "istockvideo",
    pattern = r"istockphoto\.com/(?:[a-z]{2}(?:-[a-z]{2})?/)?(?:video|vid[eé]o)/[^?#]*?gm(\d+)",
    group = 1
)]
#[rule(key = "istockphoto", pattern = r"istockphoto\.com/[^?#]*?gm(\d+)", group = 1)]
pub struct Istock;

#[test]
fn test_resolve() {
    use crate::resolve;

    let res = resolve("https://www.istockphoto.com/photo/mountain-lake-gm1234567890-360123456");
    assert_eq!(res.provider(), Some("istockphoto"));
    assert_eq!(res.asset_id(), Some("1234567890"));

    let res = resolve("https://www.istockphoto.com/de/foto/bergsee-gm1234567890-360123456");
    assert_eq!(res.provider(), Some("istockphoto"));

    let res = resolve("https://www.istockphoto.com/video/city-timelapse-gm987654321-267891234");
    assert_eq!(res.provider(), Some("istockvideo"));
    assert_eq!(res.asset_id(), Some("987654321"));
}
