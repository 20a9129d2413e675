//! Adobe Stock 规则

use registry::Resolvable;

/// Adobe Stock
///
/// 四条规则依次放宽, 顺序不可调整:
/// 音频搜索页的 `asset_id` 与搜索关键词中的数字共存, 宽松规则会取到关键词.
/// 宽松规则无法区分贡献者主页 (`/contributor/<id>`) 中的数字, 属于已知误判.
#[derive(Resolvable)]
#[provider(name = "Adobe Stock")]
#[rule(
    key = "adobestock",
    pattern = r"stock\.adobe\.com/(?:[a-z]{2}(?:_[a-z]{2})?/)?search/audio\?(?:[^#]*&)?asset_id=(\d+)",
    group = 1
)]
#[rule(
    key = "adobestock",
    pattern = r"stock\.adobe\.com/(?:[a-z]{2}(?:_[a-z]{2})?/)?(?:images|video|templates|3d-assets|audio|free|editorial|stock-photo)/[^/?#]+/(\d+)(?:[/?#]|$)",
    group = 1
)]
#[rule(
    key = "adobestock",
    pattern = r"stock\.adobe\.com/[^#]*[?&]asset_id=(\d+)",
    group = 1
)]
#[rule(key = "adobestock", pattern = r"stock\.adobe\.com/[^#]*?(\d{6,})", group = 1)]
pub struct AdobeStock;

#[test]
fn test_resolve() {
    use crate::resolve;

    let res = resolve("https://stock.adobe.com/images/some-title/55555555");
    assert_eq!(res.provider(), Some("adobestock"));
    assert_eq!(res.asset_id(), Some("55555555"));

    let res = resolve("https://stock.adobe.com/jp/video/drone-over-lake/412345678?prev_url=detail");
    assert_eq!(res.asset_id(), Some("412345678"));

    let res = resolve("https://stock.adobe.com/search/audio?k=20230101&asset_id=440123790");
    assert_eq!(res.asset_id(), Some("440123790"));

    let res = resolve("https://stock.adobe.com/search?k=2024123&asset_id=555666777");
    assert_eq!(res.asset_id(), Some("555666777"));

    assert!(!resolve("https://stock.adobe.com/search?k=cat").is_matched());
}
