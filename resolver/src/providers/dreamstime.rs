//! Dreamstime 规则

use registry::Resolvable;

/// Dreamstime
///
/// id 直接拼在类型词之后, 如 `...-image123456789`.
#[derive(Resolvable)]
#[provider(name = "Dreamstime")]
#[rule(
    key = "dreamstime_video",
    pattern = r"dreamstime\.com/(?:[^/?#]*-)?video(\d+)(?:[/?#]|$)",
    group = 1
)]
#[rule(
    key = "dreamstime",
    pattern = r"dreamstime\.com/(?:[^/?#]*-)?(?:image|illustration|photo)(\d+)(?:[/?#]|$)",
    group = 1
)]
pub struct Dreamstime;

#[test]
fn test_resolve() {
    use crate::resolve;

    let res = resolve("https://www.dreamstime.com/stock-photo-red-apple-image123456789");
    assert_eq!(res.provider(), Some("dreamstime"));
    assert_eq!(res.asset_id(), Some("123456789"));

    let res = resolve("https://www.dreamstime.com/ocean-waves-video123456");
    assert_eq!(res.provider(), Some("dreamstime_video"));
    assert_eq!(res.asset_id(), Some("123456"));

    assert!(!resolve("https://www.dreamstime.com/photos-images/apple.html").is_matched());
}
