//! Depositphotos 规则

use registry::Resolvable;

/// Depositphotos
///
/// 兼容旧版 `/<id>/stock-...` 与新版 `/<type>/<slug>-<id>.html` 两种链接.
/// 末条规则只看首段数字, 会吞掉旧版视频链接.
#[derive(Resolvable)]
#[provider(name = "Depositphotos")]
#[rule(
    key = "depositphotos_video",
    pattern = r"depositphotos\.com/(?:[a-z]{2}/)?(\d+)/stock-video-",
    group = 1
)]
#[rule(
    key = "depositphotos_video",
    pattern = r"depositphotos\.com/(?:[a-z]{2}/)?video/(?:[^/?#]*-)?(\d+)\.html",
    group = 1
)]
#[rule(
    key = "depositphotos",
    pattern = r"depositphotos\.com/(?:[a-z]{2}/)?(?:photo|vector|illustration|editorial)/(?:[^/?#]*-)?(\d+)\.html",
    group = 1
)]
#[rule(
    key = "depositphotos",
    pattern = r"depositphotos\.com/(?:[a-z]{2}/)?(\d+)/",
    group = 1
)]
pub struct Depositphotos;

#[cfg(test)]
mod tests {
    use crate::resolve;

    #[test]
    fn test_legacy() {
        let res = resolve("https://depositphotos.com/123456/stock-photo-red-apple.html");
        assert_eq!(res.provider(), Some("depositphotos"));
        assert_eq!(res.asset_id(), Some("123456"));

        let res = resolve("https://ru.depositphotos.com/654321/stock-video-sea.html");
        assert_eq!(res.provider(), Some("depositphotos_video"));
        assert_eq!(res.asset_id(), Some("654321"));
    }

    #[test]
    fn test_current() {
        let res = resolve("https://depositphotos.com/photo/red-apple-123456789.html");
        assert_eq!(res.provider(), Some("depositphotos"));
        assert_eq!(res.asset_id(), Some("123456789"));

        let res = resolve("https://depositphotos.com/video/sea-waves-987654321.html");
        assert_eq!(res.provider(), Some("depositphotos_video"));
        assert_eq!(res.asset_id(), Some("987654321"));
    }
}
