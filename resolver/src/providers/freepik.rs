//! Freepik 规则

use registry::Resolvable;

/// Freepik
///
/// 末条规则匹配任意 `_<id>` 结尾的路径, 也会命中视频与图标页面.
#[derive(Resolvable)]
#[provider(name = "Freepik")]
#[rule(
    key = "freepik_video",
    pattern = r"freepik\.com/(?:[a-z]{2}/)?(?:free|premium)-video/(?:[^/?#]*_)?(\d+)(?:[/?#.]|$)",
    group = 1
)]
#[rule(
    key = "freepik",
    pattern = r"freepik\.com/(?:[a-z]{2}/)?(?:free|premium)-(?:photo|vector|psd|ai-image|template|mockup)s?/(?:[^/?#]*_)?(\d+)(?:[/?#.]|$)",
    group = 1
)]
#[rule(
    key = "freepik",
    pattern = r"freepik\.com/(?:[^?#]*/)?[^/?#]*_(\d+)(?:\.htm|[/?#]|$)",
    group = 1
)]
pub struct Freepik;

#[cfg(test)]
mod tests {
    use crate::resolve;

    #[test]
    fn test_resolve() {
        let res = resolve("https://www.freepik.com/free-photo/cat-sofa_12345678.htm#query=cat");
        assert_eq!(res.provider(), Some("freepik"));
        assert_eq!(res.asset_id(), Some("12345678"));

        let res = resolve("https://www.freepik.com/premium-vector/floral-pattern_2345678.htm");
        assert_eq!(res.asset_id(), Some("2345678"));

        let res = resolve("https://www.freepik.com/free-video/aerial-forest_3141592");
        assert_eq!(res.provider(), Some("freepik_video"));
        assert_eq!(res.asset_id(), Some("3141592"));

        let res = resolve("https://www.freepik.com/author/jane/photos/portrait_998877");
        assert_eq!(res.provider(), Some("freepik"));
        assert_eq!(res.asset_id(), Some("998877"));

        assert!(!resolve("https://www.freepik.com/free-photos-vectors/cat").is_matched());
    }
}
