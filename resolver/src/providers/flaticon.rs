//! Flaticon 规则

use registry::Resolvable;

/// Flaticon
///
/// Freepik 域名下的 `/icon/` 页面也归 Flaticon, 需排在 Freepik 的宽松规则之前.
#[derive(Resolvable)]
#[provider(name = "Flaticon")]
#[rule(
    key = "flaticon",
    pattern = r"freepik\.com/(?:[a-z]{2}/)?icons?/(?:[^/?#]*_)?(\d+)(?:[/?#.]|$)",
    group = 1
)]
#[rule(
    key = "flaticon",
    pattern = r"flaticon\.com/(?:[a-z]{2}/)?(?:free|premium)-(?:icon|sticker|animated-icon)s?/(?:[^/?#]*_)?(\d+)(?:[/?#]|$)",
    group = 1
)]
pub struct Flaticon;

#[cfg(test)]
mod tests {
    use crate::resolve;

    #[test]
    fn test_resolve() {
        let res = resolve("https://www.freepik.com/icon/my-icon_123456");
        assert_eq!(res.provider(), Some("flaticon"));
        assert_eq!(res.asset_id(), Some("123456"));

        let res = resolve("https://www.flaticon.com/free-icon/apple_415733?term=apple&related_id=415733");
        assert_eq!(res.provider(), Some("flaticon"));
        assert_eq!(res.asset_id(), Some("415733"));

        let res = resolve("https://www.flaticon.com/br/free-sticker/happy_7112345");
        assert_eq!(res.asset_id(), Some("7112345"));

        assert!(!resolve("https://www.flaticon.com/free-icons/apple").is_matched());
    }
}
