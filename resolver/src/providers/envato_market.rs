//! Envato Market 规则

use registry::Resolvable;

/// Envato Market
///
/// 每个子站独立计价, 各用一个站点键.
#[derive(Resolvable)]
#[provider(name = "Envato Market")]
#[rule(key = "videohive", pattern = r"videohive\.net/item/[^/?#]+/(\d+)", group = 1)]
#[rule(key = "audiojungle", pattern = r"audiojungle\.net/item/[^/?#]+/(\d+)", group = 1)]
#[rule(key = "themeforest", pattern = r"themeforest\.net/item/[^/?#]+/(\d+)", group = 1)]
#[rule(key = "graphicriver", pattern = r"graphicriver\.net/item/[^/?#]+/(\d+)", group = 1)]
#[rule(key = "codecanyon", pattern = r"codecanyon\.net/item/[^/?#]+/(\d+)", group = 1)]
#[rule(key = "photodune", pattern = r"photodune\.net/item/[^/?#]+/(\d+)", group = 1)]
#[rule(key = "3docean", pattern = r"3docean\.net/item/[^/?#]+/(\d+)", group = 1)]
pub struct EnvatoMarket;

#[cfg(test)]
mod tests {
    use crate::resolve;

    #[test]
    fn test_resolve() {
        let cases = [
            ("https://videohive.net/item/logo-reveal/1234567", "videohive"),
            ("https://audiojungle.net/item/upbeat-corporate/1234567?s_rank=1", "audiojungle"),
            ("https://themeforest.net/item/avada/1234567", "themeforest"),
            ("https://graphicriver.net/item/flyer/1234567", "graphicriver"),
            ("https://codecanyon.net/item/chat-app/1234567", "codecanyon"),
            ("https://photodune.net/item/red-apple/1234567", "photodune"),
            ("https://3docean.net/item/low-poly-car/1234567", "3docean"),
        ];
        for (url, provider) in cases {
            let res = resolve(url);
            assert_eq!(res.provider(), Some(provider), "{url}");
            assert_eq!(res.asset_id(), Some("1234567"), "{url}");
        }
    }
}
