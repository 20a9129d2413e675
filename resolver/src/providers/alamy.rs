//! Alamy 规则

use registry::Resolvable;

/// Alamy, 含欧洲各国域名
#[derive(Resolvable)]
#[provider(name = "Alamy")]
#[rule(
    key = "alamy",
    pattern = r"alamy\.(?:com|de|es|fr|it)/(?:[^/?#]*-)?(?:image)?(\d+)\.html",
    group = 1
)]
pub struct Alamy;

#[test]
fn test_resolve() {
    use crate::resolve;

    let res = resolve("https://www.alamy.com/stock-photo-red-apple-123456789.html");
    assert_eq!(res.provider(), Some("alamy"));
    assert_eq!(res.asset_id(), Some("123456789"));

    let res = resolve("https://www.alamy.de/roter-apfel-image123456789.html?imageid=ABC");
    assert_eq!(res.asset_id(), Some("123456789"));
}
