//! Designi 规则

use registry::Resolvable;

/// Designi
///
/// 作品链接只有一段含数字的短码, 纯字母路径是分类页.
#[derive(Resolvable)]
#[provider(name = "Designi")]
#[rule(
    key = "designi",
    pattern = r"designi\.com\.br/([a-z0-9]*[0-9][a-z0-9]*)(?:[/?#]|$)",
    group = 1
)]
pub struct Designi;

#[test]
fn test_resolve() {
    use crate::resolve;

    let res = resolve("https://www.designi.com.br/abc123def456");
    assert_eq!(res.provider(), Some("designi"));
    assert_eq!(res.asset_id(), Some("abc123def456"));

    assert!(!resolve("https://www.designi.com.br/mockups").is_matched());
}
