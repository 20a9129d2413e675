//! MotionElements 规则

use registry::Resolvable;

/// MotionElements
#[derive(Resolvable)]
#[provider(name = "MotionElements")]
#[rule(
    key = "motionelements",
    pattern = r"motionelements\.com/(?:[a-z]{2}(?:-[a-z]{2})?/)?[a-z-]+?-(\d+)(?:[-/?#]|$)",
    group = 1
)]
pub struct MotionElements;

#[test]
fn test_resolve() {
    use crate::resolve;

    let res = resolve("https://www.motionelements.com/stock-video-12345678-ocean");
    assert_eq!(res.provider(), Some("motionelements"));
    assert_eq!(res.asset_id(), Some("12345678"));

    let res = resolve("https://www.motionelements.com/ja/after-effects-template-1234567-logo-reveal");
    assert_eq!(res.asset_id(), Some("1234567"));
}
