//! Storyblocks 规则

use registry::Resolvable;

/// Storyblocks
///
/// 视频, 音频, 图片三种链接由一条规则的三个分支匹配, id 落在不同捕获组.
#[derive(Resolvable)]
#[provider(name = "Storyblocks")]
#[rule(
    key = "storyblocks",
    pattern = r"storyblocks\.com/(?:video/stock/(?:[^/?#]*-)?([a-z0-9]{8,})(?:[/?#]|$)|audio/stock/(?:[^/?#]*-)?(\d+)(?:\.html|[/?#]|$)|images/stock/(?:[^/?#]*-)?([a-z0-9]{8,})(?:[/?#]|$))",
    candidates = [1, 2, 3]
)]
pub struct Storyblocks;

#[test]
fn test_resolve() {
    use crate::resolve;

    let res = resolve("https://www.storyblocks.com/video/stock/sunset-over-ocean-bhv0h5o9ekg7tq3yh");
    assert_eq!(res.provider(), Some("storyblocks"));
    assert_eq!(res.asset_id(), Some("bhv0h5o9ekg7tq3yh"));

    let res = resolve("https://www.storyblocks.com/audio/stock/calm-piano-12345.html");
    assert_eq!(res.asset_id(), Some("12345"));

    let res = resolve("https://www.storyblocks.com/images/stock/red-apple-sv1b2c3d4e");
    assert_eq!(res.asset_id(), Some("sv1b2c3d4e"));
}
