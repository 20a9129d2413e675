//! Artlist 规则

use registry::Resolvable;

/// Artlist
///
/// 音乐链接中 id 可能在 slug 之前或之后.
#[derive(Resolvable)]
#[provider(name = "Artlist")]
#[rule(
    key = "artlist_video",
    pattern = r"artlist\.io/(?:stock-footage|video-templates)/clip/[^/?#]+/(\d+)",
    group = 1
)]
#[rule(
    key = "artlist",
    pattern = r"artlist\.io/(?:royalty-free-music/|sfx/)?(?:song|track)/(?:[^/?#]+/)?(\d+)",
    group = 1
)]
pub struct Artlist;

#[cfg(test)]
mod tests {
    use crate::resolve;

    #[test]
    fn test_music() {
        let res = resolve("https://artlist.io/royalty-free-music/song/calm-piano/12345");
        assert_eq!(res.provider(), Some("artlist"));
        assert_eq!(res.asset_id(), Some("12345"));

        let res = resolve("https://artlist.io/song/12345/calm-piano");
        assert_eq!(res.asset_id(), Some("12345"));

        let res = resolve("https://artlist.io/sfx/track/door-slam/67890");
        assert_eq!(res.asset_id(), Some("67890"));
    }

    #[test]
    fn test_footage() {
        let res = resolve("https://artlist.io/stock-footage/clip/drone-city/445566");
        assert_eq!(res.provider(), Some("artlist_video"));
        assert_eq!(res.asset_id(), Some("445566"));
    }
}
