//! Shutterstock 规则

/*
 * Copyright (c) 2025 fltLi
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use registry::Resolvable;

/// Shutterstock
///
/// 同一域名下的视频, 音乐与编辑图片各用独立的站点键, 便于分别计价.
/// 末条宽松规则会命中视频, 音乐以及纯数字 id 的编辑图片链接, 必须保持在最后.
/// 宽松规则也会把贡献者主页 (`/g/<name>-<digits>`) 中的数字当作 id, 属于已知误判.
#[derive(Resolvable)]
#[provider(name = "Shutterstock")]
#[rule(
    key = "vshutter",
    pattern = r"shutterstock\.com/(?:[a-z]{2}(?:-[A-Za-z]{2,4})?/)?video/clip-(\d+)",
    group = 1
)]
#[rule(
    key = "mshutter",
    pattern = r"shutterstock\.com/(?:[a-z]{2}(?:-[A-Za-z]{2,4})?/)?music/(?:track|sound-effect)-(\d+)",
    group = 1
)]
#[rule(
    key = "shutterstock_editorial",
    pattern = r"shutterstock\.com/(?:[a-z]{2}(?:-[A-Za-z]{2,4})?/)?editorial/image-editorial/(?:[^/?#]*-)?(\d+[a-z]?)(?:[/?#]|$)",
    group = 1
)]
#[rule(
    key = "shutterstock",
    pattern = r"shutterstock\.com/(?:[a-z]{2}(?:-[A-Za-z]{2,4})?/)?image-(?:photo|vector|illustration|generated)/(?:[^/?#]*-)?(\d+)(?:[/?#]|$)",
    group = 1
)]
#[rule(
    key = "shutterstock",
    pattern = r"shutterstock\.com/[^?#]*?-(\d{6,})(?:[-/?#]|$)",
    group = 1
)]
pub struct Shutterstock;

#[cfg(test)]
mod tests {
    use crate::resolve;

    #[test]
    fn test_image() {
        let res = resolve("https://www.shutterstock.com/image-photo/example-1234567890");
        assert_eq!(res.provider(), Some("shutterstock"));
        assert_eq!(res.asset_id(), Some("1234567890"));

        let res = resolve("https://www.shutterstock.com/ja/image-vector/red-apple-icon-2212345678");
        assert_eq!(res.provider(), Some("shutterstock"));
        assert_eq!(res.asset_id(), Some("2212345678"));

        let res = resolve("https://www.shutterstock.com/image-illustration/1234567890");
        assert_eq!(res.asset_id(), Some("1234567890"));
    }

    #[test]
    fn test_video_and_music() {
        let res = resolve("https://www.shutterstock.com/video/clip-9876543");
        assert_eq!(res.provider(), Some("vshutter"));
        assert_eq!(res.asset_id(), Some("9876543"));

        let res = resolve("https://www.shutterstock.com/zh-Hans/video/clip-1012345678-drone-shot");
        assert_eq!(res.provider(), Some("vshutter"));

        let res = resolve("https://www.shutterstock.com/de/video/clip-1012345678-drone-shot");
        assert_eq!(res.provider(), Some("vshutter"));
        assert_eq!(res.asset_id(), Some("1012345678"));

        let res = resolve("https://www.shutterstock.com/music/track-449093-happy-day");
        assert_eq!(res.provider(), Some("mshutter"));
        assert_eq!(res.asset_id(), Some("449093"));
    }

    #[test]
    fn test_editorial() {
        let res = resolve(
            "https://www.shutterstock.com/editorial/image-editorial/royal-visit-13123456a",
        );
        assert_eq!(res.provider(), Some("shutterstock_editorial"));
        assert_eq!(res.asset_id(), Some("13123456a"));

        let res =
            resolve("https://www.shutterstock.com/editorial/image-editorial/royal-visit-13123456");
        assert_eq!(res.provider(), Some("shutterstock_editorial"));
        assert_eq!(res.asset_id(), Some("13123456"));
    }

    #[test]
    fn test_listing_pages() {
        assert!(!resolve("https://www.shutterstock.com/video/").is_matched());
        assert!(!resolve("https://www.shutterstock.com/search/red-apple").is_matched());
    }
}
