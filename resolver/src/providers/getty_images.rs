//! Getty Images 规则

use registry::Resolvable;

/// Getty Images, 含各地区域名
#[derive(Resolvable)]
#[provider(name = "Getty Images")]
#[rule(
    key = "gettyimages_video",
    pattern = r"gettyimages\.[a-z.]{2,6}/(?:[a-z]{2}/)?detail/video/[^/?#]+/(\d+)",
    group = 1
)]
#[rule(
    key = "gettyimages",
    pattern = r"gettyimages\.[a-z.]{2,6}/(?:[a-z]{2}/)?detail/[^?#]*?/(\d+)(?:[/?#]|$)",
    group = 1
)]
pub struct GettyImages;

#[test]
fn test_resolve() {
    use crate::resolve;

    let res = resolve("https://www.gettyimages.com/detail/photo/sunrise-royalty-free-image/1234567");
    assert_eq!(res.provider(), Some("gettyimages"));
    assert_eq!(res.asset_id(), Some("1234567"));

    let res = resolve("https://www.gettyimages.co.uk/detail/news-photo/match-day-news-photo/1412345678?adppopup=true");
    assert_eq!(res.provider(), Some("gettyimages"));
    assert_eq!(res.asset_id(), Some("1412345678"));

    let res = resolve("https://www.gettyimages.com/detail/video/waves-stock-footage/7654321");
    assert_eq!(res.provider(), Some("gettyimages_video"));
}
