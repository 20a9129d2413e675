//! Motion Array 规则

use registry::Resolvable;

/// Motion Array
///
/// 分类路径深度不固定, 作品 slug 可能出现在两个位置, 交给 `select_id` 取靠后者.
/// 只有分类没有作品时两组均为空, 该链接视为未识别.
/// 首段限定为素材分类, 账户与浏览页 (`account/`, `browse/`) 不参与匹配.
#[derive(Resolvable)]
#[provider(name = "Motion Array")]
#[rule(
    key = "motionarray",
    pattern = r"motionarray\.com/(?:stock-(?:video|motion-graphics|photos)|royalty-free-music|sound-effects|(?:after-effects|premiere-pro|premiere-rush|davinci-resolve|final-cut-pro)-(?:templates|presets|macros)|motion-graphics-templates|luts|3d-models|graphics|fonts)/(?:[a-z-]+/)*(?:([a-z0-9-]+-\d+)/)?([a-z0-9-]+-\d+)?",
    candidates = [1, 2]
)]
pub struct MotionArray;
