//! 解析结果

use serde::{Deserialize, Serialize};

use super::ProviderKey;

/// 已识别的素材
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub provider: ProviderKey,
    pub asset_id: String,
    pub source_url: String,
}

/// 解析结果
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ParseResult {
    Matched(Asset),
    #[default]
    Unrecognized,
}

impl ParseResult {
    pub fn is_matched(&self) -> bool {
        matches!(self, ParseResult::Matched(_))
    }

    pub fn asset(&self) -> Option<&Asset> {
        match self {
            ParseResult::Matched(asset) => Some(asset),
            ParseResult::Unrecognized => None,
        }
    }

    pub fn into_asset(self) -> Option<Asset> {
        match self {
            ParseResult::Matched(asset) => Some(asset),
            ParseResult::Unrecognized => None,
        }
    }

    /// 站点键, 未识别时为 `None`
    pub fn provider(&self) -> Option<&str> {
        self.asset().map(|a| a.provider.as_str())
    }

    /// 资源 id, 未识别时为 `None`
    pub fn asset_id(&self) -> Option<&str> {
        self.asset().map(|a| a.asset_id.as_str())
    }
}

impl From<ParseResult> for Option<Asset> {
    fn from(res: ParseResult) -> Self {
        res.into_asset()
    }
}
