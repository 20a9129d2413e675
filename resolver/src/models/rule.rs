//! 规则声明

/*
 * Copyright (c) 2025 fltLi
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

use crate::error::*;

static KEY_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-z0-9][a-z0-9_]*$").unwrap());

/// 站点键
///
/// 小写, 可作为计价与目录查询的键. 一旦发布就不可改名.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProviderKey(Cow<'static, str>);

impl ProviderKey {
    /// 校验并创建站点键
    pub fn new(key: impl Into<String>) -> std::result::Result<Self, RuleError> {
        let key = key.into();
        if KEY_REGEX.is_match(&key) {
            Ok(Self(Cow::Owned(key)))
        } else {
            Err(RuleError::new(RuleErrorKind::InvalidProviderKey(key)))
        }
    }

    /// 内置规则的键已在编译期校验
    pub(crate) const fn from_static(key: &'static str) -> Self {
        Self(Cow::Borrowed(key))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProviderKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProviderKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for ProviderKey {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ProviderKey {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl TryFrom<String> for ProviderKey {
    type Error = RuleError;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ProviderKey> for String {
    fn from(key: ProviderKey) -> Self {
        key.0.into_owned()
    }
}

/// 内置规则的提取方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extract {
    /// id 即该捕获组
    Group(usize),
    /// 由 `select_id` 在这些捕获组中挑选
    Candidates(&'static [usize]),
}

/// 内置规则声明, 由 `#[derive(Resolvable)]` 生成
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleDef {
    pub key: &'static str,
    pub pattern: &'static str,
    pub extract: Extract,
}

/// 编译后规则的提取方式
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extraction {
    Group(usize),
    Candidates(Vec<usize>),
}

impl From<Extract> for Extraction {
    fn from(extract: Extract) -> Self {
        match extract {
            Extract::Group(index) => Extraction::Group(index),
            Extract::Candidates(indices) => Extraction::Candidates(indices.to_vec()),
        }
    }
}

/// 运行时追加的规则
///
/// 由宿主以 JSON 等形式提供, 例如
/// `{ "provider": "acme", "pattern": "acme\\.com/item/(\\d+)", "group": 1 }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSpec {
    pub provider: String,
    pub pattern: String,
    /// 站点显示名称, 缺省为站点键
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub candidates: Option<Vec<usize>>,
}

impl RuleSpec {
    /// 确定提取方式, `group` 与 `candidates` 必须恰好给出一个
    pub fn extraction(&self) -> std::result::Result<Extraction, RuleError> {
        match (self.group, &self.candidates) {
            (Some(index), None) => Ok(Extraction::Group(index)),
            (None, Some(indices)) if indices.is_empty() => Err(RuleError::with_pattern(
                RuleErrorKind::EmptyCandidates,
                &self.pattern,
            )),
            (None, Some(indices)) => Ok(Extraction::Candidates(indices.clone())),
            (None, None) => Err(RuleError::with_pattern(
                RuleErrorKind::MissingExtraction,
                &self.pattern,
            )),
            (Some(_), Some(_)) => Err(RuleError::with_pattern(
                RuleErrorKind::AmbiguousExtraction,
                &self.pattern,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_key() {
        assert!(ProviderKey::new("shutterstock").is_ok());
        assert!(ProviderKey::new("depositphotos_video").is_ok());
        assert!(ProviderKey::new("123rf").is_ok());

        assert!(ProviderKey::new("").is_err());
        assert!(ProviderKey::new("Shutterstock").is_err());
        assert!(ProviderKey::new("adobe stock").is_err());
        assert!(ProviderKey::new("_hidden").is_err());
    }

    #[test]
    fn test_provider_key_serde() {
        let key: ProviderKey = serde_json::from_str("\"vshutter\"").unwrap();
        assert_eq!(key, "vshutter");
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"vshutter\"");

        assert!(serde_json::from_str::<ProviderKey>("\"VShutter\"").is_err());
    }

    #[test]
    fn test_rule_spec_extraction() {
        let spec: RuleSpec = serde_json::from_str(
            r#"{ "provider": "acme", "pattern": "acme\\.com/item/(\\d+)", "group": 1 }"#,
        )
        .unwrap();
        assert_eq!(spec.extraction().unwrap(), Extraction::Group(1));

        let spec: RuleSpec = serde_json::from_str(
            r#"{ "provider": "acme", "pattern": "acme\\.com/(a)?(b)?", "candidates": [1, 2] }"#,
        )
        .unwrap();
        assert_eq!(spec.extraction().unwrap(), Extraction::Candidates(vec![1, 2]));

        let spec: RuleSpec =
            serde_json::from_str(r#"{ "provider": "acme", "pattern": "acme" }"#).unwrap();
        assert!(matches!(
            spec.extraction().unwrap_err().kind,
            RuleErrorKind::MissingExtraction
        ));

        let spec: RuleSpec = serde_json::from_str(
            r#"{ "provider": "acme", "pattern": "(a)", "group": 1, "candidates": [1] }"#,
        )
        .unwrap();
        assert!(matches!(
            spec.extraction().unwrap_err().kind,
            RuleErrorKind::AmbiguousExtraction
        ));

        let spec: RuleSpec = serde_json::from_str(
            r#"{ "provider": "acme", "pattern": "(a)", "candidates": [] }"#,
        )
        .unwrap();
        assert!(matches!(
            spec.extraction().unwrap_err().kind,
            RuleErrorKind::EmptyCandidates
        ));
    }
}
