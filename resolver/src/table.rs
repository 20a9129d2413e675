//! 规则表

use crate::error::*;
use crate::models::*;
use crate::utils::select_id;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// 站点注册项
#[derive(Clone, Copy)]
pub(crate) struct ProviderRegistryItem {
    pub(crate) name: &'static str,
    pub(crate) rules: &'static [RuleDef],
}

/// 站点概要
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderInfo {
    pub name: String,
    pub keys: Vec<ProviderKey>,
}

/// 编译后的规则
#[derive(Debug, Clone)]
pub struct Rule {
    name: Cow<'static, str>,
    key: ProviderKey,
    regex: Regex,
    extraction: Extraction,
}

impl Rule {
    /// 编译规则, 校验正则与捕获组下标
    pub fn compile(
        name: impl Into<Cow<'static, str>>,
        key: ProviderKey,
        pattern: &str,
        extraction: Extraction,
    ) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| RuleError::with_pattern(RuleErrorKind::InvalidPattern(e), pattern))?;

        let max = regex.captures_len() - 1;
        let indices = match &extraction {
            Extraction::Group(index) => std::slice::from_ref(index),
            Extraction::Candidates(indices) if indices.is_empty() => {
                return Err(RuleError::with_pattern(RuleErrorKind::EmptyCandidates, pattern).into());
            }
            Extraction::Candidates(indices) => indices.as_slice(),
        };
        if let Some(&group) = indices.iter().find(|&&i| i == 0 || i > max) {
            return Err(
                RuleError::with_pattern(RuleErrorKind::GroupOutOfRange { group, max }, pattern)
                    .into(),
            );
        }

        Ok(Self {
            name: name.into(),
            key,
            regex,
            extraction,
        })
    }

    fn from_def(name: &'static str, def: &RuleDef) -> Result<Self> {
        Self::compile(
            name,
            ProviderKey::from_static(def.key),
            def.pattern,
            def.extract.into(),
        )
    }

    fn from_spec(spec: RuleSpec) -> Result<Self> {
        let extraction = spec.extraction()?;
        let key = ProviderKey::new(spec.provider)
            .map_err(|e| RuleError::with_pattern(e.kind, &spec.pattern))?;
        let name = spec.name.unwrap_or_else(|| key.to_string());
        Self::compile(name, key, &spec.pattern, extraction)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn key(&self) -> &ProviderKey {
        &self.key
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    pub fn extraction(&self) -> &Extraction {
        &self.extraction
    }

    /// 对 url 应用规则, 未匹配或 id 为空时返回 `None`
    pub fn apply(&self, url: &str) -> Option<String> {
        let caps = self.regex.captures(url)?;
        let group = |index: usize| caps.get(index).map_or("", |m| m.as_str());

        let id = match &self.extraction {
            Extraction::Group(index) => group(*index).to_string(),
            Extraction::Candidates(indices) => {
                let candidates: Vec<&str> = indices.iter().map(|&i| group(i)).collect();
                select_id(&self.key, &candidates)
            }
        };

        if id.is_empty() {
            tracing::trace!(provider = %self.key, url, "rule matched with empty id, skipping");
            return None;
        }
        Some(id)
    }
}

/// 规则表
///
/// 按顺序求值, 第一条给出非空 id 的规则胜出. 只允许在末尾追加.
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    /// 空规则表
    pub fn empty() -> Self {
        Self::default()
    }

    /// 内置规则表
    pub fn builtin() -> Result<Self> {
        Self::from_registry(&crate::providers::registry_items())
    }

    pub(crate) fn from_registry(items: &[ProviderRegistryItem]) -> Result<Self> {
        let rules = items
            .iter()
            .flat_map(|item| item.rules.iter().map(|def| Rule::from_def(item.name, def)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rules })
    }

    /// 在末尾追加规则
    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// 在末尾追加宿主提供的规则
    pub fn extend_specs(mut self, specs: impl IntoIterator<Item = RuleSpec>) -> Result<Self> {
        for spec in specs {
            self.rules.push(Rule::from_spec(spec)?);
        }
        Ok(self)
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// 按表序列出站点及其站点键
    pub fn providers(&self) -> Vec<ProviderInfo> {
        let mut infos: Vec<ProviderInfo> = Vec::new();
        for rule in &self.rules {
            match infos.last_mut() {
                Some(info) if info.name == rule.name() => {
                    if !info.keys.contains(&rule.key) {
                        info.keys.push(rule.key.clone());
                    }
                }
                _ => infos.push(ProviderInfo {
                    name: rule.name().to_string(),
                    keys: vec![rule.key.clone()],
                }),
            }
        }
        infos
    }

    /// 解析 url
    pub fn resolve(&self, url: &str) -> ParseResult {
        let url = url.trim();
        if url.is_empty() {
            tracing::trace!("empty input skipped");
            return ParseResult::Unrecognized;
        }

        for rule in &self.rules {
            if let Some(asset_id) = rule.apply(url) {
                tracing::debug!(provider = %rule.key, %asset_id, url, "url resolved");
                return ParseResult::Matched(Asset {
                    provider: rule.key.clone(),
                    asset_id,
                    source_url: url.to_string(),
                });
            }
        }

        tracing::debug!(url, "no provider recognized");
        ParseResult::Unrecognized
    }

    /// 解析 url, 未识别时返回错误
    pub fn try_resolve(&self, url: &str) -> Result<Asset> {
        self.resolve(url)
            .into_asset()
            .ok_or_else(|| Error::Unrecognized(url.to_string()))
    }
}

// 内置规则已由 `#[derive(Resolvable)]` 在编译期校验
static TABLE: Lazy<RuleTable> = Lazy::new(|| RuleTable::builtin().unwrap());

/// 内置规则表
pub fn builtin_table() -> &'static RuleTable {
    &TABLE
}

/// 使用内置规则表解析
pub fn resolve(url: &str) -> ParseResult {
    TABLE.resolve(url)
}

/// 使用内置规则表解析, 未识别时返回错误
pub fn try_resolve(url: &str) -> Result<Asset> {
    TABLE.try_resolve(url)
}

/// 内置支持的站点
pub fn supported_providers() -> Vec<ProviderInfo> {
    TABLE.providers()
}
