//! 链接解析的宿主运行环境支持
//!
//! 默认启用 `wasm` feature, 导出 `Runtime` 与 `resolve`/`providers`.
//! 关闭默认 feature (`--no-default-features`) 时改为提供 `NativeRuntime`.

use resolver::models::{ParseResult, RuleSpec};
use resolver::{ProviderInfo, RuleTable};
use serde::{Deserialize, Serialize};

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

/// 运行时错误
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    #[error("invalid rules: {0}")]
    Config(#[from] serde_json::Error),
    #[error(transparent)]
    Resolver(#[from] resolver::error::Error),
}

/// 返回给宿主的解析结果
///
/// 成功时为 `{ ok: true, provider, assetId, sourceUrl }`, 失败时仅有 `{ ok: false }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveOutput {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

impl ResolveOutput {
    pub fn unrecognized() -> Self {
        Self::default()
    }
}

impl From<ParseResult> for ResolveOutput {
    fn from(res: ParseResult) -> Self {
        match res {
            ParseResult::Matched(asset) => ResolveOutput {
                ok: true,
                provider: Some(asset.provider.into()),
                asset_id: Some(asset.asset_id),
                source_url: Some(asset.source_url),
            },
            ParseResult::Unrecognized => ResolveOutput::unrecognized(),
        }
    }
}

/// 解析任意输入, 非字符串一律视为未识别
fn resolve_with(table: &RuleTable, input: Option<&str>) -> ResolveOutput {
    match input {
        Some(url) => table.resolve(url).into(),
        None => {
            tracing::debug!("non-string input treated as unrecognized");
            ResolveOutput::unrecognized()
        }
    }
}

/// 解析 JSON 值, 供非 WASM 宿主使用
pub fn resolve_value(value: &serde_json::Value) -> ResolveOutput {
    resolve_with(resolver::builtin_table(), value.as_str())
}

/// 内置支持的站点
pub fn provider_list() -> Vec<ProviderInfo> {
    resolver::supported_providers()
}

/// 在内置规则之后追加宿主规则
fn build_table(specs: Vec<RuleSpec>) -> Result<RuleTable, RuntimeError> {
    let count = specs.len();
    let table = RuleTable::builtin()?.extend_specs(specs)?;
    tracing::debug!(count, total = table.len(), "custom rules appended");
    Ok(table)
}

/// 导出到WASM的运行时。保存追加了宿主规则的规则表。
#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub struct Runtime {
    table: RuleTable,
}

#[cfg(feature = "wasm")]
#[wasm_bindgen]
impl Runtime {
    /// 从宿主规则数组创建运行时, `undefined`/`null` 表示不追加
    #[wasm_bindgen(constructor)]
    pub fn new(js_rules: JsValue) -> Result<Runtime, JsValue> {
        let specs: Vec<RuleSpec> = if js_rules.is_undefined() || js_rules.is_null() {
            Vec::new()
        } else {
            serde_wasm_bindgen::from_value(js_rules).map_err(|e| {
                tracing::warn!("rejected custom rules: {e}");
                JsValue::from_str(&format!("无效的规则: {e}"))
            })?
        };
        let table = build_table(specs).map_err(|e| {
            tracing::warn!("rejected custom rules: {e}");
            JsValue::from_str(&format!("无效的规则: {e}"))
        })?;
        Ok(Runtime { table })
    }

    /// 解析单个链接
    #[wasm_bindgen]
    pub fn resolve(&self, input: JsValue) -> JsValue {
        to_js(&resolve_with(&self.table, input.as_string().as_deref()))
    }

    /// 批量解析, 结果与输入一一对应
    #[wasm_bindgen(js_name = resolveMany)]
    pub fn resolve_many(&self, inputs: js_sys::Array) -> JsValue {
        let outputs: Vec<ResolveOutput> = inputs
            .iter()
            .map(|v| resolve_with(&self.table, v.as_string().as_deref()))
            .collect();
        to_js(&outputs)
    }
}

/// 使用内置规则表解析单个链接
#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub fn resolve(input: JsValue) -> JsValue {
    to_js(&resolve_with(
        resolver::builtin_table(),
        input.as_string().as_deref(),
    ))
}

/// 内置支持的站点
#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub fn providers() -> JsValue {
    to_js(&provider_list())
}

#[cfg(feature = "wasm")]
fn to_js<T: Serialize>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value)
        .unwrap_or_else(|e| JsValue::from_str(&format!("序列化错误: {e}")))
}

/// 用于本地测试 / 服务器的非 WASM 运行时
#[cfg(not(feature = "wasm"))]
pub struct NativeRuntime {
    table: RuleTable,
}

#[cfg(not(feature = "wasm"))]
impl NativeRuntime {
    /// 从 JSON 规则数组创建运行时, `null` 表示不追加
    pub fn new(rules: serde_json::Value) -> Result<Self, RuntimeError> {
        let specs: Vec<RuleSpec> = if rules.is_null() {
            Vec::new()
        } else {
            serde_json::from_value(rules)?
        };
        Ok(Self {
            table: build_table(specs)?,
        })
    }

    pub fn resolve(&self, input: &serde_json::Value) -> ResolveOutput {
        resolve_with(&self.table, input.as_str())
    }

    pub fn resolve_many(&self, inputs: &[serde_json::Value]) -> Vec<ResolveOutput> {
        inputs.iter().map(|v| self.resolve(v)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_output_shape() {
        let out = resolve_value(&json!("https://www.shutterstock.com/video/clip-9876543"));
        assert_eq!(
            serde_json::to_value(&out).unwrap(),
            json!({
                "ok": true,
                "provider": "vshutter",
                "assetId": "9876543",
                "sourceUrl": "https://www.shutterstock.com/video/clip-9876543",
            })
        );

        let out = resolve_value(&json!("https://example.com/not-a-stock-site/page"));
        assert_eq!(serde_json::to_value(&out).unwrap(), json!({ "ok": false }));
    }

    #[test]
    fn test_malformed_input() {
        for value in [json!(null), json!(42), json!(true), json!({ "url": "x" }), json!([])] {
            assert_eq!(resolve_value(&value), ResolveOutput::unrecognized());
        }
    }

    #[test]
    fn test_provider_list() {
        let list = provider_list();
        assert_eq!(list[0].name, "Shutterstock");
        assert!(list.iter().any(|p| p.keys.iter().any(|k| k == "depositphotos_video")));
    }

    #[test]
    fn test_custom_table() -> Result<(), RuntimeError> {
        let specs: Vec<RuleSpec> = serde_json::from_value(json!([
            { "provider": "acme", "pattern": "acme\\.test/item/(\\d+)", "group": 1 }
        ]))?;
        let table = build_table(specs)?;

        let out = resolve_with(&table, Some("https://acme.test/item/42"));
        assert_eq!(out.provider.as_deref(), Some("acme"));
        assert_eq!(out.asset_id.as_deref(), Some("42"));

        let out = resolve_with(&table, Some("https://elements.envato.com/some-title-ABCD1234"));
        assert_eq!(out.provider.as_deref(), Some("envato"));
        assert_eq!(resolve_with(&table, None), ResolveOutput::unrecognized());

        let specs: Vec<RuleSpec> = serde_json::from_value(json!([
            { "provider": "acme", "pattern": "(", "group": 1 }
        ]))?;
        assert!(matches!(build_table(specs), Err(RuntimeError::Resolver(_))));
        assert!(serde_json::from_value::<Vec<RuleSpec>>(json!([{ "provider": "acme" }])).is_err());
        Ok(())
    }

    #[cfg(not(feature = "wasm"))]
    #[test]
    fn test_native_runtime() -> Result<(), RuntimeError> {
        let runtime = NativeRuntime::new(json!([
            { "provider": "acme", "pattern": "acme\\.test/item/(\\d+)", "group": 1 }
        ]))?;

        let outs = runtime.resolve_many(&[
            json!("https://acme.test/item/42"),
            json!("https://elements.envato.com/some-title-ABCD1234"),
            json!(null),
        ]);
        assert_eq!(outs[0].provider.as_deref(), Some("acme"));
        assert_eq!(outs[0].asset_id.as_deref(), Some("42"));
        assert_eq!(outs[1].provider.as_deref(), Some("envato"));
        assert!(!outs[2].ok);

        assert!(NativeRuntime::new(json!(null)).is_ok());
        assert!(matches!(
            NativeRuntime::new(json!([{ "provider": "acme" }])),
            Err(RuntimeError::Config(_))
        ));
        assert!(matches!(
            NativeRuntime::new(json!([{ "provider": "acme", "pattern": "(", "group": 1 }])),
            Err(RuntimeError::Resolver(_))
        ));
        Ok(())
    }
}
