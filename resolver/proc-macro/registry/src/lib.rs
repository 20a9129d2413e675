/*
 * Copyright (c) 2025 fltLi
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

extern crate proc_macro;

use once_cell::sync::Lazy;
use proc_macro::TokenStream;
use quote::{format_ident, quote};
use regex::Regex;
use syn::punctuated::Punctuated;
use syn::{Attribute, DeriveInput, Ident, LitInt, LitStr, Token, parse_macro_input};

// 与 `resolver::models::ProviderKey` 的校验保持一致
static KEY_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-z0-9][a-z0-9_]*$").unwrap());

/// 站点规则属性
///
/// # 使用示例
///
/// 在站点类型上添加 `#[derive(Resolvable)]`, 用 `#[provider(...)]` 指定站点名称,
/// 并按匹配优先级依次列出 `#[rule(...)]`:
///
/// ```ignore
/// #[derive(Resolvable)]
/// #[provider(name = "Shutterstock")]
/// #[rule(key = "vshutter", pattern = r"shutterstock\.com/video/clip-(\d+)", group = 1)]
/// #[rule(key = "shutterstock", pattern = r"shutterstock\.com/image-photo/(?:[^/?#]*-)?(\d+)", group = 1)]
/// pub struct Shutterstock;
/// ```
///
/// 支持的属性:
/// - `#[provider(name = "...")]`: 站点显示名称 (必须)
/// - `#[rule(key = "...", pattern = r"...", group = N)]`: 资源 id 为第 N 个捕获组
/// - `#[rule(key = "...", pattern = r"...", candidates = [N, M, ..])]`: 由 `select_id` 在多个捕获组中挑选
///
/// 正则, 捕获组下标与站点键均在编译期校验.
/// 宏会为类型生成 `crate::traits::Provider` 的实现, 以及供 `providers::registry_items` 收集的注册函数.
#[derive(Debug)]
struct ProviderAttributes {
    name: String,
    rules: Vec<RuleAttributes>,
}

#[derive(Debug)]
struct RuleAttributes {
    key: String,
    pattern: String,
    extract: RuleExtract,
}

#[derive(Debug)]
enum RuleExtract {
    Group(usize),
    Candidates(Vec<usize>),
}

impl ProviderAttributes {
    fn from_attrs(ident: &Ident, attrs: &[Attribute]) -> Result<Self, syn::Error> {
        let mut name = None;
        let mut rules = Vec::new();

        for attr in attrs {
            if attr.path().is_ident("provider") {
                attr.parse_nested_meta(|meta| {
                    if meta.path.is_ident("name") {
                        name = Some(meta.value()?.parse::<LitStr>()?.value());
                        Ok(())
                    } else {
                        Err(meta.error("unsupported provider attribute, expected `name`"))
                    }
                })?;
            } else if attr.path().is_ident("rule") {
                rules.push(RuleAttributes::from_attr(attr)?);
            }
        }

        let name =
            name.ok_or_else(|| syn::Error::new_spanned(ident, "Missing required attribute 'name'"))?;
        if rules.is_empty() {
            return Err(syn::Error::new_spanned(
                ident,
                "at least one #[rule(...)] is required",
            ));
        }

        Ok(ProviderAttributes { name, rules })
    }
}

impl RuleAttributes {
    fn from_attr(attr: &Attribute) -> Result<Self, syn::Error> {
        let mut key: Option<LitStr> = None;
        let mut pattern: Option<LitStr> = None;
        let mut group: Option<LitInt> = None;
        let mut candidates: Option<Vec<LitInt>> = None;

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("key") {
                key = Some(meta.value()?.parse()?);
            } else if meta.path.is_ident("pattern") {
                pattern = Some(meta.value()?.parse()?);
            } else if meta.path.is_ident("group") {
                group = Some(meta.value()?.parse()?);
            } else if meta.path.is_ident("candidates") {
                let input = meta.value()?;
                let content;
                syn::bracketed!(content in input);
                let list = Punctuated::<LitInt, Token![,]>::parse_terminated(&content)?;
                candidates = Some(list.into_iter().collect());
            } else {
                return Err(meta.error("unsupported rule attribute"));
            }
            Ok(())
        })?;

        let key = key.ok_or_else(|| syn::Error::new_spanned(attr, "Missing rule attribute 'key'"))?;
        if !KEY_REGEX.is_match(&key.value()) {
            return Err(syn::Error::new_spanned(
                &key,
                "provider key must match [a-z0-9][a-z0-9_]*",
            ));
        }

        let pattern = pattern
            .ok_or_else(|| syn::Error::new_spanned(attr, "Missing rule attribute 'pattern'"))?;
        let regex = Regex::new(&pattern.value())
            .map_err(|e| syn::Error::new_spanned(&pattern, format!("invalid pattern: {e}")))?;
        // 第 0 组为整体匹配, 不可作为 id
        let max_group = regex.captures_len() - 1;
        let check = |lit: &LitInt| -> Result<usize, syn::Error> {
            let index = lit.base10_parse::<usize>()?;
            if index == 0 || index > max_group {
                return Err(syn::Error::new_spanned(
                    lit,
                    format!("capture group {index} out of range 1..={max_group}"),
                ));
            }
            Ok(index)
        };

        let extract = match (group, candidates) {
            (Some(g), None) => RuleExtract::Group(check(&g)?),
            (None, Some(list)) if !list.is_empty() => RuleExtract::Candidates(
                list.iter().map(&check).collect::<Result<Vec<_>, _>>()?,
            ),
            (None, Some(_)) => {
                return Err(syn::Error::new_spanned(attr, "`candidates` must not be empty"));
            }
            (None, None) => {
                return Err(syn::Error::new_spanned(
                    attr,
                    "one of `group` or `candidates` is required",
                ));
            }
            (Some(_), Some(_)) => {
                return Err(syn::Error::new_spanned(
                    attr,
                    "`group` and `candidates` are mutually exclusive",
                ));
            }
        };

        Ok(RuleAttributes {
            key: key.value(),
            pattern: pattern.value(),
            extract,
        })
    }
}

#[proc_macro_derive(Resolvable, attributes(provider, rule))]
pub fn derive_resolvable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let attrs = match ProviderAttributes::from_attrs(name, &input.attrs) {
        Ok(attrs) => attrs,
        Err(e) => return e.to_compile_error().into(),
    };

    let provider_name = attrs.name;
    let rule_defs = attrs.rules.iter().map(generate_rule_def);

    // 为每个站点生成唯一的注册函数名 (全部大写以符合静态变量命名规范)
    let registry_item_name =
        format_ident!("__PROVIDER_REGISTRY_{}", name.to_string().to_uppercase());

    let expanded = quote! {
        impl crate::traits::Provider for #name {
            fn name(&self) -> &'static str {
                #provider_name
            }

            fn rules(&self) -> &'static [crate::models::RuleDef] {
                const RULES: &[crate::models::RuleDef] = &[#(#rule_defs),*];
                RULES
            }
        }

        // 生成一个返回注册项的函数, 由手动注册表收集调用
        #[allow(non_snake_case)]
        pub(crate) fn #registry_item_name() -> crate::table::ProviderRegistryItem {
            use crate::traits::Provider as _;
            let provider = #name {};
            crate::table::ProviderRegistryItem {
                name: provider.name(),
                rules: provider.rules(),
            }
        }
    };

    expanded.into()
}

/// 生成单条规则的静态声明
fn generate_rule_def(rule: &RuleAttributes) -> proc_macro2::TokenStream {
    let key = &rule.key;
    let pattern = &rule.pattern;
    let extract = match &rule.extract {
        RuleExtract::Group(index) => quote! {
            crate::models::Extract::Group(#index)
        },
        RuleExtract::Candidates(indices) => quote! {
            crate::models::Extract::Candidates(&[#(#indices),*])
        },
    };

    quote! {
        crate::models::RuleDef {
            key: #key,
            pattern: #pattern,
            extract: #extract,
        }
    }
}
