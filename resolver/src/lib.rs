//! 素材站链接解析逻辑

/*
 * Copyright (c) 2025 fltLi
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

pub mod models;
pub mod providers;
mod table;
mod traits;
mod utils;

pub use table::{ProviderInfo, Rule, RuleTable, builtin_table, resolve, supported_providers, try_resolve};
pub use traits::Provider;
pub use utils::select_id;

pub mod error {
    //! 错误类型

    pub type Result<T> = std::result::Result<T, Error>;

    /// 通用错误
    #[derive(Debug, thiserror::Error)]
    pub enum Error {
        #[error("no provider recognized for url: {0}")]
        Unrecognized(String),
        #[error("rule error: {0}")]
        Rule(RuleError),
    }

    impl From<RuleError> for Error {
        fn from(e: RuleError) -> Self {
            Error::Rule(e)
        }
    }

    /// 规则错误
    #[derive(Debug, thiserror::Error)]
    #[error("Invalid rule: {kind}")]
    pub struct RuleError {
        #[source]
        pub kind: RuleErrorKind,
        pub pattern: Option<String>,
    }

    impl RuleError {
        pub fn new(kind: RuleErrorKind) -> Self {
            Self {
                kind,
                pattern: None,
            }
        }

        pub fn with_pattern(kind: RuleErrorKind, pattern: impl Into<String>) -> Self {
            Self {
                kind,
                pattern: Some(pattern.into()),
            }
        }
    }

    /// 规则错误类型
    #[derive(Debug, thiserror::Error)]
    pub enum RuleErrorKind {
        #[error("invalid pattern: {0}")]
        InvalidPattern(#[from] regex::Error),
        #[error("capture group {group} out of range 1..={max}")]
        GroupOutOfRange { group: usize, max: usize },
        #[error("invalid provider key: {0:?}")]
        InvalidProviderKey(String),
        #[error("one of `group` or `candidates` is required")]
        MissingExtraction,
        #[error("`group` and `candidates` are mutually exclusive")]
        AmbiguousExtraction,
        #[error("`candidates` must not be empty")]
        EmptyCandidates,
    }
}
