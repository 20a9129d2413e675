//! 辅助工具

/*
 * Copyright (c) 2025 fltLi
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::models::ProviderKey;

/// 在多个候选捕获组中挑选资源 id
///
/// 丢弃空白候选后取最后一个, 没有剩余时返回空串.
///
/// 只服务于路径深度不固定的站点 (Motion Array 等): 越靠后的捕获组越接近真正的 id.
/// 这是启发式规则, 能用单个捕获组定位 id 的规则应当使用 `group`.
/// `provider` 暂时只用于日志, 留作按站点覆盖策略的入口.
pub fn select_id(provider: &ProviderKey, candidates: &[&str]) -> String {
    let selected = candidates
        .iter()
        .rev()
        .find(|c| !c.trim().is_empty())
        .map(|c| c.to_string())
        .unwrap_or_default();

    tracing::trace!(%provider, ?candidates, %selected, "selected asset id from candidates");

    selected
}
