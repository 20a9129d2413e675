//! 站点特型

/*
 * Copyright (c) 2025 fltLi
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::models::*;

/// 素材站点, 由 `#[derive(Resolvable)]` 实现
pub trait Provider {
    /// 站点显示名称
    fn name(&self) -> &'static str;

    /// 按优先级排列的规则
    fn rules(&self) -> &'static [RuleDef];

    /// 该站点产出的站点键, 按首次出现顺序去重
    fn keys(&self) -> Vec<&'static str> {
        let mut keys: Vec<&'static str> = Vec::new();
        for rule in self.rules() {
            if !keys.contains(&rule.key) {
                keys.push(rule.key);
            }
        }
        keys
    }
}
