//! 物料主檔

use serde::{Deserialize, Serialize};

/// 物料（重量單位公克，尺寸單位公分）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// 物料ID
    pub item_id: String,

    /// 重量（g）
    pub weight: u32,

    /// 長（cm）
    pub length: u32,

    /// 寬（cm）
    pub width: u32,

    /// 高（cm）
    pub height: u32,
}

impl Item {
    /// 創建新的物料
    pub fn new(item_id: String, weight: u32, length: u32, width: u32, height: u32) -> Self {
        Self {
            item_id,
            weight,
            length,
            width,
            height,
        }
    }
}
