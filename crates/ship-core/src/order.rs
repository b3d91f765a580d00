//! 客戶訂單

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// 客戶訂單（每筆一件物料）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// 訂單ID
    pub order_id: u64,

    /// 下單時間（無時區）
    pub order_date: NaiveDateTime,

    /// 物料ID
    pub item_id: String,

    /// 目的州
    pub destination_state: String,
}

impl Order {
    /// 創建新的訂單
    pub fn new(
        order_id: u64,
        order_date: NaiveDateTime,
        item_id: String,
        destination_state: String,
    ) -> Self {
        Self {
            order_id,
            order_date,
            item_id,
            destination_state,
        }
    }
}
