//! 承運商價格與運輸時間

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::Warehouse;

/// 承運商價格（倉庫 → 目的州）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarrierPricing {
    pub warehouse: Warehouse,

    /// 目的州
    pub destination_state: String,

    /// 每單位體積價格（$/dm3）
    pub volume_price: Decimal,
}

impl CarrierPricing {
    pub fn new(warehouse: Warehouse, destination_state: String, volume_price: Decimal) -> Self {
        Self {
            warehouse,
            destination_state,
            volume_price,
        }
    }

    /// 依箱型體積計算基本運費（溢出時回傳 `None`）
    pub fn price_for_volume(&self, volume: Decimal) -> Option<Decimal> {
        self.volume_price.checked_mul(volume)
    }
}

/// 承運商運輸時間（倉庫 → 目的州）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarrierTime {
    pub warehouse: Warehouse,

    /// 目的州
    pub destination_state: String,

    /// 運輸時數（與時區無關）
    pub transit_hours: u32,
}

impl CarrierTime {
    pub fn new(warehouse: Warehouse, destination_state: String, transit_hours: u32) -> Self {
        Self {
            warehouse,
            destination_state,
            transit_hours,
        }
    }
}
