//! # Shipment Decision Engine
//!
//! 出貨決策引擎：箱型選擇、送達時間、路線選擇與訂單批次處理

pub mod box_selection;
pub mod calculator;
pub mod delivery_time;
pub mod routing;

// Re-export 主要類型
pub use box_selection::BoxSelector;
pub use calculator::ShipmentCalculator;
pub use delivery_time::DeliveryTimeCalculator;
pub use routing::{RouteCandidate, RouteSelector};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ship_core::{Order, ShipError, ShipmentInfo};
use std::fmt;

/// 出貨計算結果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipmentPlan {
    /// 計算批次ID
    pub run_id: uuid::Uuid,

    /// 成功的出貨資訊（依下單時間排序）
    pub shipments: Vec<ShipmentInfo>,

    /// 失敗的訂單
    pub failures: Vec<ShipmentFailure>,

    /// 所有成功出貨的總價
    pub total_price: Decimal,

    /// 計算耗時（毫秒）
    pub calculation_time_ms: Option<u128>,
}

impl ShipmentPlan {
    /// 創建空的計算結果
    pub fn empty() -> Self {
        Self {
            run_id: uuid::Uuid::new_v4(),
            shipments: Vec::new(),
            failures: Vec::new(),
            total_price: Decimal::ZERO,
            calculation_time_ms: None,
        }
    }

    /// 添加成功的出貨（總價超出 `Decimal` 範圍時停在最大值）
    pub fn add_shipment(&mut self, shipment: ShipmentInfo) {
        self.total_price = self.total_price.saturating_add(shipment.total_price);
        self.shipments.push(shipment);
    }

    /// 添加失敗記錄
    pub fn add_failure(&mut self, failure: ShipmentFailure) {
        self.failures.push(failure);
    }

    /// 已處理的訂單數（成功 + 失敗）
    pub fn processed_count(&self) -> usize {
        self.shipments.len() + self.failures.len()
    }
}

/// 訂單失敗類型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FailureKind {
    NoStockAvailable,
    NoSuitableBox,
    NoSuitableRoute,
    UnknownItem,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FailureKind::NoStockAvailable => "NoStockAvailable",
            FailureKind::NoSuitableBox => "NoSuitableBox",
            FailureKind::NoSuitableRoute => "NoSuitableRoute",
            FailureKind::UnknownItem => "UnknownItem",
        };
        f.write_str(name)
    }
}

/// 訂單失敗記錄
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentFailure {
    pub order_id: u64,
    pub kind: FailureKind,
    pub item_id: String,
    pub destination_state: String,
    pub message: String,
}

impl ShipmentFailure {
    /// 由訂單層級的錯誤建立失敗記錄；其他錯誤回傳 `None`
    pub fn from_error(order: &Order, error: &ShipError) -> Option<Self> {
        let kind = match error {
            ShipError::NoStockAvailable { .. } => FailureKind::NoStockAvailable,
            ShipError::NoSuitableBox { .. } => FailureKind::NoSuitableBox,
            ShipError::NoSuitableRoute { .. } => FailureKind::NoSuitableRoute,
            ShipError::UnknownItem(_) => FailureKind::UnknownItem,
            _ => return None,
        };

        Some(Self {
            order_id: order.order_id,
            kind,
            item_id: order.item_id.clone(),
            destination_state: order.destination_state.clone(),
            message: error.to_string(),
        })
    }
}
