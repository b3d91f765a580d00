//! 出貨資訊（出貨決策結果）

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{Order, Warehouse};

/// 出貨資訊
///
/// 建立後不再修改；`total_price` 永遠等於 `base_price + experience_price`。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentInfo {
    /// 原始訂單
    pub order: Order,

    /// 出貨倉庫
    pub warehouse: Warehouse,

    /// 保證送達時間
    pub guaranteed_delivery: NaiveDateTime,

    /// 箱型代碼
    pub box_id: String,

    /// 基本運費（體積 × 單價）
    pub base_price: Decimal,

    /// 體驗價格（依下單到送達的時數計算）
    pub experience_price: Decimal,

    /// 總價
    pub total_price: Decimal,
}

impl ShipmentInfo {
    /// 創建新的出貨資訊
    pub fn new(
        order: Order,
        warehouse: Warehouse,
        guaranteed_delivery: NaiveDateTime,
        box_id: String,
        base_price: Decimal,
        experience_price: Decimal,
    ) -> Self {
        Self {
            order,
            warehouse,
            guaranteed_delivery,
            box_id,
            base_price,
            experience_price,
            total_price: base_price + experience_price,
        }
    }

    /// 下單到送達的整數時數（不足一小時捨去）
    pub fn elapsed_hours(&self) -> i64 {
        (self.guaranteed_delivery - self.order.order_date).num_hours()
    }

    pub fn item_id(&self) -> &str {
        &self.order.item_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_total_is_sum_of_parts() {
        let order_date = NaiveDate::from_ymd_opt(2025, 10, 6)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let order = Order::new(1, order_date, "BIKE-001".to_string(), "CA".to_string());

        let info = ShipmentInfo::new(
            order,
            Warehouse::NewYork,
            order_date + chrono::Duration::minutes(90),
            "XS".to_string(),
            Decimal::new(300, 2),
            Decimal::new(3, 2),
        );

        assert_eq!(info.total_price, Decimal::new(303, 2));
        assert_eq!(info.elapsed_hours(), 1);
        assert_eq!(info.item_id(), "BIKE-001");
    }
}
