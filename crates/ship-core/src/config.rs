//! 出貨計算參數配置

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 預設包裝時間（小時）
pub const DEFAULT_PACKAGING_HOURS: u32 = 4;

/// 預設每小時體驗價格（0.03）
pub const DEFAULT_EXPERIENCE_PRICE_PER_HOUR: Decimal = Decimal::from_parts(3, 0, 0, false, 2);

/// 預設報表價格小數位數
pub const DEFAULT_PRICE_SCALE: u32 = 3;

/// 出貨計算參數
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentConfig {
    /// 下單到可出貨的包裝時間（小時）
    pub packaging_hours: u32,

    /// 每小時體驗價格
    pub experience_price_per_hour: Decimal,

    /// 報表輸出的價格小數位數（內部比較一律使用精確值）
    pub price_scale: u32,
}

impl ShipmentConfig {
    /// 創建預設配置
    pub fn new() -> Self {
        Self {
            packaging_hours: DEFAULT_PACKAGING_HOURS,
            experience_price_per_hour: DEFAULT_EXPERIENCE_PRICE_PER_HOUR,
            price_scale: DEFAULT_PRICE_SCALE,
        }
    }

    /// 建構器模式：設置包裝時間
    pub fn with_packaging_hours(mut self, hours: u32) -> Self {
        self.packaging_hours = hours;
        self
    }

    /// 建構器模式：設置每小時體驗價格
    pub fn with_experience_price_per_hour(mut self, rate: Decimal) -> Self {
        self.experience_price_per_hour = rate;
        self
    }

    /// 建構器模式：設置價格小數位數
    pub fn with_price_scale(mut self, scale: u32) -> Self {
        self.price_scale = scale;
        self
    }

    /// 依經過時數計算體驗價格（溢出時回傳 `None`）
    pub fn experience_price(&self, elapsed_hours: i64) -> Option<Decimal> {
        Decimal::from(elapsed_hours).checked_mul(self.experience_price_per_hour)
    }

    /// 依配置的小數位數四捨五入（報表用）
    pub fn round_price(&self, price: Decimal) -> Decimal {
        price.round_dp(self.price_scale)
    }
}

impl Default for ShipmentConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ShipmentConfig::default();

        assert_eq!(config.packaging_hours, 4);
        assert_eq!(config.experience_price_per_hour, Decimal::new(3, 2));
        assert_eq!(config.price_scale, 3);
    }

    #[test]
    fn test_config_builder() {
        let config = ShipmentConfig::new()
            .with_packaging_hours(2)
            .with_experience_price_per_hour(Decimal::new(5, 2))
            .with_price_scale(2);

        assert_eq!(config.packaging_hours, 2);
        assert_eq!(config.experience_price(10), Some(Decimal::new(50, 2)));
        assert_eq!(config.round_price(Decimal::new(12345, 3)), Decimal::new(1234, 2));
    }

    #[test]
    fn test_experience_price() {
        let config = ShipmentConfig::default();

        // 53 小時 × 0.03 = 1.59
        assert_eq!(config.experience_price(53), Some(Decimal::new(159, 2)));
        assert_eq!(config.experience_price(0), Some(Decimal::ZERO));
    }

    #[test]
    fn test_experience_price_overflow() {
        let config = ShipmentConfig::new().with_experience_price_per_hour(Decimal::MAX);

        assert_eq!(config.experience_price(1), Some(Decimal::MAX));
        assert_eq!(config.experience_price(2), None);
    }
}
