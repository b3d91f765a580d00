//! 箱型目錄

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{Item, Result, ShipError};

/// 箱型
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoxType {
    /// 箱型代碼
    pub box_id: String,

    /// 最大承重（g）
    pub max_weight: u32,

    /// 內部長寬高（cm）
    pub length: u32,
    pub width: u32,
    pub height: u32,

    /// 計價體積（dm3）
    pub volume: Decimal,
}

impl BoxType {
    /// 創建新的箱型
    pub fn new(
        box_id: String,
        max_weight: u32,
        length: u32,
        width: u32,
        height: u32,
        volume: Decimal,
    ) -> Self {
        Self {
            box_id,
            max_weight,
            length,
            width,
            height,
            volume,
        }
    }

    /// 檢查物料是否能放入此箱型（重量與三個尺寸逐一比較，不旋轉）
    pub fn fits(&self, item: &Item) -> bool {
        self.max_weight >= item.weight
            && self.length >= item.length
            && self.width >= item.width
            && self.height >= item.height
    }

    fn dominates(&self, smaller: &BoxType) -> bool {
        self.max_weight >= smaller.max_weight
            && self.length >= smaller.length
            && self.width >= smaller.width
            && self.height >= smaller.height
    }
}

/// 箱型目錄（由小到大排列）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoxCatalog {
    boxes: Vec<BoxType>,
}

impl BoxCatalog {
    /// 建立箱型目錄
    ///
    /// 每個箱型在重量與各尺寸上都不得小於前一個箱型，否則回傳 `InvalidBoxCatalog`。
    pub fn new(boxes: Vec<BoxType>) -> Result<Self> {
        for pair in boxes.windows(2) {
            if !pair[1].dominates(&pair[0]) {
                return Err(ShipError::InvalidBoxCatalog(format!(
                    "箱型 {} 的容量小於前一個箱型 {}",
                    pair[1].box_id, pair[0].box_id
                )));
            }
        }
        Ok(Self { boxes })
    }

    /// 標準五種箱型 XS / S / M / L / XL
    pub fn standard() -> Self {
        let boxes = vec![
            BoxType::new("XS".to_string(), 200, 20, 25, 5, Decimal::new(25, 1)),
            BoxType::new("S".to_string(), 800, 20, 25, 8, Decimal::new(40, 1)),
            BoxType::new("M".to_string(), 1300, 30, 40, 12, Decimal::new(144, 1)),
            BoxType::new("L".to_string(), 1700, 35, 40, 18, Decimal::new(252, 1)),
            BoxType::new("XL".to_string(), 2000, 45, 60, 25, Decimal::new(675, 1)),
        ];
        Self { boxes }
    }

    /// 依容量由小到大迭代
    pub fn iter(&self) -> impl Iterator<Item = &BoxType> {
        self.boxes.iter()
    }

    /// 依代碼查找箱型
    pub fn get(&self, box_id: &str) -> Option<&BoxType> {
        self.boxes.iter().find(|b| b.box_id == box_id)
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_is_valid() {
        let standard = BoxCatalog::standard();
        let rebuilt = BoxCatalog::new(standard.iter().cloned().collect()).unwrap();

        assert_eq!(rebuilt.len(), 5);
        assert_eq!(rebuilt.iter().last().unwrap().box_id, "XL");
        assert_eq!(rebuilt.get("M").unwrap().volume, Decimal::new(144, 1));
    }

    #[test]
    fn test_reject_unordered_catalog() {
        let boxes = vec![
            BoxType::new("BIG".to_string(), 2000, 45, 60, 25, Decimal::from(67)),
            BoxType::new("SMALL".to_string(), 200, 20, 25, 5, Decimal::from(2)),
        ];

        let err = BoxCatalog::new(boxes).unwrap_err();
        assert!(matches!(err, ShipError::InvalidBoxCatalog(_)));
    }

    #[test]
    fn test_fits_checks_every_dimension() {
        let xs = BoxType::new("XS".to_string(), 200, 20, 25, 5, Decimal::new(25, 1));

        assert!(xs.fits(&Item::new("A".to_string(), 200, 20, 25, 5)));
        assert!(!xs.fits(&Item::new("B".to_string(), 201, 20, 25, 5)));
        assert!(!xs.fits(&Item::new("C".to_string(), 100, 20, 25, 6)));
        // 不旋轉：寬長對調就放不下
        assert!(!xs.fits(&Item::new("D".to_string(), 100, 25, 20, 5)));
    }
}
