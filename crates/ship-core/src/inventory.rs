//! 庫存模型與庫存帳

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::{Result, ShipError, Warehouse};

/// 期初庫存記錄
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    /// 物料ID
    pub item_id: String,

    /// 倉庫
    pub warehouse: Warehouse,

    /// 現有庫存
    pub quantity: u32,
}

impl Stock {
    /// 創建新的庫存記錄
    pub fn new(item_id: String, warehouse: Warehouse, quantity: u32) -> Self {
        Self {
            item_id,
            warehouse,
            quantity,
        }
    }
}

/// 庫存帳（物料 × 倉庫 → 數量）
///
/// 單次計算期間唯一可變的狀態，只會因出貨而扣減。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryLedger {
    quantities: HashMap<String, BTreeMap<Warehouse, u32>>,
}

impl InventoryLedger {
    /// 創建空的庫存帳
    pub fn new() -> Self {
        Self::default()
    }

    /// 從期初庫存建立，同一物料與倉庫的多筆記錄會累加
    pub fn from_stocks(stocks: &[Stock]) -> Self {
        let mut ledger = Self::new();
        for stock in stocks {
            let quantity = ledger
                .quantities
                .entry(stock.item_id.clone())
                .or_default()
                .entry(stock.warehouse)
                .or_insert(0);
            *quantity = quantity.saturating_add(stock.quantity);
        }
        ledger
    }

    /// 查詢庫存數量（無記錄視為 0）
    pub fn quantity(&self, item_id: &str, warehouse: Warehouse) -> u32 {
        self.quantities
            .get(item_id)
            .and_then(|per_warehouse| per_warehouse.get(&warehouse))
            .copied()
            .unwrap_or(0)
    }

    /// 目前仍有庫存的倉庫（依倉庫宣告順序）
    pub fn available_warehouses(&self, item_id: &str) -> Vec<Warehouse> {
        self.quantities
            .get(item_id)
            .map(|per_warehouse| {
                per_warehouse
                    .iter()
                    .filter(|&(_, &qty)| qty > 0)
                    .map(|(&warehouse, _)| warehouse)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// 扣減一單位庫存
    ///
    /// 庫存已為 0 時回傳 `StockUnderflow`，這代表呼叫端的邏輯錯誤。
    pub fn decrement(&mut self, warehouse: Warehouse, item_id: &str) -> Result<()> {
        let slot = self
            .quantities
            .get_mut(item_id)
            .and_then(|per_warehouse| per_warehouse.get_mut(&warehouse))
            .filter(|qty| **qty > 0)
            .ok_or_else(|| ShipError::StockUnderflow {
                item_id: item_id.to_string(),
                warehouse,
            })?;
        *slot -= 1;
        Ok(())
    }

    /// 匯出目前所有庫存記錄
    pub fn snapshot(&self) -> Vec<Stock> {
        let mut stocks: Vec<Stock> = self
            .quantities
            .iter()
            .flat_map(|(item_id, per_warehouse)| {
                per_warehouse
                    .iter()
                    .map(move |(&warehouse, &quantity)| Stock::new(item_id.clone(), warehouse, quantity))
            })
            .collect();
        stocks.sort_by(|a, b| {
            a.item_id
                .cmp(&b.item_id)
                .then_with(|| a.warehouse.cmp(&b.warehouse))
        });
        stocks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger() -> InventoryLedger {
        InventoryLedger::from_stocks(&[
            Stock::new("BIKE-001".to_string(), Warehouse::SanFrancisco, 2),
            Stock::new("BIKE-001".to_string(), Warehouse::NewYork, 0),
            Stock::new("FRAME-001".to_string(), Warehouse::NewYork, 1),
            Stock::new("FRAME-001".to_string(), Warehouse::NewYork, 1),
        ])
    }

    #[test]
    fn test_available_warehouses_skip_empty() {
        let ledger = ledger();

        assert_eq!(
            ledger.available_warehouses("BIKE-001"),
            vec![Warehouse::SanFrancisco]
        );
        assert!(ledger.available_warehouses("WHEEL-001").is_empty());
    }

    #[test]
    fn test_duplicate_records_accumulate() {
        let ledger = ledger();
        assert_eq!(ledger.quantity("FRAME-001", Warehouse::NewYork), 2);
        assert_eq!(ledger.quantity("FRAME-001", Warehouse::SanFrancisco), 0);
    }

    #[test]
    fn test_duplicate_records_saturate() {
        let ledger = InventoryLedger::from_stocks(&[
            Stock::new("BIKE-001".to_string(), Warehouse::NewYork, u32::MAX),
            Stock::new("BIKE-001".to_string(), Warehouse::NewYork, 3),
        ]);

        assert_eq!(ledger.quantity("BIKE-001", Warehouse::NewYork), u32::MAX);
    }

    #[test]
    fn test_decrement_until_empty() {
        let mut ledger = ledger();

        assert!(ledger.decrement(Warehouse::SanFrancisco, "BIKE-001").is_ok());
        assert!(ledger.decrement(Warehouse::SanFrancisco, "BIKE-001").is_ok());
        assert!(ledger.available_warehouses("BIKE-001").is_empty());

        // 已為 0 再扣減應該失敗
        let err = ledger
            .decrement(Warehouse::SanFrancisco, "BIKE-001")
            .unwrap_err();
        assert_eq!(
            err,
            ShipError::StockUnderflow {
                item_id: "BIKE-001".to_string(),
                warehouse: Warehouse::SanFrancisco,
            }
        );
    }

    #[test]
    fn test_decrement_unknown_item_fails() {
        let mut ledger = ledger();
        assert!(ledger.decrement(Warehouse::NewYork, "WHEEL-001").is_err());
    }

    #[test]
    fn test_snapshot_is_sorted() {
        let snapshot = ledger().snapshot();

        assert_eq!(snapshot.len(), 3);
        assert_eq!(snapshot[0].item_id, "BIKE-001");
        assert_eq!(snapshot[0].warehouse, Warehouse::NewYork);
        assert_eq!(snapshot[2].item_id, "FRAME-001");
        assert_eq!(snapshot[2].quantity, 2);
    }
}
