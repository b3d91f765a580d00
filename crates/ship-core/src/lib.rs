//! # Ship Core
//!
//! 出貨決策的核心資料模型與類型定義

pub mod box_type;
pub mod catalog;
pub mod carrier;
pub mod config;
pub mod inventory;
pub mod item;
pub mod order;
pub mod schedule;
pub mod shipment;
pub mod warehouse;

// Re-export 主要類型
pub use box_type::{BoxCatalog, BoxType};
pub use catalog::ReferenceCatalogs;
pub use carrier::{CarrierPricing, CarrierTime};
pub use config::ShipmentConfig;
pub use inventory::{InventoryLedger, Stock};
pub use item::Item;
pub use order::Order;
pub use schedule::{DepartureTime, ShippingHour};
pub use shipment::ShipmentInfo;
pub use warehouse::Warehouse;

/// 出貨錯誤類型
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShipError {
    #[error("所有倉庫皆無物料 {item_id} 的庫存")]
    NoStockAvailable { item_id: String },

    #[error("沒有可容納物料 {item_id} 的箱型")]
    NoSuitableBox { item_id: String },

    #[error("沒有具備庫存與配送路線的倉庫：物料 {item_id}，目的州 {destination_state}")]
    NoSuitableRoute {
        item_id: String,
        destination_state: String,
    },

    #[error("找不到物料主檔: {0}")]
    UnknownItem(String),

    #[error("庫存扣減失敗：倉庫 {warehouse} 的物料 {item_id} 庫存已為 0")]
    StockUnderflow { item_id: String, warehouse: Warehouse },

    #[error("參考資料重複: {0}")]
    DuplicateCatalogEntry(String),

    #[error("箱型目錄無效: {0}")]
    InvalidBoxCatalog(String),

    #[error("無效的日期: {0}")]
    InvalidDate(String),
}

pub type Result<T> = std::result::Result<T, ShipError>;
