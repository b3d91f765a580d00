//! # Shipplan
//!
//! 訂單出貨決策：倉庫、箱型、保證送達時間與運費

pub use ship_calc as calc;
pub use ship_core as model;
pub use ship_io as io;

pub use ship_calc::{
    BoxSelector, DeliveryTimeCalculator, FailureKind, RouteSelector, ShipmentCalculator,
    ShipmentFailure, ShipmentPlan,
};
pub use ship_core::{
    BoxCatalog, InventoryLedger, Order, ReferenceCatalogs, ShipError, ShipmentConfig,
    ShipmentInfo, Warehouse,
};
pub use ship_io::{render_json, render_summary, write_summary, ShipmentInput};
