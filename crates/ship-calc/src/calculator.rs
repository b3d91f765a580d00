//! 出貨批次計算器

use ship_core::{
    InventoryLedger, Order, ReferenceCatalogs, ShipError, ShipmentConfig, ShipmentInfo,
};

use crate::box_selection::BoxSelector;
use crate::routing::RouteSelector;
use crate::{ShipmentFailure, ShipmentPlan};

/// 出貨計算器
///
/// 依下單時間逐筆處理訂單；前一筆的庫存扣減會影響下一筆的候選倉庫，
/// 因此只能循序執行。
pub struct ShipmentCalculator {
    /// 參考資料
    catalogs: ReferenceCatalogs,

    /// 計算參數
    config: ShipmentConfig,
}

impl ShipmentCalculator {
    /// 創建新的出貨計算器
    pub fn new(catalogs: ReferenceCatalogs, config: ShipmentConfig) -> Self {
        Self { catalogs, config }
    }

    /// 主計算入口
    ///
    /// 單筆訂單的失敗（無庫存、無箱型、無路線、未知物料）記錄後繼續處理；
    /// 只有庫存帳不一致這類內部錯誤會中止整批計算。
    pub fn process_orders(
        &self,
        mut orders: Vec<Order>,
        ledger: &mut InventoryLedger,
    ) -> ship_core::Result<ShipmentPlan> {
        let mut plan = ShipmentPlan::empty();

        tracing::info!(
            "開始出貨計算 {}：訂單 {} 筆，物料 {} 筆",
            plan.run_id,
            orders.len(),
            self.catalogs.item_count()
        );

        let start_time = std::time::Instant::now();

        // 穩定排序：同時間的訂單維持輸入順序
        orders.sort_by_key(|order| order.order_date);

        for order in &orders {
            match self.ship_order(order, ledger) {
                Ok(shipment) => {
                    tracing::debug!(
                        "訂單 {} → {} 箱型 {} 送達 {} 總價 {}",
                        order.order_id,
                        shipment.warehouse,
                        shipment.box_id,
                        shipment.guaranteed_delivery,
                        shipment.total_price
                    );
                    plan.add_shipment(shipment);
                }
                Err(error) => match ShipmentFailure::from_error(order, &error) {
                    Some(failure) => {
                        tracing::warn!("訂單 {} 無法出貨: {}", order.order_id, error);
                        plan.add_failure(failure);
                    }
                    None => {
                        tracing::error!("訂單 {} 處理中止: {}", order.order_id, error);
                        return Err(error);
                    }
                },
            }
        }

        plan.calculation_time_ms = Some(start_time.elapsed().as_millis());

        tracing::info!(
            "出貨計算完成，耗時 {:?}：成功 {} 筆，失敗 {} 筆，總價 {}",
            start_time.elapsed(),
            plan.shipments.len(),
            plan.failures.len(),
            plan.total_price
        );

        Ok(plan)
    }

    /// 單筆訂單：查庫存 → 選箱型 → 選路線 → 扣庫存
    pub fn ship_order(
        &self,
        order: &Order,
        ledger: &mut InventoryLedger,
    ) -> ship_core::Result<ShipmentInfo> {
        let warehouses = ledger.available_warehouses(&order.item_id);
        if warehouses.is_empty() {
            return Err(ShipError::NoStockAvailable {
                item_id: order.item_id.clone(),
            });
        }

        let item = self
            .catalogs
            .item(&order.item_id)
            .ok_or_else(|| ShipError::UnknownItem(order.item_id.clone()))?;

        let box_type = BoxSelector::select(item, self.catalogs.boxes())?;

        let shipment = RouteSelector::new(&self.catalogs, &self.config).select_route(
            order,
            &warehouses,
            box_type,
        )?;

        ledger.decrement(shipment.warehouse, &order.item_id)?;

        Ok(shipment)
    }
}
