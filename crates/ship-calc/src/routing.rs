//! 出貨路線選擇

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use ship_core::{
    BoxType, Order, ReferenceCatalogs, ShipError, ShipmentConfig, ShipmentInfo, ShippingHour,
    Warehouse,
};
use std::cmp::Ordering;

use crate::delivery_time::DeliveryTimeCalculator;

/// 候選路線（倉庫 + 出貨時段 + 承運商）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteCandidate {
    pub warehouse: Warehouse,
    pub shipping_hour: ShippingHour,
    pub arrival: NaiveDateTime,
    pub base_price: Decimal,
    pub experience_price: Decimal,
    pub total_price: Decimal,
}

impl RouteCandidate {
    /// 建立候選路線；總價溢出時回傳 `None`
    pub fn new(
        warehouse: Warehouse,
        shipping_hour: ShippingHour,
        arrival: NaiveDateTime,
        base_price: Decimal,
        experience_price: Decimal,
    ) -> Option<Self> {
        let total_price = base_price.checked_add(experience_price)?;

        Some(Self {
            warehouse,
            shipping_hour,
            arrival,
            base_price,
            experience_price,
            total_price,
        })
    }

    /// 總價最低優先，其次最早送達，最後依倉庫宣告順序
    fn rank(&self, other: &Self) -> Ordering {
        self.total_price
            .cmp(&other.total_price)
            .then_with(|| self.arrival.cmp(&other.arrival))
            .then_with(|| self.warehouse.cmp(&other.warehouse))
    }
}

/// 路線選擇器
pub struct RouteSelector<'a> {
    catalogs: &'a ReferenceCatalogs,
    config: &'a ShipmentConfig,
}

impl<'a> RouteSelector<'a> {
    pub fn new(catalogs: &'a ReferenceCatalogs, config: &'a ShipmentConfig) -> Self {
        Self { catalogs, config }
    }

    /// 列出所有可行路線
    ///
    /// 倉庫缺少出貨時刻表、承運商價格或運輸時間任一項時，不列入候選；
    /// 送達時間或價格無法表示（溢出）的時段同樣略過。
    pub fn candidates(
        &self,
        order: &Order,
        warehouses: &[Warehouse],
        box_type: &BoxType,
    ) -> Vec<RouteCandidate> {
        let state = order.destination_state.as_str();
        let mut candidates = Vec::new();

        for &warehouse in warehouses {
            let (Some(departure), Some(pricing), Some(carrier_time)) = (
                self.catalogs.departure(warehouse, state),
                self.catalogs.pricing(warehouse, state),
                self.catalogs.carrier_time(warehouse, state),
            ) else {
                tracing::debug!("倉庫 {} 無法配送至 {}，略過", warehouse, state);
                continue;
            };

            let Some(base_price) = pricing.price_for_volume(box_type.volume) else {
                tracing::debug!(
                    "倉庫 {} 至 {} 的基本運費溢出（箱型 {}），略過",
                    warehouse,
                    state,
                    box_type.box_id
                );
                continue;
            };

            for shipping_hour in &departure.shipping_hours {
                let arrival = match DeliveryTimeCalculator::compute_arrival(
                    order.order_date,
                    warehouse,
                    shipping_hour,
                    carrier_time.transit_hours,
                    self.config,
                ) {
                    Ok(arrival) => arrival,
                    Err(error) => {
                        tracing::debug!(
                            "訂單 {} {} {:?} {} 無法計算送達時間，略過: {}",
                            order.order_id,
                            warehouse,
                            shipping_hour.day,
                            shipping_hour.time,
                            error
                        );
                        continue;
                    }
                };
                let elapsed_hours = (arrival - order.order_date).num_hours();
                let candidate = self
                    .config
                    .experience_price(elapsed_hours)
                    .and_then(|experience_price| {
                        RouteCandidate::new(
                            warehouse,
                            *shipping_hour,
                            arrival,
                            base_price,
                            experience_price,
                        )
                    });
                let Some(candidate) = candidate else {
                    tracing::debug!(
                        "訂單 {} {} {:?} {} 價格溢出，略過",
                        order.order_id,
                        warehouse,
                        shipping_hour.day,
                        shipping_hour.time
                    );
                    continue;
                };

                tracing::debug!(
                    "候選路線: 訂單 {} {} {:?} {} → 送達 {}，基本 {} 體驗 {}",
                    order.order_id,
                    warehouse,
                    shipping_hour.day,
                    shipping_hour.time,
                    arrival,
                    candidate.base_price,
                    candidate.experience_price
                );

                candidates.push(candidate);
            }
        }

        candidates
    }

    /// 選擇最佳路線並產生出貨資訊
    ///
    /// 沒有任何可行路線時回傳 `NoSuitableRoute`。
    pub fn select_route(
        &self,
        order: &Order,
        warehouses: &[Warehouse],
        box_type: &BoxType,
    ) -> ship_core::Result<ShipmentInfo> {
        let best = self
            .candidates(order, warehouses, box_type)
            .into_iter()
            .min_by(|a, b| a.rank(b))
            .ok_or_else(|| ShipError::NoSuitableRoute {
                item_id: order.item_id.clone(),
                destination_state: order.destination_state.clone(),
            })?;

        Ok(ShipmentInfo::new(
            order.clone(),
            best.warehouse,
            best.arrival,
            box_type.box_id.clone(),
            best.base_price,
            best.experience_price,
        ))
    }
}
