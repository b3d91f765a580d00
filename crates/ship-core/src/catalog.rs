//! 參考資料目錄
//!
//! 單次計算開始前載入一次，計算期間唯讀。

use std::collections::HashMap;

use crate::{
    BoxCatalog, CarrierPricing, CarrierTime, DepartureTime, Item, Result, ShipError, Warehouse,
};

type RouteKey = (Warehouse, String);

/// 參考資料目錄（物料、箱型、承運商價格、出貨時刻表、運輸時間）
#[derive(Debug, Clone)]
pub struct ReferenceCatalogs {
    items: HashMap<String, Item>,
    boxes: BoxCatalog,
    pricings: HashMap<RouteKey, CarrierPricing>,
    departures: HashMap<RouteKey, DepartureTime>,
    carrier_times: HashMap<RouteKey, CarrierTime>,
}

impl ReferenceCatalogs {
    /// 建立參考資料目錄
    ///
    /// 物料、價格與運輸時間不得重複；同一路線的多份出貨時刻表會合併時段。
    pub fn new(
        items: Vec<Item>,
        boxes: BoxCatalog,
        pricings: Vec<CarrierPricing>,
        departures: Vec<DepartureTime>,
        carrier_times: Vec<CarrierTime>,
    ) -> Result<Self> {
        let mut item_map = HashMap::with_capacity(items.len());
        for item in items {
            let item_id = item.item_id.clone();
            if item_map.insert(item_id.clone(), item).is_some() {
                return Err(ShipError::DuplicateCatalogEntry(format!("物料 {}", item_id)));
            }
        }

        let mut pricing_map = HashMap::with_capacity(pricings.len());
        for pricing in pricings {
            let key = (pricing.warehouse, pricing.destination_state.clone());
            if pricing_map.contains_key(&key) {
                return Err(ShipError::DuplicateCatalogEntry(format!(
                    "承運商價格 {} → {}",
                    key.0, key.1
                )));
            }
            pricing_map.insert(key, pricing);
        }

        let mut time_map = HashMap::with_capacity(carrier_times.len());
        for time in carrier_times {
            let key = (time.warehouse, time.destination_state.clone());
            if time_map.contains_key(&key) {
                return Err(ShipError::DuplicateCatalogEntry(format!(
                    "運輸時間 {} → {}",
                    key.0, key.1
                )));
            }
            time_map.insert(key, time);
        }

        let mut departure_map: HashMap<RouteKey, DepartureTime> = HashMap::new();
        for departure in departures {
            let key = (departure.warehouse, departure.destination_state.clone());
            match departure_map.get_mut(&key) {
                Some(existing) => existing.merge_hours(&departure.shipping_hours),
                None => {
                    departure_map.insert(key, departure);
                }
            }
        }

        Ok(Self {
            items: item_map,
            boxes,
            pricings: pricing_map,
            departures: departure_map,
            carrier_times: time_map,
        })
    }

    /// 查找物料
    pub fn item(&self, item_id: &str) -> Option<&Item> {
        self.items.get(item_id)
    }

    /// 箱型目錄
    pub fn boxes(&self) -> &BoxCatalog {
        &self.boxes
    }

    /// 查找承運商價格
    pub fn pricing(&self, warehouse: Warehouse, destination_state: &str) -> Option<&CarrierPricing> {
        self.pricings
            .get(&(warehouse, destination_state.to_string()))
    }

    /// 查找出貨時刻表
    pub fn departure(&self, warehouse: Warehouse, destination_state: &str) -> Option<&DepartureTime> {
        self.departures
            .get(&(warehouse, destination_state.to_string()))
    }

    /// 查找運輸時間
    pub fn carrier_time(&self, warehouse: Warehouse, destination_state: &str) -> Option<&CarrierTime> {
        self.carrier_times
            .get(&(warehouse, destination_state.to_string()))
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}
