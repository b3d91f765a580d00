//! 分段文字輸入
//!
//! 每個區段以 `---Name---` 標頭開始，資料行以 `;` 分隔欄位，
//! 小數可使用逗號。第一個標頭之前的內容與空白行會被忽略。

use chrono::{NaiveDateTime, NaiveTime, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ship_core::{
    BoxCatalog, BoxType, CarrierPricing, CarrierTime, DepartureTime, InventoryLedger, Item, Order,
    ReferenceCatalogs, ShippingHour, Stock, Warehouse,
};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::{IoError, Result};

/// 時間格式（下單時間與送達時間）
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// 輸入區段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Section {
    Orders,
    Stocks,
    BoxTypes,
    CarrierPricing,
    DepartureTimes,
    CarrierTimes,
    Items,
}

impl Section {
    const ALL: [Section; 7] = [
        Section::Orders,
        Section::Stocks,
        Section::BoxTypes,
        Section::CarrierPricing,
        Section::DepartureTimes,
        Section::CarrierTimes,
        Section::Items,
    ];

    fn name(self) -> &'static str {
        match self {
            Section::Orders => "Orders",
            Section::Stocks => "Stocks",
            Section::BoxTypes => "BoxTypes",
            Section::CarrierPricing => "CarrierPricing",
            Section::DepartureTimes => "DepartureTimes",
            Section::CarrierTimes => "CarrierTimes",
            Section::Items => "Items",
        }
    }

    /// 辨識區段標頭行
    fn from_header(line: &str) -> Option<Self> {
        let name = line.strip_prefix("---")?.strip_suffix("---")?;
        Section::ALL.into_iter().find(|s| s.name() == name)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 解析後的輸入資料
#[derive(Debug, Clone, Default)]
pub struct ShipmentInput {
    pub orders: Vec<Order>,
    pub stocks: Vec<Stock>,
    pub box_types: Vec<BoxType>,
    pub pricings: Vec<CarrierPricing>,
    pub departures: Vec<DepartureTime>,
    pub carrier_times: Vec<CarrierTime>,
    pub items: Vec<Item>,
}

impl ShipmentInput {
    /// 從檔案讀取
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// 解析分段文字
    pub fn parse(text: &str) -> Result<Self> {
        let mut input = Self::default();
        let mut section: Option<Section> = None;

        for (index, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            if let Some(next) = Section::from_header(line) {
                section = Some(next);
                continue;
            }

            let Some(current) = section else {
                continue;
            };

            input
                .parse_line(current, line)
                .map_err(|reason| IoError::Parse {
                    line: index + 1,
                    section: current,
                    reason,
                })?;
        }

        tracing::debug!(
            "輸入解析完成：訂單 {}，庫存 {}，物料 {}，箱型 {}",
            input.orders.len(),
            input.stocks.len(),
            input.items.len(),
            input.box_types.len()
        );

        Ok(input)
    }

    fn parse_line(&mut self, section: Section, line: &str) -> std::result::Result<(), String> {
        let fields: Vec<&str> = line.split(';').map(str::trim).collect();

        match section {
            Section::Orders => {
                let [id, date, item, _, state] = take::<5>(&fields)?;
                self.orders.push(Order::new(
                    parse_number(id)?,
                    parse_date(date)?,
                    item.to_string(),
                    state.to_string(),
                ));
            }
            Section::Stocks => {
                let [item, warehouse, qty] = take::<3>(&fields)?;
                self.stocks.push(Stock::new(
                    item.to_string(),
                    parse_warehouse(warehouse)?,
                    parse_number(qty)?,
                ));
            }
            Section::BoxTypes => {
                let [id, weight, length, width, height, volume] = take::<6>(&fields)?;
                self.box_types.push(BoxType::new(
                    id.to_string(),
                    parse_number(weight)?,
                    parse_number(length)?,
                    parse_number(width)?,
                    parse_number(height)?,
                    parse_decimal(volume)?,
                ));
            }
            Section::CarrierPricing => {
                let [warehouse, state, price] = take::<3>(&fields)?;
                self.pricings.push(CarrierPricing::new(
                    parse_warehouse(warehouse)?,
                    state.to_string(),
                    parse_decimal(price)?,
                ));
            }
            Section::DepartureTimes => {
                let [warehouse, state, slots] = take::<3>(&fields)?;
                let hours = slots
                    .split(',')
                    .map(parse_shipping_hour)
                    .collect::<std::result::Result<Vec<_>, _>>()?;
                self.departures.push(DepartureTime::new(
                    parse_warehouse(warehouse)?,
                    state.to_string(),
                    hours,
                ));
            }
            Section::CarrierTimes => {
                let [warehouse, state, hours] = take::<3>(&fields)?;
                let hours = hours
                    .split_whitespace()
                    .next()
                    .ok_or_else(|| "缺少運輸時數".to_string())?;
                self.carrier_times.push(CarrierTime::new(
                    parse_warehouse(warehouse)?,
                    state.to_string(),
                    parse_number(hours)?,
                ));
            }
            Section::Items => {
                let [id, _, weight, length, width, height] = take::<6>(&fields)?;
                self.items.push(Item::new(
                    id.to_string(),
                    parse_number(weight)?,
                    parse_number(length)?,
                    parse_number(width)?,
                    parse_number(height)?,
                ));
            }
        }

        Ok(())
    }

    /// 轉換為計算所需的參考資料、期初庫存帳與訂單
    ///
    /// 沒有 BoxTypes 區段時使用標準箱型目錄。
    pub fn into_parts(self) -> Result<(ReferenceCatalogs, InventoryLedger, Vec<Order>)> {
        let boxes = if self.box_types.is_empty() {
            BoxCatalog::standard()
        } else {
            BoxCatalog::new(self.box_types)?
        };

        let catalogs = ReferenceCatalogs::new(
            self.items,
            boxes,
            self.pricings,
            self.departures,
            self.carrier_times,
        )?;
        let ledger = InventoryLedger::from_stocks(&self.stocks);

        Ok((catalogs, ledger, self.orders))
    }
}

fn take<'a, const N: usize>(fields: &[&'a str]) -> std::result::Result<[&'a str; N], String> {
    if fields.len() < N {
        return Err(format!("欄位數不足：需要 {}，實際 {}", N, fields.len()));
    }
    Ok(std::array::from_fn(|i| fields[i]))
}

fn parse_number<T: FromStr>(value: &str) -> std::result::Result<T, String> {
    value
        .parse()
        .map_err(|_| format!("無效的數字: {}", value))
}

fn parse_decimal(value: &str) -> std::result::Result<Decimal, String> {
    Decimal::from_str(&value.replace(',', "."))
        .map_err(|e| format!("無效的小數 {}: {}", value, e))
}

fn parse_date(value: &str) -> std::result::Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(value, DATE_FORMAT)
        .map_err(|e| format!("無效的日期 {}: {}", value, e))
}

fn parse_warehouse(value: &str) -> std::result::Result<Warehouse, String> {
    value.parse()
}

fn parse_shipping_hour(slot: &str) -> std::result::Result<ShippingHour, String> {
    let mut parts = slot.split_whitespace();
    let (Some(day), Some(time), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(format!("無效的出貨時段: {}", slot.trim()));
    };

    let day = Weekday::from_str(day).map_err(|_| format!("無效的星期: {}", day))?;
    let time = NaiveTime::parse_from_str(time, "%H:%M")
        .map_err(|e| format!("無效的時間 {}: {}", time, e))?;

    Ok(ShippingHour::new(day, time))
}
