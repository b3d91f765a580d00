//! 倉庫每週出貨時刻表

use chrono::{Datelike, Days, NaiveDateTime, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::{Result, ShipError, Warehouse};

/// 每週固定的出貨時段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShippingHour {
    /// 星期
    pub day: Weekday,

    /// 出貨時間（倉庫當地時間）
    pub time: NaiveTime,
}

impl ShippingHour {
    pub fn new(day: Weekday, time: NaiveTime) -> Self {
        Self { day, time }
    }

    /// 計算從 `ready`（倉庫當地時間）起，下一次符合此時段的出貨時間
    ///
    /// `ready` 當天且時間未過則為當天出貨，否則順延至下一個相同星期，
    /// 最多往後 7 天。
    pub fn next_departure(&self, ready: NaiveDateTime) -> Result<NaiveDateTime> {
        let target = self.day.num_days_from_monday();
        let current = ready.weekday().num_days_from_monday();
        let mut days_ahead = (target + 7 - current) % 7;

        if days_ahead == 0 && self.time < ready.time() {
            days_ahead = 7;
        }

        ready
            .date()
            .checked_add_days(Days::new(u64::from(days_ahead)))
            .map(|date| date.and_time(self.time))
            .ok_or_else(|| ShipError::InvalidDate(format!("出貨日期溢出: {}", ready)))
    }

    fn sort_key(&self) -> (u32, NaiveTime) {
        (self.day.num_days_from_monday(), self.time)
    }
}

impl PartialOrd for ShippingHour {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ShippingHour {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

/// 出貨時刻表（倉庫 → 目的州）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartureTime {
    pub warehouse: Warehouse,

    /// 目的州
    pub destination_state: String,

    /// 每週出貨時段（週一起排序，去除重複）
    pub shipping_hours: Vec<ShippingHour>,
}

impl DepartureTime {
    /// 創建新的出貨時刻表
    pub fn new(
        warehouse: Warehouse,
        destination_state: String,
        mut shipping_hours: Vec<ShippingHour>,
    ) -> Self {
        shipping_hours.sort();
        shipping_hours.dedup();
        Self {
            warehouse,
            destination_state,
            shipping_hours,
        }
    }

    /// 合併另一份時刻表的時段
    pub fn merge_hours(&mut self, hours: &[ShippingHour]) {
        self.shipping_hours.extend_from_slice(hours);
        self.shipping_hours.sort();
        self.shipping_hours.dedup();
    }
}
