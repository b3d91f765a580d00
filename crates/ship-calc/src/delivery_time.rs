//! 送達時間計算

use chrono::{Duration, NaiveDateTime};
use ship_core::{ShipError, ShipmentConfig, ShippingHour, Warehouse};

/// 送達時間計算器
pub struct DeliveryTimeCalculator;

impl DeliveryTimeCalculator {
    /// 計算可出貨時間（倉庫當地時間）
    ///
    /// 下單時間 + 包裝時間，再加上倉庫的 UTC 時差。
    pub fn ready_time(
        order_date: NaiveDateTime,
        warehouse: Warehouse,
        config: &ShipmentConfig,
    ) -> ship_core::Result<NaiveDateTime> {
        let shift = i64::from(config.packaging_hours) + warehouse.utc_offset_hours();
        Self::shift_hours(order_date, shift)
    }

    /// 計算保證送達時間
    ///
    /// 取可出貨時間之後最近一次符合 `shipping_hour` 的出貨時刻，加上運輸時數，
    /// 再扣除倉庫時差換回無時區時間。
    pub fn compute_arrival(
        order_date: NaiveDateTime,
        warehouse: Warehouse,
        shipping_hour: &ShippingHour,
        transit_hours: u32,
        config: &ShipmentConfig,
    ) -> ship_core::Result<NaiveDateTime> {
        let departure = Self::departure_time(order_date, warehouse, shipping_hour, config)?;
        let shift = i64::from(transit_hours) - warehouse.utc_offset_hours();
        Self::shift_hours(departure, shift)
    }

    /// 計算出貨時間（倉庫當地時間）
    pub fn departure_time(
        order_date: NaiveDateTime,
        warehouse: Warehouse,
        shipping_hour: &ShippingHour,
        config: &ShipmentConfig,
    ) -> ship_core::Result<NaiveDateTime> {
        let ready = Self::ready_time(order_date, warehouse, config)?;
        shipping_hour.next_departure(ready)
    }

    fn shift_hours(at: NaiveDateTime, hours: i64) -> ship_core::Result<NaiveDateTime> {
        at.checked_add_signed(Duration::hours(hours))
            .ok_or_else(|| ShipError::InvalidDate(format!("{} 位移 {} 小時溢出", at, hours)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime, Weekday};
    use proptest::prelude::*;
    use rstest::rstest;

    fn at(d: u32, h: u32, min: u32) -> NaiveDateTime {
        // 2025-10-06 是週一
        NaiveDate::from_ymd_opt(2025, 10, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn slot(day: Weekday, h: u32, min: u32) -> ShippingHour {
        ShippingHour::new(day, NaiveTime::from_hms_opt(h, min, 0).unwrap())
    }

    #[test]
    fn test_ready_time_applies_offset() {
        let config = ShipmentConfig::default();

        // 紐約：+4 包裝 -4 時差
        let ready =
            DeliveryTimeCalculator::ready_time(at(6, 9, 0), Warehouse::NewYork, &config).unwrap();
        assert_eq!(ready, at(6, 9, 0));

        // 舊金山：+4 包裝 -7 時差
        let ready =
            DeliveryTimeCalculator::ready_time(at(6, 9, 0), Warehouse::SanFrancisco, &config)
                .unwrap();
        assert_eq!(ready, at(6, 6, 0));
    }

    #[test]
    fn test_monday_order_ships_tuesday_arrives_thursday() {
        let config = ShipmentConfig::default();
        // 當地可出貨時間為週一 13:00
        let order_date = at(6, 13, 0);
        let tuesday_ten = slot(Weekday::Tue, 10, 0);

        let departure = DeliveryTimeCalculator::departure_time(
            order_date,
            Warehouse::NewYork,
            &tuesday_ten,
            &config,
        )
        .unwrap();
        assert_eq!(departure, at(7, 10, 0));

        let arrival = DeliveryTimeCalculator::compute_arrival(
            order_date,
            Warehouse::NewYork,
            &tuesday_ten,
            48,
            &config,
        )
        .unwrap();
        // 週四 10:00 當地時間，扣除 -4 時差 → 14:00
        assert_eq!(arrival, at(9, 14, 0));
    }

    #[rstest]
    // 當天時段未過：當天出貨
    #[case(slot(Weekday::Mon, 18, 0), at(6, 18, 0))]
    // 剛好等於可出貨時間：當天出貨
    #[case(slot(Weekday::Mon, 13, 0), at(6, 13, 0))]
    // 當天時段已過：下週同一天
    #[case(slot(Weekday::Mon, 12, 59), at(13, 12, 59))]
    // 前一天的時段：等六天
    #[case(slot(Weekday::Sun, 8, 0), at(12, 8, 0))]
    fn test_weekday_rollover(#[case] shipping_hour: ShippingHour, #[case] expected: NaiveDateTime) {
        let config = ShipmentConfig::default();

        let departure = DeliveryTimeCalculator::departure_time(
            at(6, 13, 0),
            Warehouse::NewYork,
            &shipping_hour,
            &config,
        )
        .unwrap();
        assert_eq!(departure, expected);
    }

    #[test]
    fn test_custom_packaging_hours() {
        let config = ShipmentConfig::new().with_packaging_hours(10);

        // 舊金山：09:00 + 10 - 7 = 12:00，錯過 11:00 的時段
        let departure = DeliveryTimeCalculator::departure_time(
            at(6, 9, 0),
            Warehouse::SanFrancisco,
            &slot(Weekday::Mon, 11, 0),
            &config,
        )
        .unwrap();
        assert_eq!(departure, at(13, 11, 0));
    }

    fn weekday_strategy() -> impl Strategy<Value = Weekday> {
        prop::sample::select(vec![
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ])
    }

    proptest! {
        #[test]
        fn prop_arrival_never_before_packaging(
            minutes in 0i64..(60 * 24 * 28),
            day in weekday_strategy(),
            hour in 0u32..24,
            minute in 0u32..60,
            transit in 0u32..200,
            west in any::<bool>(),
        ) {
            let config = ShipmentConfig::default();
            let warehouse = if west { Warehouse::SanFrancisco } else { Warehouse::NewYork };
            let order_date = at(6, 0, 0) + Duration::minutes(minutes);
            let shipping_hour = slot(day, hour, minute);

            let departure = DeliveryTimeCalculator::departure_time(
                order_date, warehouse, &shipping_hour, &config,
            ).unwrap();
            let ready = DeliveryTimeCalculator::ready_time(order_date, warehouse, &config).unwrap();
            let arrival = DeliveryTimeCalculator::compute_arrival(
                order_date, warehouse, &shipping_hour, transit, &config,
            ).unwrap();

            prop_assert!(arrival >= order_date + Duration::hours(4));
            prop_assert!(departure >= ready);
            prop_assert!(departure - ready < Duration::days(7));
            prop_assert_eq!(departure.time(), shipping_hour.time);
            prop_assert_eq!(chrono::Datelike::weekday(&departure), day);
        }
    }
}
