//! 倉庫模型

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 出貨倉庫（固定集合，新增倉庫屬於資料模型變更）
///
/// 宣告順序即為路線選擇時的最終排序依據。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Warehouse {
    /// 紐約
    NewYork,
    /// 舊金山
    SanFrancisco,
}

impl Warehouse {
    /// 所有倉庫（依宣告順序）
    pub const ALL: [Warehouse; 2] = [Warehouse::NewYork, Warehouse::SanFrancisco];

    /// UTC 時差（整數小時）
    pub const fn utc_offset_hours(self) -> i64 {
        match self {
            Warehouse::NewYork => -4,
            Warehouse::SanFrancisco => -7,
        }
    }

    /// 顯示名稱
    pub const fn name(self) -> &'static str {
        match self {
            Warehouse::NewYork => "New York",
            Warehouse::SanFrancisco => "San Francisco",
        }
    }
}

impl fmt::Display for Warehouse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Warehouse {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Warehouse::ALL
            .into_iter()
            .find(|w| w.name() == s.trim())
            .ok_or_else(|| format!("未知的倉庫: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_name_round_trip() {
        for warehouse in Warehouse::ALL {
            assert_eq!(warehouse.name().parse::<Warehouse>().unwrap(), warehouse);
        }
        assert!("Chicago".parse::<Warehouse>().is_err());
    }

    #[test]
    fn test_declaration_order() {
        assert!(Warehouse::NewYork < Warehouse::SanFrancisco);
        assert_eq!(Warehouse::ALL[0], Warehouse::NewYork);
    }

    #[rstest]
    #[case(Warehouse::NewYork, -4)]
    #[case(Warehouse::SanFrancisco, -7)]
    fn test_utc_offset(#[case] warehouse: Warehouse, #[case] expected: i64) {
        assert_eq!(warehouse.utc_offset_hours(), expected);
    }
}
