//! 箱型選擇

use ship_core::{BoxCatalog, BoxType, Item, ShipError};

/// 箱型選擇器
pub struct BoxSelector;

impl BoxSelector {
    /// 選擇能容納物料的最小箱型
    ///
    /// 依目錄由小到大逐一檢查重量與長寬高；若最大的箱型也放不下，
    /// 回傳 `NoSuitableBox`，不會改用最大箱型代替。
    pub fn select<'a>(item: &Item, catalog: &'a BoxCatalog) -> ship_core::Result<&'a BoxType> {
        catalog
            .iter()
            .find(|box_type| box_type.fits(item))
            .ok_or_else(|| ShipError::NoSuitableBox {
                item_id: item.item_id.clone(),
            })
    }
}
