//! 出貨摘要輸出

use rust_decimal::Decimal;
use ship_calc::ShipmentPlan;
use ship_core::ShipmentConfig;
use std::fmt::Write as _;
use std::path::Path;

use crate::input::DATE_FORMAT;
use crate::Result;

/// 產生文字摘要
///
/// 第一行為總價，之後每筆出貨一行
/// `訂單;倉庫;送達時間;箱型;基本運費;體驗價格`，
/// 失敗的訂單以 `# FAILED` 開頭列在最後。
pub fn render_summary(plan: &ShipmentPlan, config: &ShipmentConfig) -> String {
    let scale = config.price_scale as usize;
    let price = |value: Decimal| format!("{:.*}", scale, config.round_price(value));

    let mut output = String::new();
    let _ = writeln!(output, "{}", price(plan.total_price));

    for shipment in &plan.shipments {
        let _ = writeln!(
            output,
            "{};{};{};{};{};{}",
            shipment.order.order_id,
            shipment.warehouse,
            shipment.guaranteed_delivery.format(DATE_FORMAT),
            shipment.box_id,
            price(shipment.base_price),
            price(shipment.experience_price)
        );
    }

    for failure in &plan.failures {
        let _ = writeln!(
            output,
            "# FAILED {};{};{};{}",
            failure.order_id, failure.kind, failure.item_id, failure.destination_state
        );
    }

    output
}

/// 寫出文字摘要檔
pub fn write_summary(
    path: impl AsRef<Path>,
    plan: &ShipmentPlan,
    config: &ShipmentConfig,
) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path, render_summary(plan, config))?;
    tracing::info!("出貨摘要已寫入 {}", path.display());
    Ok(())
}

/// 產生 JSON 摘要（完整計算結果）
pub fn render_json(plan: &ShipmentPlan) -> Result<String> {
    Ok(serde_json::to_string_pretty(plan)?)
}
