//! 批次出貨計算示例
//!
//! 用法：cargo run --example batch_shipping [輸入檔] [輸出檔]

use shipplan::{render_summary, write_summary, ShipmentCalculator, ShipmentConfig, ShipmentInput};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let input_path = args
        .next()
        .unwrap_or_else(|| concat!(env!("CARGO_MANIFEST_DIR"), "/demos/data/input.txt").to_string());
    let output_path = args.next();

    println!("=== 批次出貨計算示例 ===\n");

    let (catalogs, mut ledger, orders) = ShipmentInput::from_path(&input_path)?.into_parts()?;
    let config = ShipmentConfig::default();
    let calculator = ShipmentCalculator::new(catalogs, config.clone());

    let plan = calculator.process_orders(orders, &mut ledger)?;

    print!("{}", render_summary(&plan, &config));
    println!("\n剩餘庫存:");
    for stock in ledger.snapshot() {
        println!("  - {} @ {}: {}", stock.item_id, stock.warehouse, stock.quantity);
    }

    if let Some(path) = output_path {
        write_summary(path, &plan, &config)?;
    }

    Ok(())
}
