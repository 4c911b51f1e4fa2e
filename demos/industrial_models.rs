//! 四個模型的示例（使用預設參數）
//!
//! 執行：`RUST_LOG=debug cargo run --example industrial_models`

use indmath::*;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== 生產組合優化 ===");
    let production = ProductionParameters::new(40000.0, 60000.0, 2.0, 3.0, 100.0)?;
    let solution = optimize_production(&production)?;
    println!("  產品 A: {:.2} 單位", solution.quantity_a());
    println!("  產品 B: {:.2} 單位", solution.quantity_b());
    println!("  最大利潤: {:.0}", solution.max_profit());
    if let Some(warning) = solution.degeneracy_warning() {
        println!("  註：{}", warning.message);
    }

    println!("\n=== 經濟訂購量 ===");
    let inventory = InventoryParameters::new(1000.0, 10.0, 0.5)?;
    let eoq = compute_eoq(&inventory)?;
    println!("  EOQ: {:.2} 單位", eoq.optimal_order_quantity());
    println!("  最小總成本: {:.2}", eoq.total_cost());
    println!("  每年訂購次數: {:.2}", eoq.orders_per_year());

    println!("\n=== M/M/1 佇列 ===");
    let queue = QueueParameters::new(0.5, 0.6)?;
    let (trace, metrics) = simulate_queue(&queue)?;
    println!("  利用率 ρ: {:.2}", metrics.utilization());
    match metrics.state() {
        SteadyState::Stable { lq, wq, .. } => {
            println!("  平均等候人數 Lq: {lq:.2}");
            println!("  平均等候時間 Wq: {wq:.2}");
        }
        SteadyState::Unstable => {
            if let Some(warning) = metrics.stability_warning() {
                println!("  警告：{}", warning.message);
            }
        }
    }
    println!(
        "  模擬 {} 位顧客，平均佇列長度 {:.2}，最大 {:.2}",
        trace.len(),
        trace.mean_queue_length(),
        trace.max_queue_length()
    );

    println!("\n=== 損益兩平 ===");
    let break_even = BreakEvenParameters::new(5000.0, 10.0, 25.0)?;
    let solution = compute_break_even(&break_even)?;
    println!("  損益兩平點: {:.2} 單位", solution.break_even_units());
    println!("  損益兩平營收: {:.2}", solution.break_even_revenue());

    println!("\n=== 售價敏感度 ===");
    let prices = [15.0, 20.0, 25.0, 30.0, 40.0];
    for point in SensitivityAnalyzer::break_even_by_price(&break_even, &prices) {
        match point.result {
            Some(units) => println!("  售價 {:>5.1} -> {:.2} 單位", point.value, units),
            None => println!("  售價 {:>5.1} -> 無法達到損益兩平", point.value),
        }
    }

    Ok(())
}
