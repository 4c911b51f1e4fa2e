//! # Industrial Math Models
//!
//! 四個互相獨立的營運管理決策模型：
//!
//! - [`optimize_production`]：兩產品、單一機台工時約束的生產組合線性規劃
//! - [`compute_eoq`]：經濟訂購量與總成本曲線
//! - [`simulate_queue`]：M/M/1 佇列模擬軌跡與穩態指標
//! - [`compute_break_even`]：損益兩平點與收入／成本曲線
//!
//! 每個模型都是純函數，不保存狀態；需要自訂曲線取樣時改用各計算器的
//! `new(ModelConfig)`。

pub use indmath_calc::{
    BreakEvenCalculator, EoqCalculator, GridSampler, QueueSimulator, SensitivityAnalyzer,
    SensitivityPoint,
};
pub use indmath_core::{
    BreakEvenParameters, BreakEvenPoint, BreakEvenSolution, CostPoint, InventoryParameters,
    InventorySolution, ModelConfig, ModelError, ModelKind, ModelWarning, ProductionParameters,
    ProductionSolution, ProductionVertex, QueueMetrics, QueueParameters, QueueTrace, Result,
    SteadyState, WarningSeverity,
};
pub use indmath_optimizer::{CapacityConstraint, ProductionOptimizer};

/// 求解最佳生產組合
pub fn optimize_production(params: &ProductionParameters) -> Result<ProductionSolution> {
    ProductionOptimizer::default().optimize(params)
}

/// 計算經濟訂購量
pub fn compute_eoq(params: &InventoryParameters) -> Result<InventorySolution> {
    EoqCalculator::default().calculate(params)
}

/// 模擬 M/M/1 佇列並計算穩態指標
pub fn simulate_queue(params: &QueueParameters) -> Result<(QueueTrace, QueueMetrics)> {
    QueueSimulator::simulate(params)
}

/// 計算損益兩平點
pub fn compute_break_even(params: &BreakEvenParameters) -> Result<BreakEvenSolution> {
    BreakEvenCalculator::default().calculate(params)
}
