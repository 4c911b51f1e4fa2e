//! # Industrial Math Optimizer
//!
//! 優化算法模組（兩產品、單一產能約束的生產組合線性規劃）

pub mod constraint;
pub mod production;

// Re-export 主要類型
pub use constraint::CapacityConstraint;
pub use production::ProductionOptimizer;
