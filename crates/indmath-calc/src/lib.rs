//! # Industrial Math Calculation Engine
//!
//! 封閉解與模擬計算引擎（EOQ、M/M/1 佇列、損益兩平、敏感度分析）

pub mod break_even;
pub mod inventory;
pub mod queueing;
pub mod sampling;
pub mod sensitivity;

// Re-export 主要類型
pub use break_even::BreakEvenCalculator;
pub use inventory::EoqCalculator;
pub use queueing::QueueSimulator;
pub use sampling::GridSampler;
pub use sensitivity::{SensitivityAnalyzer, SensitivityPoint};
