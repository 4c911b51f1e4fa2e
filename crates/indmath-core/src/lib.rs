//! # Industrial Math Core
//!
//! 核心資料模型與類型定義（參數、結果、配置、錯誤）

pub mod break_even;
pub mod config;
pub mod inventory;
pub mod production;
pub mod queue;
pub mod validation;
pub mod warning;

// Re-export 主要類型
pub use break_even::{BreakEvenParameters, BreakEvenPoint, BreakEvenSolution};
pub use config::ModelConfig;
pub use inventory::{CostPoint, InventoryParameters, InventorySolution};
pub use production::{ProductionParameters, ProductionSolution, ProductionVertex};
pub use queue::{QueueMetrics, QueueParameters, QueueTrace, SteadyState};
pub use warning::{ModelKind, ModelWarning, WarningSeverity};

/// 模型錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("無效參數 {name}: {constraint}")]
    InvalidParameter {
        name: &'static str,
        constraint: String,
    },

    #[error("問題不可行: {0}")]
    Infeasible(String),

    #[error("無效的模型配置: {0}")]
    InvalidConfig(String),

    #[error("序列化錯誤: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ModelError {
    /// 建立參數錯誤
    pub fn invalid(name: &'static str, constraint: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            constraint: constraint.into(),
        }
    }

    /// 是否為參數錯誤
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Self::InvalidParameter { .. })
    }

    /// 違反約束的參數名稱
    pub fn parameter_name(&self) -> Option<&'static str> {
        match self {
            Self::InvalidParameter { name, .. } => Some(*name),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;
