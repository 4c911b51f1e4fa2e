//! 模型警告

use serde::{Deserialize, Serialize};

/// 產生警告的模型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModelKind {
    /// 生產組合優化
    Production,
    /// M/M/1 佇列
    Queue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningSeverity {
    Info,
    Warning,
}

/// 模型警告（計算成功，但結果需要呼叫端注意）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelWarning {
    pub model: ModelKind,
    pub message: String,
    pub severity: WarningSeverity,
}

impl ModelWarning {
    pub fn new(model: ModelKind, message: String, severity: WarningSeverity) -> Self {
        Self {
            model,
            message,
            severity,
        }
    }

    pub fn info(model: ModelKind, message: String) -> Self {
        Self::new(model, message, WarningSeverity::Info)
    }

    pub fn warning(model: ModelKind, message: String) -> Self {
        Self::new(model, message, WarningSeverity::Warning)
    }
}
