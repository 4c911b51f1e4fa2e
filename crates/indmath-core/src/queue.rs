//! M/M/1 佇列模型

use serde::{Deserialize, Serialize};

use crate::validation::ensure_positive;
use crate::warning::{ModelKind, ModelWarning};
use crate::{ModelError, Result};

/// 預設模擬顧客數
pub const DEFAULT_CUSTOMER_COUNT: usize = 100;

/// 預設亂數種子
pub const DEFAULT_SEED: u64 = 42;

/// 佇列參數
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QueueParameters {
    /// 到達率 λ
    arrival_rate: f64,

    /// 服務率 μ
    service_rate: f64,

    /// 模擬顧客數 N
    customer_count: usize,

    /// 亂數種子
    seed: u64,
}

impl QueueParameters {
    /// 創建佇列參數（N = 100，種子 = 42）
    pub fn new(arrival_rate: f64, service_rate: f64) -> Result<Self> {
        let params = Self {
            arrival_rate,
            service_rate,
            customer_count: DEFAULT_CUSTOMER_COUNT,
            seed: DEFAULT_SEED,
        };
        params.validate()?;
        Ok(params)
    }

    /// 建構器模式：設置亂數種子
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// 建構器模式：設置模擬顧客數
    pub fn with_customer_count(mut self, customer_count: usize) -> Result<Self> {
        self.customer_count = customer_count;
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        ensure_positive("arrival_rate", self.arrival_rate)?;
        ensure_positive("service_rate", self.service_rate)?;
        if self.customer_count == 0 {
            return Err(ModelError::invalid("customer_count", "至少需要 1 位顧客"));
        }
        Ok(())
    }

    pub fn arrival_rate(&self) -> f64 {
        self.arrival_rate
    }

    pub fn service_rate(&self) -> f64 {
        self.service_rate
    }

    pub fn customer_count(&self) -> usize {
        self.customer_count
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// 利用率 ρ = λ/μ
    pub fn utilization(&self) -> f64 {
        self.arrival_rate / self.service_rate
    }
}

/// 模擬軌跡
///
/// `queue_lengths[i]` 是第 i 位顧客到達時的佇列長度，
/// 以流體近似計算，可能不是整數但永遠不為負。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueTrace {
    arrival_times: Vec<f64>,
    service_times: Vec<f64>,
    queue_lengths: Vec<f64>,
}

impl QueueTrace {
    pub fn new(arrival_times: Vec<f64>, service_times: Vec<f64>, queue_lengths: Vec<f64>) -> Self {
        Self {
            arrival_times,
            service_times,
            queue_lengths,
        }
    }

    pub fn arrival_times(&self) -> &[f64] {
        &self.arrival_times
    }

    /// 服務時間樣本（目前的佇列長度遞推不使用）
    pub fn service_times(&self) -> &[f64] {
        &self.service_times
    }

    pub fn queue_lengths(&self) -> &[f64] {
        &self.queue_lengths
    }

    pub fn len(&self) -> usize {
        self.arrival_times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arrival_times.is_empty()
    }

    /// (到達時間, 佇列長度) 序列，供階梯圖使用
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.arrival_times
            .iter()
            .copied()
            .zip(self.queue_lengths.iter().copied())
    }

    pub fn mean_queue_length(&self) -> f64 {
        if self.queue_lengths.is_empty() {
            return 0.0;
        }
        self.queue_lengths.iter().sum::<f64>() / self.queue_lengths.len() as f64
    }

    pub fn max_queue_length(&self) -> f64 {
        self.queue_lengths.iter().copied().fold(0.0, f64::max)
    }
}

/// 穩態狀態
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SteadyState {
    /// ρ < 1
    Stable {
        /// 平均等候人數 Lq
        lq: f64,
        /// 平均等候時間 Wq
        wq: f64,
        /// 系統內平均人數 L
        l: f64,
        /// 系統內平均停留時間 W
        w: f64,
    },
    /// ρ >= 1，佇列無上界
    Unstable,
}

/// 佇列績效指標
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QueueMetrics {
    utilization: f64,
    state: SteadyState,
}

impl QueueMetrics {
    pub fn new(utilization: f64, state: SteadyState) -> Self {
        Self { utilization, state }
    }

    pub fn utilization(&self) -> f64 {
        self.utilization
    }

    pub fn state(&self) -> SteadyState {
        self.state
    }

    pub fn is_stable(&self) -> bool {
        matches!(self.state, SteadyState::Stable { .. })
    }

    pub fn lq(&self) -> Option<f64> {
        match self.state {
            SteadyState::Stable { lq, .. } => Some(lq),
            SteadyState::Unstable => None,
        }
    }

    pub fn wq(&self) -> Option<f64> {
        match self.state {
            SteadyState::Stable { wq, .. } => Some(wq),
            SteadyState::Unstable => None,
        }
    }

    pub fn l(&self) -> Option<f64> {
        match self.state {
            SteadyState::Stable { l, .. } => Some(l),
            SteadyState::Unstable => None,
        }
    }

    pub fn w(&self) -> Option<f64> {
        match self.state {
            SteadyState::Stable { w, .. } => Some(w),
            SteadyState::Unstable => None,
        }
    }

    /// 系統不穩定時的警告
    pub fn stability_warning(&self) -> Option<ModelWarning> {
        match self.state {
            SteadyState::Stable { .. } => None,
            SteadyState::Unstable => Some(ModelWarning::warning(
                ModelKind::Queue,
                format!(
                    "系統不穩定 (ρ = {:.2} >= 1)，服務率必須大於到達率",
                    self.utilization
                ),
            )),
        }
    }
}
