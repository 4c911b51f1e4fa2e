//! 機台工時約束 `time_a·x + time_b·y <= total_time`

use indmath_calc::GridSampler;
use indmath_core::ProductionParameters;
use serde::{Deserialize, Serialize};

/// 判定約束是否滿足時的相對容差
const CAPACITY_TOLERANCE: f64 = 1e-9;

/// 單一產能約束
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CapacityConstraint {
    time_a: f64,
    time_b: f64,
    total_time: f64,
}

impl CapacityConstraint {
    pub fn new(time_a: f64, time_b: f64, total_time: f64) -> Self {
        Self {
            time_a,
            time_b,
            total_time,
        }
    }

    pub fn from_parameters(params: &ProductionParameters) -> Self {
        Self::new(params.time_a(), params.time_b(), params.total_time())
    }

    /// x 軸截距（只生產 A 的最大數量）
    pub fn x_intercept(&self) -> f64 {
        self.total_time.max(0.0) / self.time_a
    }

    /// y 軸截距（只生產 B 的最大數量）
    pub fn y_intercept(&self) -> f64 {
        self.total_time.max(0.0) / self.time_b
    }

    /// 剩餘工時
    pub fn slack(&self, x: f64, y: f64) -> f64 {
        self.total_time - (self.time_a * x + self.time_b * y)
    }

    /// (x, y) 是否在可行域內
    pub fn is_satisfied(&self, x: f64, y: f64) -> bool {
        x >= 0.0
            && y >= 0.0
            && self.slack(x, y) >= -CAPACITY_TOLERANCE * self.total_time.abs().max(1.0)
    }

    /// (x, y) 是否恰好落在約束邊界上
    pub fn is_binding(&self, x: f64, y: f64) -> bool {
        self.slack(x, y).abs() <= CAPACITY_TOLERANCE * self.total_time.abs().max(1.0)
    }

    /// 約束邊界取樣：`y = max(0, (total_time - time_a·x) / time_b)`，
    /// x 從 0 到 x 軸截距再加上 `margin`
    pub fn boundary(&self, points: usize, margin: f64) -> Vec<(f64, f64)> {
        GridSampler::uniform(0.0, self.x_intercept() + margin, points)
            .into_iter()
            .map(|x| {
                let y = ((self.total_time - self.time_a * x) / self.time_b).max(0.0);
                (x, y)
            })
            .collect()
    }
}
