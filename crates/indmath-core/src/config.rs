//! 模型取樣配置

use serde::{Deserialize, Serialize};

use crate::{ModelError, Result};

/// 曲線取樣與繪圖範圍配置
///
/// 只影響輸出曲線的解析度與範圍，不影響最佳解本身。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// EOQ 總成本曲線取樣點數（奇數時 Q* 恰為中點）
    pub inventory_curve_points: usize,

    /// EOQ 曲線下界倍數（相對 Q*）
    pub inventory_lower_factor: f64,

    /// EOQ 曲線上界倍數（相對 Q*）
    pub inventory_upper_factor: f64,

    /// 損益兩平曲線取樣點數
    pub break_even_curve_points: usize,

    /// 損益兩平曲線最小範圍（單位數）
    pub break_even_min_range: f64,

    /// 損益兩平曲線範圍倍數（相對損益兩平點）
    pub break_even_range_factor: f64,

    /// 生產可行域邊界取樣點數
    pub boundary_points: usize,

    /// 生產可行域邊界在 x 軸截距之後多取的範圍
    pub boundary_margin: f64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            inventory_curve_points: 101,
            inventory_lower_factor: 0.5,
            inventory_upper_factor: 1.5,
            break_even_curve_points: 300,
            break_even_min_range: 1000.0,
            break_even_range_factor: 1.5,
            boundary_points: 400,
            boundary_margin: 5.0,
        }
    }
}

impl ModelConfig {
    /// 建構器模式：設置 EOQ 曲線取樣點數
    pub fn with_inventory_curve_points(mut self, points: usize) -> Self {
        self.inventory_curve_points = points;
        self
    }

    /// 建構器模式：設置 EOQ 曲線範圍倍數
    pub fn with_inventory_range(mut self, lower: f64, upper: f64) -> Self {
        self.inventory_lower_factor = lower;
        self.inventory_upper_factor = upper;
        self
    }

    /// 建構器模式：設置損益兩平曲線取樣點數
    pub fn with_break_even_curve_points(mut self, points: usize) -> Self {
        self.break_even_curve_points = points;
        self
    }

    /// 建構器模式：設置損益兩平曲線最小範圍
    pub fn with_break_even_min_range(mut self, units: f64) -> Self {
        self.break_even_min_range = units;
        self
    }

    /// 建構器模式：設置可行域邊界取樣
    pub fn with_boundary(mut self, points: usize, margin: f64) -> Self {
        self.boundary_points = points;
        self.boundary_margin = margin;
        self
    }

    /// 從 JSON 載入配置（缺少的欄位使用預設值）
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// 檢查配置是否合理
    pub fn validate(&self) -> Result<()> {
        if self.inventory_curve_points < 2 {
            return Err(ModelError::InvalidConfig(
                "inventory_curve_points 至少需要 2 點".to_string(),
            ));
        }
        if self.break_even_curve_points < 2 {
            return Err(ModelError::InvalidConfig(
                "break_even_curve_points 至少需要 2 點".to_string(),
            ));
        }
        if self.boundary_points < 2 {
            return Err(ModelError::InvalidConfig(
                "boundary_points 至少需要 2 點".to_string(),
            ));
        }

        let lower = self.inventory_lower_factor;
        let upper = self.inventory_upper_factor;
        if !(lower.is_finite() && upper.is_finite() && lower > 0.0 && lower <= 1.0 && upper >= 1.0)
        {
            // 範圍必須包含 Q* 本身，否則取樣曲線的最小值無法對應 TC(Q*)
            return Err(ModelError::InvalidConfig(format!(
                "EOQ 曲線範圍 [{lower}, {upper}] 必須滿足 0 < 下界 <= 1 <= 上界"
            )));
        }

        if !(self.break_even_min_range.is_finite() && self.break_even_min_range >= 0.0) {
            return Err(ModelError::InvalidConfig(
                "break_even_min_range 不可為負數".to_string(),
            ));
        }
        if !(self.break_even_range_factor.is_finite() && self.break_even_range_factor >= 1.0) {
            return Err(ModelError::InvalidConfig(
                "break_even_range_factor 必須 >= 1".to_string(),
            ));
        }
        if !(self.boundary_margin.is_finite() && self.boundary_margin >= 0.0) {
            return Err(ModelError::InvalidConfig(
                "boundary_margin 不可為負數".to_string(),
            ));
        }

        Ok(())
    }
}
