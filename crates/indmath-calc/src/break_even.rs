//! 損益兩平分析

use indmath_core::{BreakEvenParameters, BreakEvenPoint, BreakEvenSolution, ModelConfig, ModelError};

use crate::sampling::GridSampler;

/// 損益兩平計算器
#[derive(Debug, Clone, Default)]
pub struct BreakEvenCalculator {
    config: ModelConfig,
}

impl BreakEvenCalculator {
    /// 創建新的損益兩平計算器
    pub fn new(config: ModelConfig) -> Self {
        Self { config }
    }

    /// 計算損益兩平點與收入／成本曲線
    pub fn calculate(&self, params: &BreakEvenParameters) -> indmath_core::Result<BreakEvenSolution> {
        params.validate()?;
        self.config.validate()?;

        tracing::info!(
            "開始損益兩平計算：固定成本 {}, 變動成本 {}, 售價 {}",
            params.fixed_cost(),
            params.variable_cost(),
            params.price()
        );

        let units = Self::break_even_units(params)?;

        // 損益兩平點很小時仍保留最小範圍，讓交叉點可見
        let range_end =
            (units * self.config.break_even_range_factor).max(self.config.break_even_min_range);
        if !range_end.is_finite() {
            return Err(ModelError::invalid(
                "fixed_cost",
                format!("曲線範圍 {units} × {} 超出浮點數範圍", self.config.break_even_range_factor),
            ));
        }
        tracing::debug!("曲線範圍: [0, {}]", range_end);

        let break_even_revenue = params.revenue(units);
        if !break_even_revenue.is_finite() {
            return Err(ModelError::invalid(
                "price",
                format!("損益兩平營收 {} × {units} 超出浮點數範圍", params.price()),
            ));
        }

        let curve: Vec<BreakEvenPoint> =
            GridSampler::uniform(0.0, range_end, self.config.break_even_curve_points)
                .into_iter()
                .map(|units| BreakEvenPoint {
                    units,
                    revenue: params.revenue(units),
                    total_cost: params.total_cost(units),
                })
                .collect();

        if let Some(point) = curve
            .iter()
            .find(|p| !(p.units.is_finite() && p.revenue.is_finite() && p.total_cost.is_finite()))
        {
            return Err(ModelError::invalid(
                "fixed_cost",
                format!("曲線在 {} 單位處超出浮點數範圍", point.units),
            ));
        }

        tracing::info!("損益兩平計算完成：{:.2} 單位", units);

        Ok(BreakEvenSolution::new(
            units,
            break_even_revenue,
            params.contribution_margin(),
            curve,
        ))
    }

    /// 損益兩平數量 = 固定成本 / (售價 - 變動成本)
    pub fn break_even_units(params: &BreakEvenParameters) -> indmath_core::Result<f64> {
        params.validate()?;

        let units = params.fixed_cost() / params.contribution_margin();
        if !units.is_finite() {
            return Err(ModelError::invalid(
                "price",
                format!(
                    "單位邊際貢獻 {} 過小，損益兩平點溢出",
                    params.contribution_margin()
                ),
            ));
        }

        Ok(units)
    }
}
