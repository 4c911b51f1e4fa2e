//! 參數敏感度分析
//!
//! 固定其他參數，掃描單一參數，觀察損益兩平點或 EOQ 的變化。
//! 掃描點之間互相獨立，以 rayon 平行計算；結果順序與輸入一致。

use indmath_core::{BreakEvenParameters, InventoryParameters};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::break_even::BreakEvenCalculator;
use crate::inventory::EoqCalculator;

/// 掃描結果中的一點
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensitivityPoint {
    /// 掃描參數的取值
    pub value: f64,

    /// 模型輸出；該取值使參數不合法時為 None
    pub result: Option<f64>,
}

/// 敏感度分析器
pub struct SensitivityAnalyzer;

impl SensitivityAnalyzer {
    /// 售價對損益兩平數量的影響
    pub fn break_even_by_price(base: &BreakEvenParameters, prices: &[f64]) -> Vec<SensitivityPoint> {
        Self::sweep("price", prices, |price| {
            let params = BreakEvenParameters::new(base.fixed_cost(), base.variable_cost(), price)?;
            BreakEvenCalculator::break_even_units(&params)
        })
    }

    /// 單位變動成本對損益兩平數量的影響
    pub fn break_even_by_variable_cost(
        base: &BreakEvenParameters,
        variable_costs: &[f64],
    ) -> Vec<SensitivityPoint> {
        Self::sweep("variable_cost", variable_costs, |variable_cost| {
            let params = BreakEvenParameters::new(base.fixed_cost(), variable_cost, base.price())?;
            BreakEvenCalculator::break_even_units(&params)
        })
    }

    /// 固定成本對損益兩平數量的影響
    pub fn break_even_by_fixed_cost(
        base: &BreakEvenParameters,
        fixed_costs: &[f64],
    ) -> Vec<SensitivityPoint> {
        Self::sweep("fixed_cost", fixed_costs, |fixed_cost| {
            let params = BreakEvenParameters::new(fixed_cost, base.variable_cost(), base.price())?;
            BreakEvenCalculator::break_even_units(&params)
        })
    }

    /// 持有成本對 EOQ 的影響
    pub fn eoq_by_holding_cost(
        base: &InventoryParameters,
        holding_costs: &[f64],
    ) -> Vec<SensitivityPoint> {
        Self::sweep("holding_cost", holding_costs, |holding_cost| {
            let params =
                InventoryParameters::new(base.annual_demand(), base.order_cost(), holding_cost)?;
            EoqCalculator::optimal_order_quantity(&params)
        })
    }

    /// 年需求量對 EOQ 的影響
    pub fn eoq_by_demand(base: &InventoryParameters, demands: &[f64]) -> Vec<SensitivityPoint> {
        Self::sweep("annual_demand", demands, |demand| {
            let params = InventoryParameters::new(demand, base.order_cost(), base.holding_cost())?;
            EoqCalculator::optimal_order_quantity(&params)
        })
    }

    fn sweep<F>(parameter: &str, values: &[f64], evaluate: F) -> Vec<SensitivityPoint>
    where
        F: Fn(f64) -> indmath_core::Result<f64> + Sync,
    {
        tracing::debug!("敏感度掃描 {}：{} 個取值", parameter, values.len());

        values
            .par_iter()
            .map(|&value| {
                let result = match evaluate(value) {
                    Ok(output) => Some(output),
                    Err(err) => {
                        tracing::debug!("{} = {} 不可用: {}", parameter, value, err);
                        None
                    }
                };
                SensitivityPoint { value, result }
            })
            .collect()
    }
}
