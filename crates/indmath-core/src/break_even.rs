//! 損益兩平模型

use serde::{Deserialize, Serialize};

use crate::validation::ensure_non_negative;
use crate::{ModelError, Result};

/// 損益兩平參數
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BreakEvenParameters {
    /// 固定成本
    fixed_cost: f64,

    /// 單位變動成本
    variable_cost: f64,

    /// 單位售價（必須高於單位變動成本）
    price: f64,
}

impl BreakEvenParameters {
    pub fn new(fixed_cost: f64, variable_cost: f64, price: f64) -> Result<Self> {
        let params = Self {
            fixed_cost,
            variable_cost,
            price,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<()> {
        ensure_non_negative("fixed_cost", self.fixed_cost)?;
        ensure_non_negative("variable_cost", self.variable_cost)?;
        ensure_non_negative("price", self.price)?;
        if self.price <= self.variable_cost {
            return Err(ModelError::invalid(
                "price",
                format!(
                    "單位售價 {} 必須高於單位變動成本 {}",
                    self.price, self.variable_cost
                ),
            ));
        }
        Ok(())
    }

    pub fn fixed_cost(&self) -> f64 {
        self.fixed_cost
    }

    pub fn variable_cost(&self) -> f64 {
        self.variable_cost
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    /// 單位邊際貢獻
    pub fn contribution_margin(&self) -> f64 {
        self.price - self.variable_cost
    }

    pub fn revenue(&self, units: f64) -> f64 {
        self.price * units
    }

    pub fn total_cost(&self, units: f64) -> f64 {
        self.fixed_cost + self.variable_cost * units
    }
}

/// 曲線上的一點
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BreakEvenPoint {
    pub units: f64,
    pub revenue: f64,
    pub total_cost: f64,
}

impl BreakEvenPoint {
    pub fn profit(&self) -> f64 {
        self.revenue - self.total_cost
    }
}

/// 損益兩平結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakEvenSolution {
    break_even_units: f64,
    break_even_revenue: f64,
    contribution_margin: f64,
    curve: Vec<BreakEvenPoint>,
}

impl BreakEvenSolution {
    pub fn new(
        break_even_units: f64,
        break_even_revenue: f64,
        contribution_margin: f64,
        curve: Vec<BreakEvenPoint>,
    ) -> Self {
        Self {
            break_even_units,
            break_even_revenue,
            contribution_margin,
            curve,
        }
    }

    pub fn break_even_units(&self) -> f64 {
        self.break_even_units
    }

    pub fn break_even_revenue(&self) -> f64 {
        self.break_even_revenue
    }

    pub fn contribution_margin(&self) -> f64 {
        self.contribution_margin
    }

    pub fn curve(&self) -> &[BreakEvenPoint] {
        &self.curve
    }
}
