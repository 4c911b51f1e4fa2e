//! 庫存（EOQ）模型

use serde::{Deserialize, Serialize};

use crate::validation::{ensure_non_negative, ensure_positive};
use crate::Result;

/// EOQ 參數
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InventoryParameters {
    /// 年需求量 D
    annual_demand: f64,

    /// 每次訂購成本 S
    order_cost: f64,

    /// 每單位年持有成本 H（必須 > 0）
    holding_cost: f64,
}

impl InventoryParameters {
    /// 創建並驗證 EOQ 參數
    pub fn new(annual_demand: f64, order_cost: f64, holding_cost: f64) -> Result<Self> {
        let params = Self {
            annual_demand,
            order_cost,
            holding_cost,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<()> {
        ensure_positive("annual_demand", self.annual_demand)?;
        ensure_non_negative("order_cost", self.order_cost)?;
        ensure_positive("holding_cost", self.holding_cost)?;
        Ok(())
    }

    pub fn annual_demand(&self) -> f64 {
        self.annual_demand
    }

    pub fn order_cost(&self) -> f64 {
        self.order_cost
    }

    pub fn holding_cost(&self) -> f64 {
        self.holding_cost
    }
}

/// 總成本曲線上的一點
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostPoint {
    pub quantity: f64,
    pub total_cost: f64,
}

/// EOQ 計算結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventorySolution {
    optimal_order_quantity: f64,
    total_cost: f64,
    orders_per_year: f64,
    cost_curve: Vec<CostPoint>,
}

impl InventorySolution {
    pub fn new(
        optimal_order_quantity: f64,
        total_cost: f64,
        orders_per_year: f64,
        cost_curve: Vec<CostPoint>,
    ) -> Self {
        Self {
            optimal_order_quantity,
            total_cost,
            orders_per_year,
            cost_curve,
        }
    }

    /// 經濟訂購量 Q*
    pub fn optimal_order_quantity(&self) -> f64 {
        self.optimal_order_quantity
    }

    /// 最小總成本 TC(Q*)
    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    /// 每年訂購次數 D/Q*
    pub fn orders_per_year(&self) -> f64 {
        self.orders_per_year
    }

    pub fn cost_curve(&self) -> &[CostPoint] {
        &self.cost_curve
    }

    /// 取樣曲線上的最低成本點
    pub fn min_sampled_point(&self) -> Option<CostPoint> {
        self.cost_curve
            .iter()
            .copied()
            .min_by(|a, b| a.total_cost.total_cmp(&b.total_cost))
    }
}
