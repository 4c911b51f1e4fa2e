//! 經濟訂購量（EOQ）計算
//!
//! ```text
//! Q*    = sqrt(2 * D * S / H)
//! TC(Q) = (D / Q) * S + (Q / 2) * H
//! ```
//!
//! TC 在 Q > 0 上為凸函數，唯一最小值位於 Q*。

use indmath_core::{CostPoint, InventoryParameters, InventorySolution, ModelConfig, ModelError};

use crate::sampling::GridSampler;

/// Q* 對齊取樣網格時的相對容差
const GRID_SNAP_TOLERANCE: f64 = 1e-9;

/// EOQ 計算器
#[derive(Debug, Clone, Default)]
pub struct EoqCalculator {
    config: ModelConfig,
}

impl EoqCalculator {
    /// 創建新的 EOQ 計算器
    pub fn new(config: ModelConfig) -> Self {
        Self { config }
    }

    /// 計算 EOQ、最小總成本與總成本曲線
    pub fn calculate(&self, params: &InventoryParameters) -> indmath_core::Result<InventorySolution> {
        params.validate()?;
        self.config.validate()?;

        tracing::info!(
            "開始 EOQ 計算：D = {}, S = {}, H = {}",
            params.annual_demand(),
            params.order_cost(),
            params.holding_cost()
        );

        let q_star = Self::optimal_order_quantity(params)?;
        let min_cost = Self::total_cost(params, q_star);
        if !min_cost.is_finite() {
            return Err(ModelError::invalid(
                "annual_demand",
                format!("最小總成本超出浮點數範圍: {min_cost}"),
            ));
        }
        tracing::debug!("Q* = {}, TC(Q*) = {}", q_star, min_cost);

        let mut quantities = GridSampler::uniform(
            q_star * self.config.inventory_lower_factor,
            q_star * self.config.inventory_upper_factor,
            self.config.inventory_curve_points,
        );
        // 取樣網格必須包含 Q*，曲線最小值才會等於 TC(Q*)
        GridSampler::ensure_contains(&mut quantities, q_star, GRID_SNAP_TOLERANCE);

        let cost_curve: Vec<CostPoint> = quantities
            .into_iter()
            .map(|quantity| CostPoint {
                quantity,
                total_cost: Self::total_cost(params, quantity),
            })
            .collect();

        if let Some(point) = cost_curve
            .iter()
            .find(|p| !(p.quantity.is_finite() && p.total_cost.is_finite()))
        {
            return Err(ModelError::invalid(
                "annual_demand",
                format!("總成本曲線在 Q = {} 處超出浮點數範圍", point.quantity),
            ));
        }

        tracing::info!("EOQ 計算完成：Q* = {:.2}, TC = {:.2}", q_star, min_cost);

        Ok(InventorySolution::new(
            q_star,
            min_cost,
            params.annual_demand() / q_star,
            cost_curve,
        ))
    }

    /// 經濟訂購量 Q*
    ///
    /// 訂購成本為 0 時 Q* 退化為 0，無法建立成本曲線，視為參數錯誤。
    pub fn optimal_order_quantity(params: &InventoryParameters) -> indmath_core::Result<f64> {
        params.validate()?;

        if params.order_cost() == 0.0 {
            return Err(ModelError::invalid(
                "order_cost",
                "訂購成本為 0 時經濟訂購量退化為 0",
            ));
        }

        let q_star =
            (2.0 * params.annual_demand() * params.order_cost() / params.holding_cost()).sqrt();

        if !(q_star.is_finite() && q_star > 0.0) {
            return Err(ModelError::invalid(
                "annual_demand",
                format!("經濟訂購量超出浮點數範圍: {q_star}"),
            ));
        }

        Ok(q_star)
    }

    /// 訂購量為 `quantity` 時的年總成本（`quantity` 必須 > 0）
    pub fn total_cost(params: &InventoryParameters, quantity: f64) -> f64 {
        params.annual_demand() / quantity * params.order_cost()
            + quantity / 2.0 * params.holding_cost()
    }
}
