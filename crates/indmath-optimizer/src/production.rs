//! 生產組合優化
//!
//! ```text
//! max  profit_a·x + profit_b·y
//! s.t. time_a·x + time_b·y <= total_time
//!      x, y >= 0
//! ```
//!
//! 可行域是以原點和兩個軸截距為頂點的三角形，線性目標的最佳值必在頂點上，
//! 因此直接枚舉頂點即為精確解。
//!
//! 兩個截距頂點的利潤相同（利潤比等於工時比）時，整條約束邊都是最佳解，
//! 固定回報只生產 B 的頂點 `(0, total_time / time_b)`。

use indmath_core::{ModelConfig, ModelError, ProductionParameters, ProductionSolution, ProductionVertex};

use crate::constraint::CapacityConstraint;

/// 判定兩頂點利潤相同的相對容差
const TIE_TOLERANCE: f64 = 1e-9;

/// 生產組合優化器
#[derive(Debug, Clone, Default)]
pub struct ProductionOptimizer {
    config: ModelConfig,
}

impl ProductionOptimizer {
    /// 創建新的優化器
    pub fn new(config: ModelConfig) -> Self {
        Self { config }
    }

    /// 求解最佳生產組合
    pub fn optimize(&self, params: &ProductionParameters) -> indmath_core::Result<ProductionSolution> {
        params.validate()?;
        self.config.validate()?;

        tracing::info!(
            "開始生產組合優化：利潤 A = {}, B = {}；工時 A = {}, B = {}；總工時 {}",
            params.profit_a(),
            params.profit_b(),
            params.time_a(),
            params.time_b(),
            params.total_time()
        );

        let constraint = CapacityConstraint::from_parameters(params);

        if params.total_time() <= 0.0 {
            tracing::debug!("總工時 {} <= 0，只能不生產", params.total_time());
            return Ok(ProductionSolution::new(0.0, 0.0, 0.0, ProductionVertex::Origin)
                .with_boundary(self.boundary(&constraint)));
        }

        let max_a = constraint.x_intercept();
        let max_b = constraint.y_intercept();
        let profit_at_a = params.profit(max_a, 0.0);
        let profit_at_b = params.profit(0.0, max_b);
        tracing::debug!(
            "頂點 ({}, 0) 利潤 {}；頂點 (0, {}) 利潤 {}",
            max_a,
            profit_at_a,
            max_b,
            profit_at_b
        );

        if ![max_a, max_b, profit_at_a, profit_at_b]
            .iter()
            .all(|v| v.is_finite())
        {
            return Err(ModelError::Infeasible(format!(
                "頂點數值溢出：({max_a}, 0) -> {profit_at_a}, (0, {max_b}) -> {profit_at_b}"
            )));
        }

        let scale = profit_at_a.abs().max(profit_at_b.abs());
        let degenerate = (profit_at_a - profit_at_b).abs() <= TIE_TOLERANCE * scale;

        let solution = if degenerate {
            tracing::warn!("利潤比等於工時比，約束邊上皆為最佳解，回報頂點 (0, {:.2})", max_b);
            ProductionSolution::new(0.0, max_b, profit_at_b, ProductionVertex::ProductB)
        } else if profit_at_a > profit_at_b {
            ProductionSolution::new(max_a, 0.0, profit_at_a, ProductionVertex::ProductA)
        } else {
            ProductionSolution::new(0.0, max_b, profit_at_b, ProductionVertex::ProductB)
        };

        tracing::info!(
            "生產組合優化完成：A = {:.2}, B = {:.2}, 最大利潤 {:.0}",
            solution.quantity_a(),
            solution.quantity_b(),
            solution.max_profit()
        );

        Ok(solution
            .with_degenerate(degenerate)
            .with_boundary(self.boundary(&constraint)))
    }

    fn boundary(&self, constraint: &CapacityConstraint) -> Vec<(f64, f64)> {
        constraint.boundary(self.config.boundary_points, self.config.boundary_margin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indmath_core::WarningSeverity;
    use proptest::prelude::*;
    use rstest::rstest;

    #[test]
    fn test_reference_tie_reports_product_b_vertex() {
        let params = ProductionParameters::new(40000.0, 60000.0, 2.0, 3.0, 100.0).unwrap();
        let solution = ProductionOptimizer::default().optimize(&params).unwrap();

        assert!(solution.is_feasible());
        assert!(solution.is_degenerate());
        assert_eq!(solution.vertex(), ProductionVertex::ProductB);
        assert_eq!(solution.quantity_a(), 0.0);
        assert!((solution.quantity_b() - 33.3333).abs() < 1e-3);
        assert!((solution.max_profit() - 2_000_000.0).abs() < 1e-3);

        let warning = solution.degeneracy_warning().unwrap();
        assert_eq!(warning.severity, WarningSeverity::Info);
    }

    #[rstest]
    #[case(50000.0, 60000.0, ProductionVertex::ProductA, 50.0, 0.0, 2_500_000.0)]
    #[case(30000.0, 60000.0, ProductionVertex::ProductB, 0.0, 100.0 / 3.0, 2_000_000.0)]
    fn test_unique_optimum(
        #[case] profit_a: f64,
        #[case] profit_b: f64,
        #[case] vertex: ProductionVertex,
        #[case] x: f64,
        #[case] y: f64,
        #[case] profit: f64,
    ) {
        let params = ProductionParameters::new(profit_a, profit_b, 2.0, 3.0, 100.0).unwrap();
        let solution = ProductionOptimizer::default().optimize(&params).unwrap();

        assert!(!solution.is_degenerate());
        assert!(solution.degeneracy_warning().is_none());
        assert_eq!(solution.vertex(), vertex);
        assert!((solution.quantity_a() - x).abs() < 1e-9);
        assert!((solution.quantity_b() - y).abs() < 1e-9);
        assert!((solution.max_profit() - profit).abs() < 1e-6);
    }

    #[rstest]
    #[case(0.0)]
    #[case(-20.0)]
    fn test_non_positive_capacity_produces_nothing(#[case] total_time: f64) {
        let params = ProductionParameters::new(40000.0, 60000.0, 2.0, 3.0, total_time).unwrap();
        let solution = ProductionOptimizer::default().optimize(&params).unwrap();

        assert!(solution.is_feasible());
        assert_eq!(solution.vertex(), ProductionVertex::Origin);
        assert_eq!(solution.quantity_a(), 0.0);
        assert_eq!(solution.quantity_b(), 0.0);
        assert_eq!(solution.max_profit(), 0.0);
    }

    #[test]
    fn test_unvalidated_time_rejected() {
        let params: ProductionParameters = serde_json::from_str(
            r#"{"profit_a":1.0,"profit_b":1.0,"time_a":1.0,"time_b":-3.0,"total_time":10.0}"#,
        )
        .unwrap();

        let err = ProductionOptimizer::default().optimize(&params).unwrap_err();
        assert_eq!(err.parameter_name(), Some("time_b"));
    }

    #[test]
    fn test_overflow_is_infeasible() {
        let params = ProductionParameters::new(1.0, 1.0, 1e-300, 1.0, 1e300).unwrap();
        let err = ProductionOptimizer::default().optimize(&params).unwrap_err();

        assert!(matches!(err, ModelError::Infeasible(_)));
    }

    #[test]
    fn test_boundary_attached() {
        let params = ProductionParameters::new(40000.0, 60000.0, 2.0, 3.0, 100.0).unwrap();
        let config = ModelConfig::default().with_boundary(5, 0.0);
        let solution = ProductionOptimizer::new(config).optimize(&params).unwrap();

        assert_eq!(solution.boundary().len(), 5);
        assert_eq!(solution.boundary()[4], (50.0, 0.0));
    }

    #[test]
    fn test_deterministic() {
        let params = ProductionParameters::new(12.5, 7.25, 0.3, 0.9, 47.0).unwrap();
        let optimizer = ProductionOptimizer::default();

        assert_eq!(optimizer.optimize(&params).unwrap(), optimizer.optimize(&params).unwrap());
    }

    proptest! {
        #[test]
        fn prop_solution_is_optimal_on_boundary(
            profit_a in 0.0f64..1e5,
            profit_b in 0.0f64..1e5,
            time_a in 0.01f64..100.0,
            time_b in 0.01f64..100.0,
            total_time in 0.1f64..1e4,
            fx in 0.0f64..1.0,
            fy in 0.0f64..1.0,
        ) {
            let params = ProductionParameters::new(profit_a, profit_b, time_a, time_b, total_time).unwrap();
            let solution = ProductionOptimizer::default().optimize(&params).unwrap();
            let constraint = CapacityConstraint::from_parameters(&params);

            prop_assert!(constraint.is_satisfied(solution.quantity_a(), solution.quantity_b()));
            prop_assert!(constraint.is_binding(solution.quantity_a(), solution.quantity_b()));

            // 可行域內任一點的利潤都不超過最佳解
            let x = fx * constraint.x_intercept();
            let y = fy * (total_time - time_a * x).max(0.0) / time_b;
            let candidate = params.profit(x, y);
            prop_assert!(candidate <= solution.max_profit() * (1.0 + 1e-9) + 1e-9);
        }
    }
}
