//! 生產組合模型（兩產品、單一機台工時約束）

use serde::{Deserialize, Serialize};

use crate::validation::{ensure_finite, ensure_non_negative, ensure_positive};
use crate::warning::{ModelKind, ModelWarning};
use crate::Result;

/// 生產參數
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProductionParameters {
    /// 產品 A 單位利潤
    profit_a: f64,

    /// 產品 B 單位利潤
    profit_b: f64,

    /// 產品 A 單位機台工時
    time_a: f64,

    /// 產品 B 單位機台工時
    time_b: f64,

    /// 可用機台總工時（<= 0 時只能不生產）
    total_time: f64,
}

impl ProductionParameters {
    /// 創建並驗證生產參數
    pub fn new(profit_a: f64, profit_b: f64, time_a: f64, time_b: f64, total_time: f64) -> Result<Self> {
        let params = Self {
            profit_a,
            profit_b,
            time_a,
            time_b,
            total_time,
        };
        params.validate()?;
        Ok(params)
    }

    /// 驗證參數（反序列化得到的值同樣需要經過此檢查）
    pub fn validate(&self) -> Result<()> {
        ensure_non_negative("profit_a", self.profit_a)?;
        ensure_non_negative("profit_b", self.profit_b)?;
        ensure_positive("time_a", self.time_a)?;
        ensure_positive("time_b", self.time_b)?;
        ensure_finite("total_time", self.total_time)?;
        Ok(())
    }

    pub fn profit_a(&self) -> f64 {
        self.profit_a
    }

    pub fn profit_b(&self) -> f64 {
        self.profit_b
    }

    pub fn time_a(&self) -> f64 {
        self.time_a
    }

    pub fn time_b(&self) -> f64 {
        self.time_b
    }

    pub fn total_time(&self) -> f64 {
        self.total_time
    }

    /// 目標函數值
    pub fn profit(&self, quantity_a: f64, quantity_b: f64) -> f64 {
        self.profit_a * quantity_a + self.profit_b * quantity_b
    }

    /// 使用的機台工時
    pub fn time_used(&self, quantity_a: f64, quantity_b: f64) -> f64 {
        self.time_a * quantity_a + self.time_b * quantity_b
    }
}

/// 最佳解所在的可行域頂點
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductionVertex {
    /// 原點（不生產）
    Origin,
    /// 只生產產品 A
    ProductA,
    /// 只生產產品 B
    ProductB,
}

/// 生產組合最佳解
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionSolution {
    quantity_a: f64,
    quantity_b: f64,
    max_profit: f64,
    feasible: bool,
    vertex: ProductionVertex,

    /// 目標函數在兩個截距頂點上相同（最佳解不唯一）
    degenerate: bool,

    /// 機台工時約束邊界取樣點 (x, y)
    boundary: Vec<(f64, f64)>,
}

impl ProductionSolution {
    /// 創建可行解
    pub fn new(quantity_a: f64, quantity_b: f64, max_profit: f64, vertex: ProductionVertex) -> Self {
        Self {
            quantity_a,
            quantity_b,
            max_profit,
            feasible: true,
            vertex,
            degenerate: false,
            boundary: Vec::new(),
        }
    }

    /// 建構器模式：標記為退化（多重最佳解）
    pub fn with_degenerate(mut self, degenerate: bool) -> Self {
        self.degenerate = degenerate;
        self
    }

    /// 建構器模式：設置約束邊界取樣
    pub fn with_boundary(mut self, boundary: Vec<(f64, f64)>) -> Self {
        self.boundary = boundary;
        self
    }

    pub fn quantity_a(&self) -> f64 {
        self.quantity_a
    }

    pub fn quantity_b(&self) -> f64 {
        self.quantity_b
    }

    pub fn max_profit(&self) -> f64 {
        self.max_profit
    }

    /// 是否可行
    ///
    /// 優化器回傳 `Ok` 的解一律可行；不可行的情況以 `ModelError::Infeasible` 回報，
    /// 不會產生 `is_feasible() == false` 的解。
    pub fn is_feasible(&self) -> bool {
        self.feasible
    }

    pub fn vertex(&self) -> ProductionVertex {
        self.vertex
    }

    pub fn is_degenerate(&self) -> bool {
        self.degenerate
    }

    pub fn boundary(&self) -> &[(f64, f64)] {
        &self.boundary
    }

    /// 多重最佳解提示
    ///
    /// 退化時整條約束邊都是最佳解，回報的頂點只是其中之一。
    pub fn degeneracy_warning(&self) -> Option<ModelWarning> {
        self.degenerate.then(|| {
            ModelWarning::info(
                ModelKind::Production,
                format!(
                    "利潤比等於工時比，約束邊上皆為最佳解（回報 A = {:.2}, B = {:.2}）",
                    self.quantity_a, self.quantity_b
                ),
            )
        })
    }
}
