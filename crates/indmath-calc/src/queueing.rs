//! M/M/1 佇列模擬與穩態指標
//!
//! # 模擬
//!
//! 以參數中的種子建立獨立的 PCG 亂數產生器，先抽 N 個到達間隔（Exp(λ)），
//! 再抽 N 個服務時間（Exp(μ)）。到達時間為到達間隔的累加和。
//!
//! 佇列長度以流體近似在每個到達時點取樣：
//!
//! ```text
//! L[0] = 0
//! L[i] = max(L[i-1] + 1 - (t[i] - t[i-1]) * μ, 0)
//! ```
//!
//! # 穩態公式（ρ < 1）
//!
//! ```text
//! ρ  = λ / μ
//! Lq = ρ² / (1 - ρ)      Wq = Lq / λ
//! L  = ρ / (1 - ρ)       W  = 1 / (μ - λ)
//! ```

use indmath_core::{ModelError, QueueMetrics, QueueParameters, QueueTrace, SteadyState};
use rand::SeedableRng;
use rand_distr::{Distribution, Exp};
use rand_pcg::Pcg64;

/// M/M/1 佇列模擬器
pub struct QueueSimulator;

impl QueueSimulator {
    /// 產生模擬軌跡並計算穩態指標
    pub fn simulate(params: &QueueParameters) -> indmath_core::Result<(QueueTrace, QueueMetrics)> {
        params.validate()?;

        tracing::info!(
            "開始 M/M/1 模擬：λ = {}, μ = {}, N = {}, seed = {}",
            params.arrival_rate(),
            params.service_rate(),
            params.customer_count(),
            params.seed()
        );

        let trace = Self::generate_trace(params)?;
        let metrics = Self::steady_state_metrics(params)?;

        if let Some(warning) = metrics.stability_warning() {
            tracing::warn!("{}", warning.message);
        }

        tracing::info!(
            "M/M/1 模擬完成：平均佇列長度 {:.2}，最大佇列長度 {:.2}",
            trace.mean_queue_length(),
            trace.max_queue_length()
        );

        Ok((trace, metrics))
    }

    /// 產生模擬軌跡
    pub fn generate_trace(params: &QueueParameters) -> indmath_core::Result<QueueTrace> {
        params.validate()?;

        let arrival_dist = Exp::new(params.arrival_rate())
            .map_err(|e| ModelError::invalid("arrival_rate", e.to_string()))?;
        let service_dist = Exp::new(params.service_rate())
            .map_err(|e| ModelError::invalid("service_rate", e.to_string()))?;

        // 每次呼叫建立自己的產生器，不共用任何全域亂數狀態
        let mut rng = Pcg64::seed_from_u64(params.seed());
        let n = params.customer_count();

        let inter_arrivals: Vec<f64> = (0..n).map(|_| arrival_dist.sample(&mut rng)).collect();
        let service_times: Vec<f64> = (0..n).map(|_| service_dist.sample(&mut rng)).collect();

        let arrival_times: Vec<f64> = inter_arrivals
            .iter()
            .scan(0.0, |elapsed, &gap| {
                *elapsed += gap;
                Some(*elapsed)
            })
            .collect();

        let queue_lengths = Self::queue_lengths(&arrival_times, params.service_rate());
        tracing::debug!("最後到達時間: {:?}", arrival_times.last());

        Ok(QueueTrace::new(arrival_times, service_times, queue_lengths))
    }

    /// 流體近似的佇列長度遞推
    pub fn queue_lengths(arrival_times: &[f64], service_rate: f64) -> Vec<f64> {
        let mut lengths = Vec::with_capacity(arrival_times.len());

        for (i, &t) in arrival_times.iter().enumerate() {
            if i == 0 {
                lengths.push(0.0);
                continue;
            }
            let drained = (t - arrival_times[i - 1]) * service_rate;
            let previous = lengths[i - 1];
            lengths.push(f64::max(previous + 1.0 - drained, 0.0));
        }

        lengths
    }

    /// 封閉解穩態指標
    ///
    /// ρ >= 1 時回傳 `SteadyState::Unstable`，計算本身仍然成功。
    pub fn steady_state_metrics(params: &QueueParameters) -> indmath_core::Result<QueueMetrics> {
        params.validate()?;

        let lambda = params.arrival_rate();
        let mu = params.service_rate();
        let rho = params.utilization();

        if rho >= 1.0 {
            return Ok(QueueMetrics::new(rho, SteadyState::Unstable));
        }

        let lq = rho * rho / (1.0 - rho);
        let wq = lq / lambda;
        let l = rho / (1.0 - rho);
        let w = 1.0 / (mu - lambda);

        // ρ 極接近 1 時可能溢出
        if !(lq.is_finite() && wq.is_finite() && l.is_finite() && w.is_finite()) {
            tracing::debug!("ρ = {} 時穩態指標溢出，視為不穩定", rho);
            return Ok(QueueMetrics::new(rho, SteadyState::Unstable));
        }

        Ok(QueueMetrics::new(rho, SteadyState::Stable { lq, wq, l, w }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[test]
    fn test_reference_metrics() {
        let params = QueueParameters::new(0.5, 0.6).unwrap();
        let metrics = QueueSimulator::steady_state_metrics(&params).unwrap();

        assert!((metrics.utilization() - 0.8333).abs() < 1e-3);
        assert!((metrics.lq().unwrap() - 4.1667).abs() < 1e-3);
        assert!((metrics.wq().unwrap() - 8.3333).abs() < 1e-3);
        assert!((metrics.l().unwrap() - 5.0).abs() < 1e-9);
        assert!((metrics.w().unwrap() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_littles_law_holds() {
        let params = QueueParameters::new(2.0, 5.0).unwrap();
        let metrics = QueueSimulator::steady_state_metrics(&params).unwrap();

        assert!((metrics.lq().unwrap() - 2.0 * metrics.wq().unwrap()).abs() < 1e-12);
        assert!((metrics.l().unwrap() - 2.0 * metrics.w().unwrap()).abs() < 1e-12);
    }

    #[rstest]
    #[case(0.6, 0.6)]
    #[case(0.9, 0.6)]
    #[case(100.0, 0.01)]
    fn test_unstable_boundary(#[case] lambda: f64, #[case] mu: f64) {
        let params = QueueParameters::new(lambda, mu).unwrap();
        let (trace, metrics) = QueueSimulator::simulate(&params).unwrap();

        assert!(!metrics.is_stable());
        assert_eq!(metrics.lq(), None);
        assert!(metrics.stability_warning().is_some());
        assert!(trace.queue_lengths().iter().all(|l| l.is_finite()));
    }

    #[test]
    fn test_trace_shape() {
        let params = QueueParameters::new(0.5, 0.6).unwrap();
        let trace = QueueSimulator::generate_trace(&params).unwrap();

        assert_eq!(trace.len(), 100);
        assert_eq!(trace.service_times().len(), 100);
        assert_eq!(trace.queue_lengths()[0], 0.0);
        assert!(trace.arrival_times()[0] > 0.0);
        assert!(trace.arrival_times().windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_trace_follows_sampling_order() {
        let params = QueueParameters::new(0.5, 0.6).unwrap();
        let trace = QueueSimulator::generate_trace(&params).unwrap();

        // 先抽完 100 個到達間隔，再抽服務時間
        let mut rng = Pcg64::seed_from_u64(42);
        let arrival_dist = Exp::new(0.5).unwrap();
        let gaps: Vec<f64> = (0..100).map(|_| arrival_dist.sample(&mut rng)).collect();
        let first_service = Exp::new(0.6).unwrap().sample(&mut rng);

        assert_eq!(trace.arrival_times()[0], gaps[0]);
        assert_eq!(trace.arrival_times()[1], gaps[0] + gaps[1]);
        assert_eq!(trace.service_times()[0], first_service);
    }

    #[test]
    fn test_same_seed_reproduces_trace() {
        let params = QueueParameters::new(0.5, 0.6).unwrap();
        let first = QueueSimulator::generate_trace(&params).unwrap();
        let second = QueueSimulator::generate_trace(&params).unwrap();

        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_different_seed_changes_trace() {
        let params = QueueParameters::new(0.5, 0.6).unwrap();
        let first = QueueSimulator::generate_trace(&params).unwrap();
        let second = QueueSimulator::generate_trace(&params.with_seed(7)).unwrap();

        assert_ne!(first.arrival_times(), second.arrival_times());
    }

    #[test]
    fn test_queue_length_recurrence() {
        // 間隔 1.0、μ = 0.5：每次 +1 再排掉 0.5
        let lengths = QueueSimulator::queue_lengths(&[1.0, 2.0, 3.0, 4.0], 0.5);
        assert_eq!(lengths, vec![0.0, 0.5, 1.0, 1.5]);

        // 長間隔時截斷為 0
        let lengths = QueueSimulator::queue_lengths(&[1.0, 10.0, 10.5], 1.0);
        assert_eq!(lengths, vec![0.0, 0.0, 0.5]);
    }

    #[test]
    fn test_single_customer() {
        let params = QueueParameters::new(1.0, 2.0)
            .unwrap()
            .with_customer_count(1)
            .unwrap();
        let trace = QueueSimulator::generate_trace(&params).unwrap();

        assert_eq!(trace.len(), 1);
        assert_eq!(trace.queue_lengths(), &[0.0]);
    }

    proptest! {
        #[test]
        fn prop_queue_length_non_negative(
            lambda in 0.01f64..10.0,
            mu in 0.01f64..10.0,
            seed in any::<u64>(),
        ) {
            let params = QueueParameters::new(lambda, mu).unwrap().with_seed(seed);
            let trace = QueueSimulator::generate_trace(&params).unwrap();

            prop_assert!(trace.queue_lengths().iter().all(|&l| l >= 0.0));
            prop_assert!(trace.arrival_times().windows(2).all(|w| w[0] <= w[1]));
        }
    }
}
