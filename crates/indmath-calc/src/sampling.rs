//! 均勻網格取樣

/// 曲線取樣器
pub struct GridSampler;

impl GridSampler {
    /// 在 [start, end] 上取 `points` 個等距點（含兩端點）
    ///
    /// 最後一點固定為 `end`，不受累加誤差影響。
    pub fn uniform(start: f64, end: f64, points: usize) -> Vec<f64> {
        match points {
            0 => Vec::new(),
            1 => vec![start],
            _ => {
                let step = (end - start) / (points - 1) as f64;
                let mut grid: Vec<f64> = (0..points).map(|i| start + step * i as f64).collect();
                grid[points - 1] = end;
                grid
            }
        }
    }

    /// 確保網格包含 `value`
    ///
    /// 若已有相對誤差 `tolerance` 內的點，直接替換為 `value`；否則依序插入。
    pub fn ensure_contains(grid: &mut Vec<f64>, value: f64, tolerance: f64) {
        let nearest = grid
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| (*a - value).abs().total_cmp(&(*b - value).abs()))
            .map(|(idx, _)| idx);

        if let Some(idx) = nearest {
            if (grid[idx] - value).abs() <= tolerance * value.abs().max(1.0) {
                grid[idx] = value;
                return;
            }
        }

        let position = grid.partition_point(|&x| x < value);
        grid.insert(position, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_grid() {
        let grid = GridSampler::uniform(0.0, 10.0, 5);

        assert_eq!(grid, vec![0.0, 2.5, 5.0, 7.5, 10.0]);
    }

    #[test]
    fn test_uniform_grid_edge_counts() {
        assert!(GridSampler::uniform(0.0, 1.0, 0).is_empty());
        assert_eq!(GridSampler::uniform(3.0, 9.0, 1), vec![3.0]);
        assert_eq!(GridSampler::uniform(3.0, 9.0, 2), vec![3.0, 9.0]);
    }

    #[test]
    fn test_uniform_grid_keeps_exact_end() {
        let grid = GridSampler::uniform(0.1, 0.7, 7);

        assert_eq!(grid.len(), 7);
        assert_eq!(grid[6], 0.7);
        assert!(grid.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_ensure_contains_snaps_close_point() {
        let mut grid = vec![1.0, 2.0 + 1e-13, 3.0];
        GridSampler::ensure_contains(&mut grid, 2.0, 1e-9);

        assert_eq!(grid, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_ensure_contains_inserts_missing_point() {
        let mut grid = vec![1.0, 2.0, 3.0];
        GridSampler::ensure_contains(&mut grid, 2.5, 1e-9);

        assert_eq!(grid, vec![1.0, 2.0, 2.5, 3.0]);
    }
}
