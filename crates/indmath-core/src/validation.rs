//! 輸入驗證
//!
//! 所有模型在任何除法或開根號之前都先經過這裡的檢查，
//! 不合法的值一律回報 `InvalidParameter`，不做截斷。

use crate::{ModelError, Result};

/// 檢查數值為有限值（非 NaN、非無窮大）
pub fn ensure_finite(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ModelError::invalid(name, format!("必須為有限數值，實際為 {value}")))
    }
}

/// 檢查數值嚴格大於 0
pub fn ensure_positive(name: &'static str, value: f64) -> Result<f64> {
    ensure_finite(name, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(ModelError::invalid(name, format!("必須大於 0，實際為 {value}")))
    }
}

/// 檢查數值大於等於 0
pub fn ensure_non_negative(name: &'static str, value: f64) -> Result<f64> {
    ensure_finite(name, value)?;
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(ModelError::invalid(name, format!("不可為負數，實際為 {value}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1.0)]
    #[case(0.001)]
    #[case(1e12)]
    fn test_positive_values_pass(#[case] value: f64) {
        assert_eq!(ensure_positive("rate", value).unwrap(), value);
    }

    #[rstest]
    #[case(0.0)]
    #[case(-1.0)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn test_non_positive_values_rejected(#[case] value: f64) {
        let err = ensure_positive("rate", value).unwrap_err();
        assert_eq!(err.parameter_name(), Some("rate"));
    }

    #[test]
    fn test_non_negative_accepts_zero() {
        assert_eq!(ensure_non_negative("order_cost", 0.0).unwrap(), 0.0);
        assert!(ensure_non_negative("order_cost", -0.5).is_err());
        assert!(ensure_non_negative("order_cost", f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_finite_allows_negative() {
        assert_eq!(ensure_finite("total_time", -10.0).unwrap(), -10.0);
        assert!(ensure_finite("total_time", f64::NAN).is_err());
    }
}
