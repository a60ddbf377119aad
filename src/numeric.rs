//! 모든 계산에서 공통으로 쓰는 안전 나눗셈/클램프 헬퍼.

/// 분모가 0이거나 피연산자/결과가 유한하지 않으면 0을 반환하는 나눗셈.
pub fn safe_div(numerator: f64, denominator: f64) -> f64 {
    if !numerator.is_finite() || !denominator.is_finite() || denominator == 0.0 {
        return 0.0;
    }
    let q = numerator / denominator;
    if q.is_finite() {
        q
    } else {
        0.0
    }
}

/// 유한하지 않은 값은 0으로 본다.
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// NaN/무한대를 0으로 바꾼 뒤 [lo, hi] 범위로 자른다.
pub fn clamp_finite(value: f64, lo: f64, hi: f64) -> f64 {
    finite_or_zero(value).clamp(lo, hi)
}

/// 음수/비유한 값을 0으로 만든다. 가격, 광고비 등 하한만 있는 입력에 사용.
pub fn non_negative(value: f64) -> f64 {
    finite_or_zero(value).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn divide_by_zero_is_zero() {
        assert_eq!(safe_div(10.0, 0.0), 0.0);
        assert_eq!(safe_div(-3.5, 0.0), 0.0);
    }

    #[test]
    fn non_finite_operands_are_zero() {
        assert_eq!(safe_div(f64::NAN, 2.0), 0.0);
        assert_eq!(safe_div(1.0, f64::INFINITY), 0.0);
        assert_eq!(safe_div(f64::MAX, f64::MIN_POSITIVE), 0.0);
    }

    #[test]
    fn clamp_handles_nan_and_bounds() {
        assert_eq!(clamp_finite(1.5, 0.0, 0.95), 0.95);
        assert_eq!(clamp_finite(f64::NAN, 0.0, 0.95), 0.0);
        assert_eq!(clamp_finite(f64::NAN, 0.8, 4.0), 0.8);
        assert_eq!(non_negative(-100.0), 0.0);
    }
}
