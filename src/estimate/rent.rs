use serde::Serialize;

use crate::model::{AreaKey, SEATS_PER_TSUBO_RANGE, SEATS_RANGE};
use crate::numeric::{clamp_finite, non_negative, safe_div};

/// 임대료율 추정치의 기본 상한.
pub const DEFAULT_RENT_RATIO_CAP: f64 = 0.35;

/// 임대료 추정 입력.
#[derive(Debug, Clone)]
pub struct RentInput {
    pub area_key: AreaKey,
    pub area_label: String,
    /// 등급 기준 평당 임대료 [엔/평]
    pub base_rent_per_tsubo: f64,
    /// 역 거리 보정 계수
    pub station_factor: f64,
    /// 상권 보정 계수
    pub trade_area_factor: f64,
    pub seats: u32,
    /// 평당 좌석 수
    pub seats_per_tsubo: f64,
    /// 현재 월 매출 추정치 [엔]. 0이면 임대료율을 추정하지 않는다.
    pub baseline_monthly_revenue: f64,
    /// 임대료율 상한(0~1)
    pub ratio_cap: f64,
}

/// 임대료 추정 결과.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RentEstimate {
    pub area_key: AreaKey,
    pub area_label: String,
    /// 보정 후 평당 임대료 [엔/평]
    pub rent_per_tsubo: f64,
    /// 추정 면적 [평]
    pub estimated_tsubo: f64,
    /// 추정 월 임대료 [엔]
    pub estimated_monthly_rent: f64,
    /// 매출 대비 추정 임대료율 [0, cap]
    pub suggested_rent_ratio: f64,
    /// 상한 적용 전 임대료율이 상한을 넘었는지 여부
    pub ratio_capped: bool,
}

/// 지역 등급과 좌석 수로 월 임대료와 임대료율을 추정한다.
pub fn estimate(input: RentInput) -> RentEstimate {
    let seats = input.seats.clamp(SEATS_RANGE.0, SEATS_RANGE.1) as f64;
    let seats_per_tsubo = clamp_finite(
        input.seats_per_tsubo,
        SEATS_PER_TSUBO_RANGE.0,
        SEATS_PER_TSUBO_RANGE.1,
    );
    let estimated_tsubo = safe_div(seats, seats_per_tsubo);
    let rent_per_tsubo = non_negative(
        input.base_rent_per_tsubo
            * non_negative(input.station_factor)
            * non_negative(input.trade_area_factor),
    );
    let estimated_monthly_rent = estimated_tsubo * rent_per_tsubo;

    let cap = clamp_finite(input.ratio_cap, 0.0, 1.0);
    let baseline = non_negative(input.baseline_monthly_revenue);
    let (suggested_rent_ratio, ratio_capped) = if baseline > 0.0 {
        let raw = safe_div(estimated_monthly_rent, baseline);
        (raw.clamp(0.0, cap), raw > cap)
    } else {
        (0.0, false)
    };

    RentEstimate {
        area_key: input.area_key,
        area_label: input.area_label,
        rent_per_tsubo,
        estimated_tsubo,
        estimated_monthly_rent,
        suggested_rent_ratio,
        ratio_capped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> RentInput {
        RentInput {
            area_key: AreaKey::TokyoWards,
            area_label: "test".into(),
            base_rent_per_tsubo: 20_000.0,
            station_factor: 1.0,
            trade_area_factor: 1.0,
            seats: 30,
            seats_per_tsubo: 1.5,
            baseline_monthly_revenue: 4_000_000.0,
            ratio_cap: DEFAULT_RENT_RATIO_CAP,
        }
    }

    #[test]
    fn rent_from_area_and_factors() {
        let r = estimate(RentInput {
            station_factor: 1.1,
            trade_area_factor: 0.9,
            ..base()
        });
        assert!((r.estimated_tsubo - 20.0).abs() < 1e-9);
        assert!((r.rent_per_tsubo - 19_800.0).abs() < 1e-6);
        assert!((r.estimated_monthly_rent - 396_000.0).abs() < 1e-6);
        assert!((r.suggested_rent_ratio - 0.099).abs() < 1e-9);
        assert!(!r.ratio_capped);
    }

    #[test]
    fn zero_seats_means_zero_rent() {
        let r = estimate(RentInput { seats: 0, ..base() });
        assert_eq!(r.estimated_tsubo, 0.0);
        assert_eq!(r.estimated_monthly_rent, 0.0);
        assert_eq!(r.suggested_rent_ratio, 0.0);
    }
}
