use serde::Serialize;

use crate::model::{
    UnitType, DAYS_PER_MONTH_RANGE, PEOPLE_PER_GROUP_RANGE, SEATS_RANGE,
};
use crate::numeric::{clamp_finite, non_negative, safe_div};

/// 현재 매출 추정 입력.
#[derive(Debug, Clone)]
pub struct BaselineInput {
    /// 좌석 수
    pub seats: u32,
    /// 가동률(0~1)
    pub occupancy: f64,
    /// 일 회전수
    pub turnover: f64,
    pub unit_type: UnitType,
    /// 단가 [엔]
    pub unit_price: f64,
    /// 1팀 인원
    pub people_per_group: u32,
    /// 월 영업일
    pub days_per_month: u32,
}

/// 현재 매출 추정 결과.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct BaselineEstimate {
    /// 1인당 객단가 [엔]
    pub price_per_person: f64,
    /// 일 객수
    pub covers_per_day: f64,
    /// 일 매출 [엔]
    pub daily_revenue: f64,
    /// 월 매출 [엔]
    pub monthly_revenue: f64,
}

/// 좌석·가동률·회전수·객단가로 현재 월 매출을 추정한다.
pub fn estimate(input: BaselineInput) -> BaselineEstimate {
    let seats = input.seats.clamp(SEATS_RANGE.0, SEATS_RANGE.1) as f64;
    let people = input
        .people_per_group
        .clamp(PEOPLE_PER_GROUP_RANGE.0, PEOPLE_PER_GROUP_RANGE.1) as f64;
    let days = input
        .days_per_month
        .clamp(DAYS_PER_MONTH_RANGE.0, DAYS_PER_MONTH_RANGE.1) as f64;
    let unit_price = non_negative(input.unit_price);

    let price_per_person = match input.unit_type {
        UnitType::PerPerson => unit_price,
        UnitType::PerGroup => safe_div(unit_price, people),
    };
    let covers_per_day =
        seats * clamp_finite(input.occupancy, 0.0, 1.0) * non_negative(input.turnover);
    let daily_revenue = covers_per_day * price_per_person;
    BaselineEstimate {
        price_per_person,
        covers_per_day,
        daily_revenue,
        monthly_revenue: daily_revenue * days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> BaselineInput {
        BaselineInput {
            seats: 30,
            occupancy: 0.6,
            turnover: 1.5,
            unit_type: UnitType::PerPerson,
            unit_price: 4000.0,
            people_per_group: 2,
            days_per_month: 26,
        }
    }

    #[test]
    fn per_person_baseline() {
        let b = estimate(base());
        assert!((b.covers_per_day - 27.0).abs() < 1e-9);
        assert!((b.daily_revenue - 108_000.0).abs() < 1e-6);
        assert!((b.monthly_revenue - 2_808_000.0).abs() < 1e-6);
    }

    #[test]
    fn per_group_price_is_split_by_people() {
        let b = estimate(BaselineInput {
            unit_type: UnitType::PerGroup,
            unit_price: 8000.0,
            ..base()
        });
        assert!((b.price_per_person - 4000.0).abs() < 1e-9);
        assert!((b.monthly_revenue - 2_808_000.0).abs() < 1e-6);
    }

    #[test]
    fn degenerate_inputs_collapse_to_zero() {
        let b = estimate(BaselineInput {
            occupancy: f64::NAN,
            turnover: -3.0,
            ..base()
        });
        assert_eq!(b.covers_per_day, 0.0);
        assert_eq!(b.monthly_revenue, 0.0);
    }
}
