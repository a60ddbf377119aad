use serde::{Deserialize, Serialize};

use crate::estimate::baseline::BaselineEstimate;
use crate::estimate::rates::EffectiveRates;
use crate::estimate::rent::RentEstimate;
use crate::model::{UnitType, VisitInput};
use crate::numeric::safe_div;

/// 현재 매출 기준 손익 근사치.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BaselinePnl {
    /// 현재 월 매출 [엔]
    pub monthly_revenue: f64,
    /// 식재료비 [엔/월]
    pub food_cost: f64,
    /// 인건비 [엔/월]
    pub labor_cost: f64,
    /// 임대료 [엔/월]
    pub rent_cost: f64,
    /// 매출 - F - L - R - 광고비 [엔/월]
    pub operating_profit_approx: f64,
}

/// 추가 집객에 따른 수익 예측 결과.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Projection {
    /// 추가 매출 [엔/일]
    pub incremental_revenue_daily: f64,
    /// 추가 매출 [엔/월]
    pub incremental_revenue_monthly: f64,
    /// 추가 매출총이익(매출 - 식재료비) [엔/월]
    pub incremental_gross_profit: f64,
    /// 인건비 차감 후 [엔/월]
    pub after_labor: f64,
    /// 임대료까지 차감 후 [엔/월]
    pub after_rent: f64,
    /// 광고비 대비 매출
    pub roas: f64,
    /// 광고비 대비 매출총이익
    pub gross_profit_roas: f64,
    /// 1팀당 매출총이익 [엔]
    pub gross_profit_per_group: f64,
    /// 광고비를 한 달 안에 회수하는 데 필요한 추가 팀 수 / 일
    pub breakeven_groups_per_day: f64,
    /// 식재료비율 + 인건비율
    pub fl: f64,
    /// 식재료비율 + 인건비율 + 임대료율. 1을 넘을 수 있다.
    pub flr: f64,
    /// 현재 매출 추정을 끈 경우 `None`
    pub baseline: Option<BaselinePnl>,
}

/// 입력, 유효 원가율, 현재 매출 추정으로 추가 수익을 예측한다.
/// 임대료 추정치는 `rates.rent`를 통해서만 반영된다.
///
/// `input`은 [`VisitInput::sanitized`]를 거친 값이어야 한다.
pub fn project(
    input: &VisitInput,
    rates: &EffectiveRates,
    baseline: Option<&BaselineEstimate>,
) -> Projection {
    let people = input.people_per_group as f64;
    let days = input.days_per_month as f64;
    let EffectiveRates {
        food, labor, rent, ..
    } = *rates;

    let group_multiplier = match input.unit_type {
        UnitType::PerPerson => people,
        UnitType::PerGroup => 1.0,
    };
    let incremental_revenue_daily = input.unit_price * input.add_groups_per_day * group_multiplier;
    let incremental_revenue_monthly = incremental_revenue_daily * days;
    let incremental_gross_profit = incremental_revenue_monthly * (1.0 - food);
    let after_labor = incremental_revenue_monthly * (1.0 - food - labor);
    let after_rent = incremental_revenue_monthly * (1.0 - food - labor - rent);

    let gross_profit_per_group = input.unit_price * group_multiplier * (1.0 - food);
    let breakeven_groups_per_day = safe_div(input.ad_spend, gross_profit_per_group * days);

    let baseline = baseline.map(|b| {
        let revenue = b.monthly_revenue;
        let food_cost = revenue * food;
        let labor_cost = revenue * labor;
        let rent_cost = revenue * rent;
        BaselinePnl {
            monthly_revenue: revenue,
            food_cost,
            labor_cost,
            rent_cost,
            operating_profit_approx: revenue - food_cost - labor_cost - rent_cost - input.ad_spend,
        }
    });

    Projection {
        incremental_revenue_daily,
        incremental_revenue_monthly,
        incremental_gross_profit,
        after_labor,
        after_rent,
        roas: safe_div(incremental_revenue_monthly, input.ad_spend),
        gross_profit_roas: safe_div(incremental_gross_profit, input.ad_spend),
        gross_profit_per_group,
        breakeven_groups_per_day,
        fl: rates.fl(),
        flr: rates.flr(),
        baseline,
    }
}

/// 원가 구조 판단 기준.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Guidelines {
    /// FL 비율 기준
    pub fl: f64,
    /// FLR 비율 기준
    pub flr: f64,
}

impl Default for Guidelines {
    fn default() -> Self {
        Self { fl: 0.60, flr: 0.70 }
    }
}

/// 상담 시 짚어야 할 주의 사항. 계산 오류가 아니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Advisory {
    /// FL 비율이 기준을 넘음
    FlAboveGuideline,
    /// FLR 비율이 기준을 넘음
    FlrAboveGuideline,
    /// 추가 매출총이익으로 광고비를 회수하지 못함
    AdSpendNotRecovered,
    /// 현재 매출 기준 영업이익이 적자
    BaselineLoss,
    /// 임대료율 추정치가 상한에 걸림
    RentRatioCapped,
}

pub fn advisories(
    projection: &Projection,
    rent: &RentEstimate,
    ad_spend: f64,
    guidelines: &Guidelines,
) -> Vec<Advisory> {
    let mut out = Vec::new();
    if projection.fl > guidelines.fl {
        out.push(Advisory::FlAboveGuideline);
    }
    if projection.flr > guidelines.flr {
        out.push(Advisory::FlrAboveGuideline);
    }
    if ad_spend > 0.0 && projection.incremental_gross_profit < ad_spend {
        out.push(Advisory::AdSpendNotRecovered);
    }
    if projection
        .baseline
        .is_some_and(|b| b.operating_profit_approx < 0.0)
    {
        out.push(Advisory::BaselineLoss);
    }
    if rent.ratio_capped {
        out.push(Advisory::RentRatioCapped);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimate::rates::{RateMode, RentSource};
    use crate::model::AreaKey;

    fn rates(food: f64, labor: f64, rent: f64) -> EffectiveRates {
        EffectiveRates {
            food,
            labor,
            rent,
            mode: RateMode::Manual,
            rent_source: RentSource::UserInput,
        }
    }

    fn rent_estimate(ratio_capped: bool) -> RentEstimate {
        RentEstimate {
            area_key: AreaKey::TokyoCore,
            area_label: "test".into(),
            rent_per_tsubo: 0.0,
            estimated_tsubo: 0.0,
            estimated_monthly_rent: 0.0,
            suggested_rent_ratio: 0.0,
            ratio_capped,
        }
    }

    #[test]
    fn per_group_price_ignores_people() {
        let input = VisitInput {
            unit_type: UnitType::PerGroup,
            unit_price: 9000.0,
            people_per_group: 3,
            add_groups_per_day: 2.0,
            days_per_month: 20,
            ..VisitInput::default()
        };
        let p = project(&input, &rates(0.3, 0.3, 0.1), None);
        assert!((p.incremental_revenue_daily - 18_000.0).abs() < 1e-9);
        assert!((p.incremental_revenue_monthly - 360_000.0).abs() < 1e-6);
        assert!(p.baseline.is_none());
    }

    #[test]
    fn healthy_structure_has_no_advisories() {
        let input = VisitInput {
            unit_price: 6000.0,
            ad_spend: 100_000.0,
            ..VisitInput::default()
        };
        let p = project(&input, &rates(0.25, 0.25, 0.1), None);
        let notes = advisories(&p, &rent_estimate(false), input.ad_spend, &Guidelines::default());
        assert!(notes.is_empty(), "{notes:?}");
    }

    #[test]
    fn costly_structure_raises_advisories() {
        let input = VisitInput {
            unit_price: 1000.0,
            add_groups_per_day: 1.0,
            ad_spend: 500_000.0,
            ..VisitInput::default()
        };
        let baseline = BaselineEstimate {
            monthly_revenue: 1_000_000.0,
            ..BaselineEstimate::default()
        };
        let p = project(&input, &rates(0.4, 0.35, 0.15), Some(&baseline));
        let notes = advisories(&p, &rent_estimate(true), input.ad_spend, &Guidelines::default());
        assert_eq!(
            notes,
            vec![
                Advisory::FlAboveGuideline,
                Advisory::FlrAboveGuideline,
                Advisory::AdSpendNotRecovered,
                Advisory::BaselineLoss,
                Advisory::RentRatioCapped,
            ]
        );
    }
}
