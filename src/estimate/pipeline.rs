use serde::{Deserialize, Serialize};

use crate::estimate::baseline::{self, BaselineEstimate, BaselineInput};
use crate::estimate::projection::{self, Advisory, Guidelines, Projection};
use crate::estimate::rates::{self, EffectiveRates, RateInput};
use crate::estimate::rent::{self, RentEstimate, RentInput, DEFAULT_RENT_RATIO_CAP};
use crate::estimate::area_resolver;
use crate::model::{AreaKey, Scenario, VisitInput};
use crate::tables::{self, StationFactors, TradeAreaFactors};

/// 등급별 기준 임대료 덮어쓰기.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaseRentOverride {
    pub area: AreaKey,
    /// 평당 월 임대료 [엔/평]
    pub rent_per_tsubo: f64,
}

/// 실데이터가 쌓이기 전까지 쓰는 조정 상수 모음. config.toml의 `[tuning]`으로 바꿀 수 있다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// 임대료율 추정치 상한
    pub rent_ratio_cap: f64,
    pub station_factors: StationFactors,
    pub trade_area_factors: TradeAreaFactors,
    pub guidelines: Guidelines,
    pub base_rent_overrides: Vec<BaseRentOverride>,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            rent_ratio_cap: DEFAULT_RENT_RATIO_CAP,
            station_factors: StationFactors::default(),
            trade_area_factors: TradeAreaFactors::default(),
            guidelines: Guidelines::default(),
            base_rent_overrides: Vec::new(),
        }
    }
}

impl Tuning {
    /// 덮어쓰기가 있으면 그 값을, 없으면 테이블 값을 돌려준다.
    pub fn base_rent_per_tsubo(&self, area: AreaKey) -> f64 {
        self.base_rent_overrides
            .iter()
            .rev()
            .find(|o| o.area == area)
            .map(|o| o.rent_per_tsubo)
            .unwrap_or_else(|| tables::tier(area).base_rent_per_tsubo)
    }
}

/// 지역 등급이 어떻게 결정되었는지.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AreaSource {
    /// 주소에서 자동 판정
    Detected,
    /// 사용자가 선택한 등급
    Selected,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResolvedArea {
    pub key: AreaKey,
    pub source: AreaSource,
}

/// 한 번의 견적 계산 결과 전체.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Estimate {
    pub area: ResolvedArea,
    pub rent_estimate: RentEstimate,
    /// 플래그와 무관하게 항상 계산된 현재 매출 추정
    pub baseline: BaselineEstimate,
    pub projection: Projection,
    pub effective_rates: EffectiveRates,
    pub advisories: Vec<Advisory>,
}

/// 자동 판정이 켜져 있고 매칭되면 판정 결과, 아니면 선택된 등급.
pub fn resolve_area(input: &VisitInput) -> ResolvedArea {
    if input.auto_detect_area {
        if let Some(key) = area_resolver::resolve(&input.address, tables::tiers()) {
            return ResolvedArea {
                key,
                source: AreaSource::Detected,
            };
        }
    }
    ResolvedArea {
        key: tables::tier(input.area).key,
        source: AreaSource::Selected,
    }
}

/// 입력 레코드 하나로 모든 파생 값을 계산한다. 실패하지 않는다.
pub fn compute(raw: &VisitInput, tuning: &Tuning) -> Estimate {
    let input = raw.sanitized();

    let area = resolve_area(&input);
    let tier = tables::tier(area.key);

    let baseline = baseline::estimate(BaselineInput {
        seats: input.seats,
        occupancy: input.occupancy,
        turnover: input.turnover,
        unit_type: input.unit_type,
        unit_price: input.unit_price,
        people_per_group: input.people_per_group,
        days_per_month: input.days_per_month,
    });
    let baseline_in_use = input.use_baseline.then_some(&baseline);

    let rent_estimate = rent::estimate(RentInput {
        area_key: tier.key,
        area_label: tier.label.to_string(),
        base_rent_per_tsubo: tuning.base_rent_per_tsubo(tier.key),
        station_factor: tuning.station_factors.factor(input.station_distance),
        trade_area_factor: tuning.trade_area_factors.factor(input.trade_area),
        seats: input.seats,
        seats_per_tsubo: input.seats_per_tsubo,
        baseline_monthly_revenue: baseline_in_use.map_or(0.0, |b| b.monthly_revenue),
        ratio_cap: tuning.rent_ratio_cap,
    });

    let effective_rates = rates::resolve(&RateInput {
        industry: input.industry,
        scenario: input.scenario,
        manual_rates: input.manual_rates,
        auto_set_rent_rate: input.auto_set_rent_rate,
        food_rate: input.food_rate,
        labor_rate: input.labor_rate,
        rent_rate: input.rent_rate,
        suggested_rent_ratio: rent_estimate.suggested_rent_ratio,
    });

    let projection = projection::project(&input, &effective_rates, baseline_in_use);
    let advisories = projection::advisories(
        &projection,
        &rent_estimate,
        input.ad_spend,
        &tuning.guidelines,
    );

    log::debug!(
        "estimate: area={:?} ({:?}) rent={:.0} revenue+={:.0} flr={:.3}",
        area.key,
        area.source,
        rent_estimate.estimated_monthly_rent,
        projection.incremental_revenue_monthly,
        projection.flr
    );

    Estimate {
        area,
        rent_estimate,
        baseline,
        projection,
        effective_rates,
        advisories,
    }
}

/// 같은 입력을 세 시나리오(Low/Standard/High)로 각각 계산한다.
pub fn compare_scenarios(input: &VisitInput, tuning: &Tuning) -> Vec<(Scenario, Estimate)> {
    Scenario::ALL
        .iter()
        .map(|&scenario| {
            let variant = VisitInput {
                scenario,
                ..input.clone()
            };
            (scenario, compute(&variant, tuning))
        })
        .collect()
}
