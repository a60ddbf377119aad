//! 실제로 계산에 쓰이는 원가율(F/L/R)을 결정한다.
//!
//! 매 계산마다 현재 플래그와 테이블/추정치만으로 새로 결정하며, 이전 결과를 이어받지 않는다.
//!
//! - `Manual`: 사용자가 입력한 원가율을 각각 [0, 0.95]로 잘라 그대로 쓴다.
//! - `Auto`: 식재료비율/인건비율은 프리셋. 임대료율은 자동 설정이 켜져 있고 추정치가 0보다
//!   크면 추정치, 아니면 프리셋 값.

use serde::Serialize;

use crate::model::{clamp_rate, Industry, Scenario};
use crate::tables::preset;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RateMode {
    Manual,
    Auto,
}

/// 임대료율의 출처.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RentSource {
    UserInput,
    Preset,
    RentEstimate,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EffectiveRates {
    pub food: f64,
    pub labor: f64,
    pub rent: f64,
    pub mode: RateMode,
    pub rent_source: RentSource,
}

impl EffectiveRates {
    /// 식재료비율 + 인건비율
    pub fn fl(&self) -> f64 {
        self.food + self.labor
    }

    /// 식재료비율 + 인건비율 + 임대료율
    pub fn flr(&self) -> f64 {
        self.food + self.labor + self.rent
    }
}

/// 원가율 결정에 필요한 입력.
#[derive(Debug, Clone)]
pub struct RateInput {
    pub industry: Industry,
    pub scenario: Scenario,
    pub manual_rates: bool,
    pub auto_set_rent_rate: bool,
    pub food_rate: f64,
    pub labor_rate: f64,
    pub rent_rate: f64,
    /// 임대료 추정기가 낸 임대료율
    pub suggested_rent_ratio: f64,
}

pub fn resolve(input: &RateInput) -> EffectiveRates {
    let rates = if input.manual_rates {
        EffectiveRates {
            food: clamp_rate(input.food_rate),
            labor: clamp_rate(input.labor_rate),
            rent: clamp_rate(input.rent_rate),
            mode: RateMode::Manual,
            rent_source: RentSource::UserInput,
        }
    } else {
        let p = preset(input.industry, input.scenario);
        let (rent, rent_source) = if input.auto_set_rent_rate && input.suggested_rent_ratio > 0.0
        {
            (clamp_rate(input.suggested_rent_ratio), RentSource::RentEstimate)
        } else {
            (clamp_rate(p.rent), RentSource::Preset)
        };
        EffectiveRates {
            food: clamp_rate(p.food),
            labor: clamp_rate(p.labor),
            rent,
            mode: RateMode::Auto,
            rent_source,
        }
    };
    log::debug!(
        "effective rates {:?}: food={:.3} labor={:.3} rent={:.3} ({:?})",
        rates.mode,
        rates.food,
        rates.labor,
        rates.rent,
        rates.rent_source
    );
    rates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> RateInput {
        RateInput {
            industry: Industry::Izakaya,
            scenario: Scenario::Standard,
            manual_rates: false,
            auto_set_rent_rate: true,
            food_rate: 0.31,
            labor_rate: 0.29,
            rent_rate: 0.07,
            suggested_rent_ratio: 0.18,
        }
    }

    #[test]
    fn auto_uses_suggested_rent() {
        let r = resolve(&base());
        assert_eq!(r.mode, RateMode::Auto);
        assert_eq!(r.rent_source, RentSource::RentEstimate);
        assert_eq!((r.food, r.labor, r.rent), (0.30, 0.28, 0.18));
    }

    #[test]
    fn auto_falls_back_to_preset_rent_when_no_suggestion() {
        let r = resolve(&RateInput {
            suggested_rent_ratio: 0.0,
            ..base()
        });
        assert_eq!(r.rent_source, RentSource::Preset);
        assert_eq!(r.rent, 0.10);

        let r = resolve(&RateInput {
            auto_set_rent_rate: false,
            ..base()
        });
        assert_eq!(r.rent_source, RentSource::Preset);
        assert_eq!(r.rent, 0.10);
    }

    #[test]
    fn manual_ignores_auto_rent() {
        for auto in [true, false] {
            let r = resolve(&RateInput {
                manual_rates: true,
                auto_set_rent_rate: auto,
                ..base()
            });
            assert_eq!(r.mode, RateMode::Manual);
            assert_eq!(r.rent, 0.07);
            assert_eq!(r.food, 0.31);
        }
    }

    #[test]
    fn manual_rates_are_clamped() {
        let r = resolve(&RateInput {
            manual_rates: true,
            food_rate: 1.5,
            labor_rate: 1.5,
            rent_rate: -1.0,
            ..base()
        });
        assert_eq!(r.food, 0.95);
        assert_eq!(r.labor, 0.95);
        assert_eq!(r.rent, 0.0);
        assert!(r.fl() <= 1.9);
    }
}
