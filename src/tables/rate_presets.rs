/// 업종 × 시나리오별 기준 원가율(F/L/R) 테이블.
/// 값은 상담용 참고치이며 실제 점포 감사 후 보정해야 한다.
use serde::Serialize;

use crate::model::{Industry, Scenario};

/// 식재료비율/인건비율/임대료율 묶음. 각 값은 매출 대비 비율(0~1).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RateTriple {
    pub food: f64,
    pub labor: f64,
    pub rent: f64,
}

impl RateTriple {
    pub const fn new(food: f64, labor: f64, rent: f64) -> Self {
        Self { food, labor, rent }
    }
}

#[derive(Debug)]
pub struct PresetRow {
    pub industry: Industry,
    /// Low, Standard, High 순서
    pub rates: [RateTriple; 3],
}

pub fn presets() -> &'static [PresetRow] {
    PRESETS
}

/// (업종, 시나리오)에 해당하는 기준 원가율을 돌려준다.
pub fn preset(industry: Industry, scenario: Scenario) -> RateTriple {
    let row = PRESETS
        .iter()
        .find(|r| r.industry == industry)
        .unwrap_or(&PRESETS[0]);
    row.rates[scenario_index(scenario)]
}

fn scenario_index(scenario: Scenario) -> usize {
    match scenario {
        Scenario::Low => 0,
        Scenario::Standard => 1,
        Scenario::High => 2,
    }
}

const fn rt(food: f64, labor: f64, rent: f64) -> RateTriple {
    RateTriple::new(food, labor, rent)
}

const PRESETS: &[PresetRow] = &[
    PresetRow {
        industry: Industry::Izakaya,
        rates: [rt(0.28, 0.26, 0.08), rt(0.30, 0.28, 0.10), rt(0.33, 0.30, 0.12)],
    },
    PresetRow {
        industry: Industry::Yakiniku,
        rates: [rt(0.35, 0.22, 0.08), rt(0.38, 0.24, 0.10), rt(0.40, 0.26, 0.12)],
    },
    PresetRow {
        industry: Industry::Sushi,
        rates: [rt(0.38, 0.25, 0.08), rt(0.40, 0.27, 0.10), rt(0.43, 0.30, 0.12)],
    },
    PresetRow {
        industry: Industry::Ramen,
        rates: [rt(0.28, 0.25, 0.08), rt(0.30, 0.28, 0.10), rt(0.33, 0.30, 0.12)],
    },
    PresetRow {
        industry: Industry::Cafe,
        rates: [rt(0.22, 0.30, 0.10), rt(0.25, 0.32, 0.12), rt(0.28, 0.35, 0.14)],
    },
    PresetRow {
        industry: Industry::Bistro,
        rates: [rt(0.30, 0.28, 0.08), rt(0.33, 0.30, 0.10), rt(0.35, 0.32, 0.12)],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_industry_has_a_row() {
        for industry in Industry::ALL {
            assert!(PRESETS.iter().any(|r| r.industry == industry), "{industry:?}");
        }
        assert_eq!(PRESETS.len(), Industry::ALL.len());
    }

    #[test]
    fn scenarios_are_monotonic() {
        for row in PRESETS {
            let [low, std, high] = row.rates;
            assert!(low.food <= std.food && std.food <= high.food);
            assert!(low.labor <= std.labor && std.labor <= high.labor);
            assert!(low.rent <= std.rent && std.rent <= high.rent);
        }
    }

    #[test]
    fn lookup_by_key() {
        let r = preset(Industry::Cafe, Scenario::High);
        assert_eq!(r, RateTriple::new(0.28, 0.35, 0.14));
    }
}
