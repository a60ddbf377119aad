//! 견적 입력 레코드와 열거형 정의.
//!
//! 호출자(CLI 등)가 채워서 넘기는 값이며, 계산 전에 [`VisitInput::sanitized`]로
//! 모든 범위 제한을 적용한다.

use clap::ValueEnum;
use serde::{Deserialize, Deserializer, Serialize};

use crate::numeric::{clamp_finite, finite_or_zero, non_negative};

/// 업종 구분.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum Industry {
    /// 이자카야
    Izakaya,
    /// 야키니쿠
    Yakiniku,
    /// 스시/갓포
    Sushi,
    /// 라멘
    Ramen,
    /// 카페
    Cafe,
    /// 양식 비스트로
    Bistro,
}

impl Industry {
    pub const ALL: [Industry; 6] = [
        Industry::Izakaya,
        Industry::Yakiniku,
        Industry::Sushi,
        Industry::Ramen,
        Industry::Cafe,
        Industry::Bistro,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Industry::Izakaya => "izakaya",
            Industry::Yakiniku => "yakiniku",
            Industry::Sushi => "sushi",
            Industry::Ramen => "ramen",
            Industry::Cafe => "cafe",
            Industry::Bistro => "bistro",
        }
    }
}

/// 보수성 수준. `High`일수록 원가율을 높게(보수적으로) 잡는다.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum Scenario {
    Low,
    Standard,
    High,
}

impl Scenario {
    pub const ALL: [Scenario; 3] = [Scenario::Low, Scenario::Standard, Scenario::High];

    pub fn code(&self) -> &'static str {
        match self {
            Scenario::Low => "low",
            Scenario::Standard => "standard",
            Scenario::High => "high",
        }
    }
}

/// 객단가 기준.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum UnitType {
    /// 1인당 단가
    PerPerson,
    /// 1팀(그룹)당 단가
    PerGroup,
}

/// 지역 가격 등급 키. 선언 순서는 area_pricing 테이블 순서와 같다.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum AreaKey {
    TokyoCore,
    TokyoWards,
    OsakaCore,
    RegionalHub,
    MetroSuburb,
    Regional,
}

impl AreaKey {
    pub fn code(&self) -> &'static str {
        match self {
            AreaKey::TokyoCore => "tokyo_core",
            AreaKey::TokyoWards => "tokyo_wards",
            AreaKey::OsakaCore => "osaka_core",
            AreaKey::RegionalHub => "regional_hub",
            AreaKey::MetroSuburb => "metro_suburb",
            AreaKey::Regional => "regional",
        }
    }
}

/// 역까지의 거리 구간.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum StationDistance {
    /// 역 바로 앞(도보 1분 이내)
    Adjacent,
    /// 도보 3분 이내
    Near,
    /// 도보 5분 이내
    Walkable,
    /// 도보 10분 이내
    Moderate,
    /// 도보 10분 초과
    Far,
}

/// 상권 유형.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum TradeArea {
    /// 번화가
    Downtown,
    /// 오피스가
    Office,
    /// 관광지
    Tourist,
    /// 주택가
    Residential,
    /// 로드사이드(교외 간선도로)
    Roadside,
}

/// 견적 계산 입력 레코드.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisitInput {
    /// 자유 형식 주소. 비어 있을 수 있다.
    pub address: String,
    pub industry: Industry,
    pub scenario: Scenario,
    pub unit_type: UnitType,
    /// 단가 [엔]
    pub unit_price: f64,
    /// 1팀 인원 [1, 20]
    #[serde(deserialize_with = "lenient_count")]
    pub people_per_group: u32,
    /// 목표 추가 팀 수 / 일 [0, 200]
    pub add_groups_per_day: f64,
    /// 좌석 수 [0, 500]
    #[serde(deserialize_with = "lenient_count")]
    pub seats: u32,
    /// 월 광고비 [엔]
    pub ad_spend: f64,
    /// 월 영업일 [1, 31]
    #[serde(deserialize_with = "lenient_count")]
    pub days_per_month: u32,
    /// 좌석 가동률 [0, 1]
    pub occupancy: f64,
    /// 일 회전수
    pub turnover: f64,
    /// 현재 매출 추정을 사용할지 여부
    pub use_baseline: bool,
    /// 주소로부터 지역 등급을 자동 판정할지 여부
    pub auto_detect_area: bool,
    /// 명시적으로 선택한 지역 등급
    pub area: AreaKey,
    pub station_distance: StationDistance,
    pub trade_area: TradeArea,
    /// 평당 좌석 수 [0.8, 4.0]
    pub seats_per_tsubo: f64,
    /// 임대료 추정치로 임대료율을 자동 설정할지 여부
    pub auto_set_rent_rate: bool,
    /// 원가율을 사용자가 직접 입력하는지 여부
    pub manual_rates: bool,
    pub food_rate: f64,
    pub labor_rate: f64,
    pub rent_rate: f64,
}

pub const PEOPLE_PER_GROUP_RANGE: (u32, u32) = (1, 20);
pub const ADD_GROUPS_RANGE: (f64, f64) = (0.0, 200.0);
pub const SEATS_RANGE: (u32, u32) = (0, 500);
pub const DAYS_PER_MONTH_RANGE: (u32, u32) = (1, 31);
pub const SEATS_PER_TSUBO_RANGE: (f64, f64) = (0.8, 4.0);
pub const RATE_RANGE: (f64, f64) = (0.0, 0.95);

impl Default for VisitInput {
    fn default() -> Self {
        Self {
            address: String::new(),
            industry: Industry::Izakaya,
            scenario: Scenario::Standard,
            unit_type: UnitType::PerPerson,
            unit_price: 4000.0,
            people_per_group: 2,
            add_groups_per_day: 1.0,
            seats: 30,
            ad_spend: 50_000.0,
            days_per_month: 26,
            occupancy: 0.6,
            turnover: 1.5,
            use_baseline: true,
            auto_detect_area: true,
            area: AreaKey::TokyoCore,
            station_distance: StationDistance::Walkable,
            trade_area: TradeArea::Downtown,
            seats_per_tsubo: 1.5,
            auto_set_rent_rate: true,
            manual_rates: false,
            food_rate: 0.30,
            labor_rate: 0.30,
            rent_rate: 0.10,
        }
    }
}

/// 개수 필드를 읽는다. 음수/소수/비유한 값도 거부하지 않고 가장 가까운 0 이상 정수로 바꾼다.
/// 구간 제한은 [`VisitInput::sanitized`]에서 적용한다.
fn lenient_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = f64::deserialize(deserializer)?;
    Ok(finite_or_zero(raw).round().clamp(0.0, u32::MAX as f64) as u32)
}

/// 원가율 입력을 [0, 0.95]로 제한한다.
pub fn clamp_rate(rate: f64) -> f64 {
    clamp_finite(rate, RATE_RANGE.0, RATE_RANGE.1)
}

impl VisitInput {
    /// 모든 범위 제한을 적용한 사본을 반환한다.
    pub fn sanitized(&self) -> Self {
        Self {
            address: self.address.clone(),
            unit_price: non_negative(self.unit_price),
            people_per_group: self
                .people_per_group
                .clamp(PEOPLE_PER_GROUP_RANGE.0, PEOPLE_PER_GROUP_RANGE.1),
            add_groups_per_day: clamp_finite(
                self.add_groups_per_day,
                ADD_GROUPS_RANGE.0,
                ADD_GROUPS_RANGE.1,
            ),
            seats: self.seats.clamp(SEATS_RANGE.0, SEATS_RANGE.1),
            ad_spend: non_negative(self.ad_spend),
            days_per_month: self
                .days_per_month
                .clamp(DAYS_PER_MONTH_RANGE.0, DAYS_PER_MONTH_RANGE.1),
            occupancy: clamp_finite(self.occupancy, 0.0, 1.0),
            turnover: non_negative(self.turnover),
            seats_per_tsubo: clamp_finite(
                self.seats_per_tsubo,
                SEATS_PER_TSUBO_RANGE.0,
                SEATS_PER_TSUBO_RANGE.1,
            ),
            food_rate: clamp_rate(self.food_rate),
            labor_rate: clamp_rate(self.labor_rate),
            rent_rate: clamp_rate(self.rent_rate),
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitized_clamps_every_bound() {
        let raw = VisitInput {
            unit_price: -10.0,
            people_per_group: 0,
            add_groups_per_day: 999.0,
            seats: 10_000,
            ad_spend: f64::NAN,
            days_per_month: 40,
            occupancy: 1.7,
            turnover: -2.0,
            seats_per_tsubo: 9.0,
            food_rate: 1.5,
            labor_rate: -0.2,
            rent_rate: f64::INFINITY,
            ..VisitInput::default()
        };
        let s = raw.sanitized();
        assert_eq!(s.unit_price, 0.0);
        assert_eq!(s.people_per_group, 1);
        assert_eq!(s.add_groups_per_day, 200.0);
        assert_eq!(s.seats, 500);
        assert_eq!(s.ad_spend, 0.0);
        assert_eq!(s.days_per_month, 31);
        assert_eq!(s.occupancy, 1.0);
        assert_eq!(s.turnover, 0.0);
        assert_eq!(s.seats_per_tsubo, 4.0);
        assert_eq!(s.food_rate, 0.95);
        assert_eq!(s.labor_rate, 0.0);
        assert_eq!(s.rent_rate, 0.0);
    }

    #[test]
    fn out_of_range_counts_in_toml_degrade_to_bounds() {
        let input: VisitInput = toml::from_str(
            r#"
seats = -5
days_per_month = 0
people_per_group = 2.5
"#,
        )
        .expect("parse input");
        let s = input.sanitized();
        assert_eq!(s.seats, 0);
        assert_eq!(s.days_per_month, 1);
        assert_eq!(s.people_per_group, 3);

        let input: VisitInput =
            toml::from_str("seats = 900\ndays_per_month = 45.0\npeople_per_group = -1")
                .expect("parse input");
        let s = input.sanitized();
        assert_eq!(s.seats, 500);
        assert_eq!(s.days_per_month, 31);
        assert_eq!(s.people_per_group, 1);
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let input: VisitInput = toml::from_str(
            r#"
address = "東京都港区六本木"
industry = "yakiniku"
unit_type = "per_group"
unit_price = 12000.0
"#,
        )
        .expect("parse input");
        assert_eq!(input.industry, Industry::Yakiniku);
        assert_eq!(input.unit_type, UnitType::PerGroup);
        assert_eq!(input.days_per_month, 26);
        assert_eq!(input.scenario, Scenario::Standard);
    }
}
