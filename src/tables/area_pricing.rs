/// 지역 등급별 평당 기준 임대료와 주소 매칭 규칙, 역 거리/상권 보정 계수 테이블.
/// 임대료 값은 시세 참고치(엔/평·월)이며 실제 물건 조사로 대체되어야 한다.
///
/// 등급은 반드시 "좁은 지역 → 넓은 지역" 순으로 선언한다. 주소 판정은 선언 순서대로
/// 첫 번째 매칭을 채택하므로, 도도부현 이름 같은 넓은 규칙이 앞에 오면 도심 구 규칙이
/// 가려진다.
use serde::{Deserialize, Serialize};

use crate::model::{AreaKey, StationDistance, TradeArea};

/// 주소 문자열 매칭 규칙. `all_of`가 모두 포함되고 `none_of`가 하나도 없으면 매칭.
#[derive(Debug)]
pub struct MatchRule {
    pub all_of: &'static [&'static str],
    pub none_of: &'static [&'static str],
}

impl MatchRule {
    /// `address`는 이미 소문자로 정규화되어 있어야 한다.
    pub fn matches(&self, address: &str) -> bool {
        !self.all_of.is_empty()
            && self.all_of.iter().all(|frag| address.contains(frag))
            && !self.none_of.iter().any(|frag| address.contains(frag))
    }
}

#[derive(Debug)]
pub struct AreaTier {
    pub key: AreaKey,
    pub label: &'static str,
    /// 평당 월 임대료 [엔/평]
    pub base_rent_per_tsubo: f64,
    pub rules: &'static [MatchRule],
}

impl AreaTier {
    pub fn matches(&self, normalized_address: &str) -> bool {
        self.rules.iter().any(|r| r.matches(normalized_address))
    }
}

pub fn tiers() -> &'static [AreaTier] {
    TIERS
}

/// 키로 등급을 찾는다. 테이블에 없으면 첫 번째(기본) 등급을 돌려준다.
pub fn tier(key: AreaKey) -> &'static AreaTier {
    TIERS.iter().find(|t| t.key == key).unwrap_or(&TIERS[0])
}

/// 역 거리 보정 계수.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StationFactors {
    pub adjacent: f64,
    pub near: f64,
    pub walkable: f64,
    pub moderate: f64,
    pub far: f64,
}

impl Default for StationFactors {
    fn default() -> Self {
        Self {
            adjacent: 1.20,
            near: 1.10,
            walkable: 1.00,
            moderate: 0.90,
            far: 0.80,
        }
    }
}

impl StationFactors {
    pub fn factor(&self, distance: StationDistance) -> f64 {
        match distance {
            StationDistance::Adjacent => self.adjacent,
            StationDistance::Near => self.near,
            StationDistance::Walkable => self.walkable,
            StationDistance::Moderate => self.moderate,
            StationDistance::Far => self.far,
        }
    }
}

/// 상권 유형 보정 계수.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TradeAreaFactors {
    pub downtown: f64,
    pub office: f64,
    pub tourist: f64,
    pub residential: f64,
    pub roadside: f64,
}

impl Default for TradeAreaFactors {
    fn default() -> Self {
        Self {
            downtown: 1.15,
            office: 1.05,
            tourist: 1.10,
            residential: 0.90,
            roadside: 0.85,
        }
    }
}

impl TradeAreaFactors {
    pub fn factor(&self, trade_area: TradeArea) -> f64 {
        match trade_area {
            TradeArea::Downtown => self.downtown,
            TradeArea::Office => self.office,
            TradeArea::Tourist => self.tourist,
            TradeArea::Residential => self.residential,
            TradeArea::Roadside => self.roadside,
        }
    }
}

/// `frag`의 모든 조각이 포함되어야 매칭되는 규칙.
const fn all(frag: &'static [&'static str]) -> MatchRule {
    MatchRule {
        all_of: frag,
        none_of: &[],
    }
}

const fn except(all_of: &'static [&'static str], none_of: &'static [&'static str]) -> MatchRule {
    MatchRule { all_of, none_of }
}

// 다른 도시에도 있는 구 이름(港区, 中央区, 北区)은 도시명을 함께 요구하거나 제외 조건을 둔다.
const TIERS: &[AreaTier] = &[
    AreaTier {
        key: AreaKey::TokyoCore,
        label: "東京都心5区",
        base_rent_per_tsubo: 40_000.0,
        rules: &[
            all(&["千代田区"]),
            all(&["渋谷区"]),
            all(&["新宿区"]),
            except(&["港区"], &["大阪", "名古屋"]),
            all(&["東京", "中央区"]),
            all(&["銀座"]),
            all(&["日本橋"]),
            all(&["丸の内"]),
            all(&["六本木"]),
            all(&["表参道"]),
            all(&["chiyoda"]),
            all(&["shibuya"]),
            all(&["shinjuku"]),
            all(&["ginza"]),
            all(&["roppongi"]),
            all(&["tokyo", "minato"]),
            all(&["tokyo", "chuo"]),
        ],
    },
    AreaTier {
        key: AreaKey::OsakaCore,
        label: "大阪中心部(キタ・ミナミ)",
        base_rent_per_tsubo: 28_000.0,
        rules: &[
            all(&["大阪市北区"]),
            all(&["大阪市中央区"]),
            all(&["梅田"]),
            all(&["難波"]),
            all(&["なんば"]),
            all(&["心斎橋"]),
            all(&["umeda"]),
            all(&["namba"]),
            all(&["shinsaibashi"]),
        ],
    },
    AreaTier {
        key: AreaKey::TokyoWards,
        label: "東京23区(都心以外)",
        base_rent_per_tsubo: 25_000.0,
        rules: &[
            all(&["品川区"]),
            all(&["目黒区"]),
            all(&["世田谷区"]),
            all(&["豊島区"]),
            all(&["台東区"]),
            all(&["文京区"]),
            all(&["墨田区"]),
            all(&["江東区"]),
            all(&["大田区"]),
            all(&["中野区"]),
            all(&["杉並区"]),
            all(&["練馬区"]),
            all(&["板橋区"]),
            all(&["荒川区"]),
            all(&["足立区"]),
            all(&["葛飾区"]),
            all(&["江戸川区"]),
            all(&["東京都", "区"]),
            all(&["tokyo", "-ku"]),
        ],
    },
    AreaTier {
        key: AreaKey::RegionalHub,
        label: "地方中枢都市の中心部",
        base_rent_per_tsubo: 20_000.0,
        rules: &[
            all(&["名古屋", "中区"]),
            all(&["名古屋", "中村区"]),
            all(&["福岡市中央区"]),
            all(&["天神"]),
            all(&["博多"]),
            all(&["札幌市中央区"]),
            all(&["すすきの"]),
            all(&["三宮"]),
            all(&["京都市", "下京区"]),
            all(&["京都市", "中京区"]),
            all(&["仙台", "青葉区"]),
            all(&["tenjin"]),
            all(&["hakata"]),
            all(&["susukino"]),
            all(&["sannomiya"]),
        ],
    },
    AreaTier {
        key: AreaKey::MetroSuburb,
        label: "三大都市圏(郊外)",
        base_rent_per_tsubo: 15_000.0,
        rules: &[
            all(&["東京都"]),
            all(&["神奈川"]),
            all(&["横浜"]),
            all(&["川崎"]),
            all(&["埼玉"]),
            all(&["千葉"]),
            all(&["大阪"]),
            all(&["京都"]),
            all(&["兵庫"]),
            all(&["神戸"]),
            all(&["愛知"]),
            all(&["名古屋"]),
            all(&["福岡"]),
            all(&["札幌"]),
            all(&["tokyo"]),
            all(&["yokohama"]),
            all(&["osaka"]),
            all(&["kyoto"]),
            all(&["nagoya"]),
        ],
    },
    AreaTier {
        key: AreaKey::Regional,
        label: "地方都市・郊外",
        base_rent_per_tsubo: 10_000.0,
        rules: &[
            all(&["北海道"]),
            all(&["県"]),
            all(&["府"]),
            all(&["市"]),
            all(&["町"]),
            all(&["村"]),
        ],
    },
];
