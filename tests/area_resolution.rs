//! 주소 → 지역 등급 판정 회귀 테스트.
//!
//! 테이블은 좁은 지역부터 선언되어야 한다. 아래 주소들은 여러 등급의 규칙에 동시에
//! 걸리므로, 테이블 순서가 바뀌면 여기서 먼저 깨진다.
use restaurant_estimator::estimate::area_resolver::resolve;
use restaurant_estimator::model::AreaKey;
use restaurant_estimator::tables::{tier, tiers};

fn matching_keys(address: &str) -> Vec<AreaKey> {
    let normalized = address.trim().to_lowercase();
    tiers()
        .iter()
        .filter(|t| t.matches(&normalized))
        .map(|t| t.key)
        .collect()
}

#[test]
fn central_ward_beats_prefecture_rule() {
    let address = "東京都中央区銀座4-5-6";
    let keys = matching_keys(address);
    assert!(keys.contains(&AreaKey::MetroSuburb), "{keys:?}");
    assert!(keys.contains(&AreaKey::TokyoWards), "{keys:?}");
    assert_eq!(resolve(address, tiers()), Some(AreaKey::TokyoCore));
}

#[test]
fn first_match_in_declaration_order() {
    let cases = [
        ("東京都港区六本木6-10-1", AreaKey::TokyoCore),
        ("東京都世田谷区三軒茶屋", AreaKey::TokyoWards),
        ("東京都北区赤羽1-1", AreaKey::TokyoWards),
        ("東京都八王子市旭町", AreaKey::MetroSuburb),
        ("大阪府大阪市中央区心斎橋筋", AreaKey::OsakaCore),
        ("大阪府大阪市港区弁天", AreaKey::MetroSuburb),
        ("大阪府堺市堺区", AreaKey::MetroSuburb),
        ("大阪府堺市北区中百舌鳥町", AreaKey::MetroSuburb),
        ("大阪府大阪市北区梅田1-1", AreaKey::OsakaCore),
        ("愛知県名古屋市中区栄3丁目", AreaKey::RegionalHub),
        ("福岡県福岡市中央区天神2-1", AreaKey::RegionalHub),
        ("神奈川県横浜市西区", AreaKey::MetroSuburb),
        ("長野県松本市中央", AreaKey::Regional),
        ("北海道旭川市", AreaKey::Regional),
    ];
    for (address, expected) in cases {
        let keys = matching_keys(address);
        assert_eq!(resolve(address, tiers()), Some(expected), "{address}");
        assert_eq!(keys.first(), Some(&expected), "{address}: {keys:?}");
    }
}

#[test]
fn every_detected_tier_is_reachable() {
    for t in tiers() {
        assert_eq!(tier(t.key).key, t.key);
    }
}

#[test]
fn whitespace_is_trimmed() {
    assert_eq!(resolve("  渋谷区道玄坂  ", tiers()), Some(AreaKey::TokyoCore));
    assert_eq!(resolve("", tiers()), None);
}
