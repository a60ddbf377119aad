use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {

    pub const SUMMARY_TITLE: &str = "summary.title";
    pub const SUMMARY_ADDRESS: &str = "summary.address";
    pub const SUMMARY_ADDRESS_BLANK: &str = "summary.address_blank";
    pub const SUMMARY_INDUSTRY: &str = "summary.industry";
    pub const SUMMARY_AREA: &str = "summary.area";
    pub const SUMMARY_AREA_DETECTED: &str = "summary.area_detected";
    pub const SUMMARY_AREA_SELECTED: &str = "summary.area_selected";
    pub const SUMMARY_RENT: &str = "summary.rent";
    pub const SUMMARY_TARGET: &str = "summary.target";
    pub const SUMMARY_UNIT_PRICE: &str = "summary.unit_price";
    pub const SUMMARY_PER_PERSON: &str = "summary.per_person";
    pub const SUMMARY_PER_GROUP: &str = "summary.per_group";
    pub const SUMMARY_REVENUE: &str = "summary.revenue";
    pub const SUMMARY_PROFIT: &str = "summary.profit";
    pub const SUMMARY_AD_PAYBACK: &str = "summary.ad_payback";
    pub const SUMMARY_AD_NONE: &str = "summary.ad_none";
    pub const SUMMARY_RATIOS: &str = "summary.ratios";
    pub const SUMMARY_BASELINE: &str = "summary.baseline";
    pub const SUMMARY_NOTES: &str = "summary.notes";

    pub const SCENARIO_LOW: &str = "scenario.low";
    pub const SCENARIO_STANDARD: &str = "scenario.standard";
    pub const SCENARIO_HIGH: &str = "scenario.high";

    pub const INDUSTRY_IZAKAYA: &str = "industry.izakaya";
    pub const INDUSTRY_YAKINIKU: &str = "industry.yakiniku";
    pub const INDUSTRY_SUSHI: &str = "industry.sushi";
    pub const INDUSTRY_RAMEN: &str = "industry.ramen";
    pub const INDUSTRY_CAFE: &str = "industry.cafe";
    pub const INDUSTRY_BISTRO: &str = "industry.bistro";

    pub const ADVISORY_FL: &str = "advisory.fl";
    pub const ADVISORY_FLR: &str = "advisory.flr";
    pub const ADVISORY_AD: &str = "advisory.ad_not_recovered";
    pub const ADVISORY_BASELINE_LOSS: &str = "advisory.baseline_loss";
    pub const ADVISORY_RENT_CAPPED: &str = "advisory.rent_capped";

    pub const RESOLVE_MATCH: &str = "resolve.match";
    pub const RESOLVE_NONE: &str = "resolve.none";
    pub const PRESETS_HEADING: &str = "presets.heading";
    pub const AREAS_HEADING: &str = "areas.heading";
    pub const AREAS_STATION: &str = "areas.station";
    pub const AREAS_TRADE: &str = "areas.trade";
    pub const COMPARE_HEADING: &str = "compare.heading";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
    Ja,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else if c.starts_with("ja") {
            Language::Ja
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
            Language::Ja => "ja",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en/ja)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&Path>) -> Self {
        let overrides = pack_dir.and_then(|dir| load_overrides(dir, lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 번역을 가져온다. 언어팩 → 내장 문자열 → 한국어 순으로 찾는다.
    pub fn t(&self, key: &str) -> &str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v;
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ja => ja(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }

    /// `{name}` 자리표시자를 채운 번역문을 돌려준다.
    pub fn fill(&self, key: &str, vars: &[(&str, String)]) -> String {
        fill_template(self.t(key), vars)
    }
}

pub fn fill_template(template: &str, vars: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (k, v) in vars {
        out = out.replace(&format!("{{{k}}}"), v);
    }
    out
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: Option<&str>, config_lang: Option<&str>) -> String {
    cli_arg
        .and_then(normalize_lang)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "ja".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        other if other.starts_with("ja") || other.starts_with("jp") => Some("ja".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        "ja" => Some("ja".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(lang) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(lang);
    }
    ["LC_ALL", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 형식: 섹션.키 = "값".
fn load_overrides(dir: &Path, lang: &str) -> Option<HashMap<String, String>> {
    let path = dir.join(format!("{lang}.toml"));
    let content = fs::read_to_string(path).ok()?;
    parse_toml_to_map(&content)
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        SUMMARY_TITLE => "【방문 전 견적 요약】",
        SUMMARY_ADDRESS => "주소: {address}",
        SUMMARY_ADDRESS_BLANK => "(미입력)",
        SUMMARY_INDUSTRY => "업종/시나리오: {industry} / {scenario}",
        SUMMARY_AREA => "지역 등급: {area} ({source})",
        SUMMARY_AREA_DETECTED => "주소 자동 판정",
        SUMMARY_AREA_SELECTED => "수동 선택",
        SUMMARY_RENT => "추정 임대료: 월 {rent} (약 {tsubo}평 × 평당 {per_tsubo}, 매출 대비 {ratio})",
        SUMMARY_TARGET => "목표 추가 팀 수: 하루 {groups}팀 ({people}명/팀, 월 {days}일 영업)",
        SUMMARY_UNIT_PRICE => "객단가: {price} ({unit})",
        SUMMARY_PER_PERSON => "1인당",
        SUMMARY_PER_GROUP => "1팀당",
        SUMMARY_REVENUE => "추가 매출: 일 {daily} / 월 {monthly}",
        SUMMARY_PROFIT => "추가 매출총이익: 월 {gross} (인건비 차감 후 {after_labor}, 임대료 차감 후 {after_rent})",
        SUMMARY_AD_PAYBACK => "광고비 월 {ad}: ROAS {roas}배, 매출총이익 ROAS {gp_roas}배, 회수에 필요한 추가 팀 수 하루 {breakeven}팀",
        SUMMARY_AD_NONE => "광고비: 없음",
        SUMMARY_RATIOS => "FL 비율 {fl} / FLR 비율 {flr} (F {food}, L {labor}, R {rent})",
        SUMMARY_BASELINE => "현재 매출 추정: 월 {revenue}, 영업이익 근사 {profit}",
        SUMMARY_NOTES => "주의 사항:",
        SCENARIO_LOW => "낙관",
        SCENARIO_STANDARD => "표준",
        SCENARIO_HIGH => "보수",
        INDUSTRY_IZAKAYA => "이자카야",
        INDUSTRY_YAKINIKU => "야키니쿠",
        INDUSTRY_SUSHI => "스시/갓포",
        INDUSTRY_RAMEN => "라멘",
        INDUSTRY_CAFE => "카페",
        INDUSTRY_BISTRO => "양식/비스트로",
        ADVISORY_FL => "FL 비율이 기준을 넘습니다.",
        ADVISORY_FLR => "FLR 비율이 기준을 넘습니다. 원가 구조 점검이 필요합니다.",
        ADVISORY_AD => "추가 매출총이익으로 광고비를 회수하지 못합니다.",
        ADVISORY_BASELINE_LOSS => "현재 매출 기준 영업이익이 적자로 추정됩니다.",
        ADVISORY_RENT_CAPPED => "임대료율 추정치가 상한에 걸렸습니다. 현재 매출 입력을 확인하세요.",
        RESOLVE_MATCH => "판정 결과: {area} ({key})",
        RESOLVE_NONE => "일치하는 지역 등급이 없습니다.",
        PRESETS_HEADING => "업종 × 시나리오 기준 원가율 (F / L / R)",
        AREAS_HEADING => "지역 등급 (평당 기준 임대료)",
        AREAS_STATION => "역 거리 계수",
        AREAS_TRADE => "상권 계수",
        COMPARE_HEADING => "시나리오 비교",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        SUMMARY_TITLE => "[Pre-visit estimate summary]",
        SUMMARY_ADDRESS => "Address: {address}",
        SUMMARY_ADDRESS_BLANK => "(not entered)",
        SUMMARY_INDUSTRY => "Industry/scenario: {industry} / {scenario}",
        SUMMARY_AREA => "Area tier: {area} ({source})",
        SUMMARY_AREA_DETECTED => "detected from address",
        SUMMARY_AREA_SELECTED => "selected",
        SUMMARY_RENT => "Estimated rent: {rent}/month (~{tsubo} tsubo × {per_tsubo}/tsubo, {ratio} of sales)",
        SUMMARY_TARGET => "Target extra groups: {groups}/day ({people} per group, {days} days/month)",
        SUMMARY_UNIT_PRICE => "Unit price: {price} ({unit})",
        SUMMARY_PER_PERSON => "per person",
        SUMMARY_PER_GROUP => "per group",
        SUMMARY_REVENUE => "Extra revenue: {daily}/day, {monthly}/month",
        SUMMARY_PROFIT => "Extra gross profit: {gross}/month (after labor {after_labor}, after rent {after_rent})",
        SUMMARY_AD_PAYBACK => "Ad spend {ad}/month: ROAS {roas}x, gross-profit ROAS {gp_roas}x, breakeven {breakeven} extra groups/day",
        SUMMARY_AD_NONE => "Ad spend: none",
        SUMMARY_RATIOS => "FL {fl} / FLR {flr} (F {food}, L {labor}, R {rent})",
        SUMMARY_BASELINE => "Current revenue estimate: {revenue}/month, operating profit approx. {profit}",
        SUMMARY_NOTES => "Notes:",
        SCENARIO_LOW => "optimistic",
        SCENARIO_STANDARD => "standard",
        SCENARIO_HIGH => "conservative",
        INDUSTRY_IZAKAYA => "Izakaya",
        INDUSTRY_YAKINIKU => "Yakiniku",
        INDUSTRY_SUSHI => "Sushi/Kappo",
        INDUSTRY_RAMEN => "Ramen",
        INDUSTRY_CAFE => "Cafe",
        INDUSTRY_BISTRO => "Bistro",
        ADVISORY_FL => "FL ratio is above the guideline.",
        ADVISORY_FLR => "FLR ratio is above the guideline; review the cost structure.",
        ADVISORY_AD => "Extra gross profit does not recover the ad spend.",
        ADVISORY_BASELINE_LOSS => "Current operations are estimated to run at a loss.",
        ADVISORY_RENT_CAPPED => "Suggested rent ratio hit its cap; check the current-revenue inputs.",
        RESOLVE_MATCH => "Detected: {area} ({key})",
        RESOLVE_NONE => "No area tier matched.",
        PRESETS_HEADING => "Preset cost ratios by industry × scenario (F / L / R)",
        AREAS_HEADING => "Area tiers (base rent per tsubo)",
        AREAS_STATION => "Station distance factors",
        AREAS_TRADE => "Trade area factors",
        COMPARE_HEADING => "Scenario comparison",
        _ => return None,
    })
}

fn ja(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        SUMMARY_TITLE => "【事前試算サマリー】",
        SUMMARY_ADDRESS => "住所: {address}",
        SUMMARY_ADDRESS_BLANK => "(未入力)",
        SUMMARY_INDUSTRY => "業態/シナリオ: {industry} / {scenario}",
        SUMMARY_AREA => "エリア: {area} ({source})",
        SUMMARY_AREA_DETECTED => "住所から自動判定",
        SUMMARY_AREA_SELECTED => "手動選択",
        SUMMARY_RENT => "推定家賃: 月 {rent} (約{tsubo}坪 × 坪単価 {per_tsubo}, 売上比 {ratio})",
        SUMMARY_TARGET => "目標追加組数: 1日 {groups}組 ({people}名/組, 月{days}日営業)",
        SUMMARY_UNIT_PRICE => "客単価: {price} ({unit})",
        SUMMARY_PER_PERSON => "1人あたり",
        SUMMARY_PER_GROUP => "1組あたり",
        SUMMARY_REVENUE => "追加売上: 日 {daily} / 月 {monthly}",
        SUMMARY_PROFIT => "追加粗利: 月 {gross} (人件費控除後 {after_labor}, 家賃控除後 {after_rent})",
        SUMMARY_AD_PAYBACK => "広告費 月 {ad}: ROAS {roas}倍, 粗利ROAS {gp_roas}倍, 回収に必要な追加組数 1日 {breakeven}組",
        SUMMARY_AD_NONE => "広告費: なし",
        SUMMARY_RATIOS => "FL比率 {fl} / FLR比率 {flr} (F {food}, L {labor}, R {rent})",
        SUMMARY_BASELINE => "現状売上推定: 月 {revenue}, 営業利益概算 {profit}",
        SUMMARY_NOTES => "注意点:",
        SCENARIO_LOW => "楽観",
        SCENARIO_STANDARD => "標準",
        SCENARIO_HIGH => "保守",
        INDUSTRY_IZAKAYA => "居酒屋",
        INDUSTRY_YAKINIKU => "焼肉",
        INDUSTRY_SUSHI => "寿司・割烹",
        INDUSTRY_RAMEN => "ラーメン",
        INDUSTRY_CAFE => "カフェ",
        INDUSTRY_BISTRO => "洋食・ビストロ",
        ADVISORY_FL => "FL比率が目安を超えています。",
        ADVISORY_FLR => "FLR比率が目安を超えています。コスト構造の見直しが必要です。",
        ADVISORY_AD => "追加粗利で広告費を回収できません。",
        ADVISORY_BASELINE_LOSS => "現状の営業利益は赤字と推定されます。",
        ADVISORY_RENT_CAPPED => "推定家賃比率が上限に達しました。現状売上の入力を確認してください。",
        RESOLVE_MATCH => "判定結果: {area} ({key})",
        RESOLVE_NONE => "該当するエリアがありません。",
        PRESETS_HEADING => "業態 × シナリオ別 基準比率 (F / L / R)",
        AREAS_HEADING => "エリア区分 (坪単価の基準家賃)",
        AREAS_STATION => "駅距離係数",
        AREAS_TRADE => "商圏係数",
        COMPARE_HEADING => "シナリオ比較",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_language_falls_back_to_korean() {
        let tr = Translator::new("xx");
        assert_eq!(tr.language(), Language::Ko);
        assert_eq!(tr.t(keys::SCENARIO_HIGH), "보수");
    }

    #[test]
    fn explicit_cli_language_wins() {
        assert_eq!(resolve_language(Some("en-US"), Some("ja")), "en");
        assert_eq!(resolve_language(Some("auto"), Some("ja_JP")), "ja");
    }

    #[test]
    fn fill_replaces_placeholders() {
        let tr = Translator::new("en");
        let s = tr.fill(keys::RESOLVE_MATCH, &[("area", "X".into()), ("key", "y".into())]);
        assert_eq!(s, "Detected: X (y)");
    }

    #[test]
    fn pack_overrides_builtin_strings() {
        let map = parse_toml_to_map("[summary]\ntitle = \"Custom\"\n").expect("map");
        let tr = Translator {
            lang: Language::En,
            overrides: Some(map),
        };
        assert_eq!(tr.t(keys::SUMMARY_TITLE), "Custom");
        assert_eq!(tr.t(keys::SUMMARY_NOTES), "Notes:");
    }
}
