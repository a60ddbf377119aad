use crate::model::AreaKey;
use crate::tables::AreaTier;

/// 주소에서 지역 등급을 추정한다.
///
/// 공백을 제거한 주소가 비어 있으면 `None`. 그렇지 않으면 `tiers`를 선언 순서대로
/// 훑어 규칙이 하나라도 맞는 첫 등급을 돌려준다. ASCII 대소문자는 구분하지 않는다.
pub fn resolve(address: &str, tiers: &[AreaTier]) -> Option<AreaKey> {
    let trimmed = address.trim();
    if trimmed.is_empty() {
        return None;
    }
    let normalized = trimmed.to_lowercase();
    let found = tiers.iter().find(|t| t.matches(&normalized)).map(|t| t.key);
    log::debug!("area detection for {trimmed:?}: {found:?}");
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::tiers;

    #[test]
    fn blank_address_is_none() {
        assert_eq!(resolve("", tiers()), None);
        assert_eq!(resolve("   \t", tiers()), None);
    }

    #[test]
    fn unknown_text_is_none() {
        assert_eq!(resolve("somewhere over the rainbow", tiers()), None);
    }

    #[test]
    fn romanised_address_is_case_insensitive() {
        assert_eq!(resolve("1-2-3 Ginza, Tokyo", tiers()), Some(AreaKey::TokyoCore));
        assert_eq!(resolve("UMEDA, OSAKA", tiers()), Some(AreaKey::OsakaCore));
    }
}
