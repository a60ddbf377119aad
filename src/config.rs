use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::estimate::Tuning;

/// 설정 파일 기본 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 출력 언어 코드(auto/ko/en/ja)
    pub language: String,
    /// 로그 레벨(off/error/warn/info/debug/trace)
    pub log_level: String,
    /// 계산 조정 상수
    pub tuning: Tuning,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".into(),
            log_level: "warn".into(),
            tuning: Tuning::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
    /// 값 범위 오류
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Serde(e) => write!(f, "설정 파싱 오류: {e}"),
            ConfigError::Serialize(e) => write!(f, "설정 직렬화 오류: {e}"),
            ConfigError::Invalid(msg) => write!(f, "잘못된 설정 값: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        Config::from_toml_str(&content)
    } else {
        let cfg = Config::default();
        cfg.save_to(path)?;
        Ok(cfg)
    }
}

impl Config {
    /// TOML 문자열을 읽고 값 범위를 검사한다.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let cfg: Config = toml::from_str(content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// 설정을 지정한 경로에 저장한다.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.tuning;
        if !(0.0..=1.0).contains(&t.rent_ratio_cap) {
            return Err(ConfigError::Invalid(format!(
                "tuning.rent_ratio_cap = {} (0~1)",
                t.rent_ratio_cap
            )));
        }
        let s = &t.station_factors;
        let a = &t.trade_area_factors;
        let factors = [
            s.adjacent,
            s.near,
            s.walkable,
            s.moderate,
            s.far,
            a.downtown,
            a.office,
            a.tourist,
            a.residential,
            a.roadside,
        ];
        if factors.iter().any(|f| !f.is_finite() || *f < 0.0) {
            return Err(ConfigError::Invalid(
                "역 거리/상권 계수는 0 이상의 유한한 값이어야 합니다".into(),
            ));
        }
        if let Some(o) = t
            .base_rent_overrides
            .iter()
            .find(|o| !o.rent_per_tsubo.is_finite() || o.rent_per_tsubo < 0.0)
        {
            return Err(ConfigError::Invalid(format!(
                "tuning.base_rent_overrides[{}] = {}",
                o.area.code(),
                o.rent_per_tsubo
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AreaKey;

    #[test]
    fn default_round_trips_through_toml() {
        let cfg = Config::default();
        let text = cfg.to_toml_string().expect("serialize");
        let back = Config::from_toml_str(&text).expect("parse");
        assert_eq!(cfg, back);
    }

    #[test]
    fn partial_tuning_keeps_other_defaults() {
        let cfg = Config::from_toml_str(
            r#"
[tuning]
rent_ratio_cap = 0.3

[tuning.station_factors]
adjacent = 1.3

[[tuning.base_rent_overrides]]
area = "osaka_core"
rent_per_tsubo = 30000.0
"#,
        )
        .expect("parse");
        assert_eq!(cfg.language, "auto");
        assert_eq!(cfg.tuning.rent_ratio_cap, 0.3);
        assert_eq!(cfg.tuning.station_factors.adjacent, 1.3);
        assert_eq!(cfg.tuning.station_factors.far, 0.80);
        assert_eq!(cfg.tuning.base_rent_per_tsubo(AreaKey::OsakaCore), 30_000.0);
        assert_eq!(cfg.tuning.base_rent_per_tsubo(AreaKey::TokyoCore), 40_000.0);
    }

    #[test]
    fn out_of_range_cap_is_rejected() {
        let err = Config::from_toml_str("[tuning]\nrent_ratio_cap = 1.5\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }
}
