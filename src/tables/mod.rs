//! 정적 기준 데이터 테이블 모음.

pub mod area_pricing;
pub mod rate_presets;

pub use area_pricing::{tier, tiers, AreaTier, MatchRule, StationFactors, TradeAreaFactors};
pub use rate_presets::{preset, presets, RateTriple};
