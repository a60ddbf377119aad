//! 견적 계산 파이프라인: 지역 판정 → 현재 매출 → 임대료 → 유효 원가율 → 수익 예측.

pub mod area_resolver;
pub mod baseline;
pub mod pipeline;
pub mod projection;
pub mod rates;
pub mod rent;

pub use baseline::BaselineEstimate;
pub use pipeline::*;
pub use projection::{Advisory, BaselinePnl, Guidelines, Projection};
pub use rates::{EffectiveRates, RateMode, RentSource};
pub use rent::RentEstimate;
