//! Order normalization
//!
//! 원본 주문 입력을 서명 가능한 `NormalizedOrder`로 변환합니다.

mod normalizer;

pub use normalizer::{normalize, normalize_at, DEFAULT_INSTRUCTION};
