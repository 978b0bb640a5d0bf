//! Exchange Implementations
//!
//! 거래소별 구현체

mod paradex;

pub use paradex::{signed_auth_headers, signed_order_request, ParadexClient};
