//! Paradex domain types

mod auth;
mod chain;
mod order;

pub use auth::AuthToken;
pub use chain::{ChainConfig, Network, SystemConfigResponse};
pub use order::{
    NormalizedOrder, NumericInput, OpenOrder, OpenOrdersResponse, OrderSide, OrderType, RawOrder,
};
