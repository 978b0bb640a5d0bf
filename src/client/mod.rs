//! HTTP Client and related utilities

mod config;
mod http;
mod transport;

pub use config::{ClientConfig, DEFAULT_TIMEOUT_MS};
pub use http::HttpClient;
pub use transport::{StringMap, Transport};
