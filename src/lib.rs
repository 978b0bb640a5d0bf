//! Paradex Signer: StarkNet account derivation and request signing
//!
//! Ethereum 개인키로 Paradex(StarkNet) 계정을 파생하고, 인증/온보딩/주문 메시지에
//! 서명하여 REST 요청 헤더와 본문을 만드는 라이브러리
//!
//! ```rust,ignore
//! use paradex_signer::{derive, EthereumIdentity, ParadexClient, ClientConfig, Network};
//!
//! let client = ParadexClient::from_network(Network::Testnet, &ClientConfig::new())?;
//! let chain = client.fetch_chain_config().await?;
//! let identity = EthereumIdentity::from_hex(&key)?;
//! let account = derive(&identity, &chain)?;
//! let token = client.authenticate(&account, &chain).await?;
//! ```

pub mod artifacts;
pub mod client;
pub mod crypto;
pub mod errors;
pub mod exchanges;
pub mod order;
pub mod settings;
pub mod types;
pub mod utils;

// Re-exports
pub use artifacts::{AuthHeaders, OnboardingRequest, OrderRequest};
pub use client::{ClientConfig, HttpClient, Transport};
pub use crypto::evm::EthereumIdentity;
pub use crypto::starknet::{
    build, derive, sign, verify, AuthFields, MessageFields, MessageKind, StarkNetSignature,
    TypedMessage, VenueAccount,
};
pub use errors::{ParadexError, ParadexResult};
pub use exchanges::ParadexClient;
pub use order::{normalize, normalize_at};
pub use settings::Settings;
pub use types::{AuthToken, ChainConfig, Network, NormalizedOrder, OrderSide, OrderType, RawOrder};
