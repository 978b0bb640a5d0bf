//! Environment settings
//!
//! `.env` 파일과 프로세스 환경에서 실행 입력을 읽습니다.
//! 진입점에서만 사용하며 서명 코어는 환경을 읽지 않습니다.

use std::env;
use std::fmt;

use crate::crypto::evm::EthereumIdentity;
use crate::errors::{ParadexError, ParadexResult};
use crate::types::{Network, RawOrder};

pub const ETHEREUM_PRIVATE_KEY: &str = "ETHEREUM_PRIVATE_KEY";
pub const PARADEX_NETWORK: &str = "PARADEX_NETWORK";
pub const ORDER_PARAMS: &str = "ORDER_PARAMS";

/// 실행 설정
#[derive(Clone)]
pub struct Settings {
    ethereum_private_key: String,
    pub network: Network,
    pub order_params: Option<String>,
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("network", &self.network)
            .field("order_params", &self.order_params)
            .finish_non_exhaustive()
    }
}

impl Settings {
    /// `.env` → 프로세스 환경 순으로 로드
    pub fn from_env() -> ParadexResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 임의의 조회 함수로 로드
    pub fn from_lookup<F>(lookup: F) -> ParadexResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let ethereum_private_key = lookup(ETHEREUM_PRIVATE_KEY)
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ParadexError::config(format!("{ETHEREUM_PRIVATE_KEY} not set")))?;

        let network = match lookup(PARADEX_NETWORK) {
            Some(value) if !value.trim().is_empty() => value.parse()?,
            _ => Network::default(),
        };

        let order_params = lookup(ORDER_PARAMS).filter(|v| !v.trim().is_empty());

        Ok(Self {
            ethereum_private_key,
            network,
            order_params,
        })
    }

    /// L1 identity (형식 오류는 `InvalidKeyMaterial`)
    pub fn identity(&self) -> ParadexResult<EthereumIdentity> {
        EthereumIdentity::from_hex(&self.ethereum_private_key)
    }

    /// `ORDER_PARAMS` JSON 파싱
    pub fn raw_order(&self) -> ParadexResult<RawOrder> {
        let params = self
            .order_params
            .as_deref()
            .ok_or_else(|| ParadexError::config(format!("{ORDER_PARAMS} not set")))?;
        parse_order_params(params)
    }
}

/// 주문 파라미터 JSON → RawOrder
pub fn parse_order_params(params: &str) -> ParadexResult<RawOrder> {
    serde_json::from_str(params)
        .map_err(|e| ParadexError::order(format!("Invalid order parameters: {e}")))
}
