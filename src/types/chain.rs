//! Chain configuration - 네트워크 선택자와 체인 파라미터

use crate::errors::{ParadexError, ParadexResult};
use crate::crypto::starknet::{felt_from_hex, SHORT_STRING_MAX_LEN};
use serde::Deserialize;
use starknet_types_core::felt::Felt;
use std::fmt;
use std::str::FromStr;

/// Paradex 네트워크
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Network {
    #[default]
    Testnet,
    Prod,
}

impl Network {
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Testnet => "testnet",
            Network::Prod => "prod",
        }
    }

    /// REST API 기본 URL
    pub fn rest_base_url(&self) -> String {
        format!("https://api.{}.paradex.trade/v1", self.as_str())
    }
}

impl FromStr for Network {
    type Err = ParadexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "testnet" => Ok(Network::Testnet),
            "prod" => Ok(Network::Prod),
            other => Err(ParadexError::config(format!(
                "PARADEX_NETWORK must be either 'testnet' or 'prod', got '{other}'"
            ))),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `GET /system/config` 응답 중 서명에 필요한 필드
#[derive(Debug, Clone, Deserialize)]
pub struct SystemConfigResponse {
    pub starknet_chain_id: String,
    pub l1_chain_id: serde_json::Value,
    pub paraclear_account_hash: String,
    pub paraclear_account_proxy_hash: String,
}

/// 불변 체인 설정
///
/// 프로세스 시작 시 한 번 만들어 각 단계에 값으로 전달합니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainConfig {
    /// StarkNet 체인 ID (short string, e.g. "PRIVATE_SN_POTC_SEPOLIA")
    pub starknet_chain_id: String,
    /// L1 체인 ID (EIP-712 도메인용)
    pub l1_chain_id: u64,
    /// 계정 구현 클래스 해시
    pub paraclear_account_hash: Felt,
    /// 계정 프록시 클래스 해시
    pub paraclear_account_proxy_hash: Felt,
    /// REST 기본 URL
    pub venue_rest_base_url: String,
}

impl ChainConfig {
    /// 설정 생성 및 검증
    pub fn new(
        starknet_chain_id: impl Into<String>,
        l1_chain_id: u64,
        paraclear_account_hash: Felt,
        paraclear_account_proxy_hash: Felt,
        venue_rest_base_url: impl Into<String>,
    ) -> ParadexResult<Self> {
        let starknet_chain_id = starknet_chain_id.into();
        if starknet_chain_id.is_empty() {
            return Err(ParadexError::config("starknet_chain_id is empty"));
        }
        if !starknet_chain_id.is_ascii() || starknet_chain_id.len() > SHORT_STRING_MAX_LEN {
            return Err(ParadexError::config(format!(
                "starknet_chain_id must be ASCII and at most {SHORT_STRING_MAX_LEN} bytes: {starknet_chain_id}"
            )));
        }

        Ok(Self {
            starknet_chain_id,
            l1_chain_id,
            paraclear_account_hash,
            paraclear_account_proxy_hash,
            venue_rest_base_url: venue_rest_base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// `/system/config` 응답으로 생성
    pub fn from_system_config(
        response: &SystemConfigResponse,
        venue_rest_base_url: impl Into<String>,
    ) -> ParadexResult<Self> {
        let l1_chain_id = match &response.l1_chain_id {
            serde_json::Value::Number(n) => n.as_u64(),
            serde_json::Value::String(s) => s.trim().parse::<u64>().ok(),
            _ => None,
        }
        .ok_or_else(|| {
            ParadexError::config(format!("Invalid l1_chain_id: {}", response.l1_chain_id))
        })?;

        let class_hash = |name: &str, value: &str| {
            felt_from_hex(value)
                .map_err(|_| ParadexError::config(format!("Invalid {name}: {value}")))
        };

        Self::new(
            response.starknet_chain_id.clone(),
            l1_chain_id,
            class_hash("paraclear_account_hash", &response.paraclear_account_hash)?,
            class_hash(
                "paraclear_account_proxy_hash",
                &response.paraclear_account_proxy_hash,
            )?,
            venue_rest_base_url,
        )
    }
}
