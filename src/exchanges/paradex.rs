//! Paradex REST client
//!
//! 서명 코어(파생 → 메시지 구성 → 서명 → 조립)를 `Transport` 위에서 엮습니다.
//! 각 요청은 독립적이며 이 클라이언트는 계정이나 토큰을 보관하지 않습니다.
//!
//! # Endpoints
//!
//! - `GET /system/config`
//! - `POST /auth`
//! - `POST /onboarding`
//! - `POST /orders`, `GET /orders`, `DELETE /orders/{id}`

use serde::Deserialize;
use std::collections::HashMap;

use crate::artifacts::{auth_headers, onboarding_request, order_request, AuthHeaders, OrderRequest};
use crate::client::{ClientConfig, HttpClient, StringMap, Transport};
use crate::crypto::evm::EthereumIdentity;
use crate::crypto::starknet::{build, sign, AuthFields, MessageFields, VenueAccount};
use crate::errors::{ParadexError, ParadexResult};
use crate::order::normalize_at;
use crate::types::{
    AuthToken, ChainConfig, Network, NormalizedOrder, OpenOrder, OpenOrdersResponse, RawOrder,
    SystemConfigResponse,
};
use crate::utils::now_secs;
use chrono::{DateTime, Utc};

#[derive(Debug, Deserialize)]
struct AuthResponse {
    jwt_token: String,
}

/// 주어진 시각의 서명된 Auth 헤더
pub fn signed_auth_headers(
    account: &VenueAccount,
    chain: &ChainConfig,
    now_secs: i64,
) -> ParadexResult<(AuthFields, AuthHeaders)> {
    let fields = AuthFields::login(now_secs);
    let message = build(MessageFields::Auth(fields.clone()), chain)?;
    let signature = sign(&message, account)?;
    let headers = auth_headers(account, &fields, &signature);
    Ok((fields, headers))
}

/// 정규화 → 서명 → 주문 본문
pub fn signed_order_request(
    account: &VenueAccount,
    chain: &ChainConfig,
    raw: &RawOrder,
    now: DateTime<Utc>,
) -> ParadexResult<(NormalizedOrder, OrderRequest)> {
    let order = normalize_at(raw, now)?;
    let message = build(MessageFields::Order(order.clone()), chain)?;
    let signature = sign(&message, account)?;
    let request = order_request(&order, &signature);
    Ok((order, request))
}

fn bearer_headers(token: &AuthToken) -> ParadexResult<StringMap> {
    token.ensure_valid(now_secs())?;
    Ok(HashMap::from([("Authorization".to_string(), token.bearer())]))
}

/// Paradex 클라이언트
pub struct ParadexClient<T: Transport> {
    transport: T,
}

impl ParadexClient<HttpClient> {
    /// 네트워크 기본 URL로 HTTP 클라이언트 생성
    pub fn from_network(network: Network, config: &ClientConfig) -> ParadexResult<Self> {
        Ok(Self::new(HttpClient::new(network.rest_base_url(), config)?))
    }
}

impl<T: Transport> ParadexClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// `GET /system/config` → ChainConfig
    pub async fn fetch_chain_config(&self) -> ParadexResult<ChainConfig> {
        let value = self.transport.get("/system/config", None, None).await?;
        let response: SystemConfigResponse = serde_json::from_value(value)?;
        let chain = ChainConfig::from_system_config(&response, self.transport.base_url())?;
        tracing::debug!(
            chain_id = %chain.starknet_chain_id,
            l1_chain_id = chain.l1_chain_id,
            "loaded chain config"
        );
        Ok(chain)
    }

    /// `POST /auth` → JWT (24시간 유효)
    pub async fn authenticate(
        &self,
        account: &VenueAccount,
        chain: &ChainConfig,
    ) -> ParadexResult<AuthToken> {
        let (fields, headers) = signed_auth_headers(account, chain, now_secs())?;
        let value = self
            .transport
            .post("/auth", None, Some(headers.to_header_map()))
            .await?;
        let response: AuthResponse = serde_json::from_value(value)?;

        Ok(AuthToken::new(
            response.jwt_token,
            fields.expiry,
            account.address_hex(),
        ))
    }

    /// `POST /onboarding`
    pub async fn onboard(
        &self,
        identity: &EthereumIdentity,
        account: &VenueAccount,
        chain: &ChainConfig,
    ) -> ParadexResult<serde_json::Value> {
        let message = build(MessageFields::Onboarding, chain)?;
        let signature = sign(&message, account)?;
        let request = onboarding_request(identity, account, &signature);

        let body = serde_json::to_value(&request.body)?;
        self.transport
            .post("/onboarding", Some(body), Some(request.to_header_map()))
            .await
    }

    /// `POST /orders`
    ///
    /// 서명 타임스탬프는 전송 시각이 아니라 조립 시각입니다.
    pub async fn place_order(
        &self,
        token: &AuthToken,
        account: &VenueAccount,
        chain: &ChainConfig,
        raw: &RawOrder,
    ) -> ParadexResult<serde_json::Value> {
        let headers = bearer_headers(token)?;
        let (order, request) = signed_order_request(account, chain, raw, Utc::now())?;
        tracing::debug!(market = %order.market, client_id = %order.client_id, "placing order");

        let body = serde_json::to_value(&request)?;
        self.transport.post("/orders", Some(body), Some(headers)).await
    }

    /// `GET /orders` (선택적으로 마켓 필터)
    pub async fn fetch_open_orders(
        &self,
        token: &AuthToken,
        market: Option<&str>,
    ) -> ParadexResult<Vec<OpenOrder>> {
        let headers = bearer_headers(token)?;
        let params = market.map(|m| HashMap::from([("market".to_string(), m.to_string())]));

        let value = self.transport.get("/orders", params, Some(headers)).await?;
        let response: OpenOrdersResponse = serde_json::from_value(value)?;
        Ok(response.results)
    }

    /// `DELETE /orders/{id}`
    pub async fn cancel_order(
        &self,
        token: &AuthToken,
        order_id: &str,
    ) -> ParadexResult<serde_json::Value> {
        let order_id = order_id.trim();
        if order_id.is_empty() {
            return Err(ParadexError::order("order id is empty"));
        }
        let headers = bearer_headers(token)?;
        self.transport
            .delete(&format!("/orders/{order_id}"), None, Some(headers))
            .await
    }
}
