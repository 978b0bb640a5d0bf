//! Transport abstraction
//!
//! 서명 코어는 I/O를 하지 않으며, 조립된 헤더/본문은 이 트레이트를 통해 전송됩니다.
//! 테스트에서는 mock 구현으로 대체합니다.

use async_trait::async_trait;
use std::collections::HashMap;

use crate::errors::ParadexResult;

/// 헤더/쿼리 맵
pub type StringMap = HashMap<String, String>;

/// JSON REST 전송
///
/// 비 2xx 응답은 `TransportFailure`로 반환하며 재시도하지 않습니다.
/// 본문이 비어 있으면 `Value::Null`.
#[async_trait]
pub trait Transport: Send + Sync {
    /// 요청 기본 URL (e.g. `https://api.testnet.paradex.trade/v1`)
    fn base_url(&self) -> &str;

    async fn get(
        &self,
        path: &str,
        params: Option<StringMap>,
        headers: Option<StringMap>,
    ) -> ParadexResult<serde_json::Value>;

    async fn post(
        &self,
        path: &str,
        body: Option<serde_json::Value>,
        headers: Option<StringMap>,
    ) -> ParadexResult<serde_json::Value>;

    async fn delete(
        &self,
        path: &str,
        params: Option<StringMap>,
        headers: Option<StringMap>,
    ) -> ParadexResult<serde_json::Value>;
}
