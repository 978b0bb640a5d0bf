//! HTTP client for the Paradex REST API

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use std::time::Duration;

use super::transport::{StringMap, Transport};
use super::ClientConfig;
use crate::errors::{ParadexError, ParadexResult};

/// reqwest 기반 `Transport`
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// 새로운 HTTP 클라이언트 생성
    ///
    /// `config.base_url()`이 있으면 `base_url` 대신 사용합니다.
    pub fn new(base_url: impl Into<String>, config: &ClientConfig) -> ParadexResult<Self> {
        let base_url = config
            .base_url()
            .map(str::to_string)
            .unwrap_or_else(|| base_url.into())
            .trim_end_matches('/')
            .to_string();

        let mut builder = Client::builder().timeout(Duration::from_millis(config.timeout_ms()));
        if let Some(user_agent) = config.user_agent() {
            builder = builder.user_agent(user_agent);
        }
        let client = builder.build().map_err(|e| ParadexError::TransportFailure {
            url: base_url.clone(),
            status: None,
            message: e.to_string(),
        })?;

        Ok(Self { client, base_url })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(
        &self,
        method: &str,
        url: String,
        request: RequestBuilder,
        headers: Option<StringMap>,
    ) -> ParadexResult<serde_json::Value> {
        let mut request = request.header("Accept", "application/json");
        if let Some(headers) = headers {
            for (key, value) in headers {
                request = request.header(&key, &value);
            }
        }

        let response = request.send().await.map_err(|e| ParadexError::TransportFailure {
            url: url.clone(),
            status: None,
            message: e.to_string(),
        })?;

        let value = read_json(&url, response).await?;
        tracing::info!(%method, %url, "request completed");
        Ok(value)
    }
}

/// 상태 코드 확인 후 JSON 파싱 (빈 본문은 Null)
async fn read_json(url: &str, response: Response) -> ParadexResult<serde_json::Value> {
    let status = response.status();
    let body = response.text().await.map_err(|e| ParadexError::TransportFailure {
        url: url.to_string(),
        status: Some(status.as_u16()),
        message: e.to_string(),
    })?;

    if !status.is_success() {
        tracing::warn!(%url, status = status.as_u16(), "non-success response");
        return Err(ParadexError::TransportFailure {
            url: url.to_string(),
            status: Some(status.as_u16()),
            message: format!("HTTP {status}: {body}"),
        });
    }

    if body.trim().is_empty() {
        return Ok(serde_json::Value::Null);
    }
    Ok(serde_json::from_str(&body)?)
}

#[async_trait]
impl Transport for HttpClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    #[tracing::instrument(skip(self, params, headers))]
    async fn get(
        &self,
        path: &str,
        params: Option<StringMap>,
        headers: Option<StringMap>,
    ) -> ParadexResult<serde_json::Value> {
        let url = self.url(path);
        let mut request = self.client.get(&url);
        if let Some(params) = params {
            request = request.query(&params);
        }
        self.send("GET", url, request, headers).await
    }

    #[tracing::instrument(skip(self, body, headers))]
    async fn post(
        &self,
        path: &str,
        body: Option<serde_json::Value>,
        headers: Option<StringMap>,
    ) -> ParadexResult<serde_json::Value> {
        let url = self.url(path);
        let mut request = self.client.post(&url);
        if let Some(body) = body {
            request = request.json(&body);
        }
        self.send("POST", url, request, headers).await
    }

    #[tracing::instrument(skip(self, params, headers))]
    async fn delete(
        &self,
        path: &str,
        params: Option<StringMap>,
        headers: Option<StringMap>,
    ) -> ParadexResult<serde_json::Value> {
        let url = self.url(path);
        let mut request = self.client.delete(&url);
        if let Some(params) = params {
            request = request.query(&params);
        }
        self.send("DELETE", url, request, headers).await
    }
}
