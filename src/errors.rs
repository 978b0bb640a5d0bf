//! Paradex Signer Error Types
//!
//! 키 파생 → 메시지 구성 → 서명 → 요청 조립 파이프라인의 오류 분류

use thiserror::Error;

/// Paradex 서명 파이프라인 오류
///
/// - InvalidKeyMaterial: 잘못된 형식/범위의 키 (복구 불가)
/// - InvalidOrderInput: 주문 필드 오류 (호출자가 다시 제출해야 함)
/// - SigningError: 서명 시점의 퇴화된 키 또는 인코딩 불가 메시지
/// - ConfigurationError: 네트워크 선택자/체인 설정 오류 (암호 연산 이전에 실패)
/// - TransportFailure: 비 2xx 응답 또는 네트워크 장애 (재시도 없음)
#[derive(Error, Debug)]
pub enum ParadexError {
    /// Ethereum/StarkNet 키 재료 오류
    #[error("Invalid key material: {message}")]
    InvalidKeyMaterial { message: String },

    /// 주문 입력 오류
    #[error("Invalid order input: {message}")]
    InvalidOrderInput { message: String },

    /// 서명 실패
    #[error("Signing error: {message}")]
    SigningError { message: String },

    /// 설정 오류
    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },

    /// HTTP 전송 실패
    #[error("Transport failure ({url}): {message}")]
    TransportFailure {
        url: String,
        status: Option<u16>,
        message: String,
    },

    /// 만료된 인증 토큰
    #[error("Auth token expired at {expiry} (now {now})")]
    ExpiredToken { expiry: i64, now: i64 },

    /// 응답 파싱 실패
    #[error("Parse error: {message}")]
    ParseError { message: String },
}

impl ParadexError {
    /// Returns the error code as a string constant
    pub fn code(&self) -> &'static str {
        match self {
            ParadexError::InvalidKeyMaterial { .. } => "INVALID_KEY_MATERIAL",
            ParadexError::InvalidOrderInput { .. } => "INVALID_ORDER_INPUT",
            ParadexError::SigningError { .. } => "SIGNING_ERROR",
            ParadexError::ConfigurationError { .. } => "CONFIGURATION_ERROR",
            ParadexError::TransportFailure { .. } => "TRANSPORT_FAILURE",
            ParadexError::ExpiredToken { .. } => "EXPIRED_TOKEN",
            ParadexError::ParseError { .. } => "PARSE_ERROR",
        }
    }

    /// 에러 페이로드의 `type` 필드에 쓰이는 이름
    pub fn kind(&self) -> &'static str {
        match self {
            ParadexError::InvalidKeyMaterial { .. } => "InvalidKeyMaterial",
            ParadexError::InvalidOrderInput { .. } => "InvalidOrderInput",
            ParadexError::SigningError { .. } => "SigningError",
            ParadexError::ConfigurationError { .. } => "ConfigurationError",
            ParadexError::TransportFailure { .. } => "TransportFailure",
            ParadexError::ExpiredToken { .. } => "ExpiredToken",
            ParadexError::ParseError { .. } => "ParseError",
        }
    }

    /// Returns true if the failure is external and a later attempt may succeed.
    /// This crate never retries on its own.
    pub fn is_retryable(&self) -> bool {
        match self {
            ParadexError::TransportFailure { status, .. } => match status {
                None => true,
                Some(code) => *code == 429 || *code >= 500,
            },
            _ => false,
        }
    }

    /// 키/서명 관련 오류로 재입력 없이는 복구할 수 없는 경우
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ParadexError::InvalidKeyMaterial { .. } | ParadexError::SigningError { .. }
        )
    }

    /// Returns true if the caller must fetch a new JWT before continuing
    pub fn is_auth_error(&self) -> bool {
        match self {
            ParadexError::ExpiredToken { .. } => true,
            ParadexError::TransportFailure { status, .. } => matches!(status, Some(401) | Some(403)),
            _ => false,
        }
    }

    pub(crate) fn key(message: impl Into<String>) -> Self {
        ParadexError::InvalidKeyMaterial {
            message: message.into(),
        }
    }

    pub(crate) fn order(message: impl Into<String>) -> Self {
        ParadexError::InvalidOrderInput {
            message: message.into(),
        }
    }

    pub(crate) fn signing(message: impl Into<String>) -> Self {
        ParadexError::SigningError {
            message: message.into(),
        }
    }

    pub(crate) fn config(message: impl Into<String>) -> Self {
        ParadexError::ConfigurationError {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for ParadexError {
    fn from(err: serde_json::Error) -> Self {
        ParadexError::ParseError {
            message: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for ParadexError {
    fn from(err: reqwest::Error) -> Self {
        let url = err.url().map(|u| u.to_string()).unwrap_or_default();
        let status = err.status().map(|s| s.as_u16());
        if err.is_timeout() {
            ParadexError::TransportFailure {
                url,
                status,
                message: "Request timed out".into(),
            }
        } else if err.is_connect() {
            ParadexError::TransportFailure {
                url,
                status,
                message: "Connection failed".into(),
            }
        } else {
            ParadexError::TransportFailure {
                url,
                status,
                message: err.to_string(),
            }
        }
    }
}

/// Result 타입 alias
pub type ParadexResult<T> = Result<T, ParadexError>;
