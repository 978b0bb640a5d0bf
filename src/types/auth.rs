//! Auth token - JWT와 유효 기간

use serde::{Deserialize, Serialize};

use crate::errors::{ParadexError, ParadexResult};

/// `POST /auth`로 발급받은 JWT
///
/// 갱신은 호출자 책임입니다. 이 크레이트는 만료된 토큰을 거부만 합니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthToken {
    #[serde(rename = "jwt_token")]
    pub token: String,
    /// 만료 시각 (unix 초)
    pub expiry: i64,
    pub account_address: String,
}

impl AuthToken {
    pub fn new(token: impl Into<String>, expiry: i64, account_address: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            expiry,
            account_address: account_address.into(),
        }
    }

    /// `expiry < now` 이면 만료
    pub fn is_expired_at(&self, now_secs: i64) -> bool {
        self.expiry < now_secs
    }

    /// 만료된 토큰이면 `ExpiredToken`
    pub fn ensure_valid(&self, now_secs: i64) -> ParadexResult<()> {
        if self.is_expired_at(now_secs) {
            return Err(ParadexError::ExpiredToken {
                expiry: self.expiry,
                now: now_secs,
            });
        }
        Ok(())
    }

    /// Authorization 헤더 값
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}
