//! Client configuration

/// 기본 요청 타임아웃 (밀리초)
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// HTTP 클라이언트 설정
#[derive(Debug, Clone)]
pub struct ClientConfig {
    timeout_ms: u64,
    base_url: Option<String>,
    user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self {
            timeout_ms: DEFAULT_TIMEOUT_MS,
            base_url: None,
            user_agent: None,
        }
    }

    /// 타임아웃 설정 (밀리초)
    pub fn with_timeout(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// 네트워크 기본 URL 대신 사용할 URL (테스트/프록시)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    // === Getters ===

    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    pub fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }
}
