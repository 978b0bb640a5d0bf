//! Time utilities

use chrono::Utc;

/// 현재 UTC 타임스탬프 (초)
pub fn now_secs() -> i64 {
    Utc::now().timestamp()
}
