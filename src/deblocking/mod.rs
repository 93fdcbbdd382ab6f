//! 验证码解封
//!
//! ## 流程
//!
//! ```text
//! 请求被拦截（搜索页跳转到 antispider / 群发页要求输入验证码）
//!     ↓
//! retry::retry_deblocking（最多 captcha_break_times 次，只重试被拒绝的验证码）
//!     ↓
//! resolver::deblock_search / deblock_history（拉取验证码图片 → 解封器 → 校验结果）
//!     ↓
//! unlock::SearchDeblocker / HistoryDeblocker（默认实现调用 ImageIdentifier 识别后提交）
//! ```
//!
//! 搜索页与群发页的验证码接口、返回字段、成功后的副作用都不同，分别实现。

pub mod identify;
pub mod resolver;
pub mod retry;
pub mod unlock;

pub use identify::{ConsoleIdentifier, ImageIdentifier};
pub use resolver::{deblock_history, deblock_search};
pub use retry::retry_deblocking;
pub use unlock::{
    HistoryDeblocker, HistoryUnlockResult, SearchDeblocker, SearchUnlockResult, SogouUnlocker,
    WeixinUnlocker,
};

use crate::clients::{HttpResponse, HttpSession};
use crate::config::Config;
use std::sync::Arc;

/// 搜索页被拦截时最终 URL 中出现的片段
pub const ANTISPIDER_MARKER: &str = "antispider";

/// 群发页被拦截时正文中出现的提示
pub const HISTORY_VERIFY_PROMPT: &str = "请输入验证码";

/// 搜索页 / 热门页是否被拦截
pub fn is_search_blocked(resp: &HttpResponse) -> bool {
    resp.url.contains(ANTISPIDER_MARKER)
}

/// 群发页是否被拦截
pub fn is_history_blocked(resp: &HttpResponse) -> bool {
    resp.text().contains(HISTORY_VERIFY_PROMPT)
}

/// 一次解封所需的上下文
///
/// 只在一次解封尝试期间存在，不做持久化
pub struct ChallengeContext<'a> {
    /// 被拦截的原始请求 URL
    pub url: &'a str,
    /// 拦截响应
    pub response: &'a HttpResponse,
    /// 发起原始请求的会话，解封请求沿用它以共享 Cookie
    pub session: &'a dyn HttpSession,
}

impl<'a> ChallengeContext<'a> {
    pub fn new(url: &'a str, response: &'a HttpResponse, session: &'a dyn HttpSession) -> Self {
        Self {
            url,
            response,
            session,
        }
    }
}

/// 搜索页与群发页的解封器
#[derive(Clone)]
pub struct Deblockers {
    pub search: Arc<dyn SearchDeblocker>,
    pub history: Arc<dyn HistoryDeblocker>,
}

impl Deblockers {
    pub fn new(search: Arc<dyn SearchDeblocker>, history: Arc<dyn HistoryDeblocker>) -> Self {
        Self { search, history }
    }

    /// 默认解封流程，只替换图片识别
    pub fn with_identifier(identifier: Arc<dyn ImageIdentifier>) -> Self {
        Self {
            search: Arc::new(SogouUnlocker::new(Arc::clone(&identifier))),
            history: Arc::new(WeixinUnlocker::new(identifier)),
        }
    }

    /// 默认解封流程，验证码由控制台手动输入
    pub fn from_config(config: &Config) -> Self {
        Self::with_identifier(Arc::new(ConsoleIdentifier::new(&config.captcha_image_path)))
    }
}
