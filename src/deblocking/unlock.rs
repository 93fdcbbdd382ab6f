//! 默认解封器
//!
//! 识别验证码后提交到远端校验接口，返回远端的结构化结果
use super::identify::ImageIdentifier;
use super::ChallengeContext;
use crate::error::{Result, WechatSogouError};
use crate::request::header_value;
use async_trait::async_trait;
use chrono::Utc;
use reqwest::header::{HeaderMap, CONTENT_TYPE, HOST, REFERER};
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

const SOGOU_UNLOCK_URL: &str = "http://weixin.sogou.com/antispider/thank.php";
const WEIXIN_UNLOCK_URL: &str = "https://mp.weixin.qq.com/mp/verifycode";
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=UTF-8";

/// 搜索页解封结果
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchUnlockResult {
    /// 0 表示成功
    pub code: i64,
    #[serde(default)]
    pub msg: String,
    /// 成功时下发的 SNUID
    #[serde(default)]
    pub id: Option<String>,
}

/// 群发页解封结果
///
/// 成功后 Cookie 已在会话中刷新，不返回新的标识
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HistoryUnlockResult {
    /// 0 表示成功
    pub ret: i64,
    #[serde(default)]
    pub errmsg: String,
    #[serde(default)]
    pub cookie_count: i64,
}

/// 处理搜索页验证码的完整流程
#[async_trait]
pub trait SearchDeblocker: Send + Sync {
    /// # 参数
    /// - `ctx`: 被拦截的请求、拦截响应与当前会话
    /// - `image`: 验证码图片
    async fn unlock(&self, ctx: &ChallengeContext<'_>, image: &[u8]) -> Result<SearchUnlockResult>;
}

/// 处理群发页验证码的完整流程
#[async_trait]
pub trait HistoryDeblocker: Send + Sync {
    async fn unlock(&self, ctx: &ChallengeContext<'_>, image: &[u8]) -> Result<HistoryUnlockResult>;
}

/// 搜狗搜索页默认解封器
pub struct SogouUnlocker {
    identifier: Arc<dyn ImageIdentifier>,
}

impl SogouUnlocker {
    pub fn new(identifier: Arc<dyn ImageIdentifier>) -> Self {
        Self { identifier }
    }
}

#[async_trait]
impl SearchDeblocker for SogouUnlocker {
    async fn unlock(&self, ctx: &ChallengeContext<'_>, image: &[u8]) -> Result<SearchUnlockResult> {
        let url_quote = ctx
            .url
            .rsplit("weixin.sogou.com/")
            .next()
            .unwrap_or(ctx.url);
        let code = self.identifier.identify(image).await?;
        debug!("搜索页验证码识别结果: {}", code);

        let form = [
            ("c", code),
            ("r", format!("%2F{}", url_quote)),
            ("v", "5".to_string()),
        ];

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, header_value(FORM_CONTENT_TYPE)?);
        headers.insert(
            REFERER,
            header_value(&format!(
                "http://weixin.sogou.com/antispider/?from=%2f{}",
                url_quote
            ))?,
        );

        let resp = ctx.session.post_form(SOGOU_UNLOCK_URL, &form, headers).await?;
        if !resp.is_success() {
            return Err(WechatSogouError::search_rejected(
                i64::from(resp.status),
                format!("unlock[{}] failed: {}", SOGOU_UNLOCK_URL, resp.text()),
            ));
        }

        resp.json()
    }
}

/// 微信群发页默认解封器
pub struct WeixinUnlocker {
    identifier: Arc<dyn ImageIdentifier>,
}

impl WeixinUnlocker {
    pub fn new(identifier: Arc<dyn ImageIdentifier>) -> Self {
        Self { identifier }
    }
}

#[async_trait]
impl HistoryDeblocker for WeixinUnlocker {
    async fn unlock(&self, ctx: &ChallengeContext<'_>, image: &[u8]) -> Result<HistoryUnlockResult> {
        let code = self.identifier.identify(image).await?;
        debug!("群发页验证码识别结果: {}", code);

        let form = [
            ("cert", Utc::now().timestamp_millis().to_string()),
            ("input", code),
        ];

        let mut headers = HeaderMap::new();
        headers.insert(HOST, header_value("mp.weixin.qq.com")?);
        headers.insert(CONTENT_TYPE, header_value(FORM_CONTENT_TYPE)?);
        headers.insert(REFERER, header_value(ctx.url)?);

        let resp = ctx.session.post_form(WEIXIN_UNLOCK_URL, &form, headers).await?;
        if !resp.is_success() {
            return Err(WechatSogouError::history_rejected(
                i64::from(resp.status),
                format!("unlock[{}] failed: {}", WEIXIN_UNLOCK_URL, resp.text()),
                0,
            ));
        }

        resp.json()
    }
}
