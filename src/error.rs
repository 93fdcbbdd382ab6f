use thiserror::Error;

use crate::clients::HttpResponse;

/// 搜狗微信客户端错误类型
#[derive(Debug, Error)]
pub enum WechatSogouError {
    /// 请求返回了非 2xx 状态
    #[error("请求失败 ({operation}): status={status}, url={url}")]
    Request {
        operation: String,
        status: u16,
        url: String,
    },

    /// 网络层错误
    #[error("网络错误: {0}")]
    Http(#[from] reqwest::Error),

    /// 验证码被远端拒绝
    #[error("验证码识别失败: code: {code}, msg: {msg}{}", cookie_count_suffix(.cookie_count))]
    VcodeRejected {
        code: i64,
        msg: String,
        cookie_count: Option<i64>,
    },

    /// 按关键词找不到公众号
    #[error("没有找到公众号: {keyword}")]
    AccountNotFound { keyword: String },

    /// 远端返回内容不符合预期
    #[error("响应格式异常: {0}")]
    InvalidResponse(String),

    /// 页面解析失败
    #[error("页面解析失败: {0}")]
    Parse(String),

    /// JSON 解析失败
    #[error("JSON解析失败: {0}")]
    Json(#[from] serde_json::Error),

    /// 参数不合法
    #[error("参数错误: {0}")]
    InvalidArgument(String),

    /// 读写验证码图片或标准输入失败
    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),
}

fn cookie_count_suffix(cookie_count: &Option<i64>) -> String {
    cookie_count
        .map(|c| format!(", cookie_count: {}", c))
        .unwrap_or_default()
}

// ========== 便捷构造函数 ==========

impl WechatSogouError {
    /// 由失败的响应创建请求错误
    pub fn request(operation: impl Into<String>, resp: &HttpResponse) -> Self {
        WechatSogouError::Request {
            operation: operation.into(),
            status: resp.status,
            url: resp.url.clone(),
        }
    }

    /// 搜索页验证码被拒绝
    pub fn search_rejected(code: i64, msg: impl Into<String>) -> Self {
        WechatSogouError::VcodeRejected {
            code,
            msg: msg.into(),
            cookie_count: None,
        }
    }

    /// 历史页验证码被拒绝
    pub fn history_rejected(code: i64, msg: impl Into<String>, cookie_count: i64) -> Self {
        WechatSogouError::VcodeRejected {
            code,
            msg: msg.into(),
            cookie_count: Some(cookie_count),
        }
    }

    /// 是否为传输层错误（不重试）
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            WechatSogouError::Request { .. } | WechatSogouError::Http(_)
        )
    }

    /// 是否为验证码被拒绝（可重试）
    pub fn is_vcode_rejected(&self) -> bool {
        matches!(self, WechatSogouError::VcodeRejected { .. })
    }
}

/// 结果类型别名
pub type Result<T> = std::result::Result<T, WechatSogouError>;
