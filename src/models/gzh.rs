use serde::{Deserialize, Serialize};

/// 搜索结果中的公众号
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GzhInfo {
    /// 最近10条群发页链接
    pub profile_url: String,
    /// 头像
    pub headimage: String,
    /// 名称
    pub wechat_name: String,
    /// 微信号
    pub wechat_id: String,
    /// 最近一月群发数
    pub post_perm: Option<u32>,
    /// 二维码
    pub qrcode: String,
    /// 功能介绍
    pub introduction: String,
    /// 认证
    pub authentication: String,
}

/// 群发页中的公众号信息
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryGzh {
    pub wechat_name: String,
    pub wechat_id: String,
    pub introduction: String,
    pub authentication: String,
    pub headimage: String,
}

/// 群发页中的一篇文章
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryArticle {
    /// 群发id，同一次群发的多篇文章共用
    pub send_id: i64,
    /// 群发时间，10位时间戳
    pub datetime: i64,
    /// 消息类型，图文为 49
    #[serde(rename = "type")]
    pub msg_type: i64,
    /// 是否为一次群发中的头条
    pub main: u8,
    pub title: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub fileid: i64,
    pub content_url: String,
    /// 阅读原文链接
    pub source_url: String,
    /// 封面图
    pub cover: String,
    pub author: String,
    /// 文章类型，例如原创为 11
    pub copyright_stat: i64,
}

/// 群发页解析结果
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GzhHistory {
    pub gzh: HistoryGzh,
    pub article: Vec<HistoryArticle>,
}
