use serde::{Deserialize, Serialize};

/// 搜索结果中的文章
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchArticle {
    pub title: String,
    pub url: String,
    /// 文章图片
    pub imgs: Vec<String>,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    /// 推送时间，10位时间戳
    pub time: Option<i64>,
}

/// 搜索结果中文章所属的公众号
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchArticleGzh {
    pub profile_url: String,
    pub headimage: String,
    pub wechat_name: String,
    /// 是否加v
    pub isv: bool,
}

/// 文章搜索的一条结果
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArticleSearchItem {
    pub article: SearchArticle,
    pub gzh: SearchArticleGzh,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HotGzh {
    pub headimage: String,
    pub wechat_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HotArticle {
    /// 文章临时链接
    pub url: String,
    pub title: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    /// 推送时间，10位时间戳
    pub time: Option<i64>,
    pub open_id: String,
    /// 封面图片
    pub main_img: String,
}

/// 首页热门文章的一条结果
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HotArticleItem {
    pub gzh: HotGzh,
    pub article: HotArticle,
}
