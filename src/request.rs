//! 请求构造
//!
//! 生成各操作的目标 URL，以及携带会话标识的请求头

use crate::cache::WechatCache;
use crate::error::{Result, WechatSogouError};
use crate::models::{HotIndex, SearchArticleTime, SearchArticleType};
use chrono::NaiveDate;
use reqwest::header::{HeaderMap, HeaderValue, COOKIE, REFERER};
use reqwest::Url;

const SEARCH_URL: &str = "http://weixin.sogou.com/weixin";
const HOT_URL: &str = "http://weixin.sogou.com/wapindex/wap/0612";
const SUGG_URL: &str = "http://w.sugg.sogou.com/sugg/ajaj_json.jsp";

const SEARCH_TYPE_GZH: &str = "1";
const SEARCH_TYPE_ARTICLE: &str = "2";

fn check_page(page: u32) -> Result<()> {
    if page == 0 {
        return Err(WechatSogouError::InvalidArgument(
            "页数必须从 1 开始".to_string(),
        ));
    }
    Ok(())
}

fn build_url(base: &str, params: &[(&str, String)]) -> Result<String> {
    Url::parse_with_params(base, params)
        .map(String::from)
        .map_err(|e| WechatSogouError::InvalidArgument(format!("无法构造 URL {}: {}", base, e)))
}

/// 公众号搜索 URL
pub fn gen_search_gzh_url(keyword: &str, page: u32) -> Result<String> {
    check_page(page)?;
    build_url(
        SEARCH_URL,
        &[
            ("type", SEARCH_TYPE_GZH.to_string()),
            ("page", page.to_string()),
            ("ie", "utf8".to_string()),
            ("query", keyword.to_string()),
        ],
    )
}

/// 文章搜索 URL
///
/// # 参数
/// - `timesn`: 时间范围，`Specific` 时必须同时提供 `ft` 与 `et`
/// - `article_type`: 内容类型
/// - `ft` / `et`: 自定义起止日期，其余时间范围下忽略
pub fn gen_search_article_url(
    keyword: &str,
    page: u32,
    timesn: SearchArticleTime,
    article_type: SearchArticleType,
    ft: Option<NaiveDate>,
    et: Option<NaiveDate>,
) -> Result<String> {
    check_page(page)?;

    let (ft, et) = match timesn {
        SearchArticleTime::Specific => match (ft, et) {
            (Some(ft), Some(et)) if ft <= et => (ft.to_string(), et.to_string()),
            (Some(_), Some(_)) => {
                return Err(WechatSogouError::InvalidArgument(
                    "开始日期不能晚于结束日期".to_string(),
                ))
            }
            _ => {
                return Err(WechatSogouError::InvalidArgument(
                    "自定义时间范围需要同时提供开始和结束日期".to_string(),
                ))
            }
        },
        _ => (String::new(), String::new()),
    };

    let mut params = vec![
        ("type", SEARCH_TYPE_ARTICLE.to_string()),
        ("page", page.to_string()),
        ("ie", "utf8".to_string()),
        ("query", keyword.to_string()),
        ("interation", article_type.interation()),
    ];
    if timesn != SearchArticleTime::Anytime {
        params.push(("tsn", timesn.code().to_string()));
        params.push(("ft", ft));
        params.push(("et", et));
    }

    build_url(SEARCH_URL, &params)
}

/// 文章搜索的 Referer，即第一页、不带任何过滤条件的搜索 URL
pub fn gen_search_article_referer(keyword: &str) -> Result<String> {
    gen_search_article_url(
        keyword,
        1,
        SearchArticleTime::Anytime,
        SearchArticleType::All,
        None,
        None,
    )
}

/// 首页热门文章 URL
pub fn gen_hot_url(hot_index: HotIndex, page: u32) -> Result<String> {
    check_page(page)?;
    Ok(format!(
        "{}/wap_{}/{}.html",
        HOT_URL,
        hot_index.code(),
        page - 1
    ))
}

/// 搜索联想 URL
pub fn gen_sugg_url(keyword: &str) -> Result<String> {
    build_url(
        SUGG_URL,
        &[
            ("key", keyword.to_string()),
            ("type", "wxpub".to_string()),
            ("pr", "web".to_string()),
        ],
    )
}

/// 构造携带 `SUV` / `SNUID` 的请求头
///
/// 缓存为空时对应字段留空
pub fn session_headers(cache: &WechatCache, referer: Option<&str>) -> Result<HeaderMap> {
    let cookie = format!(
        "SUV={};SNUID={};",
        cache.suv().unwrap_or_default(),
        cache.snuid().unwrap_or_default()
    );

    let mut headers = HeaderMap::new();
    headers.insert(COOKIE, header_value(&cookie)?);
    if let Some(referer) = referer {
        headers.insert(REFERER, header_value(referer)?);
    }
    Ok(headers)
}

pub(crate) fn header_value(value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|e| WechatSogouError::InvalidArgument(format!("非法请求头 {}: {}", value, e)))
}
