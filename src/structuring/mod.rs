//! 页面结构化
//!
//! 把搜狗微信 / 微信群发页的响应正文转换为结构化记录。
//! 这里只做纯数据转换，不发请求。

pub mod history;
pub mod hot;
pub mod search;
pub mod sugg;

pub use history::get_gzh_info_and_article_by_history;
pub use hot::get_gzh_article_by_hot;
pub use search::{get_article_by_search, get_gzh_by_search};
pub use sugg::get_sugg;

use crate::error::{Result, WechatSogouError};
use regex::Regex;
use scraper::{ElementRef, Selector};

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| WechatSogouError::Parse(format!("无效的选择器 {}: {:?}", css, e)))
}

/// 元素内全部文本，去掉首尾空白
fn element_text(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// 第一个匹配元素的文本
fn first_text(element: &ElementRef, css: &str) -> Result<String> {
    let sel = selector(css)?;
    Ok(element
        .select(&sel)
        .next()
        .map(|el| element_text(&el))
        .unwrap_or_default())
}

/// 第一个匹配元素的属性
fn first_attr(element: &ElementRef, css: &str, attr: &str) -> Result<String> {
    let sel = selector(css)?;
    Ok(element
        .select(&sel)
        .find_map(|el| el.value().attr(attr))
        .map(|v| v.trim().to_string())
        .unwrap_or_default())
}

/// 直接子元素中名为 `tag` 的元素
fn child_elements<'a>(
    element: ElementRef<'a>,
    tag: &'a str,
) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    element
        .children()
        .filter_map(ElementRef::wrap)
        .filter(move |el| el.value().name() == tag)
}

/// 从 `document.write(timeConvert('1500000000'))` 一类脚本中取时间戳
fn time_convert(text: &str) -> Result<Option<i64>> {
    let re = Regex::new(r"timeConvert\('(\d+)'\)")
        .map_err(|e| WechatSogouError::Parse(e.to_string()))?;
    Ok(re
        .captures(text)
        .and_then(|cap| cap.get(1))
        .and_then(|m| m.as_str().parse().ok()))
}
