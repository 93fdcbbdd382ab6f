//! 公众号群发页解析
//!
//! 群发页的文章列表以 `var msgList = {...};` 的形式嵌在脚本里

use super::{first_attr, first_text, selector};
use crate::error::{Result, WechatSogouError};
use crate::models::{GzhHistory, HistoryArticle, HistoryGzh};
use regex::Regex;
use scraper::Html;
use serde::Deserialize;

const WEIXIN_HOST: &str = "https://mp.weixin.qq.com";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct MsgList {
    list: Vec<MsgItem>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct MsgItem {
    comm_msg_info: CommMsgInfo,
    app_msg_ext_info: Option<AppMsgInfo>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CommMsgInfo {
    id: i64,
    #[serde(rename = "type")]
    msg_type: i64,
    datetime: i64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AppMsgInfo {
    title: String,
    digest: String,
    fileid: i64,
    content_url: String,
    source_url: String,
    cover: String,
    author: String,
    copyright_stat: i64,
    multi_app_msg_item_list: Vec<AppMsgInfo>,
}

/// 解析群发页中的公众号信息与文章列表
pub fn get_gzh_info_and_article_by_history(html: &str) -> Result<GzhHistory> {
    let gzh = parse_profile(html)?;
    let msg_list = extract_msg_list(html)?;

    let mut article = Vec::new();
    for item in msg_list.list {
        let Some(app_msg) = item.app_msg_ext_info else {
            continue;
        };
        let info = &item.comm_msg_info;

        article.push(to_article(info, &app_msg, 1));
        for sub in &app_msg.multi_app_msg_item_list {
            article.push(to_article(info, sub, 0));
        }
    }

    Ok(GzhHistory { gzh, article })
}

fn parse_profile(html: &str) -> Result<HistoryGzh> {
    let document = Html::parse_document(html);
    let root = document.root_element();

    let account = first_text(&root, ".profile_account")?;
    let wechat_id = account
        .rsplit(|c: char| c == ':' || c == '：')
        .next()
        .unwrap_or_default()
        .trim()
        .to_string();

    let mut gzh = HistoryGzh {
        wechat_name: first_text(&root, ".profile_nickname")?,
        wechat_id,
        headimage: first_attr(&root, ".radius_avatar img", "src")?,
        ..HistoryGzh::default()
    };

    let desc_selector = selector("ul.profile_desc li")?;
    for li in root.select(&desc_selector) {
        let label = first_text(&li, ".profile_desc_label")?;
        let value = first_text(&li, ".profile_desc_value")?;
        if label.contains("功能介绍") {
            gzh.introduction = value;
        } else {
            gzh.authentication = value;
        }
    }

    Ok(gzh)
}

fn extract_msg_list(html: &str) -> Result<MsgList> {
    let re = Regex::new(r"(?ms)var msgList = (\{.*?\});\s*$")
        .map_err(|e| WechatSogouError::Parse(e.to_string()))?;
    let raw = re
        .captures(html)
        .and_then(|cap| cap.get(1))
        .ok_or_else(|| WechatSogouError::Parse("群发页中没有找到 msgList".to_string()))?;

    Ok(serde_json::from_str(raw.as_str())?)
}

fn to_article(info: &CommMsgInfo, msg: &AppMsgInfo, main: u8) -> HistoryArticle {
    HistoryArticle {
        send_id: info.id,
        datetime: info.datetime,
        msg_type: info.msg_type,
        main,
        title: unescape(&msg.title),
        abstract_text: unescape(&msg.digest),
        fileid: msg.fileid,
        content_url: absolute_url(&msg.content_url),
        source_url: unescape(&msg.source_url),
        cover: unescape(&msg.cover),
        author: unescape(&msg.author),
        copyright_stat: msg.copyright_stat,
    }
}

fn unescape(text: &str) -> String {
    text.replace("&amp;", "&")
        .replace("&quot;", "\"")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
}

fn absolute_url(url: &str) -> String {
    let url = unescape(url);
    if url.starts_with('/') {
        format!("{}{}", WEIXIN_HOST, url)
    } else {
        url
    }
}
