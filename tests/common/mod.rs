//! 测试用的脚本化会话与解封器

#![allow(dead_code)]

use async_trait::async_trait;
use reqwest::header::{HeaderMap, COOKIE, REFERER};
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use wechatsogou::clients::{HttpResponse, HttpSession, SessionFactory};
use wechatsogou::deblocking::{
    ChallengeContext, HistoryDeblocker, HistoryUnlockResult, ImageIdentifier, SearchDeblocker,
    SearchUnlockResult,
};
use wechatsogou::{Result, WechatSogouError};

/// 一次被记录的请求
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: &'static str,
    pub url: String,
    pub headers: HeaderMap,
    pub form: Vec<(String, String)>,
}

impl Recorded {
    pub fn cookie(&self) -> Option<&str> {
        self.headers.get(COOKIE).and_then(|v| v.to_str().ok())
    }

    pub fn referer(&self) -> Option<&str> {
        self.headers.get(REFERER).and_then(|v| v.to_str().ok())
    }

    pub fn form_value(&self, key: &str) -> Option<&str> {
        self.form
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// 按顺序返回预设响应，并记录所有请求
#[derive(Default)]
pub struct MockServer {
    responses: Mutex<VecDeque<HttpResponse>>,
    requests: Mutex<Vec<Recorded>>,
    cookies: Mutex<HashMap<String, String>>,
    sessions_opened: AtomicUsize,
}

impl MockServer {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push(&self, status: u16, url: &str, body: impl Into<Vec<u8>>) {
        self.responses
            .lock()
            .expect("lock")
            .push_back(HttpResponse::new(status, url, body));
    }

    pub fn set_cookie(&self, name: &str, value: &str) {
        self.cookies
            .lock()
            .expect("lock")
            .insert(name.to_string(), value.to_string());
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().expect("lock").clone()
    }

    pub fn sessions_opened(&self) -> usize {
        self.sessions_opened.load(Ordering::SeqCst)
    }

    pub fn remaining(&self) -> usize {
        self.responses.lock().expect("lock").len()
    }

    fn respond(
        &self,
        method: &'static str,
        url: &str,
        headers: HeaderMap,
        form: Vec<(String, String)>,
    ) -> Result<HttpResponse> {
        self.requests.lock().expect("lock").push(Recorded {
            method,
            url: url.to_string(),
            headers,
            form,
        });
        self.responses
            .lock()
            .expect("lock")
            .pop_front()
            .ok_or_else(|| WechatSogouError::InvalidResponse(format!("没有为 {} 预设响应", url)))
    }
}

pub struct MockSession {
    server: Arc<MockServer>,
}

#[async_trait]
impl HttpSession for MockSession {
    async fn get(&self, url: &str, headers: HeaderMap) -> Result<HttpResponse> {
        self.server.respond("GET", url, headers, Vec::new())
    }

    async fn post_form(
        &self,
        url: &str,
        form: &[(&str, String)],
        headers: HeaderMap,
    ) -> Result<HttpResponse> {
        let form = form
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();
        self.server.respond("POST", url, headers, form)
    }

    fn cookie(&self, _url: &str, name: &str) -> Option<String> {
        self.server.cookies.lock().expect("lock").get(name).cloned()
    }
}

pub struct MockFactory {
    pub server: Arc<MockServer>,
}

impl MockFactory {
    pub fn new(server: &Arc<MockServer>) -> Arc<Self> {
        Arc::new(Self {
            server: Arc::clone(server),
        })
    }
}

impl SessionFactory for MockFactory {
    fn open(&self) -> Result<Box<dyn HttpSession>> {
        self.server.sessions_opened.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(MockSession {
            server: Arc::clone(&self.server),
        }))
    }
}

pub fn mock_session(server: &Arc<MockServer>) -> MockSession {
    MockSession {
        server: Arc::clone(server),
    }
}

/// 固定返回同一个验证码
pub struct StubIdentifier(pub &'static str);

#[async_trait]
impl ImageIdentifier for StubIdentifier {
    async fn identify(&self, _image: &[u8]) -> Result<String> {
        Ok(self.0.to_string())
    }
}

/// 按顺序返回预设结果的搜索页解封器
#[derive(Default)]
pub struct ScriptedSearchDeblocker {
    results: Mutex<VecDeque<SearchUnlockResult>>,
    images: Mutex<Vec<Vec<u8>>>,
    calls: AtomicUsize,
}

impl ScriptedSearchDeblocker {
    pub fn new(results: Vec<SearchUnlockResult>) -> Arc<Self> {
        Arc::new(Self {
            results: Mutex::new(results.into()),
            ..Self::default()
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn images(&self) -> Vec<Vec<u8>> {
        self.images.lock().expect("lock").clone()
    }
}

#[async_trait]
impl SearchDeblocker for ScriptedSearchDeblocker {
    async fn unlock(&self, _ctx: &ChallengeContext<'_>, image: &[u8]) -> Result<SearchUnlockResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.images.lock().expect("lock").push(image.to_vec());
        self.results
            .lock()
            .expect("lock")
            .pop_front()
            .ok_or_else(|| WechatSogouError::InvalidResponse("没有预设解封结果".to_string()))
    }
}

/// 按顺序返回预设结果的群发页解封器
#[derive(Default)]
pub struct ScriptedHistoryDeblocker {
    results: Mutex<VecDeque<HistoryUnlockResult>>,
    calls: AtomicUsize,
}

impl ScriptedHistoryDeblocker {
    pub fn new(results: Vec<HistoryUnlockResult>) -> Arc<Self> {
        Arc::new(Self {
            results: Mutex::new(results.into()),
            ..Self::default()
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HistoryDeblocker for ScriptedHistoryDeblocker {
    async fn unlock(&self, _ctx: &ChallengeContext<'_>, _image: &[u8]) -> Result<HistoryUnlockResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.results
            .lock()
            .expect("lock")
            .pop_front()
            .ok_or_else(|| WechatSogouError::InvalidResponse("没有预设解封结果".to_string()))
    }
}

pub fn search_ok(id: &str) -> SearchUnlockResult {
    SearchUnlockResult {
        code: 0,
        msg: "解封成功".to_string(),
        id: Some(id.to_string()),
    }
}

pub fn search_rejected(code: i64, msg: &str) -> SearchUnlockResult {
    SearchUnlockResult {
        code,
        msg: msg.to_string(),
        id: None,
    }
}

pub fn history_result(ret: i64, errmsg: &str, cookie_count: i64) -> HistoryUnlockResult {
    HistoryUnlockResult {
        ret,
        errmsg: errmsg.to_string(),
        cookie_count,
    }
}

pub const GZH_SEARCH_HTML: &str = r##"
<html><body>
<ul class="news-list2">
    <li>
        <div class="gzh-box2">
            <div class="img-box"><a href="https://mp.weixin.qq.com/profile?src=3&amp;id=rust"><img src="head.png"></a></div>
            <div class="txt-box">
                <p class="tit"><a href="#">Rust 语言中文社区</a></p>
                <p class="info">微信号：<label>rustlang_cn</label></p>
            </div>
        </div>
    </li>
</ul>
</body></html>
"##;

pub const EMPTY_SEARCH_HTML: &str =
    r#"<html><body><div id="noresult_part1_container">暂无与搜索词相关的公众号</div></body></html>"#;

pub const ARTICLE_SEARCH_HTML: &str = r##"
<html><body>
<ul class="news-list">
    <li>
        <div class="txt-box">
            <h3><a href="http://mp.weixin.qq.com/s?src=11&amp;sn=1">所有权与借用</a></h3>
            <p class="txt-info">一篇关于借用检查器的文章</p>
            <div class="s-p" t="1500000000"><a class="account" data-isV="1" data-headimage="h" href="p">Rust 周刊</a></div>
        </div>
    </li>
</ul>
</body></html>
"##;

pub const HISTORY_HTML: &str = r##"
<html><body>
<strong class="profile_nickname">Rust 语言中文社区</strong>
<p class="profile_account">微信号: rustlang_cn</p>
<script>
    var msgList = {"list":[{"comm_msg_info":{"id":1,"type":49,"datetime":1500000000},"app_msg_ext_info":{"title":"生命周期","digest":"摘要","fileid":7,"content_url":"\/s?id=1&amp;idx=1","source_url":"","cover":"","author":"","copyright_stat":11,"multi_app_msg_item_list":[]}}]};
</script>
</body></html>
"##;

pub const HISTORY_BLOCKED_HTML: &str =
    r#"<html><body><p>为了保护你的网络安全，请输入验证码</p><img id="verify_img"></body></html>"#;

pub const ANTISPIDER_URL: &str =
    "http://weixin.sogou.com/antispider/?from=%2fweixin%3Ftype%3d1%26query%3drust";
