//! HTTP 会话
//!
//! 每个公开操作独占一个会话，验证码处理期间复用同一会话，
//! 使解封过程中下发的 Cookie 作用于重试请求
use crate::error::Result;
use async_trait::async_trait;
use reqwest::cookie::{CookieStore, Jar};
use reqwest::header::HeaderMap;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::debug;

/// 已读取完毕的响应
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP 状态码
    pub status: u16,
    /// 跟随重定向后的最终 URL
    pub url: String,
    /// 响应体
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, url: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            url: url.into(),
            body: body.into(),
        }
    }

    /// 是否为 2xx
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// 以 UTF-8 解码响应体
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// 反序列化 JSON 响应体
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    async fn read(resp: reqwest::Response) -> Result<Self> {
        let status = resp.status().as_u16();
        let url = resp.url().to_string();
        let body = resp.bytes().await?.to_vec();
        debug!("响应: status={}, url={}, {} 字节", status, url, body.len());
        Ok(Self { status, url, body })
    }
}

/// 带 Cookie 状态的 HTTP 会话
#[async_trait]
pub trait HttpSession: Send + Sync {
    /// 发送 GET 请求
    async fn get(&self, url: &str, headers: HeaderMap) -> Result<HttpResponse>;

    /// 以 `application/x-www-form-urlencoded` 发送 POST 请求
    async fn post_form(
        &self,
        url: &str,
        form: &[(&str, String)],
        headers: HeaderMap,
    ) -> Result<HttpResponse>;

    /// 读取会话中对 `url` 生效的 Cookie
    fn cookie(&self, url: &str, name: &str) -> Option<String>;
}

/// 会话工厂，每次调用开启一个全新的会话
pub trait SessionFactory: Send + Sync {
    fn open(&self) -> Result<Box<dyn HttpSession>>;
}

/// 基于 reqwest 的会话实现
pub struct ReqwestSession {
    client: Client,
    jar: Arc<Jar>,
}

impl ReqwestSession {
    /// 创建新会话
    ///
    /// 不设置超时，由底层传输决定
    pub fn new(user_agent: &str) -> Result<Self> {
        let jar = Arc::new(Jar::default());
        let client = Client::builder()
            .cookie_provider(Arc::clone(&jar))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client, jar })
    }
}

#[async_trait]
impl HttpSession for ReqwestSession {
    async fn get(&self, url: &str, headers: HeaderMap) -> Result<HttpResponse> {
        debug!("GET {}", url);
        let resp = self.client.get(url).headers(headers).send().await?;
        HttpResponse::read(resp).await
    }

    async fn post_form(
        &self,
        url: &str,
        form: &[(&str, String)],
        headers: HeaderMap,
    ) -> Result<HttpResponse> {
        debug!("POST {}", url);
        let resp = self
            .client
            .post(url)
            .headers(headers)
            .form(form)
            .send()
            .await?;
        HttpResponse::read(resp).await
    }

    fn cookie(&self, url: &str, name: &str) -> Option<String> {
        let url = Url::parse(url).ok()?;
        let header = self.jar.cookies(&url)?;
        parse_cookie_header(header.to_str().ok()?, name)
    }
}

/// 默认会话工厂
pub struct ReqwestSessionFactory {
    user_agent: String,
}

impl ReqwestSessionFactory {
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
        }
    }
}

impl SessionFactory for ReqwestSessionFactory {
    fn open(&self) -> Result<Box<dyn HttpSession>> {
        Ok(Box::new(ReqwestSession::new(&self.user_agent)?))
    }
}

/// 从 `a=1; b=2` 形式的 Cookie 头中取值
pub fn parse_cookie_header(header: &str, name: &str) -> Option<String> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
}
