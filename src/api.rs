//! 对外接口
//!
//! 每个操作的流程相同：
//!
//! ```text
//! 开启新会话 → 构造 URL → 带会话标识请求 → 检查状态
//!     → 检测验证码 →（解封 + 重试，再请求一次）→ 结构化
//! ```

use crate::cache::WechatCache;
use crate::clients::{HttpResponse, HttpSession, ReqwestSessionFactory, SessionFactory};
use crate::config::Config;
use crate::deblocking::{
    self, deblock_history, deblock_search, retry_deblocking, ChallengeContext, Deblockers,
    ImageIdentifier,
};
use crate::error::{Result, WechatSogouError};
use crate::logger::truncate_text;
use crate::models::{
    ArticleSearchItem, GzhHistory, GzhInfo, HotArticleItem, HotIndex, SearchArticleTime,
    SearchArticleType,
};
use crate::request;
use crate::structuring;
use chrono::NaiveDate;
use reqwest::header::HeaderMap;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// 验证码尝试次数的取值范围
const CAPTCHA_BREAK_TIMES_RANGE: std::ops::RangeInclusive<u8> = 1..=19;

/// 搜狗微信搜索客户端
///
/// 同一客户端的所有操作共享一份会话缓存；
/// 通过 `with_deblockers` / `with_image_identifier` 派生的客户端也共享它
#[derive(Clone)]
pub struct WechatSogouApi {
    captcha_break_times: u8,
    cache: WechatCache,
    sessions: Arc<dyn SessionFactory>,
    deblockers: Deblockers,
}

impl WechatSogouApi {
    /// 使用默认的 reqwest 会话创建客户端
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_session_factory(
            config,
            Arc::new(ReqwestSessionFactory::new(config.user_agent.clone())),
        )
    }

    /// 使用自定义会话工厂创建客户端
    pub fn with_session_factory(config: &Config, sessions: Arc<dyn SessionFactory>) -> Result<Self> {
        if !CAPTCHA_BREAK_TIMES_RANGE.contains(&config.captcha_break_times) {
            return Err(WechatSogouError::InvalidArgument(format!(
                "captcha_break_times 必须在 1..=19 之间，实际为 {}",
                config.captcha_break_times
            )));
        }

        Ok(Self {
            captcha_break_times: config.captcha_break_times,
            cache: WechatCache::new(),
            sessions,
            deblockers: Deblockers::from_config(config),
        })
    }

    /// 替换解封器，新客户端与当前客户端共享缓存
    pub fn with_deblockers(&self, deblockers: Deblockers) -> Self {
        Self {
            deblockers,
            ..self.clone()
        }
    }

    /// 沿用默认解封流程，只替换验证码识别
    pub fn with_image_identifier(&self, identifier: Arc<dyn ImageIdentifier>) -> Self {
        self.with_deblockers(Deblockers::with_identifier(identifier))
    }

    /// 使用外部提供的缓存
    pub fn with_cache(mut self, cache: WechatCache) -> Self {
        self.cache = cache;
        self
    }

    pub fn cache(&self) -> &WechatCache {
        &self.cache
    }

    pub fn captcha_break_times(&self) -> u8 {
        self.captcha_break_times
    }

    /// 获取公众号信息
    ///
    /// 微信号唯一确定一个公众号，所以只取搜索第一页的第一个结果
    ///
    /// # 返回
    /// 没有匹配时返回 `None`
    pub async fn get_gzh_info(&self, wechat_id_or_name: &str) -> Result<Option<GzhInfo>> {
        let list = self.search_gzh(wechat_id_or_name, 1).await?;
        Ok(list.into_iter().next())
    }

    /// 搜索公众号
    pub async fn search_gzh(&self, keyword: &str, page: u32) -> Result<Vec<GzhInfo>> {
        let url = request::gen_search_gzh_url(keyword, page)?;
        let session = self.sessions.open()?;

        let resp = self
            .fetch_search_surface("search_gzh", session.as_ref(), &url, None)
            .await?;

        let list = structuring::get_gzh_by_search(&resp.text())?;
        info!("✓ 公众号搜索 [{}] 第 {} 页: {} 个结果", keyword, page, list.len());
        Ok(list)
    }

    /// 搜索文章
    ///
    /// # 参数
    /// - `keyword`: 搜索文字
    /// - `page`: 页数，从 1 开始
    /// - `timesn`: 时间范围
    /// - `article_type`: 内容类型
    /// - `ft` / `et`: `timesn` 为 `Specific` 时的起止日期
    pub async fn search_article(
        &self,
        keyword: &str,
        page: u32,
        timesn: SearchArticleTime,
        article_type: SearchArticleType,
        ft: Option<NaiveDate>,
        et: Option<NaiveDate>,
    ) -> Result<Vec<ArticleSearchItem>> {
        let url = request::gen_search_article_url(keyword, page, timesn, article_type, ft, et)?;
        // 文章搜索会校验 Referer
        let referer = request::gen_search_article_referer(keyword)?;
        let session = self.sessions.open()?;

        let resp = self
            .fetch_search_surface("search_article", session.as_ref(), &url, Some(&referer))
            .await?;

        let list = structuring::get_article_by_search(&resp.text())?;
        info!("✓ 文章搜索 [{}] 第 {} 页: {} 个结果", keyword, page, list.len());
        Ok(list)
    }

    /// 按公众号名称或微信号获取最近群发
    ///
    /// 先搜索公众号拿到群发页链接，再解析群发页
    pub async fn get_gzh_article_by_history(&self, keyword: &str) -> Result<GzhHistory> {
        let profile_url = self
            .get_gzh_info(keyword)
            .await?
            .map(|gzh| gzh.profile_url)
            .filter(|url| !url.is_empty())
            .ok_or_else(|| WechatSogouError::AccountNotFound {
                keyword: keyword.to_string(),
            })?;

        self.get_gzh_article_by_history_url(&profile_url).await
    }

    /// 直接解析群发页
    pub async fn get_gzh_article_by_history_url(&self, url: &str) -> Result<GzhHistory> {
        let session = self.sessions.open()?;

        let mut resp = session.get(url, HeaderMap::new()).await?;
        ensure_success("get_gzh_article_by_history", &resp)?;

        if deblocking::is_history_blocked(&resp) {
            warn!("⚠️ 群发页需要验证码: {}", url);
            {
                let ctx = ChallengeContext::new(url, &resp, session.as_ref());
                let deblocker = self.deblockers.history.as_ref();
                retry_deblocking(self.captcha_break_times, |attempt| {
                    debug!("群发页解封尝试 {}/{}", attempt, self.captcha_break_times);
                    deblock_history(&ctx, deblocker)
                })
                .await?;
            }

            resp = session.get(url, HeaderMap::new()).await?;
            ensure_success("get_gzh_article_by_history", &resp)?;
        }

        structuring::get_gzh_info_and_article_by_history(&resp.text())
    }

    /// 获取首页热门文章
    pub async fn get_gzh_article_by_hot(
        &self,
        hot_index: HotIndex,
        page: u32,
    ) -> Result<Vec<HotArticleItem>> {
        let url = request::gen_hot_url(hot_index, page)?;
        let session = self.sessions.open()?;

        let resp = self
            .fetch_search_surface("get_hot_article", session.as_ref(), &url, None)
            .await?;

        let list = structuring::get_gzh_article_by_hot(&resp.text())?;
        info!("✓ 热门文章 [{}] 第 {} 页: {} 篇", hot_index, page, list.len());
        Ok(list)
    }

    /// 获取搜索联想词
    ///
    /// 匿名请求，不处理验证码
    pub async fn get_sugg(&self, keyword: &str) -> Result<Vec<Value>> {
        let url = request::gen_sugg_url(keyword)?;
        let session = self.sessions.open()?;

        let resp = session.get(&url, HeaderMap::new()).await?;
        ensure_success("get_sugg", &resp)?;

        let body = resp.text();
        debug!("联想响应: {}", truncate_text(&body, 200));
        structuring::get_sugg(&body, keyword)
    }

    /// 请求搜狗搜索页 / 热门页，被拦截时解封后重新请求一次
    async fn fetch_search_surface(
        &self,
        operation: &str,
        session: &dyn HttpSession,
        url: &str,
        referer: Option<&str>,
    ) -> Result<HttpResponse> {
        let headers = request::session_headers(&self.cache, referer)?;
        let resp = session.get(url, headers).await?;
        ensure_success(operation, &resp)?;

        if !deblocking::is_search_blocked(&resp) {
            return Ok(resp);
        }

        warn!("⚠️ {} 被重定向到验证码页: {}", operation, resp.url);
        {
            let ctx = ChallengeContext::new(url, &resp, session);
            let deblocker = self.deblockers.search.as_ref();
            retry_deblocking(self.captcha_break_times, |attempt| {
                debug!("{} 解封尝试 {}/{}", operation, attempt, self.captcha_break_times);
                deblock_search(&ctx, deblocker, &self.cache)
            })
            .await?;
        }

        // 解封后缓存已更新，重新生成请求头
        let headers = request::session_headers(&self.cache, referer)?;
        let resp = session.get(url, headers).await?;
        ensure_success(operation, &resp)?;
        Ok(resp)
    }
}

fn ensure_success(operation: &str, resp: &HttpResponse) -> Result<()> {
    if resp.is_success() {
        Ok(())
    } else {
        Err(WechatSogouError::request(operation, resp))
    }
}
