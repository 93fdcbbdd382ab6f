//! 单次解封尝试
//!
//! 拉取验证码图片，交给解封器，再校验结果。
//! 结果码非 0 时返回 `VcodeRejected`，不会改动缓存。

use super::unlock::{HistoryDeblocker, SearchDeblocker};
use super::ChallengeContext;
use crate::cache::WechatCache;
use crate::error::{Result, WechatSogouError};
use chrono::Utc;
use reqwest::header::HeaderMap;
use tracing::{debug, info};

const SEARCH_CAPTCHA_URL: &str = "http://weixin.sogou.com/antispider/util/seccode.php";
const HISTORY_CAPTCHA_URL: &str = "https://mp.weixin.qq.com/mp/verifycode";

/// 读取 SUID 时使用的域
const SOGOU_COOKIE_URL: &str = "http://weixin.sogou.com/";

/// 解封搜索页
///
/// 成功后把会话中的 `SUID` 与返回的 id 写入缓存，作为后续请求的 `SUV` / `SNUID`
pub async fn deblock_search(
    ctx: &ChallengeContext<'_>,
    deblocker: &dyn SearchDeblocker,
    cache: &WechatCache,
) -> Result<()> {
    let captcha_url = format!(
        "{}?tc={}",
        SEARCH_CAPTCHA_URL,
        Utc::now().timestamp_millis()
    );
    debug!("获取搜索页验证码: {}", captcha_url);

    let r_captcha = ctx.session.get(&captcha_url, HeaderMap::new()).await?;
    if !r_captcha.is_success() {
        return Err(WechatSogouError::request("deblocking_search get img", &r_captcha));
    }

    let result = deblocker.unlock(ctx, &r_captcha.body).await?;
    if result.code != 0 {
        return Err(WechatSogouError::search_rejected(result.code, result.msg));
    }

    let snuid = result
        .id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| WechatSogouError::InvalidResponse("解封成功但没有返回 SNUID".to_string()))?;
    let suv = ctx
        .session
        .cookie(SOGOU_COOKIE_URL, "SUID")
        .unwrap_or_default();

    info!("✓ 搜索页验证码解封成功");
    cache.set_session(suv, snuid);
    Ok(())
}

/// 解封群发页
///
/// 成功时 Cookie 已在会话内刷新，无需写缓存
pub async fn deblock_history(
    ctx: &ChallengeContext<'_>,
    deblocker: &dyn HistoryDeblocker,
) -> Result<()> {
    let captcha_url = format!(
        "{}?cert={}",
        HISTORY_CAPTCHA_URL,
        Utc::now().timestamp_millis()
    );
    debug!("获取群发页验证码: {}", captcha_url);

    let r_captcha = ctx.session.get(&captcha_url, HeaderMap::new()).await?;
    if !r_captcha.is_success() {
        return Err(WechatSogouError::request("deblocking_history get img", &r_captcha));
    }

    let result = deblocker.unlock(ctx, &r_captcha.body).await?;
    if result.ret != 0 {
        return Err(WechatSogouError::history_rejected(
            result.ret,
            result.errmsg,
            result.cookie_count,
        ));
    }

    info!("✓ 群发页验证码解封成功 (cookie_count: {})", result.cookie_count);
    Ok(())
}
