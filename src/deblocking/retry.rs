//! 解封重试
//!
//! 只有 `VcodeRejected` 会重试，且不等待（远端每次都会换一张验证码）；
//! 其余错误立即返回。

use crate::error::Result;
use std::future::Future;
use tracing::warn;

/// 最多执行 `break_times` 次解封尝试
///
/// # 参数
/// - `break_times`: 尝试次数上限，小于 1 时按 1 处理
/// - `attempt`: 单次尝试，参数为从 1 开始的尝试序号
///
/// # 返回
/// 任一次成功即返回；全部被拒绝时返回最后一次的错误
pub async fn retry_deblocking<F, Fut>(break_times: u8, mut attempt: F) -> Result<()>
where
    F: FnMut(u8) -> Fut,
    Fut: Future<Output = Result<()>>,
{
    let mut current = 1;
    loop {
        match attempt(current).await {
            Ok(()) => return Ok(()),
            Err(e) if e.is_vcode_rejected() && current < break_times => {
                warn!("验证码被拒绝 (尝试 {}/{}): {}", current, break_times, e);
                current += 1;
            }
            Err(e) => return Err(e),
        }
    }
}
