//! 会话缓存
//!
//! 只保存最近一次解封得到的 `suv` / `snuid`，供后续请求复用。
//! 无过期、无淘汰，后写覆盖先写。

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

pub const SUV_KEY: &str = "suv";
pub const SNUID_KEY: &str = "snuid";

/// 客户端持有的会话缓存，克隆后共享同一份数据
#[derive(Debug, Clone, Default)]
pub struct WechatCache {
    inner: Arc<RwLock<HashMap<String, String>>>,
}

impl WechatCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.inner
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(key)
            .cloned()
    }

    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(key.into(), value.into());
    }

    /// 同时写入两个会话标识
    pub fn set_session(&self, suv: impl Into<String>, snuid: impl Into<String>) {
        let mut map = self
            .inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        map.insert(SUV_KEY.to_string(), suv.into());
        map.insert(SNUID_KEY.to_string(), snuid.into());
    }

    pub fn suv(&self) -> Option<String> {
        self.get(SUV_KEY)
    }

    pub fn snuid(&self) -> Option<String> {
        self.get(SNUID_KEY)
    }
}
