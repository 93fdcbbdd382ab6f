//! # WechatSogou
//!
//! 基于搜狗微信搜索的公众号 / 文章抓取客户端
//!
//! ## 架构设计
//!
//! ### ① 传输层（Clients）
//! - `clients/` - `HttpSession` / `SessionFactory`，默认实现基于 reqwest 与 Cookie Jar
//!
//! ### ② 解封层（Deblocking）
//! - `deblocking/` - 验证码检测、单次解封、有限次重试
//! - `WechatCache` - 解封得到的 `SUV` / `SNUID`，供后续请求复用
//!
//! ### ③ 编排层（API）
//! - `api::WechatSogouApi` - 公众号搜索、文章搜索、群发页、热门文章、搜索联想
//!
//! ### ④ 数据层
//! - `request` - URL 与请求头构造
//! - `structuring` - 页面结构化
//! - `models` - 结果记录与常量
//!
//! ## 模块结构

pub mod api;
pub mod cache;
pub mod clients;
pub mod config;
pub mod deblocking;
pub mod error;
pub mod logger;
pub mod models;
pub mod request;
pub mod structuring;

// 重新导出常用类型
pub use api::WechatSogouApi;
pub use cache::WechatCache;
pub use config::Config;
pub use deblocking::{Deblockers, HistoryDeblocker, ImageIdentifier, SearchDeblocker};
pub use error::{Result, WechatSogouError};
pub use models::{HotIndex, SearchArticleTime, SearchArticleType};
