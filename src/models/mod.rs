pub mod article;
pub mod constants;
pub mod gzh;

pub use article::{ArticleSearchItem, HotArticle, HotArticleItem, HotGzh, SearchArticle, SearchArticleGzh};
pub use constants::{HotIndex, SearchArticleTime, SearchArticleType};
pub use gzh::{GzhHistory, GzhInfo, HistoryArticle, HistoryGzh};
