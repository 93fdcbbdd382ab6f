//! 首页热门文章解析

use super::{child_elements, element_text, first_attr, first_text, selector};
use crate::error::Result;
use crate::models::{HotArticle, HotArticleItem, HotGzh};
use scraper::Html;

/// 解析首页热门文章列表
///
/// 每个 `li` 下第一个 `div` 是文字区（标题、摘要、公众号），第二个 `div` 是封面
pub fn get_gzh_article_by_hot(html: &str) -> Result<Vec<HotArticleItem>> {
    let document = Html::parse_document(html);
    let item_selector = selector("li")?;

    let mut results = Vec::new();
    for li in document.select(&item_selector) {
        let mut divs = child_elements(li, "div");
        let Some(text_box) = divs.next() else {
            continue;
        };
        let img_box = divs.next();

        let url = first_attr(&text_box, "h4 a", "href")?;
        if url.is_empty() {
            continue;
        }

        let mut paragraphs = child_elements(text_box, "p");
        let abstract_text = paragraphs
            .next()
            .map(|p| element_text(&p))
            .unwrap_or_default();
        let meta = paragraphs.next();

        let (gzh, open_id, time) = match meta {
            Some(meta) => {
                let gzh = HotGzh {
                    headimage: first_attr(&meta, "span[data-headimage]", "data-headimage")?,
                    wechat_name: first_text(&meta, "span[data-openid]")?,
                };
                let open_id = first_attr(&meta, "span[data-openid]", "data-openid")?;
                let time = first_attr(&meta, "span[data-lastmodified]", "data-lastmodified")?
                    .parse()
                    .ok();
                (gzh, open_id, time)
            }
            None => (HotGzh::default(), String::new(), None),
        };

        let main_img = match img_box {
            Some(img_box) => first_attr(&img_box, "img", "src")?,
            None => String::new(),
        };

        results.push(HotArticleItem {
            gzh,
            article: HotArticle {
                url,
                title: first_text(&text_box, "h4 a")?,
                abstract_text,
                time,
                open_id,
                main_img,
            },
        });
    }

    Ok(results)
}
