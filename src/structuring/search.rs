//! 搜索结果页解析

use super::{element_text, first_attr, first_text, selector, time_convert};
use crate::error::{Result, WechatSogouError};
use crate::models::{ArticleSearchItem, GzhInfo, SearchArticle, SearchArticleGzh};
use regex::Regex;
use scraper::{ElementRef, Html};

/// 解析公众号搜索结果
///
/// 没有结果时返回空列表
pub fn get_gzh_by_search(html: &str) -> Result<Vec<GzhInfo>> {
    let document = Html::parse_document(html);
    let item_selector = selector("ul.news-list2 > li")?;
    let post_perm_re = Regex::new(r"月发文\s*(\d+)\s*篇")
        .map_err(|e| WechatSogouError::Parse(e.to_string()))?;

    let mut results = Vec::new();
    for li in document.select(&item_selector) {
        let mut info = GzhInfo {
            profile_url: first_attr(&li, "div.img-box a", "href")?,
            headimage: first_attr(&li, "div.img-box img", "src")?,
            wechat_name: first_text(&li, "p.tit")?,
            wechat_id: first_text(&li, "p.info label")?,
            post_perm: None,
            qrcode: first_attr(&li, "div.ew-pop img", "src")?,
            introduction: String::new(),
            authentication: String::new(),
        };

        let info_text = first_text(&li, "p.info")?;
        info.post_perm = post_perm_re
            .captures(&info_text)
            .and_then(|cap| cap.get(1))
            .and_then(|m| m.as_str().parse().ok());

        fill_gzh_dl(&li, &mut info)?;
        results.push(info);
    }

    Ok(results)
}

/// `<dl><dt>功能介绍：</dt><dd>…</dd></dl>` 形式的附加信息
fn fill_gzh_dl(li: &ElementRef, info: &mut GzhInfo) -> Result<()> {
    let dl_selector = selector("dl")?;
    for dl in li.select(&dl_selector) {
        let label = first_text(&dl, "dt")?;
        let value = first_text(&dl, "dd")?;
        if label.contains("功能介绍") {
            info.introduction = value;
        } else if label.contains("认证") {
            info.authentication = value;
        }
    }
    Ok(())
}

/// 解析文章搜索结果
///
/// 没有结果时返回空列表
pub fn get_article_by_search(html: &str) -> Result<Vec<ArticleSearchItem>> {
    let document = Html::parse_document(html);
    let item_selector = selector("ul.news-list > li")?;
    let img_selector = selector("div.img-box img, div.img-d img")?;

    let mut results = Vec::new();
    for li in document.select(&item_selector) {
        let imgs: Vec<String> = li
            .select(&img_selector)
            .filter_map(|img| img.value().attr("src"))
            .filter(|src| !src.is_empty())
            .map(str::to_string)
            .collect();

        let time = match first_attr(&li, "div.s-p", "t")?.parse::<i64>() {
            Ok(t) => Some(t),
            Err(_) => time_convert(&first_text(&li, "div.s-p")?)?,
        };

        let article = SearchArticle {
            title: first_text(&li, "div.txt-box h3")?,
            url: first_attr(&li, "div.txt-box h3 a", "href")?,
            imgs,
            abstract_text: first_text(&li, "p.txt-info")?,
            time,
        };

        let account_selector = selector("a.account")?;
        let gzh = match li.select(&account_selector).next() {
            Some(account) => SearchArticleGzh {
                profile_url: account.value().attr("href").unwrap_or_default().to_string(),
                headimage: account
                    .value()
                    .attr("data-headimage")
                    .unwrap_or_default()
                    .to_string(),
                wechat_name: element_text(&account),
                isv: account.value().attr("data-isv") == Some("1"),
            },
            None => SearchArticleGzh::default(),
        };

        results.push(ArticleSearchItem { article, gzh });
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    const GZH_HTML: &str = r##"
        <html><body>
        <ul class="news-list2">
            <li id="sogou_vr_11002301_box_0">
                <div class="gzh-box2">
                    <div class="img-box">
                        <a target="_blank" href="http://mp.weixin.qq.com/profile?src=3&amp;timestamp=1500000000">
                            <span></span><img src="http://img01.sogoucdn.com/app/a/100520090/oIWsFt1tmWoG6vO6BcsS7St61bRE">
                        </a>
                    </div>
                    <div class="txt-box">
                        <p class="tit"><a target="_blank" href="#"><em><!--red_beg-->南航<!--red_end--></em>青年志愿者</a></p>
                        <p class="info">微信号：<label name="em_weixinhao">nanhangqinggong</label> 月发文 12 篇</p>
                    </div>
                    <div class="ew-pop"><span class="ew-pop-img"><img src="http://mp.weixin.qq.com/rr?src=3&amp;qrcode=1"></span></div>
                </div>
                <dl><dt>功能介绍：</dt><dd>南京航空航天大学青年志愿者</dd></dl>
                <dl><dt>微信认证：</dt><dd>南京航空航天大学</dd></dl>
            </li>
            <li id="sogou_vr_11002301_box_1">
                <div class="gzh-box2">
                    <div class="img-box"><a href="http://mp.weixin.qq.com/profile?src=3&amp;id=2"><img src="head2"></a></div>
                    <div class="txt-box">
                        <p class="tit"><a href="#">第二个</a></p>
                        <p class="info">微信号：<label>second_id</label></p>
                    </div>
                </div>
            </li>
        </ul>
        </body></html>
    "##;

    #[test]
    fn test_get_gzh_by_search() {
        let list = get_gzh_by_search(GZH_HTML).expect("parse should succeed");
        assert_eq!(list.len(), 2);

        let first = &list[0];
        assert_eq!(
            first.profile_url,
            "http://mp.weixin.qq.com/profile?src=3&timestamp=1500000000"
        );
        assert_eq!(first.wechat_name, "南航青年志愿者");
        assert_eq!(first.wechat_id, "nanhangqinggong");
        assert_eq!(first.post_perm, Some(12));
        assert_eq!(first.qrcode, "http://mp.weixin.qq.com/rr?src=3&qrcode=1");
        assert_eq!(first.introduction, "南京航空航天大学青年志愿者");
        assert_eq!(first.authentication, "南京航空航天大学");

        let second = &list[1];
        assert_eq!(second.wechat_id, "second_id");
        assert_eq!(second.post_perm, None);
        assert_eq!(second.introduction, "");
    }

    #[test]
    fn test_get_gzh_by_search_empty() {
        let list = get_gzh_by_search("<html><body><div id=\"noresult_part1_container\"></div></body></html>")
            .expect("parse should succeed");
        assert!(list.is_empty());
    }

    const ARTICLE_HTML: &str = r##"
        <html><body>
        <ul class="news-list">
            <li id="sogou_vr_11002601_box_0">
                <div class="img-box"><a data-z="art" href="http://mp.weixin.qq.com/s?src=11&amp;sn=1"><img src="http://img01.sogoucdn.com/net/a/04/link?url=cover1"></a></div>
                <div class="txt-box">
                    <h3><a target="_blank" href="http://mp.weixin.qq.com/s?src=11&amp;sn=1"><em><!--red_beg-->高考<!--red_end--></em>志愿怎么填</a></h3>
                    <p class="txt-info">今年的<em>高考</em>志愿填报指南</p>
                    <div class="s-p" t="1500000000">
                        <a class="account" target="_blank" data-isV="1" data-headimage="http://wx.qlogo.cn/mmhead/head1" href="http://mp.weixin.qq.com/profile?src=3&amp;id=9">教育头条</a>
                        <span class="s2"><script>document.write(timeConvert('1500000000'))</script></span>
                    </div>
                </div>
            </li>
            <li id="sogou_vr_11002601_box_1">
                <div class="txt-box">
                    <h3><a href="http://mp.weixin.qq.com/s?src=11&amp;sn=2">多图文章</a></h3>
                    <p class="txt-info">摘要二</p>
                    <div class="img-d"><a><span><img src="img-a"></span></a><a><span><img src="img-b"></span></a></div>
                    <div class="s-p">
                        <a class="account" data-isV="0" data-headimage="head2" href="profile2">另一个号</a>
                        <span class="s2"><script>document.write(timeConvert('1499990000'))</script></span>
                    </div>
                </div>
            </li>
        </ul>
        </body></html>
    "##;

    #[test]
    fn test_get_article_by_search() {
        let list = get_article_by_search(ARTICLE_HTML).expect("parse should succeed");
        assert_eq!(list.len(), 2);

        let first = &list[0];
        assert_eq!(first.article.title, "高考志愿怎么填");
        assert_eq!(first.article.url, "http://mp.weixin.qq.com/s?src=11&sn=1");
        assert_eq!(
            first.article.imgs,
            vec!["http://img01.sogoucdn.com/net/a/04/link?url=cover1".to_string()]
        );
        assert_eq!(first.article.abstract_text, "今年的高考志愿填报指南");
        assert_eq!(first.article.time, Some(1_500_000_000));
        assert_eq!(first.gzh.wechat_name, "教育头条");
        assert_eq!(first.gzh.headimage, "http://wx.qlogo.cn/mmhead/head1");
        assert_eq!(first.gzh.profile_url, "http://mp.weixin.qq.com/profile?src=3&id=9");
        assert!(first.gzh.isv);

        let second = &list[1];
        assert_eq!(second.article.imgs, vec!["img-a".to_string(), "img-b".to_string()]);
        assert_eq!(second.article.time, Some(1_499_990_000));
        assert!(!second.gzh.isv);
    }
}
