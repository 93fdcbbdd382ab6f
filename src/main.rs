use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde::Serialize;
use wechatsogou::{logger, Config, HotIndex, SearchArticleTime, SearchArticleType, WechatSogouApi};

/// 搜狗微信搜索命令行
#[derive(Debug, Parser)]
#[command(name = "wechatsogou", version, about)]
struct Cli {
    /// 验证码最多尝试次数 (1-19)，默认读取 CAPTCHA_BREAK_TIMES
    #[arg(long, global = true)]
    captcha_break_times: Option<u8>,

    /// 显示详细日志
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 按微信号或名称获取公众号信息
    Gzh { wechat_id_or_name: String },
    /// 搜索公众号
    SearchGzh {
        keyword: String,
        #[arg(short, long, default_value_t = 1)]
        page: u32,
    },
    /// 搜索文章
    SearchArticle {
        keyword: String,
        #[arg(short, long, default_value_t = 1)]
        page: u32,
        /// anytime / day / week / month / year / specific
        #[arg(long, default_value = "anytime")]
        time: SearchArticleTime,
        /// all / image / video / rich
        #[arg(long = "type", default_value = "all")]
        article_type: SearchArticleType,
        /// 开始日期，如 2017-07-01
        #[arg(long)]
        from: Option<NaiveDate>,
        /// 结束日期，如 2017-07-15
        #[arg(long)]
        to: Option<NaiveDate>,
    },
    /// 获取公众号最近群发
    History {
        /// 公众号名称或微信号
        keyword: Option<String>,
        /// 直接指定群发页链接
        #[arg(long)]
        url: Option<String>,
    },
    /// 获取首页热门文章
    Hot {
        /// 分类，如 hot / technology / finance
        category: HotIndex,
        #[arg(short, long, default_value_t = 1)]
        page: u32,
    },
    /// 获取搜索联想词
    Sugg { keyword: String },
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 加载配置
    let mut config = Config::from_env();
    if let Some(times) = cli.captcha_break_times {
        config = config.with_captcha_break_times(times);
    }
    config.verbose_logging |= cli.verbose;

    // 初始化日志
    logger::init(config.verbose_logging);

    let api = WechatSogouApi::new(&config).context("初始化客户端失败")?;

    match cli.command {
        Command::Gzh { wechat_id_or_name } => {
            print_json(&api.get_gzh_info(&wechat_id_or_name).await?)?
        }
        Command::SearchGzh { keyword, page } => print_json(&api.search_gzh(&keyword, page).await?)?,
        Command::SearchArticle {
            keyword,
            page,
            time,
            article_type,
            from,
            to,
        } => print_json(
            &api.search_article(&keyword, page, time, article_type, from, to)
                .await?,
        )?,
        Command::History { keyword, url } => {
            let history = match (url, keyword) {
                (Some(url), _) => api.get_gzh_article_by_history_url(&url).await?,
                (None, Some(keyword)) => api.get_gzh_article_by_history(&keyword).await?,
                (None, None) => anyhow::bail!("需要提供公众号关键词或 --url"),
            };
            print_json(&history)?
        }
        Command::Hot { category, page } => {
            print_json(&api.get_gzh_article_by_hot(category, page).await?)?
        }
        Command::Sugg { keyword } => print_json(&api.get_sugg(&keyword).await?)?,
    }

    Ok(())
}
