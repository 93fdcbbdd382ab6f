use crate::error::WechatSogouError;
use std::str::FromStr;

/// 文章搜索的时间范围
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
pub enum SearchArticleTime {
    /// 不限
    #[default]
    Anytime = 0,
    /// 一天内
    Day = 1,
    /// 一周内
    Week = 2,
    /// 一月内
    Month = 3,
    /// 一年内
    Year = 4,
    /// 自定义起止日期
    Specific = 5,
}

impl SearchArticleTime {
    /// 获取 `tsn` 参数值
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            SearchArticleTime::Anytime => "anytime",
            SearchArticleTime::Day => "day",
            SearchArticleTime::Week => "week",
            SearchArticleTime::Month => "month",
            SearchArticleTime::Year => "year",
            SearchArticleTime::Specific => "specific",
        }
    }
}

impl FromStr for SearchArticleTime {
    type Err = WechatSogouError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "anytime" => Ok(SearchArticleTime::Anytime),
            "day" => Ok(SearchArticleTime::Day),
            "week" => Ok(SearchArticleTime::Week),
            "month" => Ok(SearchArticleTime::Month),
            "year" => Ok(SearchArticleTime::Year),
            "specific" => Ok(SearchArticleTime::Specific),
            _ => Err(WechatSogouError::InvalidArgument(format!(
                "未知的时间范围: {}",
                s
            ))),
        }
    }
}

impl std::fmt::Display for SearchArticleTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 文章搜索的内容类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
pub enum SearchArticleType {
    /// 全部
    #[default]
    All,
    /// 有图
    Image,
    /// 有视频
    Video,
    /// 有图和视频
    Rich,
}

const INTERATION_IMAGE: &str = "458754";
const INTERATION_VIDEO: &str = "458756";

impl SearchArticleType {
    /// 获取 `interation` 参数值
    pub fn interation(self) -> String {
        match self {
            SearchArticleType::All => String::new(),
            SearchArticleType::Image => INTERATION_IMAGE.to_string(),
            SearchArticleType::Video => INTERATION_VIDEO.to_string(),
            SearchArticleType::Rich => format!("{},{}", INTERATION_IMAGE, INTERATION_VIDEO),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SearchArticleType::All => "all",
            SearchArticleType::Image => "image",
            SearchArticleType::Video => "video",
            SearchArticleType::Rich => "rich",
        }
    }
}

impl FromStr for SearchArticleType {
    type Err = WechatSogouError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(SearchArticleType::All),
            "image" => Ok(SearchArticleType::Image),
            "video" => Ok(SearchArticleType::Video),
            "rich" => Ok(SearchArticleType::Rich),
            _ => Err(WechatSogouError::InvalidArgument(format!(
                "未知的内容类型: {}",
                s
            ))),
        }
    }
}

impl std::fmt::Display for SearchArticleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 首页热门文章分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum HotIndex {
    /// 热门
    Hot = 0,
    /// 搞笑
    Gaoxiao = 1,
    /// 养生
    Health = 2,
    /// 私房话
    Sifanghua = 3,
    /// 八卦
    Gossip = 4,
    /// 科技
    Technology = 5,
    /// 财经
    Finance = 6,
    /// 汽车
    Car = 7,
    /// 生活
    Life = 8,
    /// 时尚
    Fashion = 9,
    /// 辣妈 / 育儿
    Mummy = 10,
    /// 旅行
    Travel = 11,
    /// 职场
    Job = 12,
    /// 美食
    Food = 13,
    /// 历史
    History = 14,
    /// 学霸 / 教育
    Study = 15,
    /// 星座
    Constellation = 16,
    /// 军事
    Military = 17,
    /// 游戏
    Game = 18,
    /// 萌宠
    Pet = 19,
}

impl HotIndex {
    pub const ALL: [HotIndex; 20] = [
        HotIndex::Hot,
        HotIndex::Gaoxiao,
        HotIndex::Health,
        HotIndex::Sifanghua,
        HotIndex::Gossip,
        HotIndex::Technology,
        HotIndex::Finance,
        HotIndex::Car,
        HotIndex::Life,
        HotIndex::Fashion,
        HotIndex::Mummy,
        HotIndex::Travel,
        HotIndex::Job,
        HotIndex::Food,
        HotIndex::History,
        HotIndex::Study,
        HotIndex::Constellation,
        HotIndex::Military,
        HotIndex::Game,
        HotIndex::Pet,
    ];

    /// 获取热门页编号
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            HotIndex::Hot => "hot",
            HotIndex::Gaoxiao => "gaoxiao",
            HotIndex::Health => "health",
            HotIndex::Sifanghua => "sifanghua",
            HotIndex::Gossip => "gossip",
            HotIndex::Technology => "technology",
            HotIndex::Finance => "finance",
            HotIndex::Car => "car",
            HotIndex::Life => "life",
            HotIndex::Fashion => "fashion",
            HotIndex::Mummy => "mummy",
            HotIndex::Travel => "travel",
            HotIndex::Job => "job",
            HotIndex::Food => "food",
            HotIndex::History => "history",
            HotIndex::Study => "study",
            HotIndex::Constellation => "constellation",
            HotIndex::Military => "military",
            HotIndex::Game => "game",
            HotIndex::Pet => "pet",
        }
    }
}

impl FromStr for HotIndex {
    type Err = WechatSogouError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HotIndex::ALL
            .iter()
            .copied()
            .find(|index| index.name() == s)
            .ok_or_else(|| WechatSogouError::InvalidArgument(format!("未知的热门分类: {}", s)))
    }
}

impl std::fmt::Display for HotIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
