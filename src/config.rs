/// 客户端配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 验证码最多尝试次数，取值 1..=19
    pub captcha_break_times: u8,
    /// 请求使用的 User-Agent
    pub user_agent: String,
    /// 默认识别器保存验证码图片的位置
    pub captcha_image_path: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            captcha_break_times: 1,
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36".to_string(),
            captcha_image_path: "captcha.jpg".to_string(),
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            captcha_break_times: std::env::var("CAPTCHA_BREAK_TIMES").ok().and_then(|v| v.parse().ok()).unwrap_or(default.captcha_break_times),
            user_agent: std::env::var("USER_AGENT").unwrap_or(default.user_agent),
            captcha_image_path: std::env::var("CAPTCHA_IMAGE_PATH").unwrap_or(default.captcha_image_path),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
        }
    }

    /// 设置验证码尝试次数
    pub fn with_captcha_break_times(mut self, times: u8) -> Self {
        self.captcha_break_times = times;
        self
    }
}
