//! 验证码图片识别
use crate::error::Result;
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

/// 把验证码图片识别为文字
#[async_trait]
pub trait ImageIdentifier: Send + Sync {
    async fn identify(&self, image: &[u8]) -> Result<String>;
}

/// 控制台人工识别
///
/// 图片写入 `image_path`，由使用者查看后在标准输入中键入验证码
pub struct ConsoleIdentifier {
    image_path: PathBuf,
}

impl ConsoleIdentifier {
    pub fn new(image_path: impl Into<PathBuf>) -> Self {
        Self {
            image_path: image_path.into(),
        }
    }
}

#[async_trait]
impl ImageIdentifier for ConsoleIdentifier {
    async fn identify(&self, image: &[u8]) -> Result<String> {
        tokio::fs::write(&self.image_path, image).await?;
        info!(
            "🔐 验证码图片已保存至 {}，请输入验证码:",
            self.image_path.display()
        );

        let mut line = String::new();
        BufReader::new(tokio::io::stdin())
            .read_line(&mut line)
            .await?;

        Ok(line.trim().to_string())
    }
}
