use crate::error::{AppError, AppResult};
use crate::infrastructure::config::Config;
use reqwest::{Client, Response};
use std::time::Duration;

/// HTTP 客户端包装器
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// 按配置创建 HTTP 客户端
    pub fn new(config: &Config) -> AppResult<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_sec))
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { client })
    }

    /// GET 请求，非 2xx 状态视为错误
    pub async fn get(&self, url: &str) -> AppResult<Response> {
        tracing::debug!(%url, "GET");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::network(format!("网络请求失败: {e} (URL: {url})")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::network(format!(
                "服务器返回状态码: {status} (URL: {url})"
            )));
        }

        Ok(response)
    }

    /// GET 请求并解析 JSON
    ///
    /// 先读取完整文本再反序列化，使传输失败与 JSON 格式错误分别报告。
    pub async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> AppResult<T> {
        let text = self.get(url).await?.text().await?;
        let value = serde_json::from_str(&text)?;
        Ok(value)
    }
}
