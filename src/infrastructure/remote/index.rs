use super::http_client::HttpClient;
use crate::core::constants::index::UNKNOWN_VERSION;
use crate::error::AppResult;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// CEF 构建索引：平台标识 -> 该平台的构建列表
///
/// 各平台的内容只在被查询时解析，其他平台的数据格式不影响结果。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CefIndex {
    pub platforms: HashMap<String, serde_json::Value>,
}

/// 单个平台下的全部构建
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlatformBuilds {
    #[serde(default)]
    pub versions: Vec<VersionEntry>,
}

/// 一个 CEF 构建版本
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionEntry {
    #[serde(default)]
    pub channel: String,
    #[serde(default = "default_chromium_version")]
    pub chromium_version: String,
    #[serde(default = "default_cef_version")]
    pub cef_version: String,
    #[serde(default)]
    pub files: Vec<DistributionFile>,
}

/// 构建中的一个发行文件
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionFile {
    #[serde(rename = "type", default)]
    pub kind: String,
    pub name: String,
    #[serde(default)]
    pub sha1: String,
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub last_modified: Option<String>,
}

fn default_chromium_version() -> String {
    "0".to_string()
}

fn default_cef_version() -> String {
    UNKNOWN_VERSION.to_string()
}

impl CefIndex {
    /// 指定平台的版本列表，索引中不存在该平台时为空
    pub fn versions_for(&self, platform: &str) -> AppResult<Vec<VersionEntry>> {
        match self.platforms.get(platform) {
            Some(value) => {
                let builds = PlatformBuilds::deserialize(value)?;
                Ok(builds.versions)
            }
            None => Ok(Vec::new()),
        }
    }

    /// 写入一个平台的构建列表
    pub fn insert_platform(&mut self, platform: &str, builds: &PlatformBuilds) -> AppResult<()> {
        self.platforms
            .insert(platform.to_string(), serde_json::to_value(builds)?);
        Ok(())
    }
}

/// 获取并解析远程索引
pub async fn fetch_index(client: &HttpClient, url: &str) -> AppResult<CefIndex> {
    // 走 stderr，--info-only 的 stdout 只含 JSON
    eprintln!("🔍 正在获取 CEF 索引...");
    let index: CefIndex = client.get_json(url).await?;
    tracing::debug!(platforms = index.platforms.len(), "index loaded");
    Ok(index)
}
