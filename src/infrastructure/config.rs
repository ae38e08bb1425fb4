use crate::core::constants::{config, fs as fs_consts, network};
use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// 配置文件结构，所有字段均可省略
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 构建索引地址
    pub index_url: String,
    /// 发行包下载地址前缀
    pub download_base: String,
    /// 默认输出目录
    pub output_dir: Option<PathBuf>,
    /// 连接超时（秒）
    pub connect_timeout_sec: u64,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            index_url: network::DEFAULT_INDEX_URL.to_string(),
            download_base: network::DEFAULT_DOWNLOAD_BASE.to_string(),
            output_dir: None,
            connect_timeout_sec: network::DEFAULT_CONNECT_TIMEOUT_SEC,
            user_agent: default_user_agent(),
        }
    }
}

fn default_user_agent() -> String {
    format!("cef-fetch/{}", env!("CARGO_PKG_VERSION"))
}

impl Config {
    /// 加载配置。
    ///
    /// 显式指定的文件必须存在；默认位置的文件不存在时使用内置默认值，且不会自动创建。
    pub fn load(explicit: Option<&Path>) -> AppResult<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(AppError::config(format!(
                    "配置文件不存在: {}",
                    path.display()
                )));
            }
            return Self::load_from(path);
        }

        match get_config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    fn load_from(path: &Path) -> AppResult<Self> {
        tracing::debug!(path = %path.display(), "loading config");
        let content = fs::read_to_string(path)
            .map_err(|e| AppError::config(format!("无法读取配置文件 {}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }

    /// 从 TOML 文本解析配置
    pub fn from_toml_str(content: &str) -> AppResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// 输出目录：命令行参数 > 配置文件 > 默认值
    pub fn resolve_output_dir(&self, cli_value: Option<PathBuf>) -> PathBuf {
        cli_value
            .or_else(|| self.output_dir.clone())
            .unwrap_or_else(|| PathBuf::from(fs_consts::DEFAULT_OUTPUT_DIR))
    }
}

/// 获取默认配置文件路径
pub fn get_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(config::CONFIG_DIR_NAME).join(config::CONFIG_FILE_NAME))
}
