use std::io;
use thiserror::Error;

/// 应用程序错误类型
#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO 错误: {0}")]
    Io(#[from] io::Error),

    #[error("网络错误: {message}")]
    Network { message: String },

    #[error("序列化错误: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("配置错误: {message}")]
    Config { message: String },

    #[error("不支持的平台: {system} {machine}")]
    UnsupportedPlatform { system: String, machine: String },

    #[error("平台 {platform} 没有可用的 stable 版本")]
    NoStableVersion { platform: String },

    #[error("未找到可用的发行包 (CEF {version})")]
    NoDistribution { version: String },

    #[error("版本解析错误: {version}")]
    VersionParse { version: String },

    #[error("解压错误: {path} - {reason}")]
    Archive { path: String, reason: String },
}

/// 应用程序 Result 类型
pub type AppResult<T> = Result<T, AppError>;

/// 便捷的错误创建函数
impl AppError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn unsupported_platform(system: &str, machine: &str) -> Self {
        Self::UnsupportedPlatform {
            system: system.to_string(),
            machine: machine.to_string(),
        }
    }

    pub fn version_parse_failed(version: &str) -> Self {
        Self::VersionParse {
            version: version.to_string(),
        }
    }

    pub fn archive(path: &std::path::Path, reason: impl std::fmt::Display) -> Self {
        Self::Archive {
            path: path.display().to_string(),
            reason: reason.to_string(),
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(error: reqwest::Error) -> Self {
        let error_msg = error.to_string();
        if error.is_timeout() {
            Self::network(format!("连接超时: {error_msg}"))
        } else if error.is_decode() {
            Self::network(format!("解析响应失败: {error_msg}"))
        } else {
            Self::network(format!("网络请求失败: {error_msg}"))
        }
    }
}

impl From<toml::de::Error> for AppError {
    fn from(error: toml::de::Error) -> Self {
        Self::config(format!("解析配置文件失败: {error}"))
    }
}

impl From<url::ParseError> for AppError {
    fn from(error: url::ParseError) -> Self {
        Self::config(format!("无效的 URL: {error}"))
    }
}

impl From<zip::result::ZipError> for AppError {
    fn from(error: zip::result::ZipError) -> Self {
        Self::Archive {
            path: "<zip>".to_string(),
            reason: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = AppError::unsupported_platform("Plan9", "mips");
        assert_eq!(err.to_string(), "不支持的平台: Plan9 mips");

        let err = AppError::NoStableVersion {
            platform: "linux64".to_string(),
        };
        assert!(err.to_string().contains("linux64"));
    }

    #[test]
    fn test_url_error_is_config_error() {
        let err: AppError = url::Url::parse("not a url").unwrap_err().into();
        assert!(matches!(err, AppError::Config { .. }));
    }
}
