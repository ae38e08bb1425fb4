//! 应用程序常量定义
//!
//! 本模块包含全局使用的常量，避免魔数并提供统一的配置值。

/// 网络相关常量
pub mod network {
    /// CEF 构建索引地址
    pub const DEFAULT_INDEX_URL: &str = "https://cef-builds.spotifycdn.com/index.json";
    /// 发行包下载地址前缀
    pub const DEFAULT_DOWNLOAD_BASE: &str = "https://cef-builds.spotifycdn.com";
    /// 默认连接超时时间（秒）
    pub const DEFAULT_CONNECT_TIMEOUT_SEC: u64 = 30;
}

/// 索引字段取值
pub mod index {
    /// 唯一参与选择的发布渠道
    pub const STABLE_CHANNEL: &str = "stable";
    /// 首选发行包类型
    pub const MINIMAL_KIND: &str = "minimal";
    /// 备选发行包类型
    pub const STANDARD_KIND: &str = "standard";
    /// 缺失 cef_version 时的占位值
    pub const UNKNOWN_VERSION: &str = "unknown";
}

/// 文件系统相关常量
pub mod fs {
    /// 默认输出目录（相对当前目录）
    pub const DEFAULT_OUTPUT_DIR: &str = "cef_download";
    /// 解压后目录名前缀
    pub const EXTRACTED_DIR_PREFIX: &str = "cef_binary_";
    /// 版本标记文件名
    pub const VERSION_MARKER_FILE: &str = "CEF_VERSION";
    /// 下载中的临时文件后缀
    pub const PARTIAL_SUFFIX: &str = "downloading";
}

/// 日志相关常量
pub mod log {
    /// 默认日志级别
    pub const DEFAULT_LOG_LEVEL: &str = "warn";
    /// --verbose 时的日志级别
    pub const VERBOSE_LOG_LEVEL: &str = "debug";
}

/// 配置相关常量
pub mod config {
    /// 用户目录下的配置目录名
    pub const CONFIG_DIR_NAME: &str = ".cef-fetch";
    /// 配置文件名
    pub const CONFIG_FILE_NAME: &str = "config.toml";
}
