use clap::Parser;
use std::path::PathBuf;

/// cef-fetch CLI 应用程序
///
/// `--version` 用作 CEF 版本参数，因此不启用 clap 自带的版本标志。
#[derive(Parser, Debug)]
#[command(name = "cef-fetch")]
#[command(about = "下载并解压与当前平台匹配的 CEF 预编译发行包", long_about = None)]
pub struct Cli {
    /// 目标平台（省略时自动检测），如 linux64、macosarm64、windows64
    #[arg(long)]
    pub platform: Option<String>,

    /// 输出目录
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// CEF 版本（目前总是选择最新 stable 版本）
    #[arg(long)]
    pub version: Option<String>,

    /// 只输出版本信息（JSON），不下载
    #[arg(long)]
    pub info_only: bool,

    /// 配置文件路径
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// 输出调试日志
    #[arg(short, long)]
    pub verbose: bool,
}
