use crate::cli::commands::Cli;
use crate::cli::output::FORMATTER;
use crate::error::AppResult;
use crate::infrastructure::config::Config;
use crate::infrastructure::installer::CefInstaller;
use crate::infrastructure::remote::platform::detect_platform;

/// 命令处理器
pub struct CommandHandler {
    config: Config,
    installer: CefInstaller,
}

impl CommandHandler {
    /// 创建新的命令处理器
    pub fn new(config: Config) -> AppResult<Self> {
        let installer = CefInstaller::new(&config)?;
        Ok(Self { config, installer })
    }

    /// 处理命令
    pub async fn handle_command(&self, cli: Cli) -> AppResult<()> {
        if let Some(version) = &cli.version {
            tracing::warn!(%version, "--version is not used for selection; the latest stable build is chosen");
        }

        let platform = match cli.platform {
            Some(platform) => platform,
            None => detect_platform()?.as_str().to_string(),
        };
        tracing::debug!(%platform, "target platform");

        let resolved = self.installer.resolve(&platform).await?;

        if cli.info_only {
            println!("{}", FORMATTER.format_info(&resolved)?);
            return Ok(());
        }

        let output_dir = self.config.resolve_output_dir(cli.output_dir);
        let outcome = self.installer.install(&resolved, &output_dir).await?;
        print!("{}", FORMATTER.format_outcome(&resolved, &outcome));

        Ok(())
    }
}
