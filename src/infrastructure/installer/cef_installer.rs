use super::extract::extract_archive;
use super::utils::{create_progress_bar, locate_extracted_dir, write_version_marker};
use crate::core::selection::{find_latest_stable, select_distribution};
use crate::error::AppResult;
use crate::infrastructure::config::Config;
use crate::infrastructure::remote::download::{download_to_file, download_url};
use crate::infrastructure::remote::http_client::HttpClient;
use crate::infrastructure::remote::index::{fetch_index, DistributionFile};
use std::path::{Path, PathBuf};

/// 解析得到的发行包
#[derive(Debug, Clone)]
pub struct ResolvedDistribution {
    pub platform: String,
    pub cef_version: String,
    pub chromium_version: String,
    pub file: DistributionFile,
    pub url: String,
}

/// 归档来源
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveStatus {
    /// 输出目录中已有同名文件，未发起下载
    Cached,
    Downloaded { bytes: u64 },
}

/// 安装结果
#[derive(Debug, Clone)]
pub struct InstallOutcome {
    pub archive_path: PathBuf,
    pub status: ArchiveStatus,
    pub extracted_dir: Option<PathBuf>,
    pub marker_path: Option<PathBuf>,
}

/// CEF 发行包安装器
pub struct CefInstaller {
    client: HttpClient,
    index_url: String,
    download_base: String,
}

impl CefInstaller {
    pub fn new(config: &Config) -> AppResult<Self> {
        Ok(Self {
            client: HttpClient::new(config)?,
            index_url: config.index_url.clone(),
            download_base: config.download_base.clone(),
        })
    }

    /// 获取索引并确定要下载的发行包
    pub async fn resolve(&self, platform: &str) -> AppResult<ResolvedDistribution> {
        let index = fetch_index(&self.client, &self.index_url).await?;
        let version = find_latest_stable(&index, platform)?;
        let file = select_distribution(&version)?;
        let url = download_url(&self.download_base, &file.name)?;

        tracing::info!(
            platform,
            cef_version = %version.cef_version,
            file = %file.name,
            "resolved distribution"
        );

        Ok(ResolvedDistribution {
            platform: platform.to_string(),
            cef_version: version.cef_version.clone(),
            chromium_version: version.chromium_version.clone(),
            file: file.clone(),
            url,
        })
    }

    /// 确保归档文件存在于输出目录中：已存在则跳过下载
    pub async fn ensure_archive(
        &self,
        resolved: &ResolvedDistribution,
        output_dir: &Path,
    ) -> AppResult<(PathBuf, ArchiveStatus)> {
        let archive_path = output_dir.join(&resolved.file.name);

        if archive_path.exists() {
            println!("📖 使用已存在的文件: {}", archive_path.display());
            return Ok((archive_path, ArchiveStatus::Cached));
        }

        println!("📥 正在下载 {}", resolved.url);
        let pb = create_progress_bar();
        let bytes = download_to_file(&self.client, &resolved.url, &archive_path, |downloaded, total| {
            if total > 0 && pb.length() != Some(total) {
                pb.set_length(total);
            }
            pb.set_position(downloaded);
        })
        .await;
        pb.finish_and_clear();

        let bytes = bytes?;
        println!("✅ 下载完成，大小: {} MB", bytes / (1024 * 1024));
        Ok((archive_path, ArchiveStatus::Downloaded { bytes }))
    }

    /// 下载、解压并写入版本标记
    pub async fn install(
        &self,
        resolved: &ResolvedDistribution,
        output_dir: &Path,
    ) -> AppResult<InstallOutcome> {
        tokio::fs::create_dir_all(output_dir).await?;

        let (archive_path, status) = self.ensure_archive(resolved, output_dir).await?;
        let entries = extract_archive(&archive_path, output_dir)?;
        tracing::debug!(entries, "archive extracted");

        let extracted_dir = locate_extracted_dir(output_dir, &resolved.file.name)?;
        let marker_path = match &extracted_dir {
            Some(_) => Some(write_version_marker(output_dir, &resolved.cef_version)?),
            None => {
                tracing::warn!(output_dir = %output_dir.display(), "no extracted cef_binary_* directory found");
                None
            }
        };

        Ok(InstallOutcome {
            archive_path,
            status,
            extracted_dir,
            marker_path,
        })
    }
}
