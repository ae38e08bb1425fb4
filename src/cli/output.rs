use crate::error::AppResult;
use crate::infrastructure::installer::{ArchiveStatus, InstallOutcome, ResolvedDistribution};
use serde::Serialize;

/// `--info-only` 输出的字段
#[derive(Debug, Serialize)]
pub struct InfoOutput<'a> {
    pub cef_version: &'a str,
    pub url: &'a str,
    pub sha1: &'a str,
}

/// 输出格式化器
pub struct OutputFormatter;

impl OutputFormatter {
    /// 格式化版本信息（JSON）
    pub fn format_info(&self, resolved: &ResolvedDistribution) -> AppResult<String> {
        let info = InfoOutput {
            cef_version: &resolved.cef_version,
            url: &resolved.url,
            sha1: &resolved.file.sha1,
        };
        Ok(serde_json::to_string_pretty(&info)?)
    }

    /// 格式化安装结果
    pub fn format_outcome(&self, resolved: &ResolvedDistribution, outcome: &InstallOutcome) -> String {
        let mut output = String::new();
        if outcome.status == ArchiveStatus::Cached {
            output.push_str(&format!(
                "(复用已有归档 {})\n",
                outcome.archive_path.display()
            ));
        }
        match &outcome.extracted_dir {
            Some(dir) => output.push_str(&format!("CEF ready at: {}\n", dir.display())),
            None => output.push_str("⚠️  未找到解压后的 cef_binary_* 目录\n"),
        }
        if let Some(marker) = &outcome.marker_path {
            output.push_str(&format!(
                "📝 CEF {} (Chromium {}, {}) 已记录到 {}\n",
                resolved.cef_version,
                resolved.chromium_version,
                resolved.platform,
                marker.display()
            ));
        }
        output
    }
}

/// 默认输出格式化器实例
pub static FORMATTER: OutputFormatter = OutputFormatter;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::remote::DistributionFile;
    use std::path::PathBuf;

    fn resolved() -> ResolvedDistribution {
        ResolvedDistribution {
            platform: "linux64".to_string(),
            cef_version: "120.1.10+g3ce3184".to_string(),
            chromium_version: "120.0.6099.129".to_string(),
            file: DistributionFile {
                kind: "minimal".to_string(),
                name: "cef.tar.bz2".to_string(),
                sha1: "abc123".to_string(),
                size: None,
                last_modified: None,
            },
            url: "https://cef-builds.spotifycdn.com/cef.tar.bz2".to_string(),
        }
    }

    #[test]
    fn test_format_info_fields() {
        let json = FORMATTER.format_info(&resolved()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["cef_version"], "120.1.10+g3ce3184");
        assert_eq!(value["url"], "https://cef-builds.spotifycdn.com/cef.tar.bz2");
        assert_eq!(value["sha1"], "abc123");
        assert_eq!(value.as_object().unwrap().len(), 3);
    }

    #[test]
    fn test_format_outcome() {
        let outcome = InstallOutcome {
            archive_path: PathBuf::from("cef_download/cef.tar.bz2"),
            status: ArchiveStatus::Downloaded { bytes: 10 },
            extracted_dir: Some(PathBuf::from("cef_download/cef_binary_120")),
            marker_path: None,
        };
        assert_eq!(
            FORMATTER.format_outcome(&resolved(), &outcome),
            "CEF ready at: cef_download/cef_binary_120\n"
        );
    }

    #[test]
    fn test_format_outcome_with_marker() {
        let outcome = InstallOutcome {
            archive_path: PathBuf::from("cef_download/cef.tar.bz2"),
            status: ArchiveStatus::Cached,
            extracted_dir: Some(PathBuf::from("cef_download/cef_binary_120")),
            marker_path: Some(PathBuf::from("cef_download/CEF_VERSION")),
        };
        let text = FORMATTER.format_outcome(&resolved(), &outcome);

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "(复用已有归档 cef_download/cef.tar.bz2)");
        assert_eq!(lines[1], "CEF ready at: cef_download/cef_binary_120");
        assert_eq!(
            lines[2],
            "📝 CEF 120.1.10+g3ce3184 (Chromium 120.0.6099.129, linux64) 已记录到 cef_download/CEF_VERSION"
        );
    }

    #[test]
    fn test_format_outcome_without_dir() {
        let outcome = InstallOutcome {
            archive_path: PathBuf::from("cef_download/cef.tar.bz2"),
            status: ArchiveStatus::Downloaded { bytes: 10 },
            extracted_dir: None,
            marker_path: None,
        };
        let text = FORMATTER.format_outcome(&resolved(), &outcome);
        assert!(text.contains("未找到"));
        assert!(!text.contains("CEF_VERSION"));
    }
}
