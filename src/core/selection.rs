//! 版本与发行包选择
//!
//! 从索引中挑选某平台最新的 stable 构建，再从构建的文件列表中挑选
//! minimal 发行包（没有时退回 standard）。

use crate::core::constants::index::{MINIMAL_KIND, STABLE_CHANNEL, STANDARD_KIND};
use crate::error::{AppError, AppResult};
use crate::infrastructure::remote::index::{CefIndex, DistributionFile, VersionEntry};

/// 取 Chromium 版本号的首段作为排序键，如 "120.0.6099.129" -> 120
pub fn leading_version_component(version: &str) -> AppResult<u64> {
    version
        .split('.')
        .next()
        .map(str::trim)
        .and_then(|major| major.parse::<u64>().ok())
        .ok_or_else(|| AppError::version_parse_failed(version))
}

/// 查找指定平台最新的 stable 构建。
///
/// 排序是稳定的：首段相同的构建保持索引中的先后顺序，靠前者胜出。
pub fn find_latest_stable(index: &CefIndex, platform: &str) -> AppResult<VersionEntry> {
    let mut stable = index
        .versions_for(platform)?
        .into_iter()
        .filter(|v| v.channel == STABLE_CHANNEL)
        .map(|v| leading_version_component(&v.chromium_version).map(|major| (major, v)))
        .collect::<AppResult<Vec<_>>>()?;

    stable.sort_by(|a, b| b.0.cmp(&a.0));

    stable
        .into_iter()
        .next()
        .map(|(_, v)| v)
        .ok_or_else(|| AppError::NoStableVersion {
            platform: platform.to_string(),
        })
}

/// 选择发行包：优先 minimal，其次 standard
pub fn select_distribution(version: &VersionEntry) -> AppResult<&DistributionFile> {
    let by_kind = |kind: &str| version.files.iter().find(|f| f.kind == kind);

    by_kind(MINIMAL_KIND)
        .or_else(|| by_kind(STANDARD_KIND))
        .ok_or_else(|| AppError::NoDistribution {
            version: version.cef_version.clone(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::remote::index::PlatformBuilds;

    fn entry(channel: &str, chromium: &str, cef: &str, kinds: &[&str]) -> VersionEntry {
        VersionEntry {
            channel: channel.to_string(),
            chromium_version: chromium.to_string(),
            cef_version: cef.to_string(),
            files: kinds
                .iter()
                .map(|kind| DistributionFile {
                    kind: kind.to_string(),
                    name: format!("cef_binary_{cef}_linux64_{kind}.tar.bz2"),
                    sha1: format!("sha-{kind}"),
                    size: None,
                    last_modified: None,
                })
                .collect(),
        }
    }

    fn index_of(versions: Vec<VersionEntry>) -> CefIndex {
        let mut index = CefIndex::default();
        index
            .insert_platform("linux64", &PlatformBuilds { versions })
            .unwrap();
        index
    }

    #[test]
    fn test_leading_version_component() {
        assert_eq!(leading_version_component("120.0.6099.129").unwrap(), 120);
        assert_eq!(leading_version_component("0").unwrap(), 0);
        assert!(leading_version_component("beta.1").is_err());
        assert!(leading_version_component("").is_err());
    }

    #[test]
    fn test_newest_stable_wins() {
        let index = index_of(vec![
            entry("stable", "119.0.6045.199", "119.4.7", &["minimal"]),
            entry("beta", "121.0.6167.16", "121.0.1", &["minimal"]),
            entry("stable", "120.0.6099.129", "120.1.10", &["minimal"]),
        ]);

        let latest = find_latest_stable(&index, "linux64").unwrap();
        assert_eq!(latest.cef_version, "120.1.10");
    }

    #[test]
    fn test_numeric_not_lexical_order() {
        let index = index_of(vec![
            entry("stable", "99.0.4844.84", "99.2.15", &["minimal"]),
            entry("stable", "100.0.4896.75", "100.0.14", &["minimal"]),
        ]);

        let latest = find_latest_stable(&index, "linux64").unwrap();
        assert_eq!(latest.cef_version, "100.0.14");
    }

    #[test]
    fn test_equal_major_keeps_index_order() {
        let index = index_of(vec![
            entry("stable", "120.0.6099.109", "120.1.8", &["minimal"]),
            entry("stable", "120.0.6099.129", "120.1.10", &["minimal"]),
        ]);

        let latest = find_latest_stable(&index, "linux64").unwrap();
        assert_eq!(latest.cef_version, "120.1.8");
    }

    #[test]
    fn test_only_non_stable_fails() {
        let index = index_of(vec![
            entry("beta", "121.0.6167.16", "121.0.1", &["minimal"]),
            entry("dev", "122.0.1", "122.0.0", &["minimal"]),
        ]);

        let err = find_latest_stable(&index, "linux64").unwrap_err();
        assert!(matches!(err, AppError::NoStableVersion { .. }));
    }

    #[test]
    fn test_unknown_platform_fails() {
        let index = index_of(vec![entry("stable", "120.0", "120.1.10", &["minimal"])]);
        assert!(matches!(
            find_latest_stable(&index, "macosarm64"),
            Err(AppError::NoStableVersion { .. })
        ));
    }

    #[test]
    fn test_unparseable_stable_version_fails() {
        let index = index_of(vec![entry("stable", "next.0", "x", &["minimal"])]);
        assert!(matches!(
            find_latest_stable(&index, "linux64"),
            Err(AppError::VersionParse { .. })
        ));
    }

    #[test]
    fn test_minimal_preferred() {
        let version = entry("stable", "120.0", "120.1.10", &["standard", "client", "minimal"]);
        assert_eq!(select_distribution(&version).unwrap().kind, "minimal");
    }

    #[test]
    fn test_standard_fallback() {
        let version = entry("stable", "120.0", "120.1.10", &["client", "standard"]);
        let file = select_distribution(&version).unwrap();
        assert_eq!(file.kind, "standard");
        assert_eq!(file.sha1, "sha-standard");
    }

    #[test]
    fn test_no_distribution_fails() {
        let version = entry("stable", "120.0", "120.1.10", &["client", "debug_symbols"]);
        assert!(matches!(
            select_distribution(&version),
            Err(AppError::NoDistribution { .. })
        ));
    }
}
