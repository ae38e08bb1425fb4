use crate::core::constants::fs::{EXTRACTED_DIR_PREFIX, VERSION_MARKER_FILE};
use crate::error::AppResult;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::{Path, PathBuf};

pub fn create_progress_bar() -> ProgressBar {
    let pb = ProgressBar::new(0);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {bytes}/{total_bytes} ({eta}) {percent}%")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-");
    pb.set_style(style);
    pb
}

/// 归档文件名去掉 `.tar.bz2` / `.zip` 等后缀，即解压出的顶层目录名
pub fn archive_stem(archive_name: &str) -> &str {
    [".tar.bz2", ".tar", ".zip", ".bz2"]
        .iter()
        .find_map(|suffix| archive_name.strip_suffix(suffix))
        .unwrap_or(archive_name)
}

/// 查找解压出的 `cef_binary_*` 目录。
///
/// 下载的归档文件同样以该前缀命名，因此只考虑目录。优先取与归档同名的目录；
/// 没有时按名称排序后取第一个。
pub fn locate_extracted_dir(output_dir: &Path, archive_name: &str) -> AppResult<Option<PathBuf>> {
    let stem = archive_stem(archive_name);
    let mut candidates = Vec::new();
    for entry in fs::read_dir(output_dir)? {
        let entry = entry?;
        let is_match = entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with(EXTRACTED_DIR_PREFIX));
        if is_match && entry.file_type()?.is_dir() {
            candidates.push(entry.path());
        }
    }

    if let Some(exact) = candidates
        .iter()
        .find(|p| p.file_name().is_some_and(|name| name == stem))
    {
        return Ok(Some(exact.clone()));
    }

    candidates.sort();
    Ok(candidates.into_iter().next())
}

/// 写入版本标记文件，内容即版本号本身
pub fn write_version_marker(output_dir: &Path, version: &str) -> AppResult<PathBuf> {
    let marker = output_dir.join(VERSION_MARKER_FILE);
    fs::write(&marker, version)?;
    Ok(marker)
}
