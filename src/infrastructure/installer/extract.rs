//! 发行包解压
//!
//! 按文件名判断格式：`.bz2` 结尾或名称中含 `.tar` 的按 tar+bzip2 处理，其余按 zip 处理。

use crate::error::{AppError, AppResult};
use bzip2::read::BzDecoder;
use std::fs;
use std::io::BufReader;
use std::path::{Component, Path};

/// 归档格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveKind {
    TarBz2,
    Zip,
}

impl ArchiveKind {
    /// 根据文件名判断归档格式
    pub fn from_path(path: &Path) -> Self {
        let is_bz2 = path.extension().is_some_and(|ext| ext == "bz2");
        let has_tar = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.contains(".tar"));

        if is_bz2 || has_tar {
            ArchiveKind::TarBz2
        } else {
            ArchiveKind::Zip
        }
    }
}

/// 解压归档到目标目录，返回写出的条目数
pub fn extract_archive(archive_path: &Path, dest_dir: &Path) -> AppResult<usize> {
    println!("📦 正在解压到 {}", dest_dir.display());
    fs::create_dir_all(dest_dir)?;

    let kind = ArchiveKind::from_path(archive_path);
    tracing::debug!(archive = %archive_path.display(), ?kind, "extracting");

    match kind {
        ArchiveKind::TarBz2 => extract_tar_bz2(archive_path, dest_dir),
        ArchiveKind::Zip => extract_zip(archive_path, dest_dir),
    }
}

/// 条目路径只能由普通路径段组成：绝对路径、盘符和 `..` 都视为不安全
pub fn is_safe_entry_path(path: &Path) -> bool {
    path.components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

pub fn extract_tar_bz2(tar_path: &Path, dest_dir: &Path) -> AppResult<usize> {
    let file = fs::File::open(tar_path)?;
    let mut archive = tar::Archive::new(BzDecoder::new(BufReader::new(file)));
    archive.set_preserve_permissions(true);

    let mut written = 0;
    for entry in archive
        .entries()
        .map_err(|e| AppError::archive(tar_path, format!("读取 tar 文件失败: {e}")))?
    {
        let mut entry =
            entry.map_err(|e| AppError::archive(tar_path, format!("读取 tar 文件项失败: {e}")))?;

        let path = entry
            .path()
            .map_err(|e| AppError::archive(tar_path, format!("读取 tar 文件项失败: {e}")))?
            .into_owned();
        if !is_safe_entry_path(&path) {
            tracing::warn!(path = %path.display(), "skipping unsafe tar entry");
            continue;
        }

        let unpacked = entry
            .unpack_in(dest_dir)
            .map_err(|e| AppError::archive(tar_path, format!("写入文件失败: {e}")))?;
        if unpacked {
            written += 1;
        } else {
            tracing::warn!(path = %path.display(), "skipping unsafe tar entry");
        }
    }

    Ok(written)
}

pub fn extract_zip(zip_path: &Path, dest_dir: &Path) -> AppResult<usize> {
    let file = fs::File::open(zip_path)?;
    let mut archive = zip::ZipArchive::new(file)
        .map_err(|e| AppError::archive(zip_path, format!("读取 ZIP 文件失败: {e}")))?;

    let mut written = 0;
    for i in 0..archive.len() {
        let mut file = archive
            .by_index(i)
            .map_err(|e| AppError::archive(zip_path, format!("读取 ZIP 文件项失败: {e}")))?;

        let Some(relative) = file
            .enclosed_name()
            .filter(|p| is_safe_entry_path(p))
            .map(Path::to_path_buf)
        else {
            tracing::warn!(name = file.name(), "skipping unsafe zip entry");
            continue;
        };
        let outpath = dest_dir.join(relative);

        if file.is_dir() {
            fs::create_dir_all(&outpath)?;
        } else {
            if let Some(parent) = outpath.parent() {
                fs::create_dir_all(parent)?;
            }
            let mut outfile = fs::File::create(&outpath)?;
            std::io::copy(&mut file, &mut outfile)?;
        }

        #[cfg(unix)]
        if let Some(mode) = file.unix_mode() {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&outpath, fs::Permissions::from_mode(mode))?;
        }

        written += 1;
    }

    Ok(written)
}
