use super::http_client::HttpClient;
use crate::core::constants::fs::PARTIAL_SUFFIX;
use crate::error::{AppError, AppResult};
use futures_util::StreamExt;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;

/// 由下载前缀和文件名拼出下载地址。文件名原样拼接（CEF 文件名包含 `+`）。
pub fn download_url(base: &str, filename: &str) -> AppResult<String> {
    let base = url::Url::parse(base)?;
    Ok(format!("{}/{}", base.as_str().trim_end_matches('/'), filename))
}

/// 下载中的临时文件路径：`<file>.downloading`
pub fn partial_path(file_path: &Path) -> PathBuf {
    let mut name = OsString::from(file_path.as_os_str());
    name.push(".");
    name.push(PARTIAL_SUFFIX);
    PathBuf::from(name)
}

/// 流式下载到文件并回调进度。
///
/// 数据先写入临时文件，成功后再重命名为目标文件；失败时删除临时文件。
pub async fn download_to_file(
    client: &HttpClient,
    url: &str,
    file_path: &Path,
    progress: impl Fn(u64, u64),
) -> AppResult<u64> {
    let temp_path = partial_path(file_path);
    let result = download_to_file_internal(client, url, &temp_path, &progress).await;

    match result {
        Ok(downloaded) => {
            tokio::fs::rename(&temp_path, file_path).await?;
            Ok(downloaded)
        }
        Err(e) => {
            let _ = tokio::fs::remove_file(&temp_path).await;
            Err(e)
        }
    }
}

async fn download_to_file_internal(
    client: &HttpClient,
    url: &str,
    temp_path: &Path,
    progress: &impl Fn(u64, u64),
) -> AppResult<u64> {
    let response = client.get(url).await?;

    let total_size = response.content_length().unwrap_or(0);
    let mut downloaded = 0u64;
    let mut stream = response.bytes_stream();

    let mut file = tokio::fs::File::create(temp_path).await?;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| AppError::network(format!("读取数据失败: {e}")))?;
        downloaded += chunk.len() as u64;
        progress(downloaded, total_size);
        file.write_all(&chunk).await?;
    }

    file.flush().await?;
    Ok(downloaded)
}
