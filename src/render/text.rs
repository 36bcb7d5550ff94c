//! # 逐文件文本输出
//!
//! 每个成功识别的图像写出一个 `<stem>.txt`，内容恰为识别文本。
//! 输出目录不存在时自动创建。

use crate::error::{OcrBatchError, Result};
use crate::models::ExtractionResult;
use crate::utils::output;

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// 写出文本文件，返回输出目录中生成的文件数
pub fn write_text_files(results: &[ExtractionResult], output_dir: &Path) -> Result<usize> {
    fs::create_dir_all(output_dir).map_err(|e| OcrBatchError::FileWriteError {
        path: output_dir.display().to_string(),
        source: e,
    })?;

    let mut seen = HashSet::new();

    for result in results.iter().filter(|r| r.success) {
        let name = result.text_file_name();
        if !seen.insert(name.clone()) {
            let msg = format!(
                "{} overwrites an earlier output with the same name ({})",
                name, result.file_path
            );
            warn!("{}", msg);
            output::print_warning(&msg);
        }

        let path = output_dir.join(&name);
        fs::write(&path, result.text.as_bytes()).map_err(|e| OcrBatchError::FileWriteError {
            path: path.display().to_string(),
            source: e,
        })?;
        debug!("Wrote {}", path.display());
    }

    Ok(seen.len())
}
