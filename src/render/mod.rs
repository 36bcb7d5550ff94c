//! # 结果输出模块
//!
//! 将提取结果渲染到所选输出目标。
//!
//! ## 支持格式
//! - console: 每个文件一段可读文本块
//! - json: 单个 JSON 数组写入文件
//! - text: 每张成功识别的图像写一个 `<stem>.txt`
//!
//! ## 依赖关系
//! - 被 `commands/extract.rs` 调用
//! - 使用 `models::ExtractionResult`
//! - 子模块: console, json, text

pub mod console;
pub mod json;
pub mod text;

use crate::cli::extract::OutputTarget;
use crate::error::{OcrBatchError, Result};
use crate::models::ExtractionResult;
use crate::utils::output;

/// 渲染结果到输出目标
pub fn render(results: &[ExtractionResult], target: &OutputTarget) -> Result<()> {
    match target {
        OutputTarget::Console => {
            let stdout = std::io::stdout();
            console::write_console(&mut stdout.lock(), results).map_err(|e| {
                OcrBatchError::FileWriteError {
                    path: "<stdout>".to_string(),
                    source: e,
                }
            })
        }
        OutputTarget::Json(path) => {
            json::write_json(results, path)?;
            output::print_success(&format!("Results saved to '{}'", path.display()));
            Ok(())
        }
        OutputTarget::Text(dir) => {
            let written = text::write_text_files(results, dir)?;
            output::print_success(&format!(
                "{} text file(s) saved to '{}'",
                written,
                dir.display()
            ));
            Ok(())
        }
    }
}
