//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。
//!
//! ## 参数结构
//! - 处理模式: `--single PATH` | `--batch`
//! - 输入: `--source-dir`, `--no-recursive`
//! - 输出: `--format`, `--output-file`, `--output-dir`
//! - 引擎: `--tesseract-config`, `--tesseract-cmd`
//! - 日志: `--verbose`
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: extract

pub mod extract;

use clap::Parser;

/// ocrbatch - 批量图像文字提取工具
#[derive(Parser, Debug)]
#[command(name = "ocrbatch")]
#[command(version)]
#[command(about = "Extract text from images using the Tesseract OCR engine", long_about = None)]
#[command(after_help = "Examples:
  ocrbatch --single scans/page_01.jpg
  ocrbatch --batch --source-dir scans/ --format console
  ocrbatch --batch --source-dir . --format json --output-file results.json
  ocrbatch --batch --source-dir . --format text --output-dir ./extracted_text/")]
pub struct Cli {
    #[command(flatten)]
    pub extract: extract::ExtractArgs,

    /// Enable verbose logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}
