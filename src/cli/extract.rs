//! # 文字提取参数定义
//!
//! 处理模式（`--single` / `--batch`）互斥且必选一个；
//! `json` 输出要求 `--output-file`，`text` 输出要求 `--output-dir`。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/extract.rs`

use crate::engine::tesseract::{DEFAULT_COMMAND, DEFAULT_CONFIG};
use crate::error::{OcrBatchError, Result};

use clap::{ArgGroup, Args, ValueEnum};
use std::path::PathBuf;

/// 支持的输出格式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable blocks printed to the terminal
    Console,
    /// One JSON array of results written to --output-file
    Json,
    /// One <name>.txt file per image written to --output-dir
    Text,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Console => write!(f, "console"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Text => write!(f, "text"),
        }
    }
}

/// 已校验的输出目标
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Console,
    Json(PathBuf),
    Text(PathBuf),
}

/// 文字提取参数
#[derive(Args, Debug)]
#[command(group(
    ArgGroup::new("mode")
        .required(true)
        .args(["single", "batch"])
))]
pub struct ExtractArgs {
    /// Extract text from a single image
    #[arg(long, value_name = "IMAGE_PATH")]
    pub single: Option<PathBuf>,

    /// Extract text from all images in --source-dir
    #[arg(long, default_value_t = false)]
    pub batch: bool,

    /// Source directory for batch processing [default: .]
    #[arg(long, value_name = "DIR", conflicts_with = "single")]
    pub source_dir: Option<PathBuf>,

    /// Only scan the top level of --source-dir
    #[arg(long, default_value_t = false, conflicts_with = "single")]
    pub no_recursive: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Console)]
    pub format: OutputFormat,

    /// Output file path (required for json format)
    #[arg(long, value_name = "PATH", required_if_eq("format", "json"))]
    pub output_file: Option<PathBuf>,

    /// Output directory path (required for text format)
    #[arg(long, value_name = "PATH", required_if_eq("format", "text"))]
    pub output_dir: Option<PathBuf>,

    /// Tesseract configuration string, passed through verbatim
    #[arg(
        long,
        value_name = "STRING",
        default_value = DEFAULT_CONFIG,
        allow_hyphen_values = true,
        env = "OCRBATCH_TESSERACT_CONFIG"
    )]
    pub tesseract_config: String,

    /// Tesseract executable to invoke
    #[arg(long, value_name = "PATH", default_value = DEFAULT_COMMAND, env = "TESSERACT_CMD")]
    pub tesseract_cmd: String,
}

impl ExtractArgs {
    /// 批处理源目录（未指定时为当前目录）
    pub fn source_dir(&self) -> PathBuf {
        self.source_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// 解析输出目标
    pub fn output_target(&self) -> Result<OutputTarget> {
        match self.format {
            OutputFormat::Console => Ok(OutputTarget::Console),
            OutputFormat::Json => self
                .output_file
                .clone()
                .map(OutputTarget::Json)
                .ok_or_else(|| {
                    OcrBatchError::InvalidArgument("--output-file is required for json".into())
                }),
            OutputFormat::Text => self
                .output_dir
                .clone()
                .map(OutputTarget::Text)
                .ok_or_else(|| {
                    OcrBatchError::InvalidArgument("--output-dir is required for text".into())
                }),
        }
    }
}
