//! # Tesseract 命令行引擎
//!
//! 通过外部 `tesseract` 可执行文件完成识别：
//! 图像先写入作用域内的临时 PNG 文件，再执行
//! `tesseract <tmp.png> stdout <config...>`，读取标准输出作为识别结果。
//! 临时文件在 `NamedTempFile` 析构时删除，任何退出路径都会释放。
//!
//! ## 依赖关系
//! - 实现 `engine::OcrEngine`
//! - 使用 `tempfile` 管理临时输入文件

use super::OcrEngine;
use crate::error::{OcrBatchError, Result};

use image::{ImageFormat, RgbImage};
use std::io::ErrorKind;
use std::path::Path;
use std::process::{Command, Output};
use tracing::debug;

/// 默认配置：LSTM 引擎 + 单一文本块分割
pub const DEFAULT_CONFIG: &str = "--oem 3 --psm 6";

/// 默认可执行文件名
pub const DEFAULT_COMMAND: &str = "tesseract";

/// 按 shell 规则切分配置字符串，引号内的空格保留在同一参数中
pub fn parse_config(config: &str) -> Result<Vec<String>> {
    shlex::split(config).ok_or_else(|| {
        OcrBatchError::InvalidArgument(format!(
            "unbalanced quotes in --tesseract-config: {}",
            config
        ))
    })
}

/// Tesseract 命令行调用器
#[derive(Debug, Clone)]
pub struct TesseractCli {
    command: String,
}

impl TesseractCli {
    pub fn new(command: impl Into<String>) -> Self {
        TesseractCli {
            command: command.into(),
        }
    }

    /// 组装参数：输入文件、输出到 stdout、透传配置
    fn build_args(input: &Path, config: &str) -> Result<Vec<String>> {
        let mut args = vec![input.display().to_string(), "stdout".to_string()];
        args.extend(parse_config(config)?);
        Ok(args)
    }

    fn run(&self, args: &[String]) -> Result<Output> {
        Command::new(&self.command)
            .args(args)
            .output()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => OcrBatchError::EngineNotFound {
                    command: self.command.clone(),
                },
                _ => OcrBatchError::EngineFailed {
                    command: self.command.clone(),
                    stderr: e.to_string(),
                },
            })
    }
}

impl OcrEngine for TesseractCli {
    fn name(&self) -> &str {
        &self.command
    }

    fn check_available(&self) -> Result<String> {
        let output = self.run(&["--version".to_string()])?;

        // 旧版本把版本信息打印到 stderr
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        let version = stdout
            .lines()
            .chain(stderr.lines())
            .find(|l| !l.trim().is_empty())
            .unwrap_or("unknown version")
            .trim()
            .to_string();

        if !output.status.success() {
            return Err(OcrBatchError::EngineFailed {
                command: format!("{} --version", self.command),
                stderr: stderr.trim().to_string(),
            });
        }

        Ok(version)
    }

    fn recognize(&self, image: &RgbImage, config: &str) -> Result<String> {
        let input = tempfile::Builder::new()
            .prefix("ocrbatch-")
            .suffix(".png")
            .tempfile()
            .map_err(|e| OcrBatchError::FileWriteError {
                path: std::env::temp_dir().display().to_string(),
                source: e,
            })?;

        image.save_with_format(input.path(), ImageFormat::Png)?;

        let args = Self::build_args(input.path(), config)?;
        debug!(command = %self.command, ?args, "invoking OCR engine");

        let output = self.run(&args)?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).to_string())
        } else {
            Err(OcrBatchError::EngineFailed {
                command: format!("{} {}", self.command, args.join(" ")),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            })
        }
    }
}
