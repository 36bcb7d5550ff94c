//! # 统一错误处理模块
//!
//! 定义 ocrbatch 的所有错误类型，使用 `thiserror` 派生。
//!
//! 单文件错误（文件缺失、格式不支持、解码失败、引擎失败）会被转换为
//! 失败的 `ExtractionResult`，不会中断批处理；只有启动与输出阶段的错误
//! 会向上传播到 `main.rs` 并以非零状态退出。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// ocrbatch 统一错误类型
#[derive(Error, Debug)]
pub enum OcrBatchError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("Image file not found: {path}")]
    FileNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 图像错误
    // ─────────────────────────────────────────────────────────────
    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),

    #[error("{0}")]
    Image(#[from] image::ImageError),

    // ─────────────────────────────────────────────────────────────
    // OCR 引擎错误
    // ─────────────────────────────────────────────────────────────
    #[error("OCR engine '{command}' not found in PATH (is Tesseract installed?)")]
    EngineNotFound { command: String },

    #[error("OCR engine failed: {command}\n{stderr}")]
    EngineFailed { command: String, stderr: String },

    // ─────────────────────────────────────────────────────────────
    // 序列化错误
    // ─────────────────────────────────────────────────────────────
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, OcrBatchError>;
