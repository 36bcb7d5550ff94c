//! # 图像文件收集器
//!
//! 根据输入路径收集待识别的图像文件列表。
//!
//! ## 功能
//! - 支持单文件和目录输入
//! - 按扩展名白名单过滤（大小写不敏感）
//! - 可选递归目录搜索
//! - 结果按路径字典序排序，保证枚举顺序确定
//!
//! ## 依赖关系
//! - 被 `commands/extract.rs` 和 `batch/runner.rs` 调用
//! - 使用 `walkdir` 遍历目录

use crate::error::{OcrBatchError, Result};

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 支持的图像扩展名
pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "tiff", "bmp", "gif"];

/// 检查路径扩展名是否在白名单内
pub fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|s| s.eq_ignore_ascii_case(e))
        })
        .unwrap_or(false)
}

/// 文件收集器
pub struct FileCollector {
    /// 输入路径
    input: PathBuf,
    /// 是否递归
    recursive: bool,
}

impl FileCollector {
    /// 创建新的文件收集器（默认递归）
    pub fn new(input: PathBuf) -> Self {
        Self {
            input,
            recursive: true,
        }
    }

    /// 设置是否递归搜索
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// 收集所有匹配的文件
    ///
    /// 输入为文件时原样返回（扩展名校验推迟到逐文件处理阶段，
    /// 以便记录为失败结果）；输入不存在时报错。
    pub fn collect(&self) -> Result<Vec<PathBuf>> {
        if self.input.is_file() {
            return Ok(vec![self.input.clone()]);
        }

        if !self.input.is_dir() {
            return Err(OcrBatchError::DirectoryNotFound {
                path: self.input.display().to_string(),
            });
        }

        let max_depth = if self.recursive { usize::MAX } else { 1 };

        let mut files: Vec<PathBuf> = WalkDir::new(&self.input)
            .max_depth(max_depth)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| is_supported(e.path()))
            .map(|e| e.into_path())
            .collect();

        files.sort();
        Ok(files)
    }
}
