//! # 数据模型模块
//!
//! 定义单文件提取结果及图像元数据。
//!
//! ## 依赖关系
//! - 被 `batch/` 和 `render/` 使用
//! - 子模块: extraction

pub mod extraction;

pub use extraction::{ExtractionResult, ImageInfo};
