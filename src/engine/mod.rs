//! # OCR 引擎模块
//!
//! 文字识别完全委托给外部引擎。本模块只定义调用接口：
//! 输入一张 RGB 图像和一条原样透传的配置字符串，返回识别文本或错误。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 和 `commands/extract.rs` 使用
//! - 子模块: tesseract

pub mod tesseract;

pub use tesseract::TesseractCli;

use crate::error::Result;
use image::RgbImage;

/// 外部 OCR 引擎接口
pub trait OcrEngine {
    /// 引擎名称（用于日志）
    fn name(&self) -> &str;

    /// 检查引擎是否可用，返回版本信息
    fn check_available(&self) -> Result<String>;

    /// 识别单张图像中的文字
    fn recognize(&self, image: &RgbImage, config: &str) -> Result<String>;
}
