//! # 文字提取结果数据模型
//!
//! 每个被处理的图像文件对应一条 `ExtractionResult`，创建后不可变，
//! 按输入枚举顺序收集，并原样序列化到所选输出格式。
//!
//! ## JSON 字段
//! `file_path`, `file_name`, `success`, `text`, `error`,
//! `image_size`（`[width, height]`）, `image_mode`。
//! 失败记录不包含 `image_size` 与 `image_mode` 字段。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 创建
//! - 被 `render/` 输出

use image::ColorType;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 图像基础元数据
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageInfo {
    /// 像素尺寸 (width, height)
    pub size: (u32, u32),
    /// 颜色模式名称
    pub mode: String,
}

impl ImageInfo {
    pub fn new(width: u32, height: u32, color: ColorType) -> Self {
        ImageInfo {
            size: (width, height),
            mode: color_mode_name(color).to_string(),
        }
    }
}

/// 将解码后的颜色类型映射为常见的模式名称（与 PIL 命名一致）
pub fn color_mode_name(color: ColorType) -> &'static str {
    match color {
        ColorType::L8 => "L",
        ColorType::La8 => "LA",
        ColorType::Rgb8 => "RGB",
        ColorType::Rgba8 => "RGBA",
        ColorType::L16 => "I;16",
        ColorType::La16 => "LA;16",
        ColorType::Rgb16 => "RGB;16",
        ColorType::Rgba16 => "RGBA;16",
        ColorType::Rgb32F => "RGB;F",
        ColorType::Rgba32F => "RGBA;F",
        _ => "unknown",
    }
}

/// 单个文件的提取结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// 源文件路径
    pub file_path: String,

    /// 文件名
    pub file_name: String,

    /// 是否提取成功
    pub success: bool,

    /// 提取的文本（已去除首尾空白，失败时为空）
    pub text: String,

    /// 错误信息（仅失败时存在）
    pub error: Option<String>,

    /// 图像尺寸 [width, height]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_size: Option<(u32, u32)>,

    /// 图像颜色模式
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_mode: Option<String>,
}

impl ExtractionResult {
    /// 构造成功记录
    pub fn success(path: &Path, text: &str, info: ImageInfo) -> Self {
        ExtractionResult {
            file_path: path.display().to_string(),
            file_name: file_name_of(path),
            success: true,
            text: text.trim().to_string(),
            error: None,
            image_size: Some(info.size),
            image_mode: Some(info.mode),
        }
    }

    /// 构造失败记录，错误信息带上文件名前缀
    pub fn failure(path: &Path, reason: impl std::fmt::Display) -> Self {
        let file_name = file_name_of(path);
        ExtractionResult {
            file_path: path.display().to_string(),
            error: Some(format!("Error processing {}: {}", file_name, reason)),
            file_name,
            success: false,
            text: String::new(),
            image_size: None,
            image_mode: None,
        }
    }

    /// 文本输出模式下的目标文件名：`<stem>.txt`
    pub fn text_file_name(&self) -> String {
        let stem = Path::new(&self.file_name)
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| self.file_name.clone());
        format!("{}.txt", stem)
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
