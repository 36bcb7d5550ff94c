//! # 批量处理模块
//!
//! 提供图像文件收集与顺序识别能力。
//!
//! ## 功能
//! - 自动检测输入类型（文件/目录）
//! - 按扩展名白名单收集文件列表
//! - 串行处理，单文件失败不中断
//! - 进度反馈与统计
//!
//! ## 依赖关系
//! - 被 `commands/extract.rs` 使用
//! - 使用 `walkdir` 遍历目录
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod runner;

pub use collector::FileCollector;
pub use runner::{BatchRunner, BatchSummary};
