//! # 命令执行模块
//!
//! 实现文字提取流程的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `batch/`, `engine/`, `render/`, `utils/`
//! - 子模块: extract

pub mod extract;

use crate::cli::Cli;
use crate::error::Result;

/// 执行命令
pub fn run(cli: Cli) -> Result<()> {
    extract::execute(cli.extract, cli.verbose)
}
