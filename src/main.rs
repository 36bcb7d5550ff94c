//! # ocrbatch - 批量图像文字提取工具
//!
//! 将图像文件交给外部 OCR 引擎（Tesseract）识别，并以终端文本、
//! JSON 或逐文件文本的形式输出结果。识别本身完全由引擎完成。
//!
//! ## 用法
//! - `--single PATH` - 识别单张图像
//! - `--batch [--source-dir DIR]` - 识别目录下所有支持的图像
//! - `--format {console|json|text}` - 输出格式
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── batch/   (文件收集与顺序执行)
//!   │     ├── engine/  (OCR 引擎调用)
//!   │     ├── render/  (结果输出)
//!   │     └── models/  (数据模型)
//!   ├── utils/      (输出、进度条、日志)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod engine;
mod error;
mod models;
mod render;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();
    utils::logging::init(cli.verbose);

    if let Err(e) = commands::run(cli) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
