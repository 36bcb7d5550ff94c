//! # 日志初始化
//!
//! 使用 `tracing-subscriber` 输出诊断日志到 stderr。
//! 默认级别 `warn`，`--verbose` 提升到 `debug`，`RUST_LOG` 优先。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用

use tracing_subscriber::EnvFilter;

/// 初始化全局日志订阅器
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("ocrbatch={}", default_level)));

    // 已初始化时忽略
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
