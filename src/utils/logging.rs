//! # 日志初始化
//!
//! `tracing-subscriber` 输出到 stderr。`RUST_LOG` 优先；否则按
//! `-v` 次数选择级别（默认 warn，`-v` info，`-vv` 及以上 debug），
//! `--quiet` 时为 error。

use tracing_subscriber::EnvFilter;

/// 根据命令行选项决定默认过滤级别
pub fn default_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// 初始化全局 subscriber（重复调用无副作用）
pub fn init(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("imgconv={}", default_level(verbose, quiet))));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
