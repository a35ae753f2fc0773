//! # 进度条工具
//!
//! 封装 `indicatif` 提供统一的进度条样式。批量转换的进度以百分比
//! 表示（字节加权），因此进度条长度固定为 100。
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 使用
//! - 使用 `indicatif` crate

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// 创建百分比进度条
pub fn create_percent_bar(message: &str, hidden: bool) -> ProgressBar {
    let pb = ProgressBar::new(100);
    if hidden {
        pb.set_draw_target(ProgressDrawTarget::hidden());
    }
    let style = ProgressStyle::with_template(
        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos:>3}% {msg}",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar())
    .progress_chars("#>-");
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb
}
