//! # info 子命令 CLI 定义
//!
//! 显示图片的格式、尺寸、颜色模式与大小
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/info.rs`

use crate::batch::collector::DEFAULT_PATTERN;

use clap::Args;
use std::path::PathBuf;

/// info 子命令参数
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Image files or directories
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Recurse into subdirectories
    #[arg(short, long, default_value_t = false)]
    pub recursive: bool,

    /// Glob patterns for files inside directories (comma-separated)
    #[arg(long, default_value = DEFAULT_PATTERN)]
    pub pattern: String,
}
