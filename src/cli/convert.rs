//! # convert 子命令 CLI 定义
//!
//! 批量把图片转换为目标格式（PNG / WEBP / JPEG / BMP / TIFF / GIF）
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/convert.rs`

use crate::batch::collector::DEFAULT_PATTERN;
use crate::batch::NamingMode;
use crate::models::TargetFormat;

use clap::Args;
use std::path::PathBuf;

/// convert 子命令参数
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Input image files or directories
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Target output format
    #[arg(short, long, value_enum, ignore_case = true, default_value = "png", env = "IMGCONV_FORMAT")]
    pub format: TargetFormat,

    /// Quality preset (lossless, high, balanced, compact); unknown values fall back to lossless
    #[arg(short, long, default_value = "lossless", env = "IMGCONV_PRESET")]
    pub preset: String,

    /// Output directory (defaults to each input's own directory)
    #[arg(short, long, env = "IMGCONV_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// How output file names are chosen
    #[arg(short, long, value_enum, default_value = "auto")]
    pub naming: NamingMode,

    /// Recurse into subdirectories
    #[arg(short, long, default_value_t = false)]
    pub recursive: bool,

    /// Glob patterns for files inside directories (comma-separated)
    #[arg(long, default_value = DEFAULT_PATTERN)]
    pub pattern: String,

    /// Write a per-file CSV report
    #[arg(long)]
    pub report: Option<PathBuf>,
}
