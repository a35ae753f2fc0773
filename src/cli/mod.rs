//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `convert`: 批量图片格式转换
//! - `presets`: 查看各预设解析出的编码参数
//! - `info`: 查看图片格式、尺寸与颜色模式
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: convert, info, presets

pub mod convert;
pub mod info;
pub mod presets;

use clap::{Parser, Subcommand};

/// imgconv - 批量图片格式转换
#[derive(Parser)]
#[command(name = "imgconv")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Batch raster image converter with quality presets", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Hide the progress bar and only log errors
    #[arg(short, long, global = true, default_value_t = false)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Convert images to another format (PNG, WEBP, JPEG, BMP, TIFF, GIF)
    Convert(convert::ConvertArgs),

    /// Show the encoder parameters each preset resolves to
    Presets(presets::PresetsArgs),

    /// Show format, dimensions and color mode of images
    Info(info::InfoArgs),
}
