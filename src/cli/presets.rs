//! # presets 子命令 CLI 定义
//!
//! 列出 (格式, 预设) 解析出的编码参数
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/presets.rs`

use crate::models::TargetFormat;

use clap::Args;

/// presets 子命令参数
#[derive(Args, Debug)]
pub struct PresetsArgs {
    /// Only show this format
    #[arg(short, long, value_enum, ignore_case = true)]
    pub format: Option<TargetFormat>,
}
