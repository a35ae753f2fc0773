//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `batch/`, `codec/`, `models/`, `utils/`
//! - 子模块: convert, info, presets

pub mod convert;
pub mod info;
pub mod presets;

use crate::cli::Cli;
use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Convert(args) => convert::execute(args, cli.quiet),
        Commands::Presets(args) => presets::execute(args),
        Commands::Info(args) => info::execute(args),
    }
}
