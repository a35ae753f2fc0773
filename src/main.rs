//! # imgconv - 批量图片格式转换
//!
//! 把一组栅格图片逐个转换为目标格式（PNG / WEBP / JPEG / BMP / TIFF / GIF），
//! 按质量预设选择编码参数，显示字节加权进度，支持中途取消。
//!
//! ## 子命令
//! - `convert` - 批量转换
//! - `presets` - 查看预设解析出的编码参数
//! - `info`    - 查看图片格式、尺寸与颜色模式
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── batch/   (队列、进度、取消、编排)
//!   │     ├── codec/   (编码参数、颜色转换、单文件转换)
//!   │     └── models/  (格式、预设、颜色模式)
//!   ├── utils/      (输出、进度条、询问、Ctrl-C、日志)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod codec;
mod commands;
mod error;
mod models;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();
    utils::logging::init(cli.verbose, cli.quiet);

    if let Err(e) = commands::run(cli) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
