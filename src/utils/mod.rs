//! # 工具函数模块
//!
//! 提供美化输出、进度条、终端询问、Ctrl-C 处理与日志初始化等工具。
//!
//! ## 依赖关系
//! - 被 `main.rs` 和 `commands/` 模块使用
//! - 子模块: interrupt, logging, output, progress, prompt

pub mod interrupt;
pub mod logging;
pub mod output;
pub mod progress;
pub mod prompt;
