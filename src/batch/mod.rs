//! # 批量转换引擎
//!
//! 有序文件队列、字节加权进度、协作式取消、输出路径解析、
//! 错误汇总与运行编排。
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 使用
//! - 使用 `codec/` 执行单文件转换
//! - 子模块: cancel, collector, naming, progress, queue, report, runner

pub mod cancel;
pub mod collector;
pub mod naming;
pub mod progress;
pub mod queue;
pub mod report;
pub mod runner;

pub use cancel::CancellationToken;
pub use collector::FileCollector;
pub use naming::{NamingMode, NoPrompt, PathPrompt};
pub use queue::ConversionQueue;
pub use runner::{
    BatchRunner, ConversionJob, FileNotice, FileStatus, RunObserver, RunOutcome, RunReport,
};
