//! # 数据模型模块
//!
//! 定义目标格式、质量预设与颜色模式等封闭枚举。
//!
//! ## 依赖关系
//! - 被 `codec/`、`batch/` 和 `commands/` 使用
//! - 子模块: format, preset, color

pub mod color;
pub mod format;
pub mod preset;

pub use color::ColorMode;
pub use format::TargetFormat;
pub use preset::Preset;
