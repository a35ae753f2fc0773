//! # 编解码模块
//!
//! 编码参数解析、颜色模式强制转换与单文件转换。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 和 `commands/` 使用
//! - 使用 `models/` 数据模型和 `image` crate
//! - 子模块: policy, coercion, converter, encoders

pub mod coercion;
pub mod converter;
pub mod encoders;
pub mod policy;

pub use coercion::{coercion_for, Coercion};
pub use converter::{convert_file, decode_image, ConvertSummary};
pub use policy::{resolve_policy, EncodingPolicy};
