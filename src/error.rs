//! # 统一错误处理模块
//!
//! 定义 imgconv 的所有错误类型，使用 `thiserror` 派生。
//!
//! - `ImgconvError`: 运行级 / 命令级错误
//! - `FileError`: 单文件转换错误（不中断批处理）
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// imgconv 统一错误类型
#[derive(Error, Debug)]
pub enum ImgconvError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to write file {path}: {source}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 批处理错误
    // ─────────────────────────────────────────────────────────────
    #[error("No files queued for conversion")]
    NoFilesQueued,

    #[error("Failed to write error log {path}: {source}")]
    LogWriteFailure {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Unexpected fault: {0}")]
    UnexpectedFault(String),

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

/// 单文件转换错误
///
/// 只影响当前文件，被收集到运行报告中，批处理继续。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FileError {
    #[error("decode failed: {reason}")]
    DecodeFailure { reason: String },

    #[error("encode failed: {reason}")]
    EncodeFailure { reason: String },
}

/// 单文件错误类别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileErrorKind {
    Decode,
    Encode,
}

impl std::fmt::Display for FileErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileErrorKind::Decode => write!(f, "decode"),
            FileErrorKind::Encode => write!(f, "encode"),
        }
    }
}

impl FileError {
    pub fn kind(&self) -> FileErrorKind {
        match self {
            FileError::DecodeFailure { .. } => FileErrorKind::Decode,
            FileError::EncodeFailure { .. } => FileErrorKind::Encode,
        }
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, ImgconvError>;
