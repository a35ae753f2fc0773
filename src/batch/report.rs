//! # 运行报告输出
//!
//! - 错误日志: 每个失败文件一行 `路径 | 错误信息`
//! - CSV 报告: 每个文件一行 `input,status,output,message`
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs`（错误日志）和 `commands/convert.rs`（CSV）使用
//! - 使用 `csv` + `serde` 写入 CSV

use super::runner::{ConversionError, FileNotice, FileStatus};
use crate::error::{ImgconvError, Result};

use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// 错误日志文件名
pub const ERROR_LOG_NAME: &str = "conversion_errors.log";

/// 把错误列表写入 `dir/conversion_errors.log`，返回日志路径
pub fn write_error_log(dir: &Path, errors: &[ConversionError]) -> Result<PathBuf> {
    let path = dir.join(ERROR_LOG_NAME);
    let log_err = |e: std::io::Error| ImgconvError::LogWriteFailure {
        path: path.display().to_string(),
        source: e,
    };

    let file = File::create(&path).map_err(log_err)?;
    let mut writer = BufWriter::new(file);
    for error in errors {
        writeln!(writer, "{} | {}", error.path.display(), error.error).map_err(log_err)?;
    }
    writer.flush().map_err(log_err)?;

    Ok(path)
}

/// CSV 报告行
#[derive(Debug, Serialize)]
struct ReportRow<'a> {
    input: String,
    status: &'a str,
    output: String,
    message: &'a str,
}

impl<'a> From<&'a FileNotice> for ReportRow<'a> {
    fn from(notice: &'a FileNotice) -> Self {
        let (status, output, message) = match &notice.status {
            FileStatus::Converted { output } => ("converted", output.display().to_string(), ""),
            FileStatus::Skipped => ("skipped", String::new(), ""),
            FileStatus::Failed { message } => ("failed", String::new(), message.as_str()),
        };
        Self {
            input: notice.input.display().to_string(),
            status,
            output,
            message,
        }
    }
}

/// 写出逐文件 CSV 报告
pub fn write_csv_report(path: &Path, notices: &[FileNotice]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    for notice in notices {
        wtr.serialize(ReportRow::from(notice))?;
    }

    wtr.flush().map_err(|e| ImgconvError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(())
}
