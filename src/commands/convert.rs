//! # convert 命令实现
//!
//! 收集输入、建立队列、驱动批量编排器并输出运行汇总。
//!
//! ## 功能
//! - 文件 / 目录输入，glob 过滤，可递归
//! - 字节加权进度条，Ctrl-C 协作式取消
//! - `interactive` 命名模式下逐个询问目标路径
//! - 失败文件写入错误日志，可选 CSV 报告
//!
//! ## 依赖关系
//! - 使用 `cli/convert.rs` 定义的参数
//! - 使用 `batch/`, `models/`
//! - 使用 `utils/output.rs`, `utils/progress.rs`, `utils/prompt.rs`, `utils/interrupt.rs`

use crate::batch::{
    report, BatchRunner, ConversionJob, ConversionQueue, FileCollector, FileNotice, FileStatus,
    NamingMode, NoPrompt, PathPrompt, RunObserver, RunOutcome, RunReport,
};
use crate::cli::convert::ConvertArgs;
use crate::error::{ImgconvError, Result};
use crate::models::Preset;
use crate::utils::prompt::TerminalPrompt;
use crate::utils::{interrupt, output, progress};

use indicatif::ProgressBar;
use std::fs;

/// 终端事件接收方：刷新进度条并逐文件打印结果
struct TerminalObserver {
    bar: ProgressBar,
    total_files: usize,
}

impl RunObserver for TerminalObserver {
    fn on_run_started(&mut self, total_files: usize, _total_weight: u64) {
        self.total_files = total_files;
    }

    fn on_progress(&mut self, percent: u8) {
        self.bar.set_position(percent as u64);
    }

    fn on_file_finished(&mut self, notice: &FileNotice) {
        let input = notice.input.display().to_string();
        let position = notice.index + 1;
        let total = self.total_files;
        self.bar.set_message(format!("{}/{}", position, total));
        self.bar.suspend(|| match &notice.status {
            FileStatus::Converted { output } => {
                output::print_converted(position, total, &input, &output.display().to_string())
            }
            FileStatus::Skipped => output::print_skipped(position, total, &input),
            FileStatus::Failed { message } => {
                output::print_failed(position, total, &input, message)
            }
        });
    }
}

/// 执行 convert 命令
pub fn execute(args: ConvertArgs, quiet: bool) -> Result<()> {
    let preset = Preset::from_key(&args.preset);

    output::print_header(&format!("Converting to {} ({})", args.format, preset));

    // 创建输出目录
    if let Some(dir) = &args.output_dir {
        fs::create_dir_all(dir).map_err(|e| ImgconvError::FileWriteError {
            path: dir.display().to_string(),
            source: e,
        })?;
    }

    // 收集输入文件
    let collected = FileCollector::new()
        .with_pattern(&args.pattern)?
        .recursive(args.recursive)
        .collect(&args.inputs);

    for missing in &collected.missing {
        output::print_warning(&format!("Input not found, ignored: {}", missing.display()));
    }

    let mut queue = ConversionQueue::new();
    let added = queue.enqueue_all(collected.files);
    output::print_info(&format!("Queued {} file(s)", added));

    let job = ConversionJob::new(&queue, args.format, preset)
        .with_output_dir(args.output_dir.clone())
        .with_naming(args.naming);

    let mut runner = BatchRunner::new();
    interrupt::install(runner.cancel_handle());

    let bar = progress::create_percent_bar("Converting", quiet);
    let mut observer = TerminalObserver {
        bar: bar.clone(),
        total_files: 0,
    };
    let mut terminal_prompt = TerminalPrompt::new(Some(bar.clone()));
    let mut no_prompt = NoPrompt;
    let prompt: &mut dyn PathPrompt = match args.naming {
        NamingMode::Interactive => &mut terminal_prompt,
        NamingMode::Auto => &mut no_prompt,
    };

    let report = runner.run(&job, &mut observer, prompt);
    bar.finish_and_clear();
    let report = report?;

    if let Some(path) = &args.report {
        report::write_csv_report(path, &report.notices)?;
        output::print_info(&format!("Report written to '{}'", path.display()));
    }

    summarize(&report)
}

/// 打印运行汇总
fn summarize(report: &RunReport) -> Result<()> {
    output::print_separator();

    match &report.outcome {
        RunOutcome::Completed => {
            output::print_summary(
                report.converted,
                report.skipped,
                report.errors.len(),
                report.percent,
            );

            if !report.errors.is_empty() {
                match (&report.error_log, &report.log_failure) {
                    (Some(path), _) => output::print_warning(&format!(
                        "{} file(s) failed, see '{}'",
                        report.errors.len(),
                        path.display()
                    )),
                    (None, Some(reason)) => output::print_warning(&format!(
                        "{} file(s) failed; error log not written: {}",
                        report.errors.len(),
                        reason
                    )),
                    (None, None) => {}
                }
            }
            Ok(())
        }
        RunOutcome::Canceled => {
            output::print_warning(&format!(
                "Canceled after {} of {} file(s)",
                report.finished(),
                report.total_files
            ));
            Ok(())
        }
        RunOutcome::Failed { reason } => Err(ImgconvError::UnexpectedFault(reason.clone())),
    }
}
