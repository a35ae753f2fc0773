//! # 批量编排器
//!
//! 按队列顺序逐个驱动文件转换，汇总错误并报告状态。
//!
//! ## 状态机
//! `Idle -> Running -> {Completed, Canceled, Failed}`
//! - 空队列的运行请求被拒绝（`NoFilesQueued`），状态不变
//! - 取消后不再处理后续文件；已转换的文件保留
//! - 单文件错误不会中止批处理，只有宿主故障会进入 `Failed`
//! - 已结束的运行再收到取消请求没有任何效果
//!
//! ## 每个文件
//! 输出路径解析 -> 分块进度读取（轮询取消）-> 转换 -> 记录结果
//!
//! 单线程协作式执行：每块读取之后、每个文件尝试之后回调
//! `RunObserver`，宿主借此刷新界面并投递取消请求。
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 调用
//! - 使用 `batch/` 下的 queue, progress, cancel, naming, report
//! - 使用 `codec/converter.rs`

use super::cancel::CancellationToken;
use super::naming::{resolve_output_path, NamingMode, PathPrompt};
use super::progress::{read_with_progress, PassOutcome, ProgressTracker};
use super::queue::{ConversionQueue, InputFile};
use super::report;
use crate::codec::convert_file;
use crate::error::{FileError, ImgconvError, Result};
use crate::models::{Preset, TargetFormat};

use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// 一次运行的不可变参数
#[derive(Debug, Clone)]
pub struct ConversionJob {
    pub format: TargetFormat,
    pub preset: Preset,
    pub output_dir: Option<PathBuf>,
    pub naming: NamingMode,
    files: Vec<InputFile>,
}

impl ConversionJob {
    /// 以队列当前内容为快照创建任务
    pub fn new(queue: &ConversionQueue, format: TargetFormat, preset: Preset) -> Self {
        Self {
            format,
            preset,
            output_dir: None,
            naming: NamingMode::Auto,
            files: queue.snapshot(),
        }
    }

    pub fn with_output_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.output_dir = dir;
        self
    }

    pub fn with_naming(mut self, naming: NamingMode) -> Self {
        self.naming = naming;
        self
    }

    pub fn files(&self) -> &[InputFile] {
        &self.files
    }

    /// 所有文件的权重和
    pub fn total_weight(&self) -> u64 {
        self.files.iter().map(InputFile::weight).sum()
    }

    /// 错误日志目录：输出目录，未设置时为当前工作目录
    fn log_dir(&self) -> PathBuf {
        match &self.output_dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        }
    }
}

/// 编排器状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
    Completed,
    Canceled,
    Failed,
}

/// 单文件错误记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionError {
    pub path: PathBuf,
    pub error: FileError,
}

/// 单文件结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStatus {
    Converted { output: PathBuf },
    /// 交互模式下放弃选择路径
    Skipped,
    Failed { message: String },
}

/// 单文件完成通知
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNotice {
    pub index: usize,
    pub input: PathBuf,
    pub status: FileStatus,
}

/// 运行最终结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Completed,
    Canceled,
    Failed { reason: String },
}

/// 运行报告
#[derive(Debug, Clone)]
pub struct RunReport {
    pub outcome: RunOutcome,
    pub total_files: usize,
    pub total_weight: u64,
    pub converted: usize,
    pub skipped: usize,
    pub errors: Vec<ConversionError>,
    pub notices: Vec<FileNotice>,
    /// 最终百分比
    pub percent: u8,
    /// 已写出的错误日志
    pub error_log: Option<PathBuf>,
    /// 错误日志写入失败的原因
    pub log_failure: Option<String>,
}

impl RunReport {
    fn new(total_files: usize, total_weight: u64) -> Self {
        Self {
            outcome: RunOutcome::Completed,
            total_files,
            total_weight,
            converted: 0,
            skipped: 0,
            errors: Vec::new(),
            notices: Vec::new(),
            percent: 0,
            error_log: None,
            log_failure: None,
        }
    }

    /// 已结束（转换、失败或跳过）的文件数
    pub fn finished(&self) -> usize {
        self.notices.len()
    }

    fn record(&mut self, notice: FileNotice) {
        match &notice.status {
            FileStatus::Converted { .. } => self.converted += 1,
            FileStatus::Skipped => self.skipped += 1,
            FileStatus::Failed { .. } => {}
        }
        self.notices.push(notice);
    }
}

/// 运行事件接收方（宿主实现）
///
/// 每个回调都是一个挂起点。
pub trait RunObserver {
    fn on_run_started(&mut self, _total_files: usize, _total_weight: u64) {}

    fn on_progress(&mut self, _percent: u8) {}

    fn on_file_finished(&mut self, _notice: &FileNotice) {}

    fn on_run_finished(&mut self, _report: &RunReport) {}
}

/// 忽略所有事件
pub struct SilentObserver;

impl RunObserver for SilentObserver {}

/// 单次运行的共享可变状态，每次运行新建
struct RunContext {
    token: CancellationToken,
    tracker: ProgressTracker,
}

/// 批量编排器
#[derive(Debug)]
pub struct BatchRunner {
    state: RunState,
    token: CancellationToken,
}

impl Default for BatchRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchRunner {
    pub fn new() -> Self {
        Self {
            state: RunState::Idle,
            token: CancellationToken::new(),
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// 供外部取消触发器使用的令牌克隆
    pub fn cancel_handle(&self) -> CancellationToken {
        self.token.clone()
    }

    /// 执行一次运行
    pub fn run(
        &mut self,
        job: &ConversionJob,
        observer: &mut dyn RunObserver,
        prompt: &mut dyn PathPrompt,
    ) -> Result<RunReport> {
        if job.files().is_empty() {
            return Err(ImgconvError::NoFilesQueued);
        }

        let report = self.execute(job, observer, prompt);
        observer.on_run_finished(&report);
        Ok(report)
    }

    fn execute(
        &mut self,
        job: &ConversionJob,
        observer: &mut dyn RunObserver,
        prompt: &mut dyn PathPrompt,
    ) -> RunReport {
        self.token.reset();
        self.state = RunState::Running;

        let total_weight = job.total_weight();
        let mut ctx = RunContext {
            token: self.token.clone(),
            tracker: ProgressTracker::new(total_weight),
        };
        let mut report = RunReport::new(job.files().len(), total_weight);

        info!(
            files = report.total_files,
            total_weight,
            format = %job.format,
            preset = %job.preset,
            "run started"
        );
        observer.on_run_started(report.total_files, total_weight);
        observer.on_progress(0);

        let canceled = match drive(job, &mut ctx, &mut report, observer, prompt) {
            Ok(canceled) => canceled,
            Err(fault) => {
                warn!(error = %fault, "run failed");
                self.state = RunState::Failed;
                report.outcome = RunOutcome::Failed {
                    reason: fault.to_string(),
                };
                report.percent = ctx.tracker.percent();
                return report;
            }
        };

        report.percent = ctx.tracker.percent();

        if canceled {
            info!(finished = report.finished(), "run canceled");
            self.state = RunState::Canceled;
            report.outcome = RunOutcome::Canceled;
            return report;
        }

        self.state = RunState::Completed;
        report.outcome = RunOutcome::Completed;

        if !report.errors.is_empty() {
            match report::write_error_log(&job.log_dir(), &report.errors) {
                Ok(path) => report.error_log = Some(path),
                Err(e) => {
                    warn!(error = %e, "error log not written");
                    report.log_failure = Some(e.to_string());
                }
            }
        }

        info!(
            converted = report.converted,
            skipped = report.skipped,
            failed = report.errors.len(),
            "run completed"
        );
        report
    }
}

/// 逐文件处理，返回是否被取消；宿主故障作为错误返回
fn drive(
    job: &ConversionJob,
    ctx: &mut RunContext,
    report: &mut RunReport,
    observer: &mut dyn RunObserver,
    prompt: &mut dyn PathPrompt,
) -> Result<bool> {
    for (index, file) in job.files().iter().enumerate() {
        if ctx.token.is_canceled() {
            return Ok(true);
        }

        let input = file.path();
        ctx.tracker.begin_file(file.weight());

        let output = resolve_output_path(
            input,
            job.format,
            job.output_dir.as_deref(),
            job.naming,
            prompt,
        )
        .map_err(|e| {
            ImgconvError::UnexpectedFault(format!(
                "destination prompt failed for '{}': {}",
                input.display(),
                e
            ))
        })?;

        let status = match output {
            None => {
                debug!(input = %input.display(), "no destination chosen, skipping");
                FileStatus::Skipped
            }
            Some(output) => {
                let pass = read_with_progress(input, &mut ctx.tracker, &ctx.token, |percent| {
                    observer.on_progress(percent)
                });
                if pass == PassOutcome::Canceled {
                    debug!(input = %input.display(), "canceled during progress pass");
                    return Ok(true);
                }
                convert_one(input, &output, job, report)
            }
        };

        let percent = ctx.tracker.finish_file();
        let notice = FileNotice {
            index,
            input: input.to_path_buf(),
            status,
        };
        report.record(notice.clone());
        observer.on_progress(percent);
        observer.on_file_finished(&notice);
    }

    Ok(false)
}

/// 转换阶段；错误记入报告
fn convert_one(input: &Path, output: &Path, job: &ConversionJob, report: &mut RunReport) -> FileStatus {
    match convert_file(input, output, job.format, job.preset) {
        Ok(summary) => {
            debug!(
                input = %input.display(),
                output = %output.display(),
                coerced = summary.coerced,
                "converted"
            );
            FileStatus::Converted {
                output: output.to_path_buf(),
            }
        }
        Err(e) => {
            warn!(input = %input.display(), kind = %e.kind(), error = %e, "conversion failed");
            let message = e.to_string();
            report.errors.push(ConversionError {
                path: input.to_path_buf(),
                error: e,
            });
            FileStatus::Failed { message }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::naming::NoPrompt;
    use crate::codec::{resolve_policy, EncodingPolicy};
    use crate::batch::progress::CHUNK_SIZE;
    use crate::error::FileErrorKind;
    use image::{Rgb, RgbImage, Rgba, RgbaImage};
    use std::io;
    use tempfile::TempDir;

    /// 记录所有事件，可在第 N 个文件完成后请求取消
    #[derive(Default)]
    struct Recorder {
        started: Option<(usize, u64)>,
        progress: Vec<u8>,
        notices: Vec<FileNotice>,
        cancel_after: Option<(usize, CancellationToken)>,
        /// 已完成 N 个文件后，在下一次进度回调时请求取消
        cancel_in_pass_after: Option<(usize, CancellationToken)>,
        finished: Option<RunOutcome>,
    }

    impl RunObserver for Recorder {
        fn on_run_started(&mut self, total_files: usize, total_weight: u64) {
            self.started = Some((total_files, total_weight));
        }

        fn on_progress(&mut self, percent: u8) {
            self.progress.push(percent);
            if let Some((after, token)) = &self.cancel_in_pass_after {
                if self.notices.len() >= *after {
                    token.cancel();
                }
            }
        }

        fn on_file_finished(&mut self, notice: &FileNotice) {
            self.notices.push(notice.clone());
            if let Some((after, token)) = &self.cancel_after {
                if self.notices.len() == *after {
                    token.cancel();
                }
            }
        }

        fn on_run_finished(&mut self, report: &RunReport) {
            self.finished = Some(report.outcome.clone());
        }
    }

    /// 按脚本回答路径询问
    struct Scripted(Vec<Option<PathBuf>>);

    impl PathPrompt for Scripted {
        fn ask_destination(&mut self, _input: &Path, suggested: &Path) -> io::Result<Option<PathBuf>> {
            Ok(self.0.remove(0).map(|_| suggested.to_path_buf()))
        }
    }

    struct BrokenPrompt;

    impl PathPrompt for BrokenPrompt {
        fn ask_destination(&mut self, _input: &Path, _suggested: &Path) -> io::Result<Option<PathBuf>> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "terminal closed"))
        }
    }

    fn write_png(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        RgbImage::from_fn(16, 12, |x, y| Rgb([x as u8 * 10, y as u8 * 10, 90]))
            .save(&path)
            .unwrap();
        path
    }

    fn write_jpeg(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        RgbImage::from_pixel(10, 10, Rgb([1, 100, 200])).save(&path).unwrap();
        path
    }

    /// 不可压缩的噪声图，文件大小约为 width * height * 3
    fn write_noise_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
        let path = dir.join(name);
        let mut state = 0x9e37_79b9_u32;
        RgbImage::from_fn(width, height, |_, _| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            let [r, g, b, _] = state.to_le_bytes();
            Rgb([r, g, b])
        })
        .save(&path)
        .unwrap();
        path
    }

    fn queue_of(paths: &[PathBuf]) -> ConversionQueue {
        let mut queue = ConversionQueue::new();
        queue.enqueue_all(paths.iter().cloned());
        queue
    }

    fn out_dir(dir: &TempDir) -> PathBuf {
        let out = dir.path().join("out");
        std::fs::create_dir_all(&out).unwrap();
        out
    }

    #[test]
    fn test_empty_queue_rejected() {
        let mut runner = BatchRunner::new();
        let job = ConversionJob::new(&ConversionQueue::new(), TargetFormat::Png, Preset::Lossless);

        let err = runner
            .run(&job, &mut SilentObserver, &mut NoPrompt)
            .unwrap_err();
        assert!(matches!(err, ImgconvError::NoFilesQueued));
        assert_eq!(runner.state(), RunState::Idle);
    }

    #[test]
    fn test_two_file_webp_compact_run() {
        let dir = TempDir::new().unwrap();
        let a = write_png(dir.path(), "a.png");
        let b = write_jpeg(dir.path(), "b.jpg");
        let out = out_dir(&dir);
        let expected_weight =
            std::fs::metadata(&a).unwrap().len() + std::fs::metadata(&b).unwrap().len();

        let job = ConversionJob::new(&queue_of(&[a, b]), TargetFormat::Webp, Preset::Compact)
            .with_output_dir(Some(out.clone()));

        match resolve_policy(job.format, job.preset) {
            EncodingPolicy::Webp(p) => {
                assert!(!p.lossless);
                assert_eq!(p.quality, 70);
                assert_eq!(p.method, 4);
            }
            other => panic!("unexpected policy {:?}", other),
        }

        let mut runner = BatchRunner::new();
        let mut recorder = Recorder::default();
        let report = runner.run(&job, &mut recorder, &mut NoPrompt).unwrap();

        assert_eq!(runner.state(), RunState::Completed);
        assert_eq!(report.outcome, RunOutcome::Completed);
        assert_eq!(report.total_weight, expected_weight);
        assert_eq!(recorder.started, Some((2, expected_weight)));
        assert_eq!(report.converted, 2);
        assert!(report.errors.is_empty());
        assert!(report.error_log.is_none());
        assert_eq!(report.percent, 100);
        assert_eq!(recorder.progress.last(), Some(&100));
        assert!(recorder.progress.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(recorder.notices.len(), 2);
        assert_eq!(recorder.finished, Some(RunOutcome::Completed));

        // compact 是有损 WEBP：简单容器里的第一个块是 "VP8 " 而不是 "VP8L"
        for name in ["a.webp", "b.webp"] {
            let bytes = std::fs::read(out.join(name)).unwrap();
            assert_eq!(&bytes[0..4], b"RIFF");
            assert_eq!(&bytes[12..16], b"VP8 ", "{name} is not lossy");
        }
    }

    #[test]
    fn test_cancel_during_chunked_pass_abandons_file() {
        let dir = TempDir::new().unwrap();
        let small = write_png(dir.path(), "small.png");
        let large = write_noise_png(dir.path(), "large.png", 400, 400);
        let last = write_png(dir.path(), "last.png");
        assert!(std::fs::metadata(&large).unwrap().len() > CHUNK_SIZE as u64);

        let out = out_dir(&dir);
        let queue = queue_of(&[small, large, last]);
        let job = ConversionJob::new(&queue, TargetFormat::Bmp, Preset::Lossless)
            .with_output_dir(Some(out.clone()));

        let mut runner = BatchRunner::new();
        let mut recorder = Recorder {
            cancel_in_pass_after: Some((1, runner.cancel_handle())),
            ..Default::default()
        };
        let report = runner.run(&job, &mut recorder, &mut NoPrompt).unwrap();

        assert_eq!(runner.state(), RunState::Canceled);
        assert_eq!(report.outcome, RunOutcome::Canceled);
        assert_eq!(report.finished(), 1);
        assert_eq!(report.converted, 1);
        assert!(report.errors.is_empty());
        assert!(report.percent < 100);
        assert!(out.join("small.bmp").exists());
        assert!(!out.join("large.bmp").exists());
        assert!(!out.join("last.bmp").exists());
        assert_eq!(recorder.finished, Some(RunOutcome::Canceled));
    }

    #[test]
    fn test_cancel_after_second_file() {
        let dir = TempDir::new().unwrap();
        let inputs: Vec<_> = (1..=5)
            .map(|i| write_png(dir.path(), &format!("img{}.png", i)))
            .collect();
        let out = out_dir(&dir);
        let job = ConversionJob::new(&queue_of(&inputs), TargetFormat::Bmp, Preset::Lossless)
            .with_output_dir(Some(out.clone()));

        let mut runner = BatchRunner::new();
        let mut recorder = Recorder {
            cancel_after: Some((2, runner.cancel_handle())),
            ..Default::default()
        };
        let report = runner.run(&job, &mut recorder, &mut NoPrompt).unwrap();

        assert_eq!(runner.state(), RunState::Canceled);
        assert_eq!(report.outcome, RunOutcome::Canceled);
        assert_eq!(report.converted, 2);
        assert_eq!(report.finished(), 2);
        assert!(report.percent < 100);
        assert!(out.join("img1.bmp").exists());
        assert!(out.join("img2.bmp").exists());
        for i in 3..=5 {
            assert!(!out.join(format!("img{}.bmp", i)).exists());
        }
        // 取消的运行不写错误日志
        assert!(report.error_log.is_none());
    }

    #[test]
    fn test_next_run_resets_cancellation() {
        let dir = TempDir::new().unwrap();
        let input = write_png(dir.path(), "again.png");
        let out = out_dir(&dir);
        let job = ConversionJob::new(&queue_of(&[input]), TargetFormat::Png, Preset::Lossless)
            .with_output_dir(Some(out));

        let mut runner = BatchRunner::new();
        runner.cancel_handle().cancel();
        let report = runner.run(&job, &mut SilentObserver, &mut NoPrompt).unwrap();
        assert_eq!(report.outcome, RunOutcome::Completed);
        assert_eq!(report.converted, 1);
    }

    #[test]
    fn test_cancel_after_completion_has_no_effect() {
        let dir = TempDir::new().unwrap();
        let input = write_png(dir.path(), "done.png");
        let out = out_dir(&dir);
        let job = ConversionJob::new(&queue_of(&[input]), TargetFormat::Gif, Preset::High)
            .with_output_dir(Some(out));

        let mut runner = BatchRunner::new();
        runner.run(&job, &mut SilentObserver, &mut NoPrompt).unwrap();
        runner.cancel_handle().cancel();
        assert_eq!(runner.state(), RunState::Completed);
    }

    #[test]
    fn test_decode_failure_does_not_stop_batch() {
        let dir = TempDir::new().unwrap();
        let first = write_png(dir.path(), "first.png");
        let broken = dir.path().join("broken.png");
        std::fs::write(&broken, b"not an image at all").unwrap();
        let last = write_png(dir.path(), "last.png");
        let out = out_dir(&dir);

        let job = ConversionJob::new(
            &queue_of(&[first, broken.clone(), last]),
            TargetFormat::Tiff,
            Preset::Lossless,
        )
        .with_output_dir(Some(out.clone()));

        let mut runner = BatchRunner::new();
        let mut recorder = Recorder::default();
        let report = runner.run(&job, &mut recorder, &mut NoPrompt).unwrap();

        assert_eq!(report.outcome, RunOutcome::Completed);
        assert_eq!(report.converted, 2);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].path, broken);
        assert_eq!(report.errors[0].error.kind(), FileErrorKind::Decode);
        assert!(out.join("last.tiff").exists());
        assert_eq!(report.percent, 100);

        let log = report.error_log.expect("error log written");
        assert_eq!(log, out.join(report::ERROR_LOG_NAME));
        let content = std::fs::read_to_string(log).unwrap();
        assert!(content.starts_with(&format!("{} | decode failed", broken.display())));
    }

    #[test]
    fn test_dismissed_prompt_skips_with_full_weight() {
        let dir = TempDir::new().unwrap();
        let kept = write_png(dir.path(), "kept.png");
        let skipped = write_png(dir.path(), "skipped.png");
        let kept_weight = std::fs::metadata(&kept).unwrap().len();
        let skipped_weight = std::fs::metadata(&skipped).unwrap().len();

        let job = ConversionJob::new(
            &queue_of(&[kept.clone(), skipped.clone()]),
            TargetFormat::Jpeg,
            Preset::Balanced,
        )
        .with_naming(NamingMode::Interactive);

        let mut runner = BatchRunner::new();
        let mut recorder = Recorder::default();
        let mut prompt = Scripted(vec![Some(PathBuf::new()), None]);
        let report = runner.run(&job, &mut recorder, &mut prompt).unwrap();

        assert_eq!(report.outcome, RunOutcome::Completed);
        assert_eq!(report.converted, 1);
        assert_eq!(report.skipped, 1);
        assert!(report.errors.is_empty());
        assert!(dir.path().join("kept.jpeg").exists());
        assert!(!dir.path().join("skipped.jpeg").exists());
        assert_eq!(recorder.notices[1].status, FileStatus::Skipped);

        // 跳过的文件也按完整权重推进
        let expected_after_first = (kept_weight * 100 / (kept_weight + skipped_weight)) as u8;
        let first_done = recorder
            .progress
            .iter()
            .copied()
            .filter(|&p| p == expected_after_first)
            .count();
        assert!(first_done >= 1);
        assert_eq!(recorder.progress.last(), Some(&100));
    }

    #[test]
    fn test_prompt_fault_fails_run() {
        let dir = TempDir::new().unwrap();
        let input = write_png(dir.path(), "fault.png");
        let job = ConversionJob::new(&queue_of(&[input]), TargetFormat::Png, Preset::Lossless)
            .with_naming(NamingMode::Interactive);

        let mut runner = BatchRunner::new();
        let report = runner.run(&job, &mut SilentObserver, &mut BrokenPrompt).unwrap();

        assert_eq!(runner.state(), RunState::Failed);
        assert!(matches!(report.outcome, RunOutcome::Failed { .. }));

        runner.cancel_handle().cancel();
        assert_eq!(runner.state(), RunState::Failed);
    }

    #[test]
    fn test_alpha_sources_flattened_for_jpeg_run() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("alpha.png");
        RgbaImage::from_pixel(5, 5, Rgba([250, 0, 0, 10])).save(&input).unwrap();
        let out = out_dir(&dir);
        let job = ConversionJob::new(&queue_of(&[input]), TargetFormat::Jpeg, Preset::High)
            .with_output_dir(Some(out.clone()));

        let report = BatchRunner::new()
            .run(&job, &mut SilentObserver, &mut NoPrompt)
            .unwrap();
        assert_eq!(report.converted, 1);

        let decoded = image::open(out.join("alpha.jpeg")).unwrap();
        assert!(!decoded.color().has_alpha());
    }

    #[test]
    fn test_unwritable_error_log_keeps_completed() {
        let dir = TempDir::new().unwrap();
        let broken = dir.path().join("broken.png");
        std::fs::write(&broken, b"garbage").unwrap();
        let missing_out = dir.path().join("does-not-exist");

        let job = ConversionJob::new(&queue_of(&[broken]), TargetFormat::Png, Preset::Lossless)
            .with_output_dir(Some(missing_out));

        let mut runner = BatchRunner::new();
        let report = runner.run(&job, &mut SilentObserver, &mut NoPrompt).unwrap();

        assert_eq!(runner.state(), RunState::Completed);
        assert_eq!(report.outcome, RunOutcome::Completed);
        assert_eq!(report.errors.len(), 1);
        assert!(report.error_log.is_none());
        let failure = report.log_failure.unwrap();
        assert!(failure.contains("conversion_errors.log: "), "{failure}");
    }
}
