//! # 字节加权进度
//!
//! 以文件字节数作为工作量的代理，给出整个队列的粗粒度百分比。
//!
//! ## 协议
//! 1. 运行开始: 总权重 = 所有文件权重之和（每个文件至少为 1）
//! 2. 每个文件转换前: 以固定块大小读一遍原始字节（内容丢弃），
//!    每块推进累计计数，并在块之间检查取消令牌
//! 3. 每个文件尝试结束后: 把累计计数结算到已完成文件的权重和，
//!    保证未取消的运行最终到达 100
//!
//! 百分比 = floor(min(1, processed / total) * 100)，单次运行内单调不减。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 调用
//! - 使用 `batch/cancel.rs` 的取消令牌

use super::cancel::CancellationToken;

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;
use tracing::debug;

/// 进度读取的块大小（256 KiB）
pub const CHUNK_SIZE: usize = 256 * 1024;

/// 单次运行的进度状态
#[derive(Debug, Clone)]
pub struct ProgressTracker {
    /// 总权重
    total: u64,
    /// 累计已处理字节
    processed: u64,
    /// 已结束文件的权重和
    settled: u64,
    /// 当前文件允许推进到的上限
    ceiling: u64,
}

impl ProgressTracker {
    pub fn new(total: u64) -> Self {
        Self {
            total: total.max(1),
            processed: 0,
            settled: 0,
            ceiling: 0,
        }
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn processed(&self) -> u64 {
        self.processed
    }

    /// 当前百分比
    pub fn percent(&self) -> u8 {
        let processed = self.processed.min(self.total) as u128;
        (processed * 100 / self.total as u128) as u8
    }

    /// 开始一个权重为 `weight` 的文件
    pub fn begin_file(&mut self, weight: u64) {
        self.ceiling = self.settled.saturating_add(weight).min(self.total);
    }

    /// 推进 `bytes`，不超过当前文件的份额
    pub fn advance(&mut self, bytes: u64) -> u8 {
        self.processed = self.processed.saturating_add(bytes).min(self.ceiling);
        self.percent()
    }

    /// 当前文件结束（转换、失败或跳过），按完整权重结算
    pub fn finish_file(&mut self) -> u8 {
        self.settled = self.ceiling;
        self.processed = self.processed.max(self.settled);
        self.percent()
    }
}

/// 分块读取的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassOutcome {
    /// 读到文件末尾（或读取出错提前结束）
    Finished,
    /// 观察到取消
    Canceled,
}

/// 对输入做一遍分块读取，仅用于推进进度和提供取消检查点
///
/// `on_chunk` 在每块之后以当前百分比调用，是让出控制权的挂起点。
/// 读取错误不在这里报告，转换阶段会给出真正的解码错误。
pub fn read_with_progress<F>(
    path: &Path,
    tracker: &mut ProgressTracker,
    token: &CancellationToken,
    mut on_chunk: F,
) -> PassOutcome
where
    F: FnMut(u8),
{
    if token.is_canceled() {
        return PassOutcome::Canceled;
    }

    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "progress pass cannot open input");
            return PassOutcome::Finished;
        }
    };

    let mut buf = vec![0u8; CHUNK_SIZE];
    loop {
        match file.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => {
                let percent = tracker.advance(n as u64);
                on_chunk(percent);
                if token.is_canceled() {
                    return PassOutcome::Canceled;
                }
            }
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "progress pass stopped early");
                break;
            }
        }
    }

    PassOutcome::Finished
}
