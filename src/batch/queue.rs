//! # 转换队列
//!
//! 有序、去重的输入文件序列。文件大小在首次需要时才读取，
//! 读取失败或为 0 时按 1 计，避免进度计算除零。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 和 `commands/convert.rs` 使用

use std::cell::OnceCell;
use std::fs;
use std::path::{Path, PathBuf};

/// 队列中的一个输入文件
#[derive(Debug, Clone)]
pub struct InputFile {
    path: PathBuf,
    size: OnceCell<u64>,
}

impl InputFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            size: OnceCell::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 进度权重（字节数，至少为 1）
    pub fn weight(&self) -> u64 {
        *self.size.get_or_init(|| {
            fs::metadata(&self.path)
                .map(|m| m.len())
                .ok()
                .filter(|&len| len > 0)
                .unwrap_or(1)
        })
    }
}

/// 转换队列
#[derive(Debug, Clone, Default)]
pub struct ConversionQueue {
    files: Vec<InputFile>,
}

impl ConversionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加文件；路径已存在时不做任何事并返回 `false`
    pub fn enqueue(&mut self, path: impl Into<PathBuf>) -> bool {
        let path = path.into();
        if self.contains(&path) {
            return false;
        }
        self.files.push(InputFile::new(path));
        true
    }

    /// 批量追加，返回实际新增数量
    pub fn enqueue_all<I, P>(&mut self, paths: I) -> usize
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        paths
            .into_iter()
            .map(|p| self.enqueue(p))
            .filter(|&added| added)
            .count()
    }

    /// 移除选中的下标（越界下标忽略），返回移除数量
    pub fn remove_selected(&mut self, indices: &[usize]) -> usize {
        let before = self.files.len();
        let mut index = 0;
        self.files.retain(|_| {
            let keep = !indices.contains(&index);
            index += 1;
            keep
        });
        before - self.files.len()
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.files.iter().any(|f| f.path == path)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &InputFile> {
        self.files.iter()
    }

    /// 运行开始时的快照
    pub fn snapshot(&self) -> Vec<InputFile> {
        self.files.clone()
    }
}
