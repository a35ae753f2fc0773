//! # 文件收集器
//!
//! 根据命令行输入收集待转换的图片列表。
//!
//! ## 功能
//! - 支持单文件和目录输入（可混合）
//! - 目录内按 glob 模式匹配（逗号分隔，多模式，忽略大小写）
//! - 可选递归目录搜索
//! - 结果统一为绝对路径，按输入顺序排列；目录内按文件名排序
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 和 `commands/info.rs` 调用
//! - 使用 `walkdir` 遍历目录，`glob` 匹配文件名

use crate::error::{ImgconvError, Result};

use glob::{MatchOptions, Pattern};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 默认匹配的图片扩展名
pub const DEFAULT_PATTERN: &str = "*.png,*.jpg,*.jpeg,*.webp,*.bmp,*.tif,*.tiff,*.gif";

/// 收集结果
#[derive(Debug, Default)]
pub struct Collected {
    /// 找到的文件（绝对路径）
    pub files: Vec<PathBuf>,
    /// 不存在的输入
    pub missing: Vec<PathBuf>,
}

/// 文件收集器
pub struct FileCollector {
    /// 匹配模式列表
    patterns: Vec<Pattern>,
    /// 是否递归
    recursive: bool,
}

impl FileCollector {
    /// 创建新的文件收集器（默认图片模式，不递归）
    pub fn new() -> Self {
        Self {
            patterns: Self::parse_patterns(DEFAULT_PATTERN).unwrap_or_default(),
            recursive: false,
        }
    }

    /// 设置匹配模式（逗号分隔的多模式）
    pub fn with_pattern(mut self, pattern: &str) -> Result<Self> {
        let patterns = Self::parse_patterns(pattern)?;
        if !patterns.is_empty() {
            self.patterns = patterns;
        }
        Ok(self)
    }

    /// 设置是否递归搜索
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    fn parse_patterns(pattern: &str) -> Result<Vec<Pattern>> {
        pattern
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| {
                Pattern::new(s).map_err(|e| {
                    ImgconvError::InvalidArgument(format!("Invalid pattern '{}': {}", s, e))
                })
            })
            .collect()
    }

    /// 收集所有输入
    ///
    /// 显式给出的文件不做模式过滤。
    pub fn collect(&self, inputs: &[PathBuf]) -> Collected {
        let mut collected = Collected::default();

        for input in inputs {
            if input.is_file() {
                collected.files.push(absolute(input));
            } else if input.is_dir() {
                collected.files.extend(self.collect_dir(input));
            } else {
                collected.missing.push(input.clone());
            }
        }

        collected
    }

    fn collect_dir(&self, dir: &Path) -> Vec<PathBuf> {
        let max_depth = if self.recursive { usize::MAX } else { 1 };

        WalkDir::new(dir)
            .max_depth(max_depth)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|entry| self.matches_patterns(entry.path()))
            .map(|e| absolute(e.path()))
            .collect()
    }

    /// 检查文件是否匹配任一模式
    fn matches_patterns(&self, path: &Path) -> bool {
        let filename = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name,
            None => return false,
        };

        let options = MatchOptions {
            case_sensitive: false,
            ..MatchOptions::new()
        };
        self.patterns
            .iter()
            .any(|p| p.matches_with(filename, options))
    }
}

impl Default for FileCollector {
    fn default() -> Self {
        Self::new()
    }
}

/// 规范化为绝对路径；失败时保留原路径
fn absolute(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}
