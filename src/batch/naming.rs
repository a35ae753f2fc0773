//! # 输出路径解析
//!
//! - `auto`: `<输出目录或输入所在目录>/<输入文件名去扩展名>.<小写格式 token>`
//! - `interactive`: 每个文件询问一次目标路径（带建议默认值）；
//!   被取消时返回 `None`，编排器按跳过处理
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 调用
//! - `PathPrompt` 由宿主实现（终端实现见 `utils/prompt.rs`）

use crate::models::TargetFormat;

use clap::ValueEnum;
use std::io;
use std::path::{Path, PathBuf};

/// 输出命名模式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum NamingMode {
    /// Derive the output name from the input name
    #[default]
    Auto,
    /// Ask for every destination
    #[value(alias = "ask")]
    Interactive,
}

/// 询问目标路径的宿主回调
pub trait PathPrompt {
    /// 返回选定路径；用户放弃时返回 `Ok(None)`
    fn ask_destination(&mut self, input: &Path, suggested: &Path) -> io::Result<Option<PathBuf>>;
}

/// `auto` 模式下的输出路径
pub fn auto_output_path(input: &Path, format: TargetFormat, output_dir: Option<&Path>) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("image");
    let file_name = format!("{}.{}", stem, format.extension());

    match output_dir {
        Some(dir) => dir.join(file_name),
        None => input
            .parent()
            .map(|p| p.join(&file_name))
            .unwrap_or_else(|| PathBuf::from(&file_name)),
    }
}

/// 解析一个文件的输出路径
pub fn resolve_output_path(
    input: &Path,
    format: TargetFormat,
    output_dir: Option<&Path>,
    mode: NamingMode,
    prompt: &mut dyn PathPrompt,
) -> io::Result<Option<PathBuf>> {
    let suggested = auto_output_path(input, format, output_dir);
    match mode {
        NamingMode::Auto => Ok(Some(suggested)),
        NamingMode::Interactive => prompt.ask_destination(input, &suggested),
    }
}

/// 从不询问的占位实现（`auto` 模式使用）
pub struct NoPrompt;

impl PathPrompt for NoPrompt {
    fn ask_destination(&mut self, _input: &Path, _suggested: &Path) -> io::Result<Option<PathBuf>> {
        Ok(None)
    }
}
