//! # 终端路径询问
//!
//! `interactive` 命名模式的终端实现：
//! - 直接回车: 使用建议路径
//! - 输入路径: 使用该路径
//! - 输入 `-` 或输入结束: 放弃该文件
//!
//! 询问期间挂起进度条，避免输出交错。
//!
//! ## 依赖关系
//! - 实现 `batch/naming.rs` 的 `PathPrompt`
//! - 使用 `console` 读写终端，`indicatif` 挂起进度条

use crate::batch::PathPrompt;

use console::{style, Term};
use indicatif::ProgressBar;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

/// 终端询问器
pub struct TerminalPrompt {
    term: Term,
    bar: Option<ProgressBar>,
}

impl TerminalPrompt {
    pub fn new(bar: Option<ProgressBar>) -> Self {
        Self {
            term: Term::stderr(),
            bar,
        }
    }

    fn ask(&self, input: &Path, suggested: &Path) -> io::Result<Option<PathBuf>> {
        self.term.write_line(&format!(
            "{} Save '{}' as [{}] ('-' to skip): ",
            style("[?]").cyan().bold(),
            input.display(),
            suggested.display()
        ))?;

        let answer = if self.term.is_term() {
            match self.term.read_line() {
                Ok(line) => line,
                Err(e) if e.kind() == ErrorKind::UnexpectedEof => return Ok(None),
                Err(e) => return Err(e),
            }
        } else {
            // 非终端输入（管道）：读到结尾视为放弃
            let mut line = String::new();
            if io::stdin().read_line(&mut line)? == 0 {
                return Ok(None);
            }
            line
        };
        Ok(parse_answer(&answer, suggested))
    }
}

impl PathPrompt for TerminalPrompt {
    fn ask_destination(&mut self, input: &Path, suggested: &Path) -> io::Result<Option<PathBuf>> {
        match &self.bar {
            Some(bar) => bar.suspend(|| self.ask(input, suggested)),
            None => self.ask(input, suggested),
        }
    }
}

/// 解析用户回答
fn parse_answer(answer: &str, suggested: &Path) -> Option<PathBuf> {
    match answer.trim() {
        "" => Some(suggested.to_path_buf()),
        "-" => None,
        path => Some(PathBuf::from(path)),
    }
}
