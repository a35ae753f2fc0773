//! # 终端输出
//!
//! 统一的终端输出样式。逐文件结果走 stdout，失败信息走 stderr，
//! 便于重定向时把错误单独留下。
//!
//! ## 依赖关系
//! - 被所有 `commands/` 模块使用
//! - 使用 `colored` crate

use colored::Colorize;

const RULE_WIDTH: usize = 60;

/// 打印成功消息
pub fn print_success(msg: &str) {
    println!("{} {}", "[OK]".green().bold(), msg);
}

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    println!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    println!("{} {}", "[*]".blue().bold(), msg);
}

/// 单个文件转换成功：`[n/m] 输入 -> 输出`
pub fn print_converted(position: usize, total: usize, input: &str, output: &str) {
    println!(
        "{} {} {} {}",
        counter(position, total).green().bold(),
        input.dimmed(),
        "->".cyan(),
        output
    );
}

/// 单个文件被跳过（询问时未给出目标路径）
pub fn print_skipped(position: usize, total: usize, input: &str) {
    println!(
        "{} {} {}",
        counter(position, total).dimmed(),
        input.dimmed(),
        "(skipped)".dimmed()
    );
}

/// 单个文件失败
pub fn print_failed(position: usize, total: usize, input: &str, reason: &str) {
    eprintln!(
        "{} {}: {}",
        counter(position, total).red().bold(),
        input,
        reason
    );
}

/// 运行汇总行
pub fn print_summary(converted: usize, skipped: usize, failed: usize, percent: u8) {
    let failed_text = format!("{} failed", failed);
    let failed_text = if failed > 0 {
        failed_text.red().to_string()
    } else {
        failed_text
    };
    println!(
        "{} {} converted, {} skipped, {} ({}%)",
        "[DONE]".green().bold(),
        converted,
        skipped,
        failed_text,
        percent
    );
}

/// 打印标题栏
pub fn print_header(title: &str) {
    let line = "─".repeat(RULE_WIDTH);
    println!("\n{}", line.dimmed());
    println!("  {}", title.bold());
    println!("{}\n", line.dimmed());
}

/// 打印分隔线
pub fn print_separator() {
    println!("{}", "─".repeat(RULE_WIDTH).dimmed());
}

/// 字节数转为易读形式（1024 进制）
pub fn human_bytes(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KiB", "MiB", "GiB"];
    if bytes < 1024 {
        return format!("{} B", bytes);
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", value, UNITS[unit])
}

fn counter(position: usize, total: usize) -> String {
    format!("[{}/{}]", position, total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_bytes() {
        assert_eq!(human_bytes(0), "0 B");
        assert_eq!(human_bytes(1023), "1023 B");
        assert_eq!(human_bytes(1536), "1.5 KiB");
        assert_eq!(human_bytes(5 * 1024 * 1024), "5.0 MiB");
    }

    #[test]
    fn test_counter() {
        assert_eq!(counter(3, 12), "[3/12]");
    }
}
