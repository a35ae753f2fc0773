//! # presets 命令实现
//!
//! 以表格列出每个 (预设, 格式) 组合解析出的编码参数。
//!
//! ## 依赖关系
//! - 使用 `cli/presets.rs` 定义的参数
//! - 使用 `codec/policy.rs`
//! - 使用 `tabled` 打印表格

use crate::cli::presets::PresetsArgs;
use crate::codec::resolve_policy;
use crate::error::Result;
use crate::models::{Preset, TargetFormat};
use crate::utils::output;

use tabled::{Table, Tabled};

/// 表格行
#[derive(Debug, Clone, Tabled)]
struct PolicyRow {
    #[tabled(rename = "Preset")]
    preset: String,
    #[tabled(rename = "Format")]
    format: String,
    #[tabled(rename = "Encoder parameters")]
    params: String,
}

/// 执行 presets 命令
pub fn execute(args: PresetsArgs) -> Result<()> {
    output::print_header("Quality Presets");

    let formats: Vec<TargetFormat> = match args.format {
        Some(format) => vec![format],
        None => TargetFormat::ALL.to_vec(),
    };

    let rows = policy_rows(&formats);
    println!("{}", Table::new(&rows));

    output::print_info("Unknown preset names fall back to 'lossless'");
    Ok(())
}

fn policy_rows(formats: &[TargetFormat]) -> Vec<PolicyRow> {
    Preset::ALL
        .iter()
        .flat_map(|&preset| {
            formats.iter().map(move |&format| PolicyRow {
                preset: preset.to_string(),
                format: format.to_string(),
                params: resolve_policy(format, preset).describe(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_rows_cover_every_combination() {
        let rows = policy_rows(&TargetFormat::ALL);
        assert_eq!(rows.len(), Preset::ALL.len() * TargetFormat::ALL.len());
    }

    #[test]
    fn test_policy_rows_describe_balanced_webp() {
        let rows = policy_rows(&[TargetFormat::Webp]);
        let balanced = rows.iter().find(|r| r.preset == "balanced").unwrap();
        assert_eq!(balanced.params, "lossless=false, quality=80, method=4");
    }
}
