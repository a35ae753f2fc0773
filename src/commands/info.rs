//! # info 命令实现
//!
//! 显示图片的格式、尺寸、颜色模式和文件大小，并给出转换为
//! JPEG/BMP 时是否需要去除 alpha。
//!
//! ## 依赖关系
//! - 使用 `cli/info.rs` 定义的参数
//! - 使用 `batch/collector.rs`, `codec/`
//! - 使用 `tabled` 打印表格

use crate::batch::FileCollector;
use crate::cli::info::InfoArgs;
use crate::codec::{coercion_for, decode_image, Coercion};
use crate::error::Result;
use crate::models::{ColorMode, TargetFormat};
use crate::utils::output;

use std::fs;
use std::path::Path;
use tabled::{Table, Tabled};

/// 表格行
#[derive(Debug, Clone, Tabled)]
struct InfoRow {
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "Format")]
    format: String,
    #[tabled(rename = "Size")]
    dimensions: String,
    #[tabled(rename = "Mode")]
    mode: String,
    #[tabled(rename = "Bytes")]
    bytes: String,
    #[tabled(rename = "JPEG/BMP")]
    flatten: String,
}

/// 执行 info 命令
pub fn execute(args: InfoArgs) -> Result<()> {
    output::print_header("Image Information");

    let collected = FileCollector::new()
        .with_pattern(&args.pattern)?
        .recursive(args.recursive)
        .collect(&args.inputs);

    for missing in &collected.missing {
        output::print_warning(&format!("Input not found, ignored: {}", missing.display()));
    }

    if collected.files.is_empty() {
        output::print_warning("No images found");
        return Ok(());
    }

    let rows: Vec<InfoRow> = collected.files.iter().map(|p| inspect(p)).collect();
    println!("{}", Table::new(&rows));

    output::print_success(&format!("Inspected {} file(s)", rows.len()));
    Ok(())
}

/// 读取单个文件的信息；不可解码时对应列显示 `unreadable`
fn inspect(path: &Path) -> InfoRow {
    let file = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());
    let bytes = output::human_bytes(fs::metadata(path).map(|m| m.len()).unwrap_or(0));
    let format = image::ImageFormat::from_path(path)
        .map(|f| format!("{:?}", f).to_uppercase())
        .unwrap_or_else(|_| "?".to_string());

    match decode_image(path) {
        Ok(img) => {
            let mode = ColorMode::from_color_type(img.color());
            let flatten = match coercion_for(mode, TargetFormat::Jpeg) {
                Coercion::ToRgb => "to RGB",
                Coercion::None => "as is",
            };
            InfoRow {
                file,
                format,
                dimensions: format!("{}x{}", img.width(), img.height()),
                mode: mode.to_string(),
                bytes,
                flatten: flatten.to_string(),
            }
        }
        Err(_) => InfoRow {
            file,
            format,
            dimensions: "unreadable".to_string(),
            mode: "-".to_string(),
            bytes,
            flatten: "-".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use tempfile::TempDir;

    #[test]
    fn test_inspect_rgba_png() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("icon.png");
        RgbaImage::from_pixel(3, 7, Rgba([0, 0, 0, 0])).save(&path).unwrap();

        let row = inspect(&path);
        assert_eq!(row.file, "icon.png");
        assert_eq!(row.format, "PNG");
        assert_eq!(row.dimensions, "3x7");
        assert_eq!(row.mode, "RGBA");
        assert_eq!(row.flatten, "to RGB");
        assert!(row.bytes.ends_with('B'));
    }

    #[test]
    fn test_inspect_unreadable() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("junk.gif");
        fs::write(&path, b"junk").unwrap();

        let row = inspect(&path);
        assert_eq!(row.dimensions, "unreadable");
        assert_eq!(row.bytes, "4 B");
    }
}
