//! # 单文件转换器
//!
//! 解码一个输入文件，按需做颜色强制转换，再用解析出的编码参数
//! 写出目标文件。
//!
//! ## 错误
//! - 无法读取 / 损坏 / 不支持的输入 -> `FileError::DecodeFailure`
//! - 无法创建输出、编码器拒绝颜色类型 -> `FileError::EncodeFailure`
//!
//! 失败时可能残留部分写入的输出文件，调用方应以返回值判断成功与否。
//! 每个文件只尝试一次，不重试。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 调用
//! - 使用 `codec/policy.rs`, `codec/coercion.rs`
//! - 使用 `codec/encoders.rs` 写出各格式

use super::coercion::{coercion_for, Coercion};
use super::encoders;
use super::policy::{resolve_policy, EncodingPolicy};
use crate::error::FileError;
use crate::models::{ColorMode, Preset, TargetFormat};

use image::{ColorType, DynamicImage};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// 一次成功转换的摘要
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertSummary {
    /// 源图颜色模式
    pub source_mode: ColorMode,
    /// 是否做了 RGB 强制转换
    pub coerced: bool,
    /// 实际使用的编码参数
    pub policy: EncodingPolicy,
}

/// 转换单个文件
pub fn convert_file(
    input: &Path,
    output: &Path,
    format: TargetFormat,
    preset: Preset,
) -> Result<ConvertSummary, FileError> {
    let image = decode_image(input)?;
    let source_mode = ColorMode::from_color_type(image.color());

    let (image, coerced) = prepare_for_encoding(image, format);
    let policy = resolve_policy(format, preset);

    debug!(
        input = %input.display(),
        output = %output.display(),
        mode = %source_mode,
        coerced,
        policy = %policy.describe(),
        "encoding"
    );

    encode_image(&image, output, &policy)?;

    Ok(ConvertSummary {
        source_mode,
        coerced,
        policy,
    })
}

/// 解码输入文件
pub fn decode_image(input: &Path) -> Result<DynamicImage, FileError> {
    image::open(input).map_err(|e| FileError::DecodeFailure {
        reason: e.to_string(),
    })
}

/// 按颜色强制转换规则准备待编码图像，返回 (图像, 是否转换)
pub fn prepare_for_encoding(image: DynamicImage, format: TargetFormat) -> (DynamicImage, bool) {
    let mode = ColorMode::from_color_type(image.color());
    match coercion_for(mode, format) {
        Coercion::ToRgb => (DynamicImage::ImageRgb8(image.to_rgb8()), true),
        Coercion::None => (narrow_depth(image, format), false),
    }
}

/// 目标编码器只接受 8 位通道时降位深，保留灰度与 alpha
fn narrow_depth(image: DynamicImage, format: TargetFormat) -> DynamicImage {
    let needs_narrowing = match image.color() {
        ColorType::L16 | ColorType::La16 | ColorType::Rgb16 | ColorType::Rgba16 => {
            !format.keeps_16bit()
        }
        ColorType::Rgb32F | ColorType::Rgba32F => true,
        _ => false,
    };
    if !needs_narrowing {
        return image;
    }

    match ColorMode::from_color_type(image.color()) {
        ColorMode::Gray => DynamicImage::ImageLuma8(image.to_luma8()),
        ColorMode::GrayAlpha => DynamicImage::ImageLumaA8(image.to_luma_alpha8()),
        ColorMode::Rgba => DynamicImage::ImageRgba8(image.to_rgba8()),
        _ => DynamicImage::ImageRgb8(image.to_rgb8()),
    }
}

/// 用给定参数编码写出
pub fn encode_image(
    image: &DynamicImage,
    output: &Path,
    policy: &EncodingPolicy,
) -> Result<(), FileError> {
    let file = File::create(output).map_err(|e| FileError::EncodeFailure {
        reason: format!("cannot create '{}': {}", output.display(), e),
    })?;
    let mut writer = BufWriter::new(file);

    let result = match policy {
        EncodingPolicy::Jpeg(p) => encoders::write_jpeg(image, p, &mut writer),
        EncodingPolicy::Png(p) => encoders::write_png(image, p, &mut writer),
        EncodingPolicy::Webp(p) => encoders::write_webp(image, p, &mut writer),
        EncodingPolicy::Bmp => encoders::write_bmp(image, &mut writer),
        EncodingPolicy::Tiff(p) => encoders::write_tiff(image, p, &mut writer),
        EncodingPolicy::Gif(p) => encoders::write_gif(image, p, &mut writer),
    };
    result.map_err(|reason| FileError::EncodeFailure { reason })?;

    writer.flush().map_err(|e| FileError::EncodeFailure {
        reason: format!("cannot write '{}': {}", output.display(), e),
    })
}
