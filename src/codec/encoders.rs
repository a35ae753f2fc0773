//! # 格式编码器
//!
//! 把解析出的编码参数交给真正支持它们的编码库：
//! - JPEG: `jpeg-encoder`（质量、色度抽样、优化哈夫曼表）
//! - WEBP: `webp`（libwebp，有损 / 无损、质量、method）
//! - TIFF: `tiff`（LZW / Deflate / 不压缩）
//! - PNG / BMP / GIF: `image` 自带编码器
//!
//! 所有函数只负责写入，颜色强制转换与降位深在调用前完成。
//!
//! ## 依赖关系
//! - 被 `codec/converter.rs` 调用
//! - 使用 `codec/policy.rs` 的参数结构

use super::policy::{
    GifParams, JpegParams, PngParams, Subsampling, TiffCompression, TiffParams, WebpParams,
};

use image::codecs::bmp::BmpEncoder;
use image::codecs::gif::GifEncoder;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{DynamicImage, Frame};
use jpeg_encoder::{ColorType as JpegColor, SamplingFactor};
use std::io::{Seek, Write};
use tiff::encoder::{colortype, Compression, DeflateLevel, TiffEncoder};

/// 编码失败原因（由调用方包装为 `FileError::EncodeFailure`）
pub type EncodeResult = std::result::Result<(), String>;

pub fn write_jpeg<W: Write>(
    image: &DynamicImage,
    params: &JpegParams,
    writer: W,
) -> EncodeResult {
    let width = u16::try_from(image.width())
        .map_err(|_| format!("width {} exceeds the JPEG limit", image.width()))?;
    let height = u16::try_from(image.height())
        .map_err(|_| format!("height {} exceeds the JPEG limit", image.height()))?;

    let mut encoder = jpeg_encoder::Encoder::new(writer, params.quality.clamp(1, 100));
    encoder.set_sampling_factor(sampling_factor(params.subsampling));
    encoder.set_optimized_huffman_tables(params.optimize);

    let result = match image {
        DynamicImage::ImageLuma8(buf) => {
            encoder.encode(buf.as_raw(), width, height, JpegColor::Luma)
        }
        DynamicImage::ImageRgb8(buf) => {
            encoder.encode(buf.as_raw(), width, height, JpegColor::Rgb)
        }
        other => {
            let rgb = other.to_rgb8();
            encoder.encode(rgb.as_raw(), width, height, JpegColor::Rgb)
        }
    };
    result.map_err(|e| e.to_string())
}

fn sampling_factor(subsampling: Subsampling) -> SamplingFactor {
    match subsampling {
        Subsampling::None => SamplingFactor::R_4_4_4,
        Subsampling::Half => SamplingFactor::R_4_2_2,
        Subsampling::Quarter => SamplingFactor::R_4_2_0,
    }
}

pub fn write_webp<W: Write>(
    image: &DynamicImage,
    params: &WebpParams,
    mut writer: W,
) -> EncodeResult {
    let (width, height) = (image.width(), image.height());
    let (layout, pixels) = if image.color().has_alpha() {
        (webp::PixelLayout::Rgba, image.to_rgba8().into_raw())
    } else {
        (webp::PixelLayout::Rgb, image.to_rgb8().into_raw())
    };

    let mut config =
        webp::WebPConfig::new().map_err(|_| "cannot initialise libwebp config".to_string())?;
    config.lossless = i32::from(params.lossless);
    config.quality = f32::from(params.quality.min(100));
    config.method = i32::from(params.method.min(6));
    config.alpha_compression = i32::from(!params.lossless);

    let memory = webp::Encoder::new(&pixels, layout, width, height)
        .encode_advanced(&config)
        .map_err(|e| format!("libwebp: {:?}", e))?;

    writer.write_all(&memory).map_err(|e| e.to_string())
}

pub fn write_tiff<W: Write + Seek>(
    image: &DynamicImage,
    params: &TiffParams,
    writer: W,
) -> EncodeResult {
    let compression = match params.compression {
        TiffCompression::Lzw => Compression::Lzw,
        TiffCompression::Deflate => Compression::Deflate(DeflateLevel::Balanced),
        TiffCompression::Uncompressed => Compression::Uncompressed,
    };
    let mut encoder = TiffEncoder::new(writer)
        .map_err(|e| e.to_string())?
        .with_compression(compression);
    let (width, height) = (image.width(), image.height());

    let result = match image {
        DynamicImage::ImageLuma8(buf) => {
            encoder.write_image::<colortype::Gray8>(width, height, buf.as_raw())
        }
        DynamicImage::ImageLuma16(buf) => {
            encoder.write_image::<colortype::Gray16>(width, height, buf.as_raw())
        }
        DynamicImage::ImageRgb8(buf) => {
            encoder.write_image::<colortype::RGB8>(width, height, buf.as_raw())
        }
        DynamicImage::ImageRgba8(buf) => {
            encoder.write_image::<colortype::RGBA8>(width, height, buf.as_raw())
        }
        DynamicImage::ImageRgb16(buf) => {
            encoder.write_image::<colortype::RGB16>(width, height, buf.as_raw())
        }
        DynamicImage::ImageRgba16(buf) => {
            encoder.write_image::<colortype::RGBA16>(width, height, buf.as_raw())
        }
        // TIFF 没有灰度 + alpha 的颜色类型
        DynamicImage::ImageLumaA16(_) => {
            let rgba = image.to_rgba16();
            encoder.write_image::<colortype::RGBA16>(width, height, rgba.as_raw())
        }
        other if other.color().has_alpha() => {
            let rgba = other.to_rgba8();
            encoder.write_image::<colortype::RGBA8>(width, height, rgba.as_raw())
        }
        other => {
            let rgb = other.to_rgb8();
            encoder.write_image::<colortype::RGB8>(width, height, rgb.as_raw())
        }
    };
    result.map_err(|e| e.to_string())
}

pub fn write_png<W: Write>(image: &DynamicImage, params: &PngParams, writer: W) -> EncodeResult {
    let compression = if params.optimize {
        CompressionType::Best
    } else {
        CompressionType::Default
    };
    image
        .write_with_encoder(PngEncoder::new_with_quality(
            writer,
            compression,
            FilterType::Adaptive,
        ))
        .map_err(|e| e.to_string())
}

pub fn write_bmp<W: Write>(image: &DynamicImage, mut writer: W) -> EncodeResult {
    image
        .write_with_encoder(BmpEncoder::new(&mut writer))
        .map_err(|e| e.to_string())
}

/// 只写首帧
pub fn write_gif<W: Write>(image: &DynamicImage, _params: &GifParams, writer: W) -> EncodeResult {
    let mut encoder = GifEncoder::new(writer);
    encoder
        .encode_frame(Frame::new(image.to_rgba8()))
        .map_err(|e| e.to_string())
}
