//! # 编码参数解析
//!
//! (目标格式, 预设) -> 具体编码参数。
//!
//! ## 规则
//! - 每种格式有一组基础默认值，与预设无关
//! - 预设对某格式有覆盖时，覆盖项替换对应键，未指定的基础键保留
//! - JPEG 合并后缺失的色度抽样 / 优化项强制为 4:4:4 / 开启
//! - 预设未覆盖的格式直接使用基础默认值
//!
//! ## 依赖关系
//! - 被 `codec/converter.rs` 和 `commands/presets.rs` 使用
//! - 使用 `models/` 的格式与预设枚举

use crate::models::{Preset, TargetFormat};

/// JPEG 色度抽样
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subsampling {
    /// 4:4:4（不抽样）
    None,
    /// 4:2:2
    Half,
    /// 4:2:0
    Quarter,
}

impl std::fmt::Display for Subsampling {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Subsampling::None => write!(f, "4:4:4"),
            Subsampling::Half => write!(f, "4:2:2"),
            Subsampling::Quarter => write!(f, "4:2:0"),
        }
    }
}

/// TIFF 压缩方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TiffCompression {
    Lzw,
    Deflate,
    Uncompressed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WebpParams {
    pub lossless: bool,
    pub quality: u8,
    /// 压缩力度 0-6
    pub method: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JpegParams {
    pub quality: u8,
    pub subsampling: Subsampling,
    pub optimize: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PngParams {
    pub optimize: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TiffParams {
    pub compression: TiffCompression,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GifParams {
    /// 是否保存全部帧；批量转换只保存首帧
    pub save_all: bool,
}

/// 某次转换使用的完整编码参数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingPolicy {
    Png(PngParams),
    Webp(WebpParams),
    Jpeg(JpegParams),
    Bmp,
    Tiff(TiffParams),
    Gif(GifParams),
}

impl EncodingPolicy {
    pub fn format(&self) -> TargetFormat {
        match self {
            EncodingPolicy::Png(_) => TargetFormat::Png,
            EncodingPolicy::Webp(_) => TargetFormat::Webp,
            EncodingPolicy::Jpeg(_) => TargetFormat::Jpeg,
            EncodingPolicy::Bmp => TargetFormat::Bmp,
            EncodingPolicy::Tiff(_) => TargetFormat::Tiff,
            EncodingPolicy::Gif(_) => TargetFormat::Gif,
        }
    }

    /// 人类可读的参数描述
    pub fn describe(&self) -> String {
        match self {
            EncodingPolicy::Png(p) => format!("optimize={}", p.optimize),
            EncodingPolicy::Webp(p) => format!(
                "lossless={}, quality={}, method={}",
                p.lossless, p.quality, p.method
            ),
            EncodingPolicy::Jpeg(p) => format!(
                "quality={}, subsampling={}, optimize={}",
                p.quality, p.subsampling, p.optimize
            ),
            EncodingPolicy::Bmp => "-".to_string(),
            EncodingPolicy::Tiff(p) => format!("compression={:?}", p.compression).to_lowercase(),
            EncodingPolicy::Gif(p) => format!("save_all={}", p.save_all),
        }
    }
}

// ─────────────────────────────────────────────────────────────
// 预设覆盖表
// ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WebpOverride {
    pub lossless: Option<bool>,
    pub quality: Option<u8>,
    pub method: Option<u8>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JpegOverride {
    pub quality: Option<u8>,
    pub subsampling: Option<Subsampling>,
    pub optimize: Option<bool>,
}

/// 一个预设对各格式的覆盖项
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PresetOverrides {
    pub webp: Option<WebpOverride>,
    pub jpeg: Option<JpegOverride>,
}

const fn webp(lossless: bool, quality: u8, method: u8) -> Option<WebpOverride> {
    Some(WebpOverride {
        lossless: Some(lossless),
        quality: Some(quality),
        method: Some(method),
    })
}

const fn jpeg_quality(quality: u8) -> Option<JpegOverride> {
    Some(JpegOverride {
        quality: Some(quality),
        subsampling: None,
        optimize: None,
    })
}

/// 静态预设表
pub const fn preset_overrides(preset: Preset) -> PresetOverrides {
    match preset {
        Preset::Lossless => PresetOverrides {
            webp: webp(true, 100, 6),
            jpeg: None,
        },
        Preset::High => PresetOverrides {
            webp: webp(false, 90, 6),
            jpeg: jpeg_quality(90),
        },
        Preset::Balanced => PresetOverrides {
            webp: webp(false, 80, 4),
            jpeg: jpeg_quality(80),
        },
        Preset::Compact => PresetOverrides {
            webp: webp(false, 70, 4),
            jpeg: jpeg_quality(70),
        },
    }
}

// ─────────────────────────────────────────────────────────────
// 解析与合并
// ─────────────────────────────────────────────────────────────

const JPEG_FALLBACK_SUBSAMPLING: Subsampling = Subsampling::None;
const JPEG_FALLBACK_OPTIMIZE: bool = true;

/// 各格式基础默认值
pub fn base_policy(format: TargetFormat) -> EncodingPolicy {
    match format {
        TargetFormat::Webp => EncodingPolicy::Webp(WebpParams {
            lossless: true,
            quality: 100,
            method: 6,
        }),
        TargetFormat::Jpeg => EncodingPolicy::Jpeg(JpegParams {
            quality: 95,
            subsampling: JPEG_FALLBACK_SUBSAMPLING,
            optimize: JPEG_FALLBACK_OPTIMIZE,
        }),
        TargetFormat::Png => EncodingPolicy::Png(PngParams { optimize: true }),
        TargetFormat::Tiff => EncodingPolicy::Tiff(TiffParams {
            compression: TiffCompression::Lzw,
        }),
        TargetFormat::Gif => EncodingPolicy::Gif(GifParams { save_all: false }),
        TargetFormat::Bmp => EncodingPolicy::Bmp,
    }
}

impl WebpParams {
    fn merged(self, ov: &WebpOverride) -> Self {
        Self {
            lossless: ov.lossless.unwrap_or(self.lossless),
            quality: ov.quality.unwrap_or(self.quality),
            method: ov.method.unwrap_or(self.method),
        }
    }
}

impl JpegParams {
    fn merged(self, ov: &JpegOverride) -> Self {
        Self {
            quality: ov.quality.unwrap_or(self.quality),
            subsampling: ov.subsampling.unwrap_or(JPEG_FALLBACK_SUBSAMPLING),
            optimize: ov.optimize.unwrap_or(JPEG_FALLBACK_OPTIMIZE),
        }
    }
}

/// 把覆盖表合并到格式的基础默认值上
pub fn merge_policy(format: TargetFormat, overrides: &PresetOverrides) -> EncodingPolicy {
    match (base_policy(format), overrides) {
        (EncodingPolicy::Webp(base), PresetOverrides { webp: Some(ov), .. }) => {
            EncodingPolicy::Webp(base.merged(ov))
        }
        (EncodingPolicy::Jpeg(base), PresetOverrides { jpeg: Some(ov), .. }) => {
            EncodingPolicy::Jpeg(base.merged(ov))
        }
        (base, _) => base,
    }
}

/// 解析 (格式, 预设) 的编码参数
pub fn resolve_policy(format: TargetFormat, preset: Preset) -> EncodingPolicy {
    merge_policy(format, &preset_overrides(preset))
}
