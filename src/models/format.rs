//! # 目标格式
//!
//! 支持的输出格式封闭枚举，以及 token / 扩展名 / 编解码库格式的映射。
//!
//! ## 依赖关系
//! - 被 `cli/convert.rs` 用作参数类型
//! - 被 `codec/` 和 `batch/naming.rs` 使用

use clap::ValueEnum;

/// 支持的输出格式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Hash)]
pub enum TargetFormat {
    /// Portable Network Graphics
    Png,
    /// WebP
    Webp,
    /// JPEG (no alpha channel)
    Jpeg,
    /// Windows bitmap (no alpha channel)
    Bmp,
    /// Tagged Image File Format
    Tiff,
    /// Graphics Interchange Format (single frame)
    Gif,
}

impl TargetFormat {
    /// 全部格式（按界面展示顺序）
    pub const ALL: [TargetFormat; 6] = [
        TargetFormat::Png,
        TargetFormat::Webp,
        TargetFormat::Jpeg,
        TargetFormat::Bmp,
        TargetFormat::Tiff,
        TargetFormat::Gif,
    ];

    /// 大写格式 token
    pub fn token(self) -> &'static str {
        match self {
            TargetFormat::Png => "PNG",
            TargetFormat::Webp => "WEBP",
            TargetFormat::Jpeg => "JPEG",
            TargetFormat::Bmp => "BMP",
            TargetFormat::Tiff => "TIFF",
            TargetFormat::Gif => "GIF",
        }
    }

    /// 输出文件扩展名（小写 token）
    pub fn extension(self) -> &'static str {
        match self {
            TargetFormat::Png => "png",
            TargetFormat::Webp => "webp",
            TargetFormat::Jpeg => "jpeg",
            TargetFormat::Bmp => "bmp",
            TargetFormat::Tiff => "tiff",
            TargetFormat::Gif => "gif",
        }
    }

    /// 是否能保存 alpha 通道
    pub fn accepts_alpha(self) -> bool {
        !matches!(self, TargetFormat::Jpeg | TargetFormat::Bmp)
    }

    /// 编码器能否直接写入 16 位通道
    pub fn keeps_16bit(self) -> bool {
        matches!(self, TargetFormat::Png | TargetFormat::Tiff)
    }

    /// 从 token 解析（忽略大小写，`jpg` / `tif` 视为别名）
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim().to_ascii_uppercase().as_str() {
            "PNG" => Some(TargetFormat::Png),
            "WEBP" => Some(TargetFormat::Webp),
            "JPEG" | "JPG" => Some(TargetFormat::Jpeg),
            "BMP" => Some(TargetFormat::Bmp),
            "TIFF" | "TIF" => Some(TargetFormat::Tiff),
            "GIF" => Some(TargetFormat::Gif),
            _ => None,
        }
    }
}

impl std::fmt::Display for TargetFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_is_lowercase_token() {
        for format in TargetFormat::ALL {
            assert_eq!(format.extension(), format.token().to_lowercase());
        }
    }

    #[test]
    fn test_alpha_support() {
        assert!(!TargetFormat::Jpeg.accepts_alpha());
        assert!(!TargetFormat::Bmp.accepts_alpha());
        assert!(TargetFormat::Png.accepts_alpha());
        assert!(TargetFormat::Webp.accepts_alpha());
        assert!(TargetFormat::Gif.accepts_alpha());
    }

    #[test]
    fn test_from_token() {
        assert_eq!(TargetFormat::from_token("webp"), Some(TargetFormat::Webp));
        assert_eq!(TargetFormat::from_token("JPG"), Some(TargetFormat::Jpeg));
        assert_eq!(TargetFormat::from_token(" tif "), Some(TargetFormat::Tiff));
        assert_eq!(TargetFormat::from_token("heic"), None);
    }
}
