//! # 颜色模式
//!
//! 解码后图像的原生颜色模式，是颜色强制转换规则的输入。
//!
//! `image` 库在解码时会把调色板图像展开为 RGB(A)，因此
//! `from_color_type` 不会产生 `Indexed`；该变体保留给能够
//! 识别调色板来源的调用方。
//!
//! ## 依赖关系
//! - 被 `codec/coercion.rs` 和 `commands/info.rs` 使用

use image::ColorType;

/// 原生颜色模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorMode {
    /// 灰度
    Gray,
    /// 灰度 + alpha
    GrayAlpha,
    /// 三通道彩色
    Rgb,
    /// 彩色 + alpha
    Rgba,
    /// 调色板索引
    Indexed,
    /// 其他（库新增的未知类型）
    Other,
}

impl ColorMode {
    /// 从 `image` 的颜色类型推断（忽略位深）
    pub fn from_color_type(color: ColorType) -> Self {
        match color {
            ColorType::L8 | ColorType::L16 => ColorMode::Gray,
            ColorType::La8 | ColorType::La16 => ColorMode::GrayAlpha,
            ColorType::Rgb8 | ColorType::Rgb16 | ColorType::Rgb32F => ColorMode::Rgb,
            ColorType::Rgba8 | ColorType::Rgba16 | ColorType::Rgba32F => ColorMode::Rgba,
            _ => ColorMode::Other,
        }
    }

    /// 是否带 alpha 通道
    pub fn has_alpha(self) -> bool {
        matches!(self, ColorMode::GrayAlpha | ColorMode::Rgba)
    }

    /// 短标签（L / LA / RGB / RGBA / P）
    pub fn label(self) -> &'static str {
        match self {
            ColorMode::Gray => "L",
            ColorMode::GrayAlpha => "LA",
            ColorMode::Rgb => "RGB",
            ColorMode::Rgba => "RGBA",
            ColorMode::Indexed => "P",
            ColorMode::Other => "?",
        }
    }
}

impl std::fmt::Display for ColorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_color_type() {
        assert_eq!(ColorMode::from_color_type(ColorType::L8), ColorMode::Gray);
        assert_eq!(ColorMode::from_color_type(ColorType::La16), ColorMode::GrayAlpha);
        assert_eq!(ColorMode::from_color_type(ColorType::Rgb8), ColorMode::Rgb);
        assert_eq!(ColorMode::from_color_type(ColorType::Rgba32F), ColorMode::Rgba);
    }

    #[test]
    fn test_has_alpha() {
        assert!(ColorMode::Rgba.has_alpha());
        assert!(ColorMode::GrayAlpha.has_alpha());
        assert!(!ColorMode::Rgb.has_alpha());
        assert!(!ColorMode::Indexed.has_alpha());
    }
}
