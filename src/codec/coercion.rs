//! # 颜色模式强制转换规则
//!
//! 不支持 alpha 的目标格式（JPEG、BMP）遇到带 alpha 或调色板的源图时，
//! 先转换为普通 RGB。其余组合原样通过。
//!
//! 纯函数，实际像素转换由 `codec/converter.rs` 交给 `image` 完成。

use crate::models::{ColorMode, TargetFormat};

/// 编码前需要执行的颜色转换
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coercion {
    None,
    ToRgb,
}

/// 决定 (源颜色模式, 目标格式) 是否需要转换
pub fn coercion_for(mode: ColorMode, format: TargetFormat) -> Coercion {
    let needs_flattening = mode.has_alpha() || mode == ColorMode::Indexed;
    if !format.accepts_alpha() && needs_flattening {
        Coercion::ToRgb
    } else {
        Coercion::None
    }
}
