//! # 质量预设
//!
//! 预设键的封闭枚举。未知键回退到 `lossless`（保真度最高的选择），
//! 而不是让整个运行失败。
//!
//! ## 依赖关系
//! - 被 `codec/policy.rs` 用于查找覆盖表
//! - 被 `commands/` 用于解析命令行参数

use tracing::warn;

/// 质量 / 压缩预设
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    Lossless,
    High,
    Balanced,
    Compact,
}

impl Preset {
    pub const ALL: [Preset; 4] = [
        Preset::Lossless,
        Preset::High,
        Preset::Balanced,
        Preset::Compact,
    ];

    /// 预设键
    pub fn key(self) -> &'static str {
        match self {
            Preset::Lossless => "lossless",
            Preset::High => "high",
            Preset::Balanced => "balanced",
            Preset::Compact => "compact",
        }
    }

    /// 严格解析，未知键返回 `None`
    pub fn parse_key(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "lossless" => Some(Preset::Lossless),
            "high" => Some(Preset::High),
            "balanced" => Some(Preset::Balanced),
            "compact" => Some(Preset::Compact),
            _ => None,
        }
    }

    /// 宽松解析：未知键回退到 `lossless`
    pub fn from_key(key: &str) -> Self {
        Self::parse_key(key).unwrap_or_else(|| {
            warn!(preset = key, "unknown preset, falling back to lossless");
            Preset::Lossless
        })
    }
}

impl Default for Preset {
    fn default() -> Self {
        Preset::Lossless
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_keys() {
        for preset in Preset::ALL {
            assert_eq!(Preset::parse_key(preset.key()), Some(preset));
        }
        assert_eq!(Preset::parse_key(" Balanced "), Some(Preset::Balanced));
    }

    #[test]
    fn test_unknown_key_falls_back_to_lossless() {
        assert_eq!(Preset::parse_key("ultra"), None);
        assert_eq!(Preset::from_key("ultra"), Preset::Lossless);
        assert_eq!(Preset::from_key(""), Preset::Lossless);
    }
}
