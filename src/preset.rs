use crate::charset::{CharacterClass, CharacterClasses};
use crate::config::GenerationConfig;
use crate::error::{GenerateError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub name: &'static str,
    pub alias: &'static str,
    pub config: GenerationConfig,
}

impl Preset {
    pub const SHORT: Self = Self {
        name: "简单密码",
        alias: "short",
        config: GenerationConfig::new(
            8,
            CharacterClasses::NONE
                .with(CharacterClass::Lowercase)
                .with(CharacterClass::Numbers),
        ),
    };

    pub const STANDARD: Self = Self {
        name: "标准密码",
        alias: "standard",
        config: GenerationConfig::new(12, CharacterClasses::ALL),
    };

    pub const STRONG: Self = Self {
        name: "强密码",
        alias: "strong",
        config: GenerationConfig::new(16, CharacterClasses::ALL),
    };

    pub const EXTRA_STRONG: Self = Self {
        name: "超强密码",
        alias: "extra-strong",
        config: GenerationConfig::new(24, CharacterClasses::ALL),
    };
}

pub const PRESETS: [Preset; 4] = [
    Preset::SHORT,
    Preset::STANDARD,
    Preset::STRONG,
    Preset::EXTRA_STRONG,
];

pub fn lookup(name: &str) -> Result<&'static Preset> {
    let name = name.trim();
    PRESETS
        .iter()
        .find(|preset| preset.name == name || preset.alias.eq_ignore_ascii_case(name))
        .ok_or_else(|| GenerateError::PresetNotFound(name.to_string()))
}
