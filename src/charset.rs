use crate::error::{GenerateError, Result};
use std::fmt;

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const NUMBERS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Numbers,
    Symbols,
}

impl CharacterClass {
    /// Declaration order; pools are always assembled in this order.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Numbers,
        CharacterClass::Symbols,
    ];

    pub const fn alphabet(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Numbers => NUMBERS,
            CharacterClass::Symbols => SYMBOLS,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => "uppercase",
            CharacterClass::Lowercase => "lowercase",
            CharacterClass::Numbers => "numbers",
            CharacterClass::Symbols => "symbols",
        }
    }

    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Set of enabled character classes. Iteration always follows
/// [`CharacterClass::ALL`], whatever order the classes were toggled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CharacterClasses {
    bits: u8,
}

impl CharacterClasses {
    pub const NONE: Self = Self { bits: 0 };

    pub const ALL: Self = Self { bits: 0b1111 };

    pub const fn with(self, class: CharacterClass) -> Self {
        Self {
            bits: self.bits | class.bit(),
        }
    }

    pub const fn contains(&self, class: CharacterClass) -> bool {
        self.bits & class.bit() != 0
    }

    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn set(&mut self, class: CharacterClass, enabled: bool) {
        if enabled {
            self.bits |= class.bit();
        } else {
            self.bits &= !class.bit();
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        CharacterClass::ALL
            .into_iter()
            .filter(move |class| self.contains(*class))
    }
}

impl FromIterator<CharacterClass> for CharacterClasses {
    fn from_iter<I: IntoIterator<Item = CharacterClass>>(iter: I) -> Self {
        iter.into_iter().fold(Self::NONE, Self::with)
    }
}

impl fmt::Display for CharacterClasses {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        let names: Vec<&str> = self.iter().map(CharacterClass::name).collect();
        f.write_str(&names.join(", "))
    }
}

pub fn pool_size(classes: &CharacterClasses) -> usize {
    classes.iter().map(|class| class.alphabet().len()).sum()
}

pub fn build_pool(classes: &CharacterClasses) -> Result<Vec<char>> {
    let mut pool = Vec::with_capacity(pool_size(classes));
    for class in classes.iter() {
        pool.extend(class.alphabet().chars());
    }

    if pool.is_empty() {
        return Err(GenerateError::EmptyPool);
    }

    Ok(pool)
}
