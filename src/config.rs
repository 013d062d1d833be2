use crate::charset::CharacterClasses;
use crate::error::{GenerateError, Result};

pub const DEFAULT_LENGTH: usize = 12;
pub const MAX_LENGTH: usize = 4096;

/// Caller-owned generation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationConfig {
    pub length: usize,
    pub classes: CharacterClasses,
}

impl GenerationConfig {
    pub const fn new(length: usize, classes: CharacterClasses) -> Self {
        Self { length, classes }
    }

    pub fn validate(&self) -> Result<()> {
        if self.length == 0 || self.length > MAX_LENGTH {
            return Err(GenerateError::InvalidLength(self.length));
        }
        Ok(())
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new(DEFAULT_LENGTH, CharacterClasses::ALL)
    }
}
