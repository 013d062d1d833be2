use thiserror::Error;

#[derive(Debug, Error)]
pub enum EntropyError {
    #[error("operating system RNG failed: {0}")]
    Os(#[from] rand_core::Error),

    #[error("entropy source stalled: no acceptable draw after {0} attempts")]
    Stalled(usize),

    #[error("entropy source exhausted")]
    Exhausted,
}

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("at least one character class must be selected")]
    EmptyPool,

    #[error("password length must be between 1 and {max} (got {0})", max = crate::config::MAX_LENGTH)]
    InvalidLength(usize),

    #[error("unknown preset \"{0}\"")]
    PresetNotFound(String),

    #[error(transparent)]
    Entropy(#[from] EntropyError),
}

pub type Result<T> = std::result::Result<T, GenerateError>;
