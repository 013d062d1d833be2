pub mod charset;
pub mod config;
pub mod entropy;
pub mod error;
pub mod generator;
pub mod preset;

pub use charset::{CharacterClass, CharacterClasses, build_pool, pool_size};
pub use config::GenerationConfig;
pub use entropy::{ChaChaKeystream, EntropySource, OsEntropy};
pub use error::{EntropyError, GenerateError};
pub use generator::{entropy_bits, generate_password, sample};
pub use preset::{PRESETS, Preset, lookup};
