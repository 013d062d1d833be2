use crate::charset::{build_pool, pool_size};
use crate::config::{GenerationConfig, MAX_LENGTH};
use crate::entropy::EntropySource;
use crate::error::{EntropyError, GenerateError, Result};
use zeroize::Zeroizing;

/// Consecutive rejected draws after which a source is considered broken.
/// Every draw width accepts at least half of its range, so a healthy
/// source reaches this with probability below 2^-128.
pub const MAX_REJECTIONS: usize = 128;

pub fn generate_password(
    config: &GenerationConfig,
    source: &mut impl EntropySource,
) -> Result<Zeroizing<String>> {
    config.validate()?;
    let pool = build_pool(&config.classes)?;
    sample(&pool, config.length, source)
}

pub fn sample(
    pool: &[char],
    length: usize,
    source: &mut impl EntropySource,
) -> Result<Zeroizing<String>> {
    if pool.is_empty() {
        return Err(GenerateError::EmptyPool);
    }
    if length == 0 || length > MAX_LENGTH {
        return Err(GenerateError::InvalidLength(length));
    }

    let mut password = Zeroizing::new(String::with_capacity(length));
    for _ in 0..length {
        let index = draw_index(pool.len(), source)?;
        password.push(pool[index]);
    }

    Ok(password)
}

/// Unbiased index in `[0, bound)` by rejection sampling over the narrowest
/// of u8, u16, u32 or u64 that covers `bound`.
fn draw_index(bound: usize, source: &mut impl EntropySource) -> Result<usize> {
    let width = draw_width(bound);
    let range = 1u128 << (width * 8);
    let bound = bound as u128;
    let rejection_threshold = range - (range % bound);

    let mut bytes = Zeroizing::new([0u8; 8]);
    for _ in 0..MAX_REJECTIONS {
        source.fill(&mut bytes[..width])?;
        let value = bytes[..width]
            .iter()
            .rev()
            .fold(0u128, |acc, &b| (acc << 8) | b as u128);

        if value < rejection_threshold {
            return Ok((value % bound) as usize);
        }
    }

    Err(EntropyError::Stalled(MAX_REJECTIONS).into())
}

fn draw_width(bound: usize) -> usize {
    let bound = bound as u64;
    if bound <= 1 << 8 {
        1
    } else if bound <= 1 << 16 {
        2
    } else if bound <= 1 << 32 {
        4
    } else {
        8
    }
}

/// Estimated strength in bits: `length * log2(pool size)`.
pub fn entropy_bits(config: &GenerationConfig) -> f64 {
    let size = pool_size(&config.classes);
    if size == 0 {
        return 0.0;
    }
    config.length as f64 * (size as f64).log2()
}
