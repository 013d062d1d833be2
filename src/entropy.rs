use crate::error::EntropyError;
use chacha20::ChaCha20;
use chacha20::cipher::{KeyIvInit, StreamCipher};
use rand_core::{OsRng, RngCore};
use zeroize::Zeroizing;

pub const KEY_LEN: usize = 32;

const BUFFER_LEN: usize = 1024;

/// Source of uniformly distributed random bytes.
pub trait EntropySource {
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError>;
}

impl<S: EntropySource + ?Sized> EntropySource for &mut S {
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        (**self).fill(dest)
    }
}

/// Reads straight from the operating system RNG on every call.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        OsRng.try_fill_bytes(dest)?;
        Ok(())
    }
}

/// ChaCha20 keystream served from a zeroizing buffer.
///
/// Keyed once, then never touches the OS again. With a fixed key the byte
/// stream is fully reproducible.
pub struct ChaChaKeystream {
    cipher: ChaCha20,
    buffer: Zeroizing<Vec<u8>>,
    pos: usize,
}

impl ChaChaKeystream {
    pub fn from_key(key: &[u8; KEY_LEN]) -> Self {
        Self {
            cipher: ChaCha20::new(key.into(), &[0u8; 12].into()),
            buffer: Zeroizing::new(vec![0u8; BUFFER_LEN]),
            pos: BUFFER_LEN,
        }
    }

    pub fn from_os_entropy() -> Result<Self, EntropyError> {
        let mut key = Zeroizing::new([0u8; KEY_LEN]);
        OsEntropy.fill(&mut key[..])?;
        Ok(Self::from_key(&key))
    }

    fn refill(&mut self) {
        self.buffer.fill(0);
        self.cipher.apply_keystream(&mut self.buffer);
        self.pos = 0;
    }
}

impl EntropySource for ChaChaKeystream {
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        let mut written = 0;

        while written < dest.len() {
            if self.pos >= self.buffer.len() {
                self.refill();
            }

            let take = (dest.len() - written).min(self.buffer.len() - self.pos);
            dest[written..written + take].copy_from_slice(&self.buffer[self.pos..self.pos + take]);
            self.buffer[self.pos..self.pos + take].fill(0);
            self.pos += take;
            written += take;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keystream_deterministic() {
        let key = [42u8; KEY_LEN];
        let mut a = ChaChaKeystream::from_key(&key);
        let mut b = ChaChaKeystream::from_key(&key);

        let mut out_a = [0u8; 64];
        let mut out_b = [0u8; 64];
        a.fill(&mut out_a).unwrap();
        b.fill(&mut out_b).unwrap();

        assert_eq!(out_a, out_b);
    }

    #[test]
    fn test_keystream_different_keys() {
        let mut a = ChaChaKeystream::from_key(&[1u8; KEY_LEN]);
        let mut b = ChaChaKeystream::from_key(&[2u8; KEY_LEN]);

        let mut out_a = [0u8; 32];
        let mut out_b = [0u8; 32];
        a.fill(&mut out_a).unwrap();
        b.fill(&mut out_b).unwrap();

        assert_ne!(out_a, out_b);
    }

    #[test]
    fn test_keystream_chunking_is_transparent() {
        let key = [7u8; KEY_LEN];

        let mut whole = ChaChaKeystream::from_key(&key);
        let mut expected = vec![0u8; 3000];
        whole.fill(&mut expected).unwrap();

        let mut pieces = ChaChaKeystream::from_key(&key);
        let mut actual = Vec::new();
        for size in [1usize, 7, 1000, 17, 1975] {
            let mut chunk = vec![0u8; size];
            pieces.fill(&mut chunk).unwrap();
            actual.extend_from_slice(&chunk);
        }

        assert_eq!(actual, expected);
    }

    #[test]
    fn test_keystream_crosses_buffer_boundary() {
        let mut source = ChaChaKeystream::from_key(&[9u8; KEY_LEN]);
        let mut first = vec![0u8; BUFFER_LEN];
        let mut second = vec![0u8; BUFFER_LEN];
        source.fill(&mut first).unwrap();
        source.fill(&mut second).unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn test_keystream_matches_raw_chacha20() {
        let key = [42u8; KEY_LEN];
        let mut cipher = ChaCha20::new((&key).into(), &[0u8; 12].into());
        let mut expected = [0u8; 100];
        cipher.apply_keystream(&mut expected);

        let mut source = ChaChaKeystream::from_key(&key);
        let mut actual = [0u8; 100];
        source.fill(&mut actual).unwrap();

        assert_eq!(actual, expected);
    }

    #[test]
    fn test_os_entropy_fills() {
        let mut a = [0u8; 32];
        let mut b = [0u8; 32];
        OsEntropy.fill(&mut a).unwrap();
        OsEntropy.fill(&mut b).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_from_os_entropy() {
        let mut source = ChaChaKeystream::from_os_entropy().unwrap();
        let mut out = [0u8; 16];
        source.fill(&mut out).unwrap();
    }
}
