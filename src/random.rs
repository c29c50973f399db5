use crate::error::{Error, Result};
use blake2::{Blake2b512, Digest};
use chacha20::ChaCha20;
use chacha20::cipher::{KeyIvInit, StreamCipher};
use zeroize::Zeroizing;

const KEY_LEN: usize = 32;
const BUFFER_LEN: usize = 512;

/// Source of uniformly distributed indices.
pub trait RandomSource {
    /// Returns an index in `0..bound`. `bound` must be non-zero.
    fn index(&mut self, bound: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn index(&mut self, bound: usize) -> usize {
        (**self).index(bound)
    }
}

/// ChaCha20 keystream sampled with rejection, so every index below the
/// bound is equally likely.
pub struct Keystream {
    cipher: ChaCha20,
    buffer: Zeroizing<Vec<u8>>,
    pos: usize,
}

impl Keystream {
    pub fn from_key(key: &[u8; KEY_LEN]) -> Self {
        let mut cipher = ChaCha20::new(&(*key).into(), &[0u8; 12].into());
        let mut buffer = Zeroizing::new(vec![0u8; BUFFER_LEN]);
        cipher.apply_keystream(&mut buffer);

        Self {
            cipher,
            buffer,
            pos: 0,
        }
    }

    pub fn from_entropy() -> Result<Self> {
        let mut key = Zeroizing::new([0u8; KEY_LEN]);
        getrandom::getrandom(&mut key[..]).map_err(|e| Error::Entropy(e.to_string()))?;
        Ok(Self::from_key(&key))
    }

    /// Same phrase, same stream.
    pub fn from_phrase(phrase: &str) -> Self {
        let mut hasher = Blake2b512::new();
        hasher.update(b"genpass-seed-v1");
        hasher.update(phrase.as_bytes());
        let digest = Zeroizing::new(hasher.finalize().to_vec());

        let mut key = Zeroizing::new([0u8; KEY_LEN]);
        key.copy_from_slice(&digest[..KEY_LEN]);
        Self::from_key(&key)
    }

    fn next_u64(&mut self) -> u64 {
        if self.pos + 8 > self.buffer.len() {
            self.buffer.fill(0);
            self.cipher.apply_keystream(&mut self.buffer);
            self.pos = 0;
        }

        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&self.buffer[self.pos..self.pos + 8]);
        self.pos += 8;
        u64::from_le_bytes(bytes)
    }
}

impl RandomSource for Keystream {
    fn index(&mut self, bound: usize) -> usize {
        assert!(bound > 0, "bound must be non-zero");

        let range = bound as u64;
        let rejection_threshold = u64::MAX - (u64::MAX % range);

        loop {
            let value = self.next_u64();
            if value < rejection_threshold {
                return (value % range) as usize;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw(source: &mut impl RandomSource, bound: usize, count: usize) -> Vec<usize> {
        (0..count).map(|_| source.index(bound)).collect()
    }

    #[test]
    fn test_phrase_deterministic() {
        let mut a = Keystream::from_phrase("correct horse");
        let mut b = Keystream::from_phrase("correct horse");
        assert_eq!(draw(&mut a, 1000, 200), draw(&mut b, 1000, 200));
    }

    #[test]
    fn test_different_phrases_diverge() {
        let mut a = Keystream::from_phrase("correct horse");
        let mut b = Keystream::from_phrase("battery staple");
        assert_ne!(draw(&mut a, 1000, 50), draw(&mut b, 1000, 50));
    }

    #[test]
    fn test_index_within_bound() {
        let mut source = Keystream::from_key(&[42u8; 32]);
        for bound in [1, 2, 3, 6, 10, 7776, usize::MAX] {
            for _ in 0..100 {
                let index = source.index(bound);
                assert!(index < bound, "Index {} out of bound {}", index, bound);
            }
        }
    }

    #[test]
    fn test_bound_of_one() {
        let mut source = Keystream::from_key(&[7u8; 32]);
        assert!(draw(&mut source, 1, 100).iter().all(|&i| i == 0));
    }

    #[test]
    fn test_buffer_refill() {
        let mut source = Keystream::from_key(&[1u8; 32]);
        let draws = draw(&mut source, 1 << 20, BUFFER_LEN);
        let unique: std::collections::HashSet<_> = draws.iter().collect();
        assert!(
            unique.len() > BUFFER_LEN / 2,
            "Keystream repeats after refill ({} unique of {})",
            unique.len(),
            draws.len()
        );
    }

    #[test]
    fn test_roughly_uniform() {
        let mut source = Keystream::from_key(&[42u8; 32]);
        let mut counts = [0usize; 6];
        for _ in 0..6000 {
            counts[source.index(6)] += 1;
        }

        for (i, count) in counts.iter().enumerate() {
            assert!(
                (800..=1200).contains(count),
                "Index {} drawn {} times out of 6000",
                i,
                count
            );
        }
    }

    #[test]
    fn test_entropy_seeded_sources_differ() {
        let mut a = Keystream::from_entropy().unwrap();
        let mut b = Keystream::from_entropy().unwrap();
        assert_ne!(draw(&mut a, usize::MAX, 4), draw(&mut b, usize::MAX, 4));
    }

    #[test]
    fn test_mut_ref_forwarding() {
        let mut a = Keystream::from_phrase("forward");
        let mut b = Keystream::from_phrase("forward");
        let mut by_ref = &mut b;
        assert_eq!(a.index(100), RandomSource::index(&mut by_ref, 100));
    }
}
