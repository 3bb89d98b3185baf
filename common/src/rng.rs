//! Seeded randomness for the table.
//!
//! Every random decision in a game (deck order, first czar, the order in
//! which responses are revealed, what simulated players choose) draws from
//! its own stream derived from one seed. Two games started from the same
//! seed, decks and players make the same decisions in the same order, and a
//! change to how one stream is consumed never shifts another.

use rand::{seq::SliceRandom, Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Named streams drawn from one table seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stream {
    Prompts,
    Responses,
    Czar,
    Reveal,
    Strategy,
}

impl Stream {
    fn salt(self) -> u64 {
        // Stream salts. Changing one changes every seeded game.
        match self {
            Stream::Prompts => 0x9E37_79B9_7F4A_7C15,
            Stream::Responses => 0xC2B2_AE3D_27D4_EB4F,
            Stream::Czar => 0x1656_67B1_9E37_79F9,
            Stream::Reveal => 0x85EB_CA77_C2B2_AE63,
            Stream::Strategy => 0x27D4_EB2F_1656_67C5,
        }
    }
}

#[derive(Clone, Debug)]
pub struct TableRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl TableRng {
    pub fn new(seed: u64) -> Self {
        TableRng {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed from the operating system, for runs that did not ask for one.
    pub fn from_entropy_seed() -> u64 {
        rand::thread_rng().gen()
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// An independent stream for one concern. The same seed and stream
    /// always produce the same sequence.
    pub fn stream(seed: u64, stream: Stream) -> Self {
        Self::new(splitmix(seed ^ stream.salt()))
    }

    pub fn gen_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0 .. len)
    }

    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}

// Scrambles a seed so nearby seeds do not produce related streams.
fn splitmix(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    x = (x ^ (x >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    x ^ (x >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = TableRng::new(42);
        let mut b = TableRng::new(42);

        for _ in 0 .. 100 {
            assert_eq!(a.gen_index(1000), b.gen_index(1000));
        }
    }

    #[test]
    fn test_streams_are_independent() {
        let mut czar = TableRng::stream(7, Stream::Czar);
        let mut reveal = TableRng::stream(7, Stream::Reveal);

        let seq1: Vec<_> = (0 .. 16).map(|_| czar.gen_index(1000)).collect();
        let seq2: Vec<_> = (0 .. 16).map(|_| reveal.gen_index(1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_stream_is_deterministic() {
        let mut a = TableRng::stream(99, Stream::Prompts);
        let mut b = TableRng::stream(99, Stream::Prompts);

        assert_eq!(a.seed(), b.seed());
        for _ in 0 .. 10 {
            assert_eq!(a.gen_index(52), b.gen_index(52));
        }
    }

    #[test]
    fn test_shuffle_keeps_elements() {
        let mut rng = TableRng::new(3);
        let mut data: Vec<u32> = (1 ..= 20).collect();

        rng.shuffle(&mut data);
        assert_ne!(data, (1 ..= 20).collect::<Vec<_>>());

        data.sort_unstable();
        assert_eq!(data, (1 ..= 20).collect::<Vec<_>>());
    }
}
