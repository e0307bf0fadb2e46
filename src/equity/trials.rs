use crate::Error;
use crate::Result;
use crate::TRIAL_CHUNK;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// A seeded batch of Monte Carlo trials.
///
/// Trials are cut into fixed chunks of [`TRIAL_CHUNK`]. Chunk `i` draws from
/// its own generator seeded by `mix(seed, i)`, so which thread runs a chunk,
/// and when, never changes the cards it sees. Accumulators are summed with an
/// order-independent `Add`, so the sequential and rayon runs agree exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trials {
    count: usize,
    seed: u64,
}

impl Trials {
    /// Without a seed, one is drawn from the thread-local entropy source.
    pub fn new(count: usize, seed: Option<u64>) -> Result<Self> {
        match count {
            0 => Err(Error::Simulations),
            count => Ok(Self {
                count,
                seed: seed.unwrap_or_else(|| rand::rng().random()),
            }),
        }
    }
    pub fn count(&self) -> usize {
        self.count
    }
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// (chunk index, trials in chunk)
    fn chunks(&self) -> Vec<(usize, usize)> {
        (0..self.count.div_ceil(TRIAL_CHUNK))
            .map(|i| (i, TRIAL_CHUNK.min(self.count - i * TRIAL_CHUNK)))
            .collect()
    }

    /// deterministically seeding the same chunk for the same run
    fn rng(&self, chunk: usize) -> SmallRng {
        SmallRng::seed_from_u64(mix(self.seed, chunk))
    }

    fn chunk<T, I, F>(&self, (index, size): (usize, usize), init: &I, trial: &F) -> Result<T>
    where
        I: Fn() -> T,
        F: Fn(&mut SmallRng, &mut T) -> Result<()>,
    {
        let ref mut rng = self.rng(index);
        let mut acc = init();
        for _ in 0..size {
            trial(rng, &mut acc)?;
        }
        Ok(acc)
    }

    /// Runs every chunk on the calling thread, in order.
    pub fn run_sequential<T, I, F>(&self, init: I, trial: F) -> Result<T>
    where
        T: std::ops::Add<Output = T>,
        I: Fn() -> T,
        F: Fn(&mut SmallRng, &mut T) -> Result<()>,
    {
        self.chunks()
            .into_iter()
            .try_fold(init(), |total, chunk| {
                Ok(total + self.chunk(chunk, &init, &trial)?)
            })
    }

    /// Runs every chunk, on rayon when the `parallel` feature is on.
    #[cfg(feature = "parallel")]
    pub fn run<T, I, F>(&self, init: I, trial: F) -> Result<T>
    where
        T: std::ops::Add<Output = T> + Send,
        I: Fn() -> T + Sync + Send,
        F: Fn(&mut SmallRng, &mut T) -> Result<()> + Sync + Send,
    {
        use rayon::prelude::*;
        self.chunks()
            .into_par_iter()
            .map(|chunk| self.chunk(chunk, &init, &trial))
            .try_reduce(&init, |a, b| Ok(a + b))
    }

    /// Runs every chunk, on rayon when the `parallel` feature is on.
    #[cfg(not(feature = "parallel"))]
    pub fn run<T, I, F>(&self, init: I, trial: F) -> Result<T>
    where
        T: std::ops::Add<Output = T> + Send,
        I: Fn() -> T + Sync + Send,
        F: Fn(&mut SmallRng, &mut T) -> Result<()> + Sync + Send,
    {
        self.run_sequential(init, trial)
    }
}

const GOLDEN: u64 = 0x9E37_79B9_7F4A_7C15;

/// one SplitMix64 step from `seed` advanced by `chunk` increments.
/// fixed arithmetic, so seeded runs repeat across toolchains and platforms.
fn mix(seed: u64, chunk: usize) -> u64 {
    let mut z = seed
        .wrapping_add((chunk as u64).wrapping_mul(GOLDEN))
        .wrapping_add(GOLDEN);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
