/// Source of randomness for board generation.
///
/// Implementors only provide a bounded integer; shuffling and choosing are
/// derived from it so that a seeded source reproduces whole boards.
pub trait RandomSource {
    /// Uniform integer in `0..bound`. `bound` is never zero.
    fn next_usize(&mut self, bound: usize) -> usize;

    /// Shuffle a slice using Fisher-Yates
    fn shuffle<T>(&mut self, slice: &mut [T])
    where
        Self: Sized,
    {
        for i in (1..slice.len()).rev() {
            let j = self.next_usize(i + 1);
            slice.swap(i, j);
        }
    }

    /// Pick one element, None for an empty slice
    fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T>
    where
        Self: Sized,
    {
        if slice.is_empty() {
            None
        } else {
            slice.get(self.next_usize(slice.len()))
        }
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_usize(&mut self, bound: usize) -> usize {
        (**self).next_usize(bound)
    }
}

/// Small PCG-style generator, seeded from the OS (or the browser) by default
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u64,
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new()
    }
}

impl SimpleRng {
    pub fn new() -> Self {
        let mut seed_bytes = [0u8; 8];
        if let Err(err) = getrandom::getrandom(&mut seed_bytes) {
            // Distinct fallback seeds per instance keep boards from repeating
            static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);
            let counter = COUNTER.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
            log::warn!("getrandom unavailable ({}), using counter seed", err);
            seed_bytes = counter.to_le_bytes();
        }
        Self::with_seed(u64::from_le_bytes(seed_bytes))
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            state: seed.wrapping_add(1),
        }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let xorshifted = (((self.state >> 18) ^ self.state) >> 27) as u32;
        let rot = (self.state >> 59) as u32;
        xorshifted.rotate_right(rot) as u64
    }
}

impl RandomSource for SimpleRng {
    fn next_usize(&mut self, bound: usize) -> usize {
        (self.next_u64() as usize) % bound
    }
}
