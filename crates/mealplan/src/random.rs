use rand::{Rng, SeedableRng, rngs::StdRng};

/// Source of uniformly distributed floats in `[0, 1)`.
pub trait RandomSource: Send {
    fn next_float(&mut self) -> f64;

    /// Index in `0..len`, computed as `floor(next_float() * len)`.
    ///
    /// `len` must be greater than zero.
    fn pick(&mut self, len: usize) -> usize {
        let index = (self.next_float() * len as f64).floor() as usize;
        index.min(len.saturating_sub(1))
    }
}

pub struct Rand(StdRng);

impl Rand {
    /// Seeded generators replay the same sequence; `None` seeds from the OS.
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self(StdRng::seed_from_u64(seed)),
            None => Self(StdRng::from_os_rng()),
        }
    }
}

impl RandomSource for Rand {
    fn next_float(&mut self) -> f64 {
        self.0.random::<f64>()
    }
}

/// Replays a fixed list of values, starting over once exhausted.
pub struct Sequence {
    values: Vec<f64>,
    cursor: usize,
}

impl Sequence {
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }
}

impl RandomSource for Sequence {
    fn next_float(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }

        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;

        value
    }
}
