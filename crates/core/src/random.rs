//! Injectable randomness for template selection.
//!
//! Production code draws from `StdRng`; tests replay a fixed script so the
//! chosen template is known in advance.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform floats in `[0, 1)`.
pub trait RandomSource: Send {
    fn next_f64(&mut self) -> f64;

    /// Uniform index in `0..len`. Returns 0 when `len` is 0.
    fn pick(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        let idx = (self.next_f64() * len as f64) as usize;
        idx.min(len - 1)
    }
}

impl RandomSource for StdRng {
    fn next_f64(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// OS-seeded generator for production use.
pub fn from_entropy() -> StdRng {
    StdRng::from_os_rng()
}

/// Deterministic generator.
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Replays a fixed list of values, cycling when exhausted.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    values: Vec<f64>,
    pos: usize,
}

impl ScriptedRandom {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, pos: 0 }
    }

    /// Always returns `value`.
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }
}

impl RandomSource for ScriptedRandom {
    fn next_f64(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let v = self.values[self.pos % self.values.len()];
        self.pos += 1;
        v.clamp(0.0, 1.0 - f64::EPSILON)
    }
}

/// Pick one element uniformly. `items` must not be empty.
pub fn choose<'a, T>(rng: &mut dyn RandomSource, items: &'a [T]) -> &'a T {
    &items[rng.pick(items.len())]
}

/// `k` distinct indices from `0..len`, in draw order (partial Fisher–Yates).
pub fn sample_indices(rng: &mut dyn RandomSource, len: usize, k: usize) -> Vec<usize> {
    let mut pool: Vec<usize> = (0..len).collect();
    let k = k.min(len);
    for i in 0..k {
        let j = i + rng.pick(len - i);
        pool.swap(i, j);
    }
    pool.truncate(k);
    pool
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pick_maps_unit_interval_onto_indices() {
        let mut rng = ScriptedRandom::new(vec![0.0, 0.34, 0.99]);
        assert_eq!(rng.pick(3), 0);
        assert_eq!(rng.pick(3), 1);
        assert_eq!(rng.pick(3), 2);
    }

    #[test]
    fn pick_empty_is_zero() {
        let mut rng = ScriptedRandom::constant(0.5);
        assert_eq!(rng.pick(0), 0);
    }

    #[test]
    fn scripted_values_are_clamped_below_one() {
        let mut rng = ScriptedRandom::constant(1.0);
        assert_eq!(rng.pick(4), 3);
    }

    #[test]
    fn scripted_cycles() {
        let mut rng = ScriptedRandom::new(vec![0.1, 0.2]);
        assert!((rng.next_f64() - 0.1).abs() < f64::EPSILON);
        assert!((rng.next_f64() - 0.2).abs() < f64::EPSILON);
        assert!((rng.next_f64() - 0.1).abs() < f64::EPSILON);
    }

    #[test]
    fn sample_indices_are_distinct() {
        let mut rng = seeded(7);
        for _ in 0..50 {
            let mut picked = sample_indices(&mut rng, 10, 4);
            assert_eq!(picked.len(), 4);
            picked.sort_unstable();
            picked.dedup();
            assert_eq!(picked.len(), 4);
            assert!(picked.iter().all(|&i| i < 10));
        }
    }

    #[test]
    fn sample_indices_caps_at_len() {
        let mut rng = ScriptedRandom::constant(0.0);
        assert_eq!(sample_indices(&mut rng, 3, 10), vec![0, 1, 2]);
    }

    #[test]
    fn seeded_is_reproducible() {
        let mut a = seeded(42);
        let mut b = seeded(42);
        for _ in 0..5 {
            assert_eq!(a.pick(100), b.pick(100));
        }
    }
}
