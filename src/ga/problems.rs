//! Toy fitness functions for testing and benchmarking.

use super::fitness::FitnessFunction;
use super::types::Individual;

/// Counts set bits. Maximum `L` at the all-ones string.
#[derive(Debug, Clone, Copy, Default)]
pub struct OneMax;

impl FitnessFunction for OneMax {
    fn score(&self, individual: &Individual) -> f64 {
        individual.count_ones() as f64
    }
}

/// `sin(x)` where `x` is the bit string read as an unsigned integer and
/// scaled into `[0, upper]`.
///
/// The default range `[0, 128]` holds many sine periods, so the landscape
/// has lots of local optima at nearly the same height.
///
/// Only the first 64 bits take part in the conversion.
#[derive(Debug, Clone, Copy)]
pub struct SineWave {
    pub upper: f64,
}

impl Default for SineWave {
    fn default() -> Self {
        Self { upper: 128.0 }
    }
}

impl SineWave {
    /// Maps the individual into `[0, upper]`.
    pub fn decode(&self, individual: &Individual) -> f64 {
        let bits = &individual.bits()[..individual.len().min(64)];
        let value = Individual::new(bits.to_vec()).to_u64().unwrap_or(0);
        let max = if bits.len() == 64 {
            u64::MAX as f64
        } else {
            ((1u64 << bits.len()) - 1) as f64
        };
        if max == 0.0 {
            return 0.0;
        }
        value as f64 / max * self.upper
    }
}

impl FitnessFunction for SineWave {
    fn score(&self, individual: &Individual) -> f64 {
        self.decode(individual).sin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_onemax() {
        assert_eq!(OneMax.score(&"10110".parse().unwrap()), 3.0);
        assert_eq!(OneMax.score(&"000".parse().unwrap()), 0.0);
    }

    #[test]
    fn test_sine_decode_range() {
        let sine = SineWave::default();
        assert_eq!(sine.decode(&"0000000".parse().unwrap()), 0.0);
        assert!((sine.decode(&"1111111".parse().unwrap()) - 128.0).abs() < 1e-9);
        assert!((sine.decode(&Individual::new(vec![true; 80])) - 128.0).abs() < 1e-9);
        assert_eq!(sine.decode(&Individual::new(Vec::new())), 0.0);
    }

    #[test]
    fn test_sine_score_bounded() {
        let sine = SineWave { upper: 10.0 };
        for s in ["0101", "1111", "1000", "0011"] {
            let score = sine.score(&s.parse().unwrap());
            assert!((-1.0..=1.0).contains(&score));
        }
    }
}
