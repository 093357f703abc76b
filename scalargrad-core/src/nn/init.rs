//! Parameter initialization.

use crate::error::GradError;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;

/// Samples parameter values uniformly from the closed range `[low, high]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformInit {
    pub low: f64,
    pub high: f64,
}

impl Default for UniformInit {
    fn default() -> Self {
        UniformInit {
            low: -1.0,
            high: 1.0,
        }
    }
}

impl UniformInit {
    /// Creates a validated range.
    ///
    /// # Errors
    /// `InvalidInitRange` if a bound is not finite or `low > high`.
    pub fn new(low: f64, high: f64) -> Result<Self, GradError> {
        let init = UniformInit { low, high };
        init.validate()?;
        Ok(init)
    }

    pub fn validate(&self) -> Result<(), GradError> {
        if self.low.is_finite() && self.high.is_finite() && self.low <= self.high {
            Ok(())
        } else {
            Err(GradError::InvalidInitRange {
                low: self.low,
                high: self.high,
            })
        }
    }

    /// Draws `n` values.
    pub fn sample_n<R: Rng + ?Sized>(&self, rng: &mut R, n: usize) -> Result<Vec<f64>, GradError> {
        self.validate()?;
        let dist = Uniform::new_inclusive(self.low, self.high);
        Ok((0..n).map(|_| dist.sample(rng)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_default_range() {
        let init = UniformInit::default();
        assert_eq!((init.low, init.high), (-1.0, 1.0));
        assert!(init.validate().is_ok());
    }

    #[test]
    fn test_samples_stay_in_range() -> Result<(), GradError> {
        let mut rng = StdRng::seed_from_u64(7);
        let init = UniformInit::new(-0.5, 0.25)?;
        let samples = init.sample_n(&mut rng, 500)?;
        assert_eq!(samples.len(), 500);
        assert!(samples.iter().all(|&s| (-0.5..=0.25).contains(&s)));
        Ok(())
    }

    #[test]
    fn test_degenerate_range_is_constant() -> Result<(), GradError> {
        let mut rng = StdRng::seed_from_u64(0);
        let samples = UniformInit::new(0.3, 0.3)?.sample_n(&mut rng, 10)?;
        assert!(samples.iter().all(|&s| s == 0.3));
        Ok(())
    }

    #[test]
    fn test_invalid_ranges() {
        assert_eq!(
            UniformInit::new(1.0, -1.0),
            Err(GradError::InvalidInitRange {
                low: 1.0,
                high: -1.0
            })
        );
        assert!(UniformInit::new(f64::NEG_INFINITY, 0.0).is_err());
        let bad = UniformInit {
            low: f64::NAN,
            high: 1.0,
        };
        let mut rng = StdRng::seed_from_u64(0);
        assert!(bad.sample_n(&mut rng, 3).is_err());
    }
}
