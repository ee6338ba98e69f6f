//! Termination policy shared by the iterative algorithms

use bigdecimal::{BigDecimal, RoundingMode};
use num_traits::Zero;

use crate::rounding::round_to_scale;
use crate::MAX_ITERATIONS;

/// Tracks successive estimates of an iterative computation
///
/// An algorithm creates one of these with its starting estimate, then
/// hands every new estimate to [`Convergence::converged`]. The loop is
/// finished once an iteration no longer moves the estimate at the target
/// scale and at least `min_iterations` estimates have been recorded.
///
/// There is no silent exit: a loop still moving after the iteration
/// ceiling panics, as that means a bad constant or a broken algorithm.
///
/// ```
/// use bigdecimal::BigDecimal;
/// use bigdecimal_math::Convergence;
///
/// let half: BigDecimal = "0.5".parse().unwrap();
/// let mut estimate = BigDecimal::from(1);
/// let mut convergence = Convergence::new("halving", &estimate, 3, 1);
/// loop {
///     estimate = estimate * &half;
///     if convergence.converged(&estimate) {
///         break;
///     }
/// }
/// let limit: BigDecimal = "0.001".parse().unwrap();
/// assert!(estimate < limit);
/// ```
#[derive(Clone, Debug)]
pub struct Convergence {
    label: &'static str,
    previous: BigDecimal,
    scale: i64,
    min_iterations: u32,
    max_iterations: u32,
    iterations: u32,
}

impl Convergence {
    /// Start tracking from `initial`, comparing estimates at `scale`
    pub fn new(label: &'static str, initial: &BigDecimal, scale: i64, min_iterations: u32) -> Self {
        Convergence {
            label: label,
            previous: initial.clone(),
            scale: scale,
            min_iterations: min_iterations,
            max_iterations: MAX_ITERATIONS,
            iterations: 0,
        }
    }

    /// Replace the iteration ceiling (defaults to `MAX_ITERATIONS`)
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Number of estimates recorded so far
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Record a new estimate; returns true once the computation is done
    ///
    /// Panics if the ceiling is reached without converging.
    pub fn converged(&mut self, estimate: &BigDecimal) -> bool {
        self.iterations += 1;

        let delta = (estimate - &self.previous).abs();
        let settled = round_to_scale(&delta, self.scale, RoundingMode::Down).is_zero();

        if settled && self.iterations >= self.min_iterations {
            tracing::trace!(
                label = self.label,
                iterations = self.iterations,
                scale = self.scale,
                "converged"
            );
            return true;
        }

        if self.iterations >= self.max_iterations {
            tracing::error!(
                label = self.label,
                iterations = self.iterations,
                scale = self.scale,
                "iteration did not converge"
            );
            panic!(
                "{}: did not converge after {} iterations; previous {}, last {}, delta {}, scale {}",
                self.label, self.iterations, self.previous, estimate, delta, self.scale
            );
        }

        self.previous.clone_from(estimate);
        false
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn stops_when_estimate_stops_moving() {
        let mut convergence = Convergence::new("test", &BigDecimal::from(0), 2, 1);
        assert!(!convergence.converged(&"1.5".parse().unwrap()));
        assert!(!convergence.converged(&"1.52".parse().unwrap()));
        // moves by less than 10^-2
        assert!(convergence.converged(&"1.525".parse().unwrap()));
        assert_eq!(convergence.iterations(), 3);
    }

    #[test]
    fn respects_minimum_iterations() {
        let one = BigDecimal::from(1);
        let mut convergence = Convergence::new("test", &one, 5, 4);
        for _ in 0..3 {
            assert!(!convergence.converged(&one));
        }
        assert!(convergence.converged(&one));
        assert_eq!(convergence.iterations(), 4);
    }

    #[test]
    fn delta_is_measured_in_absolute_value() {
        let mut convergence = Convergence::new("test", &"2.000".parse().unwrap(), 1, 1);
        assert!(!convergence.converged(&"1.8".parse().unwrap()));
        assert!(convergence.converged(&"1.81".parse().unwrap()));
    }

    #[test]
    fn negative_scale_compares_tens() {
        let mut convergence = Convergence::new("test", &BigDecimal::from(1000), -2, 1);
        assert!(convergence.converged(&BigDecimal::from(1050)));
    }

    #[test]
    #[should_panic(expected = "oscillate: did not converge after 25 iterations")]
    fn panics_at_iteration_ceiling() {
        let mut convergence = Convergence::new("oscillate", &BigDecimal::from(0), 10, 1)
                                         .with_max_iterations(25);
        let mut estimate = BigDecimal::from(1);
        loop {
            estimate = -estimate;
            if convergence.converged(&estimate) {
                break;
            }
        }
    }
}
