extern crate rand;

use rand::Rng;
use rand::distributions::{IndependentSample, Range};

pub mod utils;

/// Outcome of one estimation run: how many points were drawn and how many
/// of them landed inside the unit circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Estimate {
    pub num_points: u64,
    pub num_inside: u64,
}

impl Estimate {
    /// The unit circle covers pi / 4 of the enclosing [-1, 1] square, so
    /// the inside fraction scaled by 4 approximates pi.
    pub fn value(&self) -> f64 {
        4.0 * (self.num_inside as f64) / (self.num_points as f64)
    }
}

/// `rng` is the sole source of randomness for the whole run; two calls
/// with identically seeded generators produce identical estimates.
///
/// `num_points` is the number of points to draw uniformly from the
/// [-1, 1] square.  A point exactly on the circle counts as inside.
///
/// Panics if `num_points` is zero, since no estimate can be formed from
/// an empty sample.
pub fn estimate_pi<R: Rng>(mut rng: R, num_points: u64) -> Estimate {
    assert!(num_points > 0, "need at least one point to form an estimate");
    let between = Range::new(-1.0f64, 1.0);
    let mut num_inside = 0;
    for _ in 0 .. num_points {
        let x = between.ind_sample(&mut rng);
        let y = between.ind_sample(&mut rng);
        if x * x + y * y <= 1.0 {
            num_inside += 1;
        }
    }
    Estimate { num_points: num_points, num_inside: num_inside }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;
    use utils::rng_from_seed;
    use super::estimate_pi;

    #[test]
    fn count_stays_within_sample_size() {
        for seed in 0 .. 10 {
            let e = estimate_pi(rng_from_seed(seed), 1000);
            assert!(e.num_inside <= e.num_points);
            assert!(e.value() >= 0.0 && e.value() <= 4.0);
        }
    }

    #[test]
    fn identical_seeds_give_identical_estimates() {
        let a = estimate_pi(rng_from_seed(42), 10_000);
        let b = estimate_pi(rng_from_seed(42), 10_000);
        assert_eq!(a, b);
    }

    #[test]
    fn single_point_gives_zero_or_four() {
        let e = estimate_pi(rng_from_seed(0), 1);
        assert!(e.num_inside == 0 || e.num_inside == 1);
        assert!(e.value() == 0.0 || e.value() == 4.0);
    }

    #[test]
    fn million_points_lands_near_pi() {
        let e = estimate_pi(rng_from_seed(7), 1_000_000);
        assert!((e.value() - PI).abs() < 0.05);
    }

    #[test]
    fn error_shrinks_as_points_grow() {
        let mean_abs_err = |num_points: u64| {
            let mut total = 0.0;
            for seed in 0 .. 10 {
                let e = estimate_pi(rng_from_seed(seed), num_points);
                total += (e.value() - PI).abs();
            }
            total / 10.0
        };
        assert!(mean_abs_err(1_000_000) < mean_abs_err(100));
    }

    #[test]
    #[should_panic]
    fn zero_points_is_rejected() {
        estimate_pi(rng_from_seed(1), 0);
    }
}
