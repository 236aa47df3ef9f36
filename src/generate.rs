//! Random input for the demo programs
use crate::error::{Error, Result};
use geo::Point;
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded RNG if a seed is given, so runs can be repeated, else seeded from the OS.
pub fn rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            debug!("Using random seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    }
}

/// `len` integers uniformly from `min..=max`
pub fn random_values(rng: &mut impl Rng, len: usize, min: i64, max: i64) -> Result<Vec<i64>> {
    if min > max {
        return Err(Error::invalid_argument(format!(
            "value range is empty: {} > {}",
            min, max
        )));
    }
    Ok((0..len).map(|_| rng.gen_range(min..=max)).collect())
}

/// `num_points` points uniformly from the square `[-size, size)²`
pub fn random_points(rng: &mut impl Rng, num_points: usize, size: f64) -> Result<Vec<Point>> {
    if !(size.is_finite() && size > 0.) {
        return Err(Error::invalid_argument(format!(
            "size must be a positive number, not {}",
            size
        )));
    }
    Ok((0..num_points)
        .map(|_| Point::new(rng.gen_range(-size..size), rng.gen_range(-size..size)))
        .collect())
}
