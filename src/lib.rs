//! Two divide & conquer algorithms: simultaneous minimum & maximum of a sequence (counting the
//! comparisons it takes), and the closest pair of points in the plane.
pub mod closest_pair;
pub mod error;
pub mod fileio;
pub mod generate;
pub mod min_max;
pub mod sort;

pub use closest_pair::{PointPair, StripScan, closest_pair, closest_pair_with};
pub use error::{Error, Result};
pub use min_max::{MinMax, min_max};
