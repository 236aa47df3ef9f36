//! Closest pair of points in the plane, by divide and conquer
//!
//! The points are sorted by x, split at the median, both halves solved recursively, and then
//! only the points within `delta` of the dividing line (the “strip”) need to be checked for a
//! pair which crosses the line.
use crate::error::{Error, Result};
use crate::sort::{merge_halves, merge_sort_by};
use geo::{Distance, Euclidean, Point};
use itertools::Itertools;
use log::{debug, trace};
use ordered_float::OrderedFloat;
use std::cmp::Ordering;

/// Two points. The order of the points is not significant, `(a, b)` equals `(b, a)`.
#[derive(Debug, Clone, Copy)]
pub struct PointPair {
    pub a: Point,
    pub b: Point,
}

impl PointPair {
    pub fn new(a: Point, b: Point) -> Self {
        PointPair { a, b }
    }

    /// Euclidean distance between the 2 points
    pub fn distance(&self) -> f64 {
        Euclidean.distance(self.a, self.b)
    }

    /// Sort key. Squaring the differences would overflow past ~1e154, `hypot` doesn't.
    fn distance_key(&self) -> OrderedFloat<f64> {
        OrderedFloat(self.distance())
    }

    pub fn points(&self) -> [Point; 2] {
        [self.a, self.b]
    }
}

impl PartialEq for PointPair {
    fn eq(&self, other: &Self) -> bool {
        (self.a == other.a && self.b == other.b) || (self.a == other.b && self.b == other.a)
    }
}

/// How to look for cross-line pairs in the strip around the dividing line.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum, PartialEq, Eq)]
pub enum StripScan {
    /// Strip is sorted by y, each point is only compared with the following points which are
    /// less than `delta` higher. O(n log n) overall. On equal distances this can return a
    /// different (equally close) pair than `Exhaustive`.
    #[default]
    Windowed,
    /// Compare every point in the strip with every other. Quadratic in the strip size.
    Exhaustive,
}

/// Find the 2 points which are closest together.
///
/// Needs at least 2 points, all with finite coordinates and a finite x & y span, else
/// `Error::InvalidArgument`.
pub fn closest_pair(points: &[Point]) -> Result<PointPair> {
    closest_pair_with(points, StripScan::default())
}

/// [`closest_pair`], choosing how the strip is scanned.
pub fn closest_pair_with(points: &[Point], strip_scan: StripScan) -> Result<PointPair> {
    validate(points)?;
    debug!(
        "Finding closest pair of {} points, strip scan {:?}",
        points.len(),
        strip_scan
    );

    let mut pts = points.to_vec();
    merge_sort_by(&mut pts, by_x);

    let mut scratch = pts.clone();
    let mut strip = Vec::with_capacity(pts.len());
    let best = closest_rec(&mut pts, &mut scratch, &mut strip, strip_scan);
    debug!(
        "Closest pair is {:?} & {:?}, distance {}",
        best.a.x_y(),
        best.b.x_y(),
        best.distance()
    );
    Ok(best)
}

/// Check every pair. Quadratic, but obviously correct.
///
/// Ties are resolved the same way as [`closest_pair`]: first pair found wins.
pub fn closest_pair_brute_force(points: &[Point]) -> Result<PointPair> {
    validate(points)?;
    first_closest(
        points
            .iter()
            .tuple_combinations()
            .map(|(a, b)| PointPair::new(*a, *b)),
    )
    .ok_or_else(|| Error::invalid_argument("need at least 2 points"))
}

fn validate(points: &[Point]) -> Result<()> {
    if points.len() < 2 {
        return Err(Error::invalid_argument(format!(
            "closest pair needs at least 2 points, got {}",
            points.len()
        )));
    }
    if let Some(p) = points
        .iter()
        .find(|p| !(p.x().is_finite() && p.y().is_finite()))
    {
        return Err(Error::invalid_argument(format!(
            "point {:?} has a non-finite coordinate",
            p.x_y()
        )));
    }
    let (min_x, max_x) = points
        .iter()
        .map(|p| p.x())
        .minmax_by_key(|x| OrderedFloat(*x))
        .into_option()
        .unwrap_or_default();
    let (min_y, max_y) = points
        .iter()
        .map(|p| p.y())
        .minmax_by_key(|y| OrderedFloat(*y))
        .into_option()
        .unwrap_or_default();
    if !((max_x - min_x).is_finite() && (max_y - min_y).is_finite()) {
        return Err(Error::invalid_argument(
            "points are too far apart, coordinate differences overflow",
        ));
    }
    Ok(())
}

fn by_x(p: &Point, q: &Point) -> Ordering {
    OrderedFloat(p.x()).cmp(&OrderedFloat(q.x()))
}

fn by_y(p: &Point, q: &Point) -> Ordering {
    OrderedFloat(p.y()).cmp(&OrderedFloat(q.y()))
}

/// The first pair with the smallest distance. A later pair only replaces the current best if
/// it's strictly closer.
fn first_closest(pairs: impl IntoIterator<Item = PointPair>) -> Option<PointPair> {
    // min_by_key returns the first of equal minimums
    pairs.into_iter().min_by_key(|pair| pair.distance_key())
}

/// `pts` is sorted by x on entry, and sorted by y on return. `scratch` is the same length as
/// `pts`. `strip` is only reused to save allocations.
fn closest_rec(
    pts: &mut [Point],
    scratch: &mut [Point],
    strip: &mut Vec<Point>,
    strip_scan: StripScan,
) -> PointPair {
    assert!(pts.len() >= 2);
    if pts.len() <= 3 {
        // (0,1), (0,2), (1,2)
        let best = first_closest(
            pts.iter()
                .tuple_combinations()
                .map(|(a, b)| PointPair::new(*a, *b)),
        )
        .unwrap();
        pts.sort_by(by_y);
        return best;
    }

    let mid = pts.len() / 2;
    let last_left_x = pts[mid - 1].x();
    let first_right_x = pts[mid].x();
    let dividing_line = first_right_x - (first_right_x - last_left_x) / 2.;

    let (left_best, right_best) = {
        let (pts_l, pts_r) = pts.split_at_mut(mid);
        let (scratch_l, scratch_r) = scratch.split_at_mut(mid);
        (
            closest_rec(pts_l, scratch_l, strip, strip_scan),
            closest_rec(pts_r, scratch_r, strip, strip_scan),
        )
    };
    // Both halves are now sorted by y, so this is all sorted by y
    merge_halves(pts, mid, scratch, &mut by_y);

    // left only wins if strictly closer
    let sides_best = first_closest([right_best, left_best]).unwrap();
    let delta = sides_best.distance();

    strip.clear();
    strip.extend(
        pts.iter()
            .filter(|p| (p.x() - dividing_line).abs() < delta),
    );
    trace!(
        "{} points, line x={} delta={} strip has {} points",
        pts.len(),
        dividing_line,
        delta,
        strip.len()
    );
    if strip.len() < 2 {
        return sides_best;
    }

    let strip_best = match strip_scan {
        StripScan::Windowed => scan_windowed(strip, delta),
        StripScan::Exhaustive => scan_exhaustive(strip),
    };

    first_closest(strip_best.into_iter().chain([left_best, right_best])).unwrap()
}

/// `strip` is sorted by y. Only pairs less than `delta` apart vertically are checked, and any
/// one point has only a constant number of those.
fn scan_windowed(strip: &[Point], delta: f64) -> Option<PointPair> {
    let mut best: Option<PointPair> = None;
    let mut window = delta;
    for (i, p) in strip.iter().enumerate() {
        for q in strip[i + 1..].iter() {
            if q.y() - p.y() >= window {
                break;
            }
            let cand = PointPair::new(*p, *q);
            if best.is_none_or(|b| cand.distance_key() < b.distance_key()) {
                window = window.min(cand.distance());
                best = Some(cand);
            }
        }
    }
    best
}

/// Every ordered pair of different strip points. Starts with the first & last point.
fn scan_exhaustive(strip: &[Point]) -> Option<PointPair> {
    let first = *strip.first()?;
    let last = *strip.last()?;
    let candidates = (0..strip.len())
        .cartesian_product(0..strip.len())
        .filter(|(i, j)| i != j)
        .map(|(i, j)| PointPair::new(strip[i], strip[j]));
    first_closest(std::iter::once(PointPair::new(first, last)).chain(candidates))
}
