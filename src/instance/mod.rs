//! Problem instance ingestion.
//!
//! An instance is a point set plus a visit count: how many of the leading
//! points are mandatory stops. Instances come from three sources: the
//! plain-text interchange format (a `size visit` header followed by one
//! coordinate pair per point), random generation, and serde.
//!
//! The text format is token-based, so any whitespace separates values:
//!
//! ```text
//! 3 3
//! 0 0
//! 10 0
//! 10 10
//! ```

use crate::error::AnnealError;
use crate::models::{Point, Tour};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// A tour optimization problem: points to visit and the size of the
/// mandatory prefix.
///
/// # Examples
///
/// ```
/// use u_tour::instance::Instance;
/// use u_tour::models::Point;
///
/// let instance = Instance::parse("2 2\n0 0\n3 4\n").expect("well-formed text");
/// assert_eq!(instance.visit(), 2);
/// assert_eq!(instance.points()[1], Point::new(3, 4));
///
/// let tour = instance.into_tour();
/// assert!((tour.length() - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    visit: usize,
    points: Vec<Point>,
}

impl Instance {
    /// Creates an instance from a point sequence and a visit count.
    ///
    /// Returns `None` if `visit` is zero or exceeds the number of points.
    pub fn new(points: Vec<Point>, visit: usize) -> Option<Self> {
        if visit == 0 || visit > points.len() {
            return None;
        }
        Some(Self { visit, points })
    }

    /// Generates an instance with uniformly random coordinates in
    /// `[0, max_coord)`.
    ///
    /// Returns `None` under the same conditions as [`Instance::new`], or when
    /// `max_coord` is zero.
    pub fn random<R: Rng>(size: usize, visit: usize, max_coord: i32, rng: &mut R) -> Option<Self> {
        if max_coord <= 0 {
            return None;
        }
        let points = (0..size)
            .map(|_| Point::new(rng.random_range(0..max_coord), rng.random_range(0..max_coord)))
            .collect();
        Self::new(points, visit)
    }

    /// Parses the plain-text instance format.
    ///
    /// The first two tokens are the point count and visit count, followed by
    /// `2 * count` coordinate tokens. Surplus tokens, truncated input,
    /// non-integer tokens, and an out-of-range visit count are all reported
    /// as [`AnnealError::ParseInstance`].
    pub fn parse(text: &str) -> Result<Self, AnnealError> {
        let mut tokens = text.split_whitespace();
        let size = next_count(&mut tokens, "point count")?;
        let visit = next_count(&mut tokens, "visit count")?;

        let mut points = Vec::with_capacity(size);
        for idx in 0..size {
            let x = next_coord(&mut tokens, idx, "x")?;
            let y = next_coord(&mut tokens, idx, "y")?;
            points.push(Point::new(x, y));
        }
        if tokens.next().is_some() {
            return Err(AnnealError::ParseInstance {
                message: format!("trailing data after {size} point(s)"),
            });
        }

        Self::new(points, visit).ok_or_else(|| AnnealError::ParseInstance {
            message: format!("visit count {visit} out of range for {size} point(s)"),
        })
    }

    /// Formats the instance in the plain-text format, the inverse of
    /// [`Instance::parse`].
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{} {}", self.points.len(), self.visit);
        for p in &self.points {
            let _ = writeln!(out, "{} {}", p.x, p.y);
        }
        out
    }

    /// Number of mandatory leading stops.
    pub fn visit(&self) -> usize {
        self.visit
    }

    /// The point sequence in input order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Converts the instance into a tour carrying the visit window.
    pub fn into_tour(self) -> Tour {
        Tour::with_visit(self.points, self.visit).expect("instance invariant: 1 <= visit <= len")
    }
}

fn next_count<'a, I: Iterator<Item = &'a str>>(
    tokens: &mut I,
    what: &str,
) -> Result<usize, AnnealError> {
    let token = tokens.next().ok_or_else(|| AnnealError::ParseInstance {
        message: format!("missing {what}"),
    })?;
    token.parse().map_err(|_| AnnealError::ParseInstance {
        message: format!("invalid {what} {token:?}"),
    })
}

fn next_coord<'a, I: Iterator<Item = &'a str>>(
    tokens: &mut I,
    idx: usize,
    axis: &str,
) -> Result<i32, AnnealError> {
    let token = tokens.next().ok_or_else(|| AnnealError::ParseInstance {
        message: format!("missing {axis}-coordinate of point {idx}"),
    })?;
    token.parse().map_err(|_| AnnealError::ParseInstance {
        message: format!("invalid {axis}-coordinate {token:?} for point {idx}"),
    })
}
