//! Tour type and open-path length.

use super::Point;

/// Open-path length of a point sequence.
///
/// Sums the Euclidean distances between consecutive points. There is no
/// closing edge back to the first point; a sequence of fewer than two points
/// has length zero.
///
/// # Examples
///
/// ```
/// use u_tour::models::{path_length, Point};
///
/// let points = [Point::new(0, 0), Point::new(3, 4), Point::new(3, 8)];
/// assert!((path_length(&points) - 9.0).abs() < 1e-10);
/// assert_eq!(path_length(&points[..1]), 0.0);
/// ```
pub fn path_length(points: &[Point]) -> f64 {
    points.windows(2).map(|w| w[0].distance_to(w[1])).sum()
}

/// An ordered sequence of points with a fixed start.
///
/// Index 0 is the start of the path and never moves. The first `visit`
/// positions form the visited prefix whose open-path length the optimizer
/// minimizes; positions at or beyond the window are a reserve pool that can
/// be swapped into the prefix. By default the whole sequence is visited.
///
/// Invariants:
/// - `visit <= len`, established at construction;
/// - mutation is swap-only, so the point multiset never changes.
///
/// # Examples
///
/// ```
/// use u_tour::models::{Point, Tour};
///
/// let tour = Tour::new(vec![Point::new(0, 0), Point::new(0, 5), Point::new(5, 5)]);
/// assert_eq!(tour.visit(), 3);
/// assert!((tour.length() - 10.0).abs() < 1e-10);
///
/// let windowed = Tour::with_visit(tour.into_points(), 2).expect("visit <= len");
/// assert!((windowed.length() - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Tour {
    points: Vec<Point>,
    visit: usize,
}

impl Tour {
    /// Creates a tour visiting every point in the given order.
    pub fn new(points: Vec<Point>) -> Self {
        let visit = points.len();
        Self { points, visit }
    }

    /// Creates a tour whose first `visit` points form the visited prefix.
    ///
    /// Returns `None` if `visit` is zero or exceeds the number of points.
    pub fn with_visit(points: Vec<Point>, visit: usize) -> Option<Self> {
        if visit == 0 || visit > points.len() {
            return None;
        }
        Some(Self { points, visit })
    }

    /// Number of points in the sequence (visited and reserve).
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the tour has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Size of the visited prefix.
    pub fn visit(&self) -> usize {
        self.visit
    }

    /// The full point sequence in order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The visited prefix in order.
    pub fn visited(&self) -> &[Point] {
        &self.points[..self.visit]
    }

    /// Open-path length of the visited prefix.
    pub fn length(&self) -> f64 {
        path_length(self.visited())
    }

    /// Exchanges the points at two positions.
    ///
    /// # Panics
    ///
    /// Panics if either position is out of bounds.
    pub fn swap(&mut self, a: usize, b: usize) {
        self.points.swap(a, b);
    }

    /// Consumes the tour, returning the point sequence.
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Point> {
        vec![
            Point::new(0, 0),
            Point::new(10, 0),
            Point::new(10, 10),
            Point::new(0, 10),
        ]
    }

    #[test]
    fn test_path_length_empty_and_single() {
        assert_eq!(path_length(&[]), 0.0);
        assert_eq!(path_length(&[Point::new(5, 5)]), 0.0);
    }

    #[test]
    fn test_path_length_two_points() {
        let points = [Point::new(0, 0), Point::new(0, 7)];
        assert!((path_length(&points) - 7.0).abs() < 1e-10);
    }

    #[test]
    fn test_path_length_square_is_open() {
        // Three sides only: the closing edge back to the start is not counted.
        assert!((path_length(&square()) - 30.0).abs() < 1e-10);
    }

    #[test]
    fn test_new_visits_everything() {
        let tour = Tour::new(square());
        assert_eq!(tour.len(), 4);
        assert_eq!(tour.visit(), 4);
        assert_eq!(tour.visited().len(), 4);
        assert!((tour.length() - 30.0).abs() < 1e-10);
    }

    #[test]
    fn test_with_visit_window() {
        let tour = Tour::with_visit(square(), 2).expect("valid window");
        assert_eq!(tour.visit(), 2);
        assert_eq!(tour.visited(), &square()[..2]);
        assert!((tour.length() - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_with_visit_rejects_bad_windows() {
        assert!(Tour::with_visit(square(), 0).is_none());
        assert!(Tour::with_visit(square(), 5).is_none());
        assert!(Tour::with_visit(Vec::new(), 1).is_none());
    }

    #[test]
    fn test_swap_exchanges_positions() {
        let mut tour = Tour::new(square());
        tour.swap(1, 3);
        assert_eq!(tour.points()[1], Point::new(0, 10));
        assert_eq!(tour.points()[3], Point::new(10, 0));
    }

    #[test]
    fn test_length_ignores_reserve_points() {
        let mut points = square();
        points.push(Point::new(1000, 1000));
        let tour = Tour::with_visit(points, 4).expect("valid window");
        assert!((tour.length() - 30.0).abs() < 1e-10);
    }

    #[test]
    fn test_empty_tour() {
        let tour = Tour::new(Vec::new());
        assert!(tour.is_empty());
        assert_eq!(tour.visit(), 0);
        assert_eq!(tour.length(), 0.0);
    }
}
