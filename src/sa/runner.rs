//! Annealing execution loop.
//!
//! # Algorithm
//!
//! Each iteration draws two movable positions `i < j`, computes the length
//! change of exchanging them from the at-most-four edges adjacent to `i` and
//! `j`, and accepts by the Metropolis criterion with probability
//! `exp((current - candidate) / temperature)`, uncapped. The temperature then
//! decays by the configured geometric factor. The tracked length is updated
//! from the accepted delta, never by rescanning the tour, so one iteration is
//! O(1) regardless of tour size.

use super::config::AnnealConfig;
use crate::error::AnnealError;
use crate::models::{Point, Tour};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Summary of a completed annealing run.
#[derive(Debug, Clone, Copy)]
pub struct AnnealStats {
    /// Number of iterations executed.
    pub iterations: usize,

    /// Number of accepted moves (including improvements).
    pub accepted: usize,

    /// Number of accepted strictly improving moves.
    pub improving: usize,

    /// Visited-prefix length before the run.
    pub initial_length: f64,

    /// Tracked visited-prefix length after the run.
    pub final_length: f64,

    /// Temperature after the run.
    pub final_temperature: f64,
}

/// Simulated annealing optimizer for point tours.
///
/// Owns its random generator: construct once, then call
/// [`optimize`](Annealer::optimize) as often as needed. Temperature and
/// tracked length restart from scratch on every call; the generator state
/// carries over, so repeated unseeded runs explore different trajectories.
///
/// # Examples
///
/// ```
/// use u_tour::models::{Point, Tour};
/// use u_tour::sa::{AnnealConfig, Annealer};
///
/// let mut tour = Tour::new(vec![
///     Point::new(0, 0),
///     Point::new(10, 10),
///     Point::new(10, 0),
///     Point::new(0, 10),
/// ]);
///
/// let mut annealer =
///     Annealer::from_config(AnnealConfig::default().with_seed(1)).expect("valid config");
/// let stats = annealer.optimize(&mut tour).expect("tour has enough points");
/// assert!(stats.final_length <= stats.initial_length + 1e-9);
/// ```
pub struct Annealer {
    config: AnnealConfig,
    rng: StdRng,
}

impl Annealer {
    /// Creates an annealer with the default configuration, seeded from OS
    /// entropy.
    pub fn new() -> Result<Self, AnnealError> {
        Self::from_config(AnnealConfig::default())
    }

    /// Creates an annealer from a configuration.
    ///
    /// Validates the configuration and seeds the owned generator: from
    /// `config.seed` when present, otherwise from OS entropy. An entropy
    /// source failure surfaces as [`AnnealError::GeneratorInit`].
    pub fn from_config(config: AnnealConfig) -> Result<Self, AnnealError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::try_from_os_rng().map_err(|err| AnnealError::GeneratorInit {
                message: err.to_string(),
            })?,
        };
        Ok(Self { config, rng })
    }

    /// Runs the configured number of annealing iterations on the tour.
    ///
    /// The tour is reordered in place; the returned statistics describe the
    /// run. Preconditions are checked before any mutation: the tour needs at
    /// least two points and a visit window of at least two, otherwise no swap
    /// candidate exists.
    pub fn optimize(&mut self, tour: &mut Tour) -> Result<AnnealStats, AnnealError> {
        let len = tour.len();
        let visit = tour.visit();
        if len < 2 {
            return Err(AnnealError::TourTooShort { len });
        }
        if visit < 2 {
            return Err(AnnealError::VisitWindowTooSmall { visit });
        }

        let initial_length = tour.length();
        let mut current_length = initial_length;
        let mut temperature = self.config.initial_temperature;
        let mut accepted = 0usize;
        let mut improving = 0usize;

        for _ in 0..self.config.iterations {
            let (i, j) = propose_swap(&mut self.rng, visit, len);
            let delta = swap_delta(tour.points(), visit, i, j);
            let candidate = current_length + delta;

            let chance = acceptance(current_length, candidate, temperature);
            if self.rng.random_range(0.0..1.0) < chance {
                tour.swap(i, j);
                current_length = candidate;
                accepted += 1;
                if delta < 0.0 {
                    improving += 1;
                }
            }

            temperature *= self.config.cooling_factor;
        }

        Ok(AnnealStats {
            iterations: self.config.iterations,
            accepted,
            improving,
            initial_length,
            final_length: current_length,
            final_temperature: temperature,
        })
    }
}

/// Draws an ordered pair of swap positions.
///
/// `i` is uniform over the movable window `[1, visit)`, `j` uniform over all
/// movable positions `[1, len)`; index 0 is the fixed start. A collision is
/// resolved deterministically by bumping `j` to the next position (wrapping
/// to 1 from the end of the sequence) so a move is always attempted, then the
/// pair is ordered.
fn propose_swap<R: Rng>(rng: &mut R, visit: usize, len: usize) -> (usize, usize) {
    let mut i = rng.random_range(1..visit);
    let mut j = rng.random_range(1..len);
    if i == j {
        j = if i == len - 1 { 1 } else { i + 1 };
    }
    if i > j {
        std::mem::swap(&mut i, &mut j);
    }
    (i, j)
}

/// Length change of exchanging positions `i` and `j`, from adjacent edges
/// only.
///
/// Counted edges are those of the visited prefix, i.e. between consecutive
/// positions below `visit`. For each swapped position, the neighbors `-1`
/// and `+1` contribute a replaced edge unless the neighbor is the other
/// swapped position (an adjacent swap keeps that shared edge, by symmetry of
/// the distance) or the edge lies outside the counted window.
fn swap_delta(points: &[Point], visit: usize, i: usize, j: usize) -> f64 {
    let mut delta = 0.0;
    for (pos, other) in [(i, j), (j, i)] {
        for nb in [pos - 1, pos + 1] {
            if nb == i || nb == j {
                continue;
            }
            if nb.max(pos) >= visit {
                continue;
            }
            delta += points[nb].distance_to(points[other]) - points[nb].distance_to(points[pos]);
        }
    }
    delta
}

/// Metropolis acceptance probability, uncapped.
///
/// A candidate no longer than the current length yields a value >= 1, which
/// a uniform draw from [0, 1) can never reach, so improvements are always
/// taken.
fn acceptance(current: f64, candidate: f64, temperature: f64) -> f64 {
    ((current - candidate) / temperature).exp()
}
