//! Simulated annealing over point tours.
//!
//! A single-solution trajectory search: every iteration proposes a random
//! swap of two tour positions, evaluates the length change incrementally
//! from the edges adjacent to the swapped positions, accepts by the
//! Metropolis criterion, and cools the temperature geometrically.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast
//!   Computing Machines"

mod config;
mod runner;

pub use config::AnnealConfig;
pub use runner::{AnnealStats, Annealer};
