//! # u-tour
//!
//! Open-path tour optimization library: shortens the path through a set of
//! 2-D integer points with simulated annealing, evaluating every candidate
//! move incrementally instead of rescanning the tour.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Point, Tour) and path length
//! - [`instance`] — Problem ingestion: plain-text parsing, random generation
//! - [`sa`] — Simulated annealing optimizer (config, runner, statistics)
//! - [`render`] — Tour rasterization onto an ARGB canvas and BMP encoding
//! - [`error`] — Crate-wide error type
//!
//! ## Quick start
//!
//! ```
//! use u_tour::models::{Point, Tour};
//! use u_tour::sa::{AnnealConfig, Annealer};
//!
//! let mut tour = Tour::new(vec![
//!     Point::new(0, 0),
//!     Point::new(10, 10),
//!     Point::new(10, 0),
//!     Point::new(0, 10),
//! ]);
//!
//! let config = AnnealConfig::default().with_seed(42).with_iterations(10_000);
//! let mut annealer = Annealer::from_config(config).expect("valid config");
//! let stats = annealer.optimize(&mut tour).expect("tour is optimizable");
//!
//! assert!(stats.final_length <= stats.initial_length + 1e-9);
//! ```

pub mod error;
pub mod instance;
pub mod models;
pub mod render;
pub mod sa;
