//! Core 2-D particle life simulation library.
//!
//! Main components:
//! - [`color`]: the closed set of particle colors.
//! - [`rules`]: the per-color-pair interaction rule matrix.
//! - [`particle`]: particles and the startup population.
//! - [`config`]: global configuration for the simulation.
//! - [`simulation`]: the engine that advances the population tick by tick.

pub mod color;
pub mod config;
pub mod particle;
pub mod rules;
pub mod simulation;
