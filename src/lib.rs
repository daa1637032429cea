//! Diffusion model library: pair energy of 1-D lattice occupation counts,
//! plus the config, IO and command layers behind the `diffusion` binary.
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod io;

pub use crate::core::diffusion::{energy, Density, EnergyReport, PairEnergy, DEFAULT_COEFF};
pub use crate::core::error::{CoreError, CoreResult};
