//! Diffusion model: lattice occupation counts and their pair energy.

pub mod density;
pub mod energy;
pub mod report;

pub use density::Density;
pub use energy::{energy, pair_term, site_energies, Occupancy, PairEnergy, DEFAULT_COEFF};
pub use report::EnergyReport;
