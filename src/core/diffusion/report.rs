use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::error::CoreResult;

use super::density::Density;

/// Summary of one energy evaluation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnergyReport {
    pub sites: usize,
    pub total_particles: u64,
    /// Coefficient as passed by the caller; it does not scale `energy`.
    pub coeff: f64,
    pub energy: u64,
    /// Unordered same-site pairs (`energy / 2`).
    pub pairs: u64,
}

impl EnergyReport {
    pub(crate) fn new(density: &Density, coeff: f64, energy: u64) -> CoreResult<Self> {
        Ok(Self {
            sites: density.len(),
            total_particles: density.total_particles()?,
            coeff,
            energy,
            pairs: energy / 2,
        })
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for EnergyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "energy = {} (sites = {}, particles = {}, coeff = {})",
            self.energy, self.sites, self.total_particles, self.coeff
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::diffusion::PairEnergy;

    #[test]
    fn plain_line() {
        let report = PairEnergy::default()
            .report(&Density::new(vec![5, 0, 2]))
            .unwrap();
        assert_eq!(
            report.to_string(),
            "energy = 22 (sites = 3, particles = 7, coeff = 1)"
        );
        assert_eq!(report.pairs, 11);
    }

    #[test]
    fn json_roundtrip_keeps_coeff() {
        let report = PairEnergy::new(0.25)
            .report(&Density::new(vec![3]))
            .unwrap();
        let json = report.to_json_pretty().unwrap();
        let back: EnergyReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
        assert_eq!(back.energy, 6);
        assert_eq!(back.coeff, 0.25);
    }
}
