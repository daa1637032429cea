//! Pair-interaction energy of a 1-D lattice of occupation counts.
//!
//! Every site holding `n` indistinguishable particles contributes
//! `n * (n - 1)`: the number of ordered pairs of distinct particles on that
//! site, i.e. twice the unordered pair count.

use std::fmt::Debug;
use std::ops::{Add, Mul, Sub};

use crate::core::error::CoreResult;

use super::density::Density;
use super::report::EnergyReport;

/// Coefficient used when the caller does not supply one.
pub const DEFAULT_COEFF: f64 = 1.0;

/// Numeric element types the energy reduction works over.
pub trait Occupancy:
    Copy + Debug + PartialEq + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self>
{
    const ZERO: Self;
    const ONE: Self;
}

macro_rules! impl_occupancy {
    ($zero:expr, $one:expr => $($t:ty),*) => {
        $(impl Occupancy for $t {
            const ZERO: Self = $zero;
            const ONE: Self = $one;
        })*
    };
}

impl_occupancy!(0, 1 => u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
impl_occupancy!(0.0, 1.0 => f32, f64);

/// Contribution of a single site: `n * (n - 1)`, zero for an empty site.
#[inline]
pub fn pair_term<N: Occupancy>(n: N) -> N {
    if n == N::ZERO {
        N::ZERO
    } else {
        n * (n - N::ONE)
    }
}

/// Energy associated with the diffusion model.
///
/// `density` holds the number of particles at each position. No validation is
/// done here: negative or fractional values go through the same formula.
/// `coeff` is the diffusion coefficient; it is accepted but does not scale the
/// result.
pub fn energy<N: Occupancy>(density: &[N], coeff: f64) -> N {
    debug_log!("[energy] density = {:?} coeff = {}", density, coeff);
    density.iter().fold(N::ZERO, |acc, &n| acc + pair_term(n))
}

/// Per-site terms whose sum is [`energy`].
pub fn site_energies<N: Occupancy>(density: &[N]) -> Vec<N> {
    density.iter().map(|&n| pair_term(n)).collect()
}

/// Energy evaluator carrying its diffusion coefficient.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PairEnergy {
    pub coeff: f64,
}

impl Default for PairEnergy {
    fn default() -> Self {
        Self { coeff: DEFAULT_COEFF }
    }
}

impl PairEnergy {
    pub fn new(coeff: f64) -> Self {
        Self { coeff }
    }

    pub fn energy<N: Occupancy>(&self, density: &[N]) -> N {
        energy(density, self.coeff)
    }

    /// Checked evaluation over validated counts, summarised as a report.
    pub fn report(&self, density: &Density) -> CoreResult<EnergyReport> {
        let value = density.energy()?;
        EnergyReport::new(density, self.coeff, value)
    }
}
