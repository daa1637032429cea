pub mod check;
pub mod config;
pub mod energy;

use anyhow::{Context, Result};

use crate::cli::DensityInput;
use crate::core::diffusion::Density;

/// Collect the density from positional values or `--file`.
/// No input at all is the empty lattice.
pub fn read_density(input: &DensityInput) -> Result<Density> {
    if let Some(path) = &input.file {
        return Density::from_file(path)
            .with_context(|| format!("loading density from {}", path.display()));
    }
    let mut counts = Vec::new();
    for (i, value) in input.values.iter().enumerate() {
        let part = Density::parse(value).with_context(|| format!("value {i} ({value:?})"))?;
        counts.extend(part.into_inner());
    }
    Ok(Density::new(counts))
}
