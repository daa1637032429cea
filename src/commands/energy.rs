use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::cli::DensityInput;
use crate::config::{OutputFormat, Settings};
use crate::core::diffusion::PairEnergy;
use crate::io::atomic_write;

pub struct EnergyOpts {
    pub coeff: Option<f64>,
    pub json: bool,
    pub out: Option<PathBuf>,
}

pub fn main(input: DensityInput, opts: EnergyOpts, settings: &Settings) -> Result<()> {
    let density = super::read_density(&input)?;
    let model = PairEnergy::new(opts.coeff.unwrap_or(settings.coeff));
    let report = model.report(&density)?;
    crate::debug_log!("[energy] {} -> {}", density, report.energy);

    let format = if opts.json { OutputFormat::Json } else { settings.format };
    let rendered = match format {
        OutputFormat::Plain => format!("{report}\n"),
        OutputFormat::Json => format!("{}\n", report.to_json_pretty()?),
    };

    match opts.out {
        Some(path) => {
            atomic_write(&path, rendered.as_bytes())
                .with_context(|| format!("writing report to {}", path.display()))?;
            println!("energy: wrote '{}'", path.display());
        }
        None => print!("{rendered}"),
    }
    Ok(())
}
