use anyhow::Result;

use crate::cli::DensityInput;

pub fn main(input: DensityInput) -> Result<()> {
    let density = super::read_density(&input)?;
    println!("ok: {} sites", density.len());
    Ok(())
}
