use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "diffusion",
    about = "Diffusion model — pair energy of lattice occupation counts",
    version,
    propagate_version = true,
    disable_help_subcommand = true
)]
pub struct DiffusionCli {
    /// Global: path to config (TOML); default: ~/.diffusion/config.toml
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Global: print diagnostics to stderr (same as DIFFUSION_DEBUG=1)
    #[arg(long = "debug", action = ArgAction::SetTrue, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub cmd: Command,
}

/// Where the occupation counts come from.
#[derive(Debug, Args)]
pub struct DensityInput {
    /// Occupation counts; each value may hold several, e.g. `5,0,2`
    #[arg(value_name = "VALUES", allow_negative_numbers = true, conflicts_with = "file")]
    pub values: Vec<String>,

    /// Read counts from FILE instead (commas and/or whitespace separated)
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute the pair energy Σ n(n - 1)
    ///
    /// Examples:
    ///   diffusion energy 5 0 2
    ///   diffusion energy --file density.txt --json -o report.json
    Energy {
        #[command(flatten)]
        input: DensityInput,

        /// Diffusion coefficient (recorded in the report, not applied)
        #[arg(long = "coeff", value_name = "C", allow_negative_numbers = true)]
        coeff: Option<f64>,

        /// Emit a JSON report (overrides the configured format)
        #[arg(long = "json", action = ArgAction::SetTrue)]
        json: bool,

        /// Write the report to FILE instead of stdout
        #[arg(short = 'o', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },

    /// Validate counts without computing anything
    Check {
        #[command(flatten)]
        input: DensityInput,
    },

    /// Show the resolved config path and effective settings
    Config,
}
