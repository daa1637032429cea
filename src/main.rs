//! diffusion — parse flags, load settings, dispatch subcommands.
use clap::Parser; // trait import enables DiffusionCli::parse()
use colored::Colorize;

use diffusion_model::cli::{Command, DiffusionCli};
use diffusion_model::commands;
use diffusion_model::commands::energy::EnergyOpts;
use diffusion_model::config::Settings;

fn run(args: DiffusionCli) -> anyhow::Result<()> {
    if args.debug {
        diffusion_model::core::debug::enable();
    }

    match args.cmd {
        Command::Energy { input, coeff, json, out } => {
            let settings = Settings::load(&args.config);
            diffusion_model::debug_log!("[config] {:?}", settings);
            commands::energy::main(input, EnergyOpts { coeff, json, out }, &settings)
        }
        Command::Check { input } => commands::check::main(input),
        Command::Config => commands::config::main(args.config),
    }
}

fn main() {
    let args = DiffusionCli::parse();
    if let Err(e) = run(args) {
        eprintln!("{} {:#}", "err:".red().bold(), e);
        std::process::exit(1);
    }
}
