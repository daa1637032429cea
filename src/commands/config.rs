use anyhow::Result;
use std::path::PathBuf;

use crate::config::{resolve_config_path, Settings};

pub fn main(cli_path: Option<PathBuf>) -> Result<()> {
    match resolve_config_path(&cli_path) {
        Some(p) => {
            let state = if p.exists() { "" } else { " (missing, using defaults)" };
            println!("# config: {}{}", p.display(), state);
        }
        None => println!("# config: <no home directory, using defaults>"),
    }
    let settings = Settings::load(&cli_path);
    print!("{}", settings.to_toml_string()?);
    Ok(())
}
