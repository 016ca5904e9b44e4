//! `playfab init` – create the default settings file.

use anyhow::Result;
use playfab_core::config;

pub fn run_init() -> Result<()> {
    let path = config::config_path()?;
    if path.exists() {
        println!("Settings already exist at {}", path.display());
        return Ok(());
    }
    config::load_or_init()?;
    println!("Created default settings at {}", path.display());
    Ok(())
}
