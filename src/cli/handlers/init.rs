use crate::config::{CONFIG_FILE, RosterConfig};
use anyhow::Result;
use colored::Colorize;

pub fn handle_init() -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config_path = cwd.join(CONFIG_FILE);

    RosterConfig::default().save(&config_path)?;

    println!("{} roster config in {}", "Initialized".green(), cwd.display());
    println!("  Config: {}", config_path.display());

    Ok(())
}
