use anyhow::{anyhow, Result};
use std::fs;
use std::path::PathBuf;

pub fn get_app_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| anyhow!("Could not find home directory"))?;
    Ok(home.join(".copy-button"))
}

pub fn get_config_path() -> Result<PathBuf> {
    let app_dir = get_app_dir()?;
    Ok(app_dir.join("config.toml"))
}

pub fn get_log_path() -> Result<PathBuf> {
    let app_dir = get_app_dir()?;
    Ok(app_dir.join("copybtn.log"))
}

pub fn ensure_app_dir_exists() -> Result<()> {
    let app_dir = get_app_dir()?;

    if !app_dir.exists() {
        fs::create_dir_all(&app_dir)?;
    }

    Ok(())
}
