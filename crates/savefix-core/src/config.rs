use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// User defaults loaded from `~/.config/savefix/config.toml`.
///
/// The checksum layout is fixed by the save format and deliberately absent here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavefixConfig {
    /// Write the corrected copy without prompting (same as `--yes`).
    #[serde(default)]
    pub assume_yes: bool,
    /// Only report the verdict; never prompt or write (same as `--check`).
    #[serde(default)]
    pub check_only: bool,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("savefix")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
/// Without a usable config directory the defaults apply.
pub fn load_or_init() -> Result<SavefixConfig> {
    match config_path() {
        Ok(path) => load_or_init_at(&path),
        Err(err) => {
            tracing::warn!("no config directory ({:#}); using defaults", err);
            Ok(SavefixConfig::default())
        }
    }
}

/// Same as [`load_or_init`] against an explicit path.
///
/// A config that cannot be created or read is logged and replaced by
/// defaults; one that exists but does not parse is an error.
pub fn load_or_init_at(path: &Path) -> Result<SavefixConfig> {
    if !path.exists() {
        let default_cfg = SavefixConfig::default();
        if let Err(e) = write_default(path, &default_cfg) {
            tracing::warn!("could not create default config: {:#}", e);
        }
        return Ok(default_cfg);
    }

    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) => {
            tracing::warn!("could not read {}: {}; using defaults", path.display(), e);
            return Ok(SavefixConfig::default());
        }
    };
    let cfg: SavefixConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    tracing::debug!("loaded config from {}: {:?}", path.display(), cfg);
    Ok(cfg)
}

fn write_default(path: &Path, cfg: &SavefixConfig) -> Result<()> {
    let toml = toml::to_string_pretty(cfg)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
    tracing::info!("created default config at {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = SavefixConfig::default();
        assert!(!cfg.assume_yes);
        assert!(!cfg.check_only);
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let cfg: SavefixConfig = toml::from_str("").unwrap();
        assert_eq!(cfg, SavefixConfig::default());

        let cfg: SavefixConfig = toml::from_str("assume_yes = true").unwrap();
        assert!(cfg.assume_yes);
        assert!(!cfg.check_only);
    }

    #[test]
    fn load_or_init_creates_then_reads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let created = load_or_init_at(&path).unwrap();
        assert_eq!(created, SavefixConfig::default());
        assert!(path.exists());

        fs::write(&path, "check_only = true\n").unwrap();
        let loaded = load_or_init_at(&path).unwrap();
        assert!(loaded.check_only);
    }

    #[test]
    fn load_or_init_uses_xdg_config_home() {
        let dir = tempfile::tempdir().unwrap();
        std::env::set_var("XDG_CONFIG_HOME", dir.path());
        let cfg = load_or_init().unwrap();
        assert_eq!(cfg, SavefixConfig::default());
        assert!(dir.path().join("savefix").join("config.toml").exists());
    }

    #[test]
    fn malformed_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "assume_yes = \"maybe\"").unwrap();
        let err = load_or_init_at(&path).unwrap_err();
        assert!(format!("{err:#}").contains("parse"), "{err:#}");
    }
}
