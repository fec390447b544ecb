use super::schema::Config;
use crate::error::{ConfigError, ConfigResult};
use colored::Colorize;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "copier";
const CONFIG_FILE: &str = "config.toml";

/// `<config_dir>/copier/config.toml`, when the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

/// Loads the default config file, falling back to built-in defaults.
///
/// A missing file is normal. A broken one is reported and ignored so that a
/// bad user config never blocks a copy.
pub fn load_config() -> Config {
    let Some(path) = default_config_path() else {
        return Config::default();
    };
    if !path.exists() {
        return Config::default();
    }
    match load_config_file(&path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}; using defaults", "warning:".yellow().bold(), e);
            Config::default()
        }
    }
}

pub fn load_config_file(path: &Path) -> ConfigResult<Config> {
    let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    toml::from_str(&text).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

pub fn write_config_file(path: &Path, config: &Config, force: bool) -> ConfigResult<()> {
    if path.exists() && !force {
        return Err(ConfigError::AlreadyExists(path.to_path_buf()));
    }
    let write_error = |e: std::io::Error| ConfigError::Write {
        path: path.to_path_buf(),
        source: e,
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(write_error)?;
    }
    let text = config.to_toml_string()?;
    std::fs::write(path, text).map_err(write_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[filter]\nname = \"report.*\"\n[output]\nquiet = true\n").unwrap();

        let config = load_config_file(&path).unwrap();

        assert_eq!(config.filter.name, "report.*");
        assert_eq!(config.filter.extension, "*");
        assert!(config.output.quiet);
        assert!(config.output.color);
    }

    #[test]
    fn test_load_config_file_missing() {
        let temp_dir = TempDir::new().unwrap();
        let err = load_config_file(&temp_dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_load_config_file_invalid() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[filter\nname = ").unwrap();

        let err = load_config_file(&path).unwrap_err();

        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_write_config_file_refuses_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested/config.toml");

        write_config_file(&path, &Config::default(), false).unwrap();
        assert_eq!(load_config_file(&path).unwrap(), Config::default());

        let err = write_config_file(&path, &Config::default(), false).unwrap_err();
        assert!(matches!(err, ConfigError::AlreadyExists(_)));

        write_config_file(&path, &Config::default(), true).unwrap();
    }

    #[test]
    fn test_default_config_path_shape() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with("copier/config.toml"));
        }
    }
}
