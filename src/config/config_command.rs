use super::loader::{default_config_path, load_config, load_config_file, write_config_file};
use super::schema::Config;
use crate::error::{ConfigError, ConfigResult};
use clap::Subcommand;
use colored::Colorize;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the default config file location
    Path,

    /// Print the effective configuration as TOML
    Show {
        #[arg(long, value_name = "PATH", help = "Read this config file instead")]
        path: Option<PathBuf>,
    },

    /// Write a config file with default values
    Init {
        #[arg(long, value_name = "PATH", help = "Write here instead of the default location")]
        path: Option<PathBuf>,

        #[arg(long, help = "Overwrite an existing config file")]
        force: bool,
    },
}

impl ConfigCommand {
    pub fn execute(&self) -> ConfigResult<()> {
        let stdout = std::io::stdout();
        self.execute_to(&mut stdout.lock())
    }

    pub fn execute_to<W: Write>(&self, out: &mut W) -> ConfigResult<()> {
        let print_error = |e: std::io::Error| ConfigError::Write {
            path: PathBuf::from("<stdout>"),
            source: e,
        };
        match self {
            ConfigCommand::Path => {
                let path = default_config_path().ok_or(ConfigError::NoConfigDir)?;
                writeln!(out, "{}", path.display()).map_err(print_error)
            }
            ConfigCommand::Show { path } => {
                let config = match path {
                    Some(path) => load_config_file(path)?,
                    None => load_config(),
                };
                write!(out, "{}", config.to_toml_string()?).map_err(print_error)
            }
            ConfigCommand::Init { path, force } => {
                let path = match path {
                    Some(path) => path.clone(),
                    None => default_config_path().ok_or(ConfigError::NoConfigDir)?,
                };
                write_config_file(&path, &Config::default(), *force)?;
                writeln!(out, "{} {}", "Wrote".green(), path.display()).map_err(print_error)
            }
        }
    }
}
