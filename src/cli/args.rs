use crate::config::config_command::ConfigCommand;
use crate::config::loader::{load_config, load_config_file};
use crate::config::schema::Config;
use crate::error::{CopierError, CopierResult};
use crate::utility::filter::{ExtensionPattern, NamePattern};
use crate::utility::helper::{clean_directory, display_absolute, paths_overlap};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

pub const EXAMPLES: &str = "\
Examples:
  Copy everything:
    copier -i ./in -o ./out
  Copy only .docx files:
    copier -i ./in -o ./out -e .docx
  Copy only .docx files whose names are numbers:
    copier -i ./in -o ./out -f '\\d+' -e .docx

The output directory must exist; its contents are removed before copying.
Files whose names start with '.' or '~' are never copied.";

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Copy a directory tree (implied when no subcommand is given)
    Copy(CopyArgs),

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "copier",
    version = env!("CARGO_PKG_VERSION"),
    about = "Recursively copy a directory tree, filtering files by name and extension",
    after_help = EXAMPLES
)]
pub struct CLIArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone)]
#[command(after_help = EXAMPLES)]
pub struct CopyArgs {
    #[arg(
        short = 'i',
        long = "input",
        value_name = "DIR",
        help = "Input source directory (or a single file)",
        required = true
    )]
    pub input: PathBuf,

    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Output directory; must exist and is emptied first",
        required = true
    )]
    pub output: PathBuf,

    #[arg(
        short = 'f',
        long = "name",
        value_name = "REGEX",
        help = "File name regex, matched against the whole name ('*' for all)"
    )]
    pub name: Option<String>,

    #[arg(
        short = 'e',
        long = "extension",
        value_name = "SUFFIX",
        help = "File name suffix such as '.docx' ('*' for all)"
    )]
    pub extension: Option<String>,

    #[arg(
        short = 'z',
        long = "zip",
        value_name = "BOOL",
        num_args = 0..=1,
        default_missing_value = "true",
        help = "Zip the resulting folder (not supported, ignored)"
    )]
    pub zip: Option<String>,

    #[arg(short = 'q', long, help = "Only print the final summary")]
    pub quiet: bool,

    // Config Options (Placed last as meta)
    #[arg(long, value_name = "PATH", help = "Use custom config file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Ignore all config files")]
    pub no_config: bool,
}

/// Validated, immutable input of the tree copier.
#[derive(Debug, Clone)]
pub struct CopyConfig {
    pub source_root: PathBuf,
    pub dest_root: PathBuf,
    pub name_pattern: NamePattern,
    pub extension_pattern: ExtensionPattern,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputSettings {
    pub quiet: bool,
    pub color: bool,
}

impl CLIArgs {
    /// Parse arguments with implicit copy command support
    pub fn parse() -> Self {
        Self::parse_from_args(std::env::args().collect())
    }

    pub fn parse_from_args(mut args: Vec<String>) -> Self {
        let is_subcommand = args.get(1).is_some_and(|first_arg| {
            matches!(
                first_arg.as_str(),
                "config" | "copy" | "help" | "-h" | "--help" | "-V" | "--version"
            )
        });
        if !is_subcommand {
            args.insert(1.min(args.len()), "copy".to_string());
        }
        <Self as clap::Parser>::parse_from(args)
    }
}

impl CopyArgs {
    /// Resolves flags over the config file, checks both roots and empties the
    /// destination. Nothing is touched unless every check passes.
    pub fn validate(self) -> CopierResult<(CopyConfig, OutputSettings)> {
        let config = self.load_config_if_needed()?;

        if self.zip.is_some() {
            eprintln!(
                "{} zipping the output is not supported; ignoring -z",
                "warning:".yellow().bold()
            );
        }

        let name = self.name.as_deref().unwrap_or(config.filter.name.as_str());
        let extension = self
            .extension
            .as_deref()
            .unwrap_or(config.filter.extension.as_str());
        let name_pattern = NamePattern::parse(name)?;
        let extension_pattern = ExtensionPattern::parse(extension);

        let output = OutputSettings {
            quiet: self.quiet || config.output.quiet,
            color: config.output.color,
        };

        if !self.input.exists() {
            return Err(CopierError::Validation(format!(
                "Input folder does not exist: {}",
                display_absolute(&self.input).display()
            )));
        }
        if !self.output.exists() {
            return Err(CopierError::Validation(format!(
                "Output folder does not exist: {}",
                display_absolute(&self.output).display()
            )));
        }
        if !self.output.is_dir() {
            return Err(CopierError::Validation(format!(
                "Output is not a directory: {}",
                display_absolute(&self.output).display()
            )));
        }
        let overlap = paths_overlap(&self.input, &self.output).map_err(|e| {
            CopierError::Validation(format!("Failed to resolve input/output paths: {}", e))
        })?;
        if overlap {
            return Err(CopierError::Validation(format!(
                "Input '{}' and output '{}' must not contain one another",
                self.input.display(),
                self.output.display()
            )));
        }

        clean_directory(&self.output).map_err(|e| {
            CopierError::Validation(format!(
                "Failed to clear output folder '{}': {}",
                self.output.display(),
                e
            ))
        })?;

        let copy_config = CopyConfig {
            source_root: self.input,
            dest_root: self.output,
            name_pattern,
            extension_pattern,
        };
        Ok((copy_config, output))
    }

    fn load_config_if_needed(&self) -> CopierResult<Config> {
        if self.no_config {
            return Ok(Config::default());
        }
        if let Some(custom_path) = &self.config {
            return Ok(load_config_file(custom_path)?);
        }
        Ok(load_config())
    }
}
