use std::fmt;
use std::io;
use std::path::PathBuf;

pub type CopierResult<T> = Result<T, CopierError>;
pub type CopyResult<T> = Result<T, CopyError>;
pub type ConfigResult<T> = Result<T, ConfigError>;
pub type PatternResult<T> = Result<T, PatternError>;

#[derive(Debug)]
pub enum CopierError {
    Validation(String),
    Pattern(PatternError),
    Config(ConfigError),
    Copy(CopyError),
}

#[derive(Debug)]
pub enum PatternError {
    InvalidRegex {
        pattern: String,
        source: regex::Error,
    },
}

#[derive(Debug)]
pub enum ConfigError {
    NoConfigDir,
    Read { path: PathBuf, source: io::Error },
    Parse { path: PathBuf, source: toml::de::Error },
    Serialize(toml::ser::Error),
    Write { path: PathBuf, source: io::Error },
    AlreadyExists(PathBuf),
}

#[derive(Debug)]
pub enum CopyError {
    Metadata {
        path: PathBuf,
        source: io::Error,
    },
    CreateDir {
        path: PathBuf,
        source: io::Error,
    },
    ReadDir {
        path: PathBuf,
        source: io::Error,
    },
    CopyFailed {
        source: PathBuf,
        destination: PathBuf,
        reason: io::Error,
    },
    Status(io::Error),
}

impl fmt::Display for CopierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CopierError::Validation(msg) => write!(f, "{}", msg),
            CopierError::Pattern(e) => write!(f, "{}", e),
            CopierError::Config(e) => write!(f, "config: {}", e),
            CopierError::Copy(e) => write!(f, "{}", e),
        }
    }
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternError::InvalidRegex { pattern, source } => {
                write!(f, "invalid file name pattern '{}': {}", pattern, source)
            }
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NoConfigDir => {
                write!(f, "could not determine the user configuration directory")
            }
            ConfigError::Read { path, source } => {
                write!(f, "failed to read '{}': {}", path.display(), source)
            }
            ConfigError::Parse { path, source } => {
                write!(f, "failed to parse '{}': {}", path.display(), source)
            }
            ConfigError::Serialize(e) => write!(f, "failed to serialize config: {}", e),
            ConfigError::Write { path, source } => {
                write!(f, "failed to write '{}': {}", path.display(), source)
            }
            ConfigError::AlreadyExists(path) => write!(
                f,
                "'{}' already exists (use --force to overwrite)",
                path.display()
            ),
        }
    }
}

impl fmt::Display for CopyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CopyError::Metadata { path, source } => {
                write!(f, "cannot stat '{}': {}", path.display(), source)
            }
            CopyError::CreateDir { path, source } => {
                write!(
                    f,
                    "cannot create directory '{}': {}",
                    path.display(),
                    source
                )
            }
            CopyError::ReadDir { path, source } => {
                write!(f, "cannot read directory '{}': {}", path.display(), source)
            }
            CopyError::CopyFailed {
                source,
                destination,
                reason,
            } => write!(
                f,
                "failed to copy '{}' to '{}': {}",
                source.display(),
                destination.display(),
                reason
            ),
            CopyError::Status(e) => write!(f, "failed to write status output: {}", e),
        }
    }
}

impl std::error::Error for CopierError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CopierError::Validation(_) => None,
            CopierError::Pattern(e) => Some(e),
            CopierError::Config(e) => Some(e),
            CopierError::Copy(e) => Some(e),
        }
    }
}

impl std::error::Error for PatternError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PatternError::InvalidRegex { source, .. } => Some(source),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Read { source, .. } | ConfigError::Write { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
            ConfigError::Serialize(e) => Some(e),
            ConfigError::NoConfigDir | ConfigError::AlreadyExists(_) => None,
        }
    }
}

impl std::error::Error for CopyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CopyError::Metadata { source, .. }
            | CopyError::CreateDir { source, .. }
            | CopyError::ReadDir { source, .. } => Some(source),
            CopyError::CopyFailed { reason, .. } => Some(reason),
            CopyError::Status(e) => Some(e),
        }
    }
}

impl From<PatternError> for CopierError {
    fn from(e: PatternError) -> Self {
        CopierError::Pattern(e)
    }
}

impl From<ConfigError> for CopierError {
    fn from(e: ConfigError) -> Self {
        CopierError::Config(e)
    }
}

impl From<CopyError> for CopierError {
    fn from(e: CopyError) -> Self {
        CopierError::Copy(e)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(e: toml::ser::Error) -> Self {
        ConfigError::Serialize(e)
    }
}
