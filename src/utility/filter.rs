use crate::error::{PatternError, PatternResult};
use regex::Regex;
use std::fmt;

/// User-facing value meaning "this filter imposes no restriction".
pub const MATCH_ALL: &str = "*";

#[derive(Debug, Clone)]
pub enum NamePattern {
    Any,
    Regex(Regex),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtensionPattern {
    Any,
    Suffix(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Hidden,
    Name,
    Extension,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SkipReason::Hidden => "hidden",
            SkipReason::Name => "name does not match",
            SkipReason::Extension => "extension does not match",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Copy,
    Skip(SkipReason),
}

impl NamePattern {
    /// Compiles `raw` for full matching against a bare file name.
    pub fn parse(raw: &str) -> PatternResult<Self> {
        if raw == MATCH_ALL {
            return Ok(NamePattern::Any);
        }
        let invalid = |source: regex::Error| PatternError::InvalidRegex {
            pattern: raw.to_string(),
            source,
        };
        // Compile bare first so a stray ')' cannot escape the anchoring group.
        Regex::new(raw).map_err(invalid)?;
        let anchored = Regex::new(&format!("^(?:{})$", raw)).map_err(invalid)?;
        Ok(NamePattern::Regex(anchored))
    }

    pub fn is_match(&self, name: &str) -> bool {
        match self {
            NamePattern::Any => true,
            NamePattern::Regex(re) => re.is_match(name),
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, NamePattern::Any)
    }
}

impl ExtensionPattern {
    pub fn parse(raw: &str) -> Self {
        if raw == MATCH_ALL {
            ExtensionPattern::Any
        } else {
            ExtensionPattern::Suffix(raw.to_string())
        }
    }

    pub fn is_match(&self, name: &str) -> bool {
        match self {
            ExtensionPattern::Any => true,
            ExtensionPattern::Suffix(suffix) => name.ends_with(suffix.as_str()),
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, ExtensionPattern::Any)
    }

    /// The part of `name` before the suffix, when the suffix matches.
    pub fn strip<'a>(&self, name: &'a str) -> Option<&'a str> {
        match self {
            ExtensionPattern::Any => None,
            ExtensionPattern::Suffix(suffix) => name.strip_suffix(suffix.as_str()),
        }
    }
}

/// Hidden and editor backup files.
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.') || name.starts_with('~')
}

pub fn select(name: &str, name_pattern: &NamePattern, extension: &ExtensionPattern) -> Decision {
    if is_hidden(name) {
        return Decision::Skip(SkipReason::Hidden);
    }
    if name_pattern.is_any() && extension.is_any() {
        return Decision::Copy;
    }
    // `\d+` with `.docx` selects `42.docx`: the name may match with or without the suffix.
    let name_ok = name_pattern.is_match(name)
        || extension
            .strip(name)
            .is_some_and(|stem| name_pattern.is_match(stem));
    if !name_ok {
        return Decision::Skip(SkipReason::Name);
    }
    if !extension.is_match(name) {
        return Decision::Skip(SkipReason::Extension);
    }
    Decision::Copy
}
