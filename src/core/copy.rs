use crate::cli::args::CopyConfig;
use crate::error::{CopyError, CopyResult};
use crate::utility::filter::{Decision, select};
use crate::utility::report::{CopySummary, StatusReporter};
use std::io::{self, Write};
use std::path::Path;

/// Copies `config.source_root` into `config.dest_root`.
///
/// The destination must already exist and be empty. A single-file source lands
/// inside the destination directory under its own name.
pub fn copy<W: Write>(
    config: &CopyConfig,
    reporter: &mut StatusReporter<W>,
) -> CopyResult<CopySummary> {
    let source = config.source_root.as_path();
    let metadata = std::fs::metadata(source).map_err(|e| CopyError::Metadata {
        path: source.to_path_buf(),
        source: e,
    })?;

    if metadata.is_dir() {
        copy_tree(source, &config.dest_root, config, reporter)?;
    } else {
        let file_name = source.file_name().ok_or_else(|| CopyError::Metadata {
            path: source.to_path_buf(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "Invalid source path"),
        })?;
        copy_tree(source, &config.dest_root.join(file_name), config, reporter)?;
    }

    Ok(*reporter.summary())
}

/// Pre-order walk mirroring `source` onto `dest`. Stops at the first I/O error.
pub fn copy_tree<W: Write>(
    source: &Path,
    dest: &Path,
    config: &CopyConfig,
    reporter: &mut StatusReporter<W>,
) -> CopyResult<()> {
    let metadata = std::fs::metadata(source).map_err(|e| CopyError::Metadata {
        path: source.to_path_buf(),
        source: e,
    })?;

    if metadata.is_dir() {
        if !dest.exists() {
            std::fs::create_dir(dest).map_err(|e| CopyError::CreateDir {
                path: dest.to_path_buf(),
                source: e,
            })?;
            reporter.directory_created(dest)?;
        }

        let read_dir_error = |e: io::Error| CopyError::ReadDir {
            path: source.to_path_buf(),
            source: e,
        };
        // OS order, deliberately unsorted
        for entry in std::fs::read_dir(source).map_err(read_dir_error)? {
            let name = entry.map_err(read_dir_error)?.file_name();
            copy_tree(&source.join(&name), &dest.join(&name), config, reporter)?;
        }
        return Ok(());
    }

    let name = source
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    match select(&name, &config.name_pattern, &config.extension_pattern) {
        Decision::Skip(reason) => reporter.file_skipped(source, reason),
        Decision::Copy => {
            // fs::copy would block forever opening a FIFO
            if !metadata.is_file() {
                return Err(CopyError::CopyFailed {
                    source: source.to_path_buf(),
                    destination: dest.to_path_buf(),
                    reason: io::Error::new(io::ErrorKind::InvalidInput, "not a regular file"),
                });
            }
            let bytes = std::fs::copy(source, dest).map_err(|e| CopyError::CopyFailed {
                source: source.to_path_buf(),
                destination: dest.to_path_buf(),
                reason: e,
            })?;
            reporter.file_copied(dest, bytes)
        }
    }
}
