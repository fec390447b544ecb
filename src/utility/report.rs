use super::filter::SkipReason;
use super::helper::{file_name_lossy, format_bytes};
use crate::error::{CopyError, CopyResult};
use colored::Colorize;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopySummary {
    pub directories_created: usize,
    pub files_copied: usize,
    pub files_skipped: usize,
    pub bytes_copied: u64,
}

/// Writes one status line per traversal outcome and keeps the running totals.
pub struct StatusReporter<W: Write> {
    out: W,
    quiet: bool,
    summary: CopySummary,
}

impl<W: Write> StatusReporter<W> {
    pub fn new(out: W, quiet: bool) -> Self {
        Self {
            out,
            quiet,
            summary: CopySummary::default(),
        }
    }

    pub fn directory_created(&mut self, path: &Path) -> CopyResult<()> {
        self.summary.directories_created += 1;
        self.line(format_args!("{} {}", "created".blue(), path.display()))
    }

    pub fn file_copied(&mut self, path: &Path, bytes: u64) -> CopyResult<()> {
        self.summary.files_copied += 1;
        self.summary.bytes_copied += bytes;
        self.line(format_args!("{}  {}", "copied".green(), path.display()))
    }

    pub fn file_skipped(&mut self, path: &Path, reason: SkipReason) -> CopyResult<()> {
        self.summary.files_skipped += 1;
        self.line(format_args!(
            "{} {} ({})",
            "skipped".yellow(),
            file_name_lossy(path),
            reason
        ))
    }

    pub fn summary(&self) -> &CopySummary {
        &self.summary
    }

    /// Prints the totals and hands them back.
    pub fn finish(mut self) -> CopyResult<CopySummary> {
        let s = self.summary;
        writeln!(
            self.out,
            "{} {} copied ({}), {} skipped, {} created",
            "Done:".green().bold(),
            plural(s.files_copied, "file"),
            format_bytes(s.bytes_copied),
            plural(s.files_skipped, "file"),
            plural(s.directories_created, "directory"),
        )
        .and_then(|_| self.out.flush())
        .map_err(CopyError::Status)?;
        Ok(s)
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, args: std::fmt::Arguments<'_>) -> CopyResult<()> {
        if self.quiet {
            return Ok(());
        }
        writeln!(self.out, "{}", args).map_err(CopyError::Status)
    }
}

fn plural(count: usize, noun: &str) -> String {
    match (count, noun) {
        (1, _) => format!("1 {}", noun),
        (n, "directory") => format!("{} directories", n),
        (n, _) => format!("{} {}s", n, noun),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn output(reporter: StatusReporter<Vec<u8>>) -> String {
        String::from_utf8(reporter.into_inner()).unwrap()
    }

    #[test]
    fn test_reporter_counts_and_lines() {
        colored::control::set_override(false);
        let mut reporter = StatusReporter::new(Vec::new(), false);
        reporter.directory_created(&PathBuf::from("/out/sub")).unwrap();
        reporter.file_copied(&PathBuf::from("/out/sub/a.txt"), 10).unwrap();
        reporter
            .file_skipped(&PathBuf::from("/in/sub/.env"), SkipReason::Hidden)
            .unwrap();

        assert_eq!(
            *reporter.summary(),
            CopySummary {
                directories_created: 1,
                files_copied: 1,
                files_skipped: 1,
                bytes_copied: 10,
            }
        );
        let out = output(reporter);
        assert!(out.contains("created /out/sub"));
        assert!(out.contains("copied  /out/sub/a.txt"));
        assert!(out.contains("skipped .env (hidden)"));
    }

    #[test]
    fn test_quiet_reporter_still_counts() {
        let mut reporter = StatusReporter::new(Vec::new(), true);
        reporter.file_copied(&PathBuf::from("/out/a.txt"), 3).unwrap();
        reporter
            .file_skipped(&PathBuf::from("/in/b.txt"), SkipReason::Extension)
            .unwrap();

        assert_eq!(reporter.summary().files_copied, 1);
        assert_eq!(reporter.summary().files_skipped, 1);
        assert!(output(reporter).is_empty());
    }

    #[test]
    fn test_finish_writes_summary() {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        let mut reporter = StatusReporter::new(&mut buf, true);
        reporter.file_copied(&PathBuf::from("/out/a.txt"), 2048).unwrap();
        let summary = reporter.finish().unwrap();

        assert_eq!(summary.files_copied, 1);
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("1 file copied (2.0 KiB)"));
        assert!(out.contains("0 files skipped"));
        assert!(out.contains("0 directories created"));
    }

    #[test]
    fn test_plural() {
        assert_eq!(plural(1, "directory"), "1 directory");
        assert_eq!(plural(3, "directory"), "3 directories");
        assert_eq!(plural(2, "file"), "2 files");
    }
}
