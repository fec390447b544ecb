use std::io;
use std::path::{Path, PathBuf};

/// Removes everything inside `dir`, keeping `dir` itself.
pub fn clean_directory(dir: &Path) -> io::Result<()> {
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        // symlink_metadata so a link to a directory is unlinked, not emptied
        if std::fs::symlink_metadata(&path)?.is_dir() {
            std::fs::remove_dir_all(&path)?;
        } else {
            std::fs::remove_file(&path)?;
        }
    }
    Ok(())
}

/// True when `a` and `b` are the same path or one lies inside the other.
pub fn paths_overlap(a: &Path, b: &Path) -> io::Result<bool> {
    let a = a.canonicalize()?;
    let b = b.canonicalize()?;
    Ok(a.starts_with(&b) || b.starts_with(&a))
}

pub fn file_name_lossy(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KiB", "MiB", "GiB", "TiB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.1} {}", value, UNITS[unit])
    }
}

pub fn display_absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_clean_directory_removes_contents_keeps_root() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("out");
        fs::create_dir_all(root.join("nested/deeper")).unwrap();
        fs::write(root.join("top.txt"), b"x").unwrap();
        fs::write(root.join("nested/deeper/inner.txt"), b"y").unwrap();
        fs::write(root.join(".hidden"), b"z").unwrap();

        clean_directory(&root).unwrap();

        assert!(root.is_dir());
        assert_eq!(fs::read_dir(&root).unwrap().count(), 0);
    }

    #[cfg(unix)]
    #[test]
    fn test_clean_directory_does_not_follow_symlinked_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let outside = temp_dir.path().join("outside");
        fs::create_dir(&outside).unwrap();
        fs::write(outside.join("keep.txt"), b"keep").unwrap();

        let root = temp_dir.path().join("out");
        fs::create_dir(&root).unwrap();
        std::os::unix::fs::symlink(&outside, root.join("link")).unwrap();

        clean_directory(&root).unwrap();

        assert_eq!(fs::read_dir(&root).unwrap().count(), 0);
        assert!(outside.join("keep.txt").exists());
    }

    #[test]
    fn test_paths_overlap() {
        let temp_dir = TempDir::new().unwrap();
        let a = temp_dir.path().join("a");
        let nested = a.join("b");
        let sibling = temp_dir.path().join("c");
        fs::create_dir_all(&nested).unwrap();
        fs::create_dir_all(&sibling).unwrap();

        assert!(paths_overlap(&a, &a).unwrap());
        assert!(paths_overlap(&a, &nested).unwrap());
        assert!(paths_overlap(&nested, &a).unwrap());
        assert!(!paths_overlap(&a, &sibling).unwrap());
    }

    #[test]
    fn test_paths_overlap_is_component_wise() {
        let temp_dir = TempDir::new().unwrap();
        let a = temp_dir.path().join("data");
        let b = temp_dir.path().join("data2");
        fs::create_dir_all(&a).unwrap();
        fs::create_dir_all(&b).unwrap();

        assert!(!paths_overlap(&a, &b).unwrap());
    }

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(1023), "1023 B");
        assert_eq!(format_bytes(1536), "1.5 KiB");
        assert_eq!(format_bytes(5 * 1024 * 1024), "5.0 MiB");
    }

    #[test]
    fn test_file_name_lossy() {
        assert_eq!(file_name_lossy(Path::new("/a/b/report.docx")), "report.docx");
        assert_eq!(file_name_lossy(Path::new("/")), "");
    }
}
