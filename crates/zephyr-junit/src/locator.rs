// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Report discovery
//!
//! A report path names either a single report file, which is parsed as-is,
//! or a directory, which is searched recursively for readable files named
//! `TEST*.xml` (the naming used by Maven Surefire, Gradle and Ant).

use std::fs::{self, File};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::error::ReportError;
use crate::model::RawSuite;
use crate::parser::parse_file;

/// Required file name prefix in directory mode (case-sensitive)
pub const REPORT_FILE_PREFIX: &str = "TEST";
/// Required file name suffix in directory mode
pub const REPORT_FILE_SUFFIX: &str = ".xml";

/// Check whether a file name matches `TEST*.xml`
#[must_use]
pub fn is_report_file_name(name: &str) -> bool {
    name.starts_with(REPORT_FILE_PREFIX) && name.ends_with(REPORT_FILE_SUFFIX)
}

/// Recursively list report files under `dir`
///
/// Files are returned in a depth-first walk with siblings sorted by name.
/// Matching files that cannot be opened for reading are skipped, and so are
/// subdirectories the process is not permitted to read.
///
/// # Errors
///
/// Returns `ReportError::Scan` if `dir` itself cannot be read or the walk
/// fails for any reason other than a denied subdirectory.
pub fn list_report_files(dir: &Path) -> Result<Vec<PathBuf>, ReportError> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() > 0 && is_permission_denied(&e) => {
                debug!(path = ?e.path(), error = %e, "Skipping unreadable directory");
                continue;
            }
            Err(source) => {
                return Err(ReportError::Scan {
                    path: source.path().unwrap_or(dir).to_path_buf(),
                    source,
                });
            }
        };
        let path = entry.path();

        let matches = entry.file_name().to_str().is_some_and(is_report_file_name);
        if !matches || !path.is_file() {
            continue;
        }
        if let Err(e) = File::open(path) {
            debug!(path = %path.display(), error = %e, "Skipping unreadable report file");
            continue;
        }
        files.push(path.to_path_buf());
    }

    Ok(files)
}

fn is_permission_denied(e: &walkdir::Error) -> bool {
    e.io_error()
        .is_some_and(|io| io.kind() == ErrorKind::PermissionDenied)
}

/// Parse every report at `path`
///
/// A directory yields one suite per matching file; any other path is parsed
/// as exactly one report regardless of its name. Files are parsed one at a
/// time and the first failure aborts the whole call.
///
/// # Errors
///
/// Returns `ReportError::NotFound` if `path` does not exist or cannot be
/// accessed, `ReportError::Scan` if the directory walk fails, and
/// `ReportError::Parse` for the first report that cannot be parsed.
pub fn locate(path: &Path) -> Result<Vec<RawSuite>, ReportError> {
    let metadata = fs::metadata(path).map_err(|source| ReportError::NotFound {
        path: path.to_path_buf(),
        source,
    })?;

    if !metadata.is_dir() {
        return Ok(vec![parse_file(path)?]);
    }

    let files = list_report_files(path)?;
    debug!(dir = %path.display(), files = files.len(), "Found JUnit report files");

    files.iter().map(|file| parse_file(file)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;
    use tempfile::tempdir;

    const SUITE: &str = r#"<testsuite><testcase name="t" classname="c"/></testsuite>"#;

    #[test]
    fn test_is_report_file_name() {
        assert!(is_report_file_name("TEST-foo.xml"));
        assert!(is_report_file_name("TEST.xml"));
        assert!(is_report_file_name("TESTS-TestSuites.xml"));
        assert!(is_report_file_name("TEST-pkg.A.xml"));

        assert!(!is_report_file_name("results.xml"));
        assert!(!is_report_file_name("test-foo.xml"));
        assert!(!is_report_file_name("TEST-foo.xml.bak"));
        assert!(!is_report_file_name("TEST-foo.XML"));
        assert!(!is_report_file_name("TEST-foo.txt"));
        assert!(!is_report_file_name("my-TEST-foo.xml"));
    }

    #[test]
    fn test_list_report_files_recursive() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("module-b").join("surefire-reports");
        fs::create_dir_all(&nested).unwrap();

        fs::write(dir.path().join("TEST-a.xml"), SUITE).unwrap();
        fs::write(dir.path().join("notes.xml"), SUITE).unwrap();
        fs::write(nested.join("TEST-b.xml"), SUITE).unwrap();
        fs::write(nested.join("TEST-b.txt"), SUITE).unwrap();

        let files = list_report_files(dir.path()).unwrap();
        assert_eq!(
            files,
            vec![dir.path().join("TEST-a.xml"), nested.join("TEST-b.xml")]
        );
    }

    #[test]
    fn test_list_report_files_ignores_matching_directories() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("TEST-dir.xml")).unwrap();

        let files = list_report_files(dir.path()).unwrap();
        assert!(files.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_list_report_files_skips_unreadable_directory() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let locked = dir.path().join("locked");
        fs::create_dir(&locked).unwrap();
        fs::write(locked.join("TEST-hidden.xml"), SUITE).unwrap();
        fs::write(dir.path().join("TEST-a.xml"), SUITE).unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Privileged users (e.g. root) can read the directory anyway
        let privileged = fs::read_dir(&locked).is_ok();
        let files = list_report_files(dir.path());
        let suites = locate(dir.path());
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        if privileged {
            return;
        }

        assert_eq!(files.unwrap(), vec![dir.path().join("TEST-a.xml")]);
        assert_eq!(suites.unwrap().len(), 1);
    }

    #[test]
    fn test_list_report_files_missing_root_reports_path() {
        let missing = Path::new("/nonexistent/path/12345");
        match list_report_files(missing) {
            Err(ReportError::Scan { path, .. }) => assert_eq!(path, missing),
            other => panic!("Expected Scan error, got {:?}", other),
        }
    }

    #[test]
    fn test_locate_single_file_ignores_pattern() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("results.xml");
        fs::write(&path, SUITE).unwrap();

        let suites = locate(&path).unwrap();
        assert_eq!(suites.len(), 1);
        assert_eq!(suites[0].cases.len(), 1);
    }

    #[test]
    fn test_locate_empty_directory() {
        let dir = tempdir().unwrap();
        let suites = locate(dir.path()).unwrap();
        assert!(suites.is_empty());
    }

    #[test]
    fn test_locate_missing_path() {
        let result = locate(Path::new("/nonexistent/path/12345"));
        assert!(matches!(result, Err(ReportError::NotFound { .. })));
    }
}
