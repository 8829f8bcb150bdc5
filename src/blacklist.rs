//! Common-password blacklist
//!
//! A process-wide set of known-bad passwords, loaded once from a text
//! file (one password per line). Deliberately separate from the scoring
//! algorithm: consumers that want to reject well-known passwords call
//! [`is_common_password`] alongside the evaluator.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use thiserror::Error;

static BLACKLIST: RwLock<Option<Blacklist>> = RwLock::new(None);

const PATH_ENV_VAR: &str = "PWD_METER_BLACKLIST_PATH";
const DEFAULT_PATH: &str = "./assets/common-passwords.txt";

#[derive(Error, Debug)]
pub enum BlacklistError {
    #[error("Blacklist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read blacklist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Blacklist file is empty")]
    EmptyFile,
}

/// A loaded blacklist. Entries are stored lowercased; lookups are
/// case-insensitive.
#[derive(Debug, Clone)]
pub struct Blacklist {
    entries: HashSet<String>,
}

impl Blacklist {
    /// Parses blacklist file content, one password per line. Blank lines
    /// are skipped.
    fn parse(content: &str) -> Result<Self, BlacklistError> {
        if content.trim().is_empty() {
            return Err(BlacklistError::EmptyFile);
        }

        let entries = content
            .lines()
            .map(|line| line.trim().to_lowercase())
            .filter(|line| !line.is_empty())
            .collect();

        Ok(Self { entries })
    }

    pub fn contains(&self, password: &str) -> bool {
        self.entries.contains(&password.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Returns the blacklist file path.
///
/// Priority:
/// 1. Environment variable `PWD_METER_BLACKLIST_PATH`
/// 2. Default path `./assets/common-passwords.txt`
pub fn blacklist_path() -> PathBuf {
    std::env::var(PATH_ENV_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_PATH))
}

/// Loads the process-wide blacklist from [`blacklist_path`].
///
/// Idempotent: after the first successful load, later calls return the
/// loaded entry count without touching the filesystem. Call once at
/// startup.
///
/// # Errors
///
/// Returns an error if the file does not exist, cannot be read, or is
/// empty.
pub fn init_blacklist() -> Result<usize, BlacklistError> {
    init_blacklist_from_path(blacklist_path())
}

/// Loads the process-wide blacklist from an explicit path, for callers
/// that resolve the file location themselves (bundled assets, config).
pub fn init_blacklist_from_path<P: AsRef<Path>>(path: P) -> Result<usize, BlacklistError> {
    {
        let guard = BLACKLIST.read().unwrap();
        if let Some(loaded) = guard.as_ref() {
            return Ok(loaded.len());
        }
    }

    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Blacklist initialization failed: file not found {:?}", path);
        return Err(BlacklistError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let blacklist = Blacklist::parse(&content)?;
    let count = blacklist.len();

    {
        let mut guard = BLACKLIST.write().unwrap();
        *guard = Some(blacklist);
    }

    #[cfg(feature = "tracing")]
    tracing::info!("Blacklist initialized: {} passwords from {:?}", count, path);

    Ok(count)
}

/// Returns a clone of the loaded blacklist, or `None` if
/// [`init_blacklist`] has not succeeded yet.
pub fn get_blacklist() -> Option<Blacklist> {
    let guard = BLACKLIST.read().unwrap();
    guard.clone()
}

/// Checks a password against the loaded blacklist, case-insensitively.
///
/// Returns `false` if the blacklist was never initialized.
pub fn is_common_password(password: &str) -> bool {
    let guard = BLACKLIST.read().unwrap();
    guard
        .as_ref()
        .map(|blacklist| blacklist.contains(password))
        .unwrap_or(false)
}

#[cfg(test)]
pub fn reset_blacklist_for_testing() {
    let mut guard = BLACKLIST.write().unwrap();
    *guard = None;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe { std::env::set_var(key, value) };
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe { std::env::remove_var(key) };
    }

    fn write_tempfile(lines: &[&str]) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        for line in lines {
            writeln!(temp_file, "{}", line).expect("Failed to write");
        }
        temp_file
    }

    #[test]
    #[serial]
    fn test_blacklist_path_default() {
        remove_env(PATH_ENV_VAR);
        assert_eq!(blacklist_path(), PathBuf::from(DEFAULT_PATH));
    }

    #[test]
    #[serial]
    fn test_blacklist_path_from_env() {
        set_env(PATH_ENV_VAR, "/custom/path/common.txt");
        assert_eq!(blacklist_path(), PathBuf::from("/custom/path/common.txt"));
        remove_env(PATH_ENV_VAR);
    }

    #[test]
    #[serial]
    fn test_init_file_not_found() {
        reset_blacklist_for_testing();
        set_env(PATH_ENV_VAR, "/nonexistent/common-passwords.txt");

        let result = init_blacklist();
        assert!(matches!(result, Err(BlacklistError::FileNotFound(_))));

        remove_env(PATH_ENV_VAR);
    }

    #[test]
    #[serial]
    fn test_init_empty_file() {
        reset_blacklist_for_testing();
        let temp_file = write_tempfile(&[]);
        set_env(PATH_ENV_VAR, temp_file.path().to_str().unwrap());

        let result = init_blacklist();
        assert!(matches!(result, Err(BlacklistError::EmptyFile)));

        remove_env(PATH_ENV_VAR);
    }

    #[test]
    #[serial]
    fn test_init_counts_entries_and_skips_blanks() {
        reset_blacklist_for_testing();
        let temp_file = write_tempfile(&["password", "", "letmein", "  ", "qwerty"]);
        set_env(PATH_ENV_VAR, temp_file.path().to_str().unwrap());

        let count = init_blacklist().expect("Should load");
        assert_eq!(count, 3);

        remove_env(PATH_ENV_VAR);
    }

    #[test]
    #[serial]
    fn test_init_is_idempotent() {
        reset_blacklist_for_testing();
        let temp_file = write_tempfile(&["password", "letmein"]);
        set_env(PATH_ENV_VAR, temp_file.path().to_str().unwrap());

        assert_eq!(init_blacklist().expect("Should load"), 2);

        // Second call must not reload, even from a broken path
        set_env(PATH_ENV_VAR, "/nonexistent/common-passwords.txt");
        assert_eq!(init_blacklist().expect("Should stay loaded"), 2);

        remove_env(PATH_ENV_VAR);
    }

    #[test]
    #[serial]
    fn test_is_common_password_case_insensitive() {
        reset_blacklist_for_testing();
        let temp_file = write_tempfile(&["dragon"]);
        set_env(PATH_ENV_VAR, temp_file.path().to_str().unwrap());
        let _ = init_blacklist();

        assert!(is_common_password("dragon"));
        assert!(is_common_password("DRAGON"));
        assert!(!is_common_password("uncommon-Dr4gon!"));

        remove_env(PATH_ENV_VAR);
    }

    #[test]
    #[serial]
    fn test_get_blacklist_reflects_loaded_entries() {
        reset_blacklist_for_testing();
        assert!(get_blacklist().is_none());

        let temp_file = write_tempfile(&["dragon", "letmein"]);
        set_env(PATH_ENV_VAR, temp_file.path().to_str().unwrap());
        let _ = init_blacklist();

        let blacklist = get_blacklist().expect("Should be loaded");
        assert_eq!(blacklist.len(), 2);
        assert!(!blacklist.is_empty());
        assert!(blacklist.contains("LetMeIn"));

        remove_env(PATH_ENV_VAR);
    }

    #[test]
    #[serial]
    fn test_is_common_password_uninitialized() {
        reset_blacklist_for_testing();
        remove_env(PATH_ENV_VAR);

        assert!(!is_common_password("password"));
    }

    #[test]
    fn test_parse_rejects_whitespace_only() {
        assert!(matches!(
            Blacklist::parse("  \n \t \n"),
            Err(BlacklistError::EmptyFile)
        ));
    }
}
