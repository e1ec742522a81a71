//! Platform-specific filesystem path helpers.

use std::ffi::OsString;
use std::path::PathBuf;

/// Environment variable that points at an explicit settings file.
pub const SETTINGS_ENV: &str = "BYTTBRANCH_CONFIG";

/// Path to the debug log file.
///
/// This is located in the OS temp directory.
#[must_use]
pub fn log_path() -> PathBuf {
    std::env::temp_dir().join("byttbranch.log")
}

#[must_use]
#[cfg(windows)]
fn config_dir_from(var_os: &mut impl FnMut(&'static str) -> Option<OsString>) -> Option<PathBuf> {
    var_os("APPDATA").map(PathBuf::from)
}

#[must_use]
#[cfg(not(windows))]
fn config_dir_from(var_os: &mut impl FnMut(&'static str) -> Option<OsString>) -> Option<PathBuf> {
    var_os("XDG_CONFIG_HOME").map(PathBuf::from).or_else(|| {
        var_os("HOME").map(|home| {
            #[cfg(target_os = "macos")]
            {
                PathBuf::from(home).join("Library").join("Application Support")
            }

            #[cfg(not(target_os = "macos"))]
            {
                PathBuf::from(home).join(".config")
            }
        })
    })
}

#[must_use]
fn settings_path_from(var_os: &mut impl FnMut(&'static str) -> Option<OsString>) -> Option<PathBuf> {
    if let Some(explicit) = var_os(SETTINGS_ENV).filter(|value| !value.is_empty()) {
        return Some(PathBuf::from(explicit));
    }
    config_dir_from(var_os).map(|dir| dir.join("byttbranch").join("config.json"))
}

/// Resolve the settings file location.
///
/// `BYTTBRANCH_CONFIG` wins when set, otherwise the file lives in the
/// platform config directory. Returns `None` when neither can be determined.
#[must_use]
pub fn settings_path() -> Option<PathBuf> {
    let mut var_os = |key: &'static str| std::env::var_os(key);
    settings_path_from(&mut var_os)
}
