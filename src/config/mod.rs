//! Configuration for a branch switch run

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::WorkflowError;

/// Default name of the integration branch
pub const DEFAULT_MAIN_BRANCH: &str = "main";

/// How much output a run produces on the terminal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    /// Print nothing but errors
    Quiet,
    /// Print step messages and echo git command lines
    #[default]
    Normal,
    /// Additionally forward the output of every git command
    Verbose,
}

impl Verbosity {
    /// Whether step messages are printed
    #[must_use]
    pub const fn shows_progress(self) -> bool {
        !matches!(self, Self::Quiet)
    }

    /// Whether each git command line is echoed before it runs
    #[must_use]
    pub const fn echoes_commands(self) -> bool {
        !matches!(self, Self::Quiet)
    }

    /// Whether captured command output is forwarded to the terminal
    #[must_use]
    pub const fn forwards_output(self) -> bool {
        matches!(self, Self::Verbose)
    }
}

/// Immutable configuration for one run.
///
/// Built once at startup and shared by reference with the command runner
/// and the orchestrator; nothing re-reads it mid-run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Working directory of the repository
    pub directory: PathBuf,
    /// Branch new branches are created from
    pub main_branch: String,
    /// Terminal output level
    pub verbosity: Verbosity,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            main_branch: DEFAULT_MAIN_BRANCH.to_string(),
            verbosity: Verbosity::default(),
        }
    }
}

impl Config {
    /// Build a configuration by layering command-line overrides over settings
    #[must_use]
    pub fn resolve(
        directory: PathBuf,
        settings: &Settings,
        main_branch: Option<String>,
        verbosity: Option<Verbosity>,
    ) -> Self {
        Self {
            directory,
            main_branch: main_branch
                .or_else(|| settings.main_branch.clone())
                .unwrap_or_else(|| DEFAULT_MAIN_BRANCH.to_string()),
            verbosity: verbosity.or(settings.verbosity).unwrap_or_default(),
        }
    }

    /// Check preconditions that must hold before any git command runs
    ///
    /// # Errors
    ///
    /// Returns an error if the main branch name is blank or the directory is
    /// not inside a git repository
    pub fn validate(&self) -> Result<(), WorkflowError> {
        if self.main_branch.trim().is_empty() {
            return Err(WorkflowError::InvalidBranchName {
                name: self.main_branch.clone(),
            });
        }
        if !crate::git::is_git_repository(&self.directory) {
            return Err(WorkflowError::NotARepository {
                path: self.directory.clone(),
            });
        }
        Ok(())
    }
}

/// Persistent defaults read from the settings file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Main branch name used when `--main-branch` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_branch: Option<String>,

    /// Verbosity used when neither `--verbose` nor `--quiet` is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verbosity: Option<Verbosity>,
}

impl Settings {
    /// Load settings from the default location
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed
    pub fn load() -> Result<Self> {
        match crate::paths::settings_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load settings from a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse settings from {}", path.display()))
    }
}
