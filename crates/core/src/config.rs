//! Core runtime configuration.
//!
//! This module defines configuration that should be resolved once at process startup and then
//! passed into core services. Environment variables are read by the binary, never during an
//! operation, so the store and the session behave the same in tests and at runtime.

use crate::constants::DEFAULT_GRADEBOOK_FILENAME;
use crate::{CasebookError, CasebookResult};
use std::path::{Path, PathBuf};

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    gradebook_path: PathBuf,
    symptom_log_enabled: bool,
    restrict_to_known_symptoms: bool,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// # Errors
    ///
    /// Returns `CasebookError::InvalidInput` if `gradebook_path` is empty.
    pub fn new(
        gradebook_path: PathBuf,
        symptom_log_enabled: bool,
        restrict_to_known_symptoms: bool,
    ) -> CasebookResult<Self> {
        if gradebook_path.as_os_str().is_empty() {
            return Err(CasebookError::InvalidInput(
                "gradebook path cannot be empty".into(),
            ));
        }

        Ok(Self {
            gradebook_path,
            symptom_log_enabled,
            restrict_to_known_symptoms,
        })
    }

    pub fn gradebook_path(&self) -> &Path {
        &self.gradebook_path
    }

    pub fn symptom_log_enabled(&self) -> bool {
        self.symptom_log_enabled
    }

    pub fn restrict_to_known_symptoms(&self) -> bool {
        self.restrict_to_known_symptoms
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            gradebook_path: PathBuf::from(DEFAULT_GRADEBOOK_FILENAME),
            symptom_log_enabled: true,
            restrict_to_known_symptoms: false,
        }
    }
}

/// Resolve the gradebook path from an optional raw environment value.
///
/// If `value` is `None` or empty/whitespace, returns the default `students.json` in the
/// current directory.
pub fn gradebook_path_from_env_value(value: Option<String>) -> PathBuf {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_GRADEBOOK_FILENAME))
}
