//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the timesheet
//! policy from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::ConfigError;

use super::types::{
    DocumentLayout, PolicyConfig, PolicyFile, StaffCategory, Standards, parse_hhmm,
};

/// Loads and provides access to the timesheet policy.
///
/// # File Format
///
/// ```text
/// standards:
///   male: "09:10"
///   female: "08:25"
///   saturday: "07:10"
/// layout:              # optional, defaults shown
///   year: 2025
///   lookahead_lines: 10
///   absence_window_chars: 50
///   absence_marker: "AB"
/// summary:             # optional
///   work_nature: "CoE Work"
/// ```
///
/// # Example
///
/// ```no_run
/// use timesheet_engine::config::{ConfigLoader, StaffCategory};
///
/// let loader = ConfigLoader::load("./config/policy.yaml")?;
/// let policy = loader.policy(StaffCategory::Male);
/// println!("Weekday standard: {} minutes", policy.standard_weekday().num_minutes());
/// # Ok::<(), timesheet_engine::error::ConfigError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLoader {
    standards: Standards,
    layout: DocumentLayout,
    work_nature: String,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self {
            standards: Standards::default(),
            layout: DocumentLayout::default(),
            work_nature: super::types::DEFAULT_WORK_NATURE.to_string(),
        }
    }
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// Returns an error if the file is missing, is not valid YAML, carries a
    /// standard duration not written as `HH:MM`, or describes an unusable
    /// layout.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| ConfigError::NotFound {
            path: path_str.clone(),
        })?;

        let loader = Self::from_yaml(&content, &path_str)?;
        debug!(path = %path_str, year = loader.layout.year, "Loaded timesheet policy");
        Ok(loader)
    }

    /// Parses configuration from YAML text.
    ///
    /// `origin` names the source in error messages.
    pub fn from_yaml(content: &str, origin: &str) -> Result<Self, ConfigError> {
        let file: PolicyFile =
            serde_yaml::from_str(content).map_err(|e| ConfigError::Parse {
                path: origin.to_string(),
                message: e.to_string(),
            })?;

        let standards = Standards {
            male_weekday: parse_hhmm(&file.standards.male)?,
            female_weekday: parse_hhmm(&file.standards.female)?,
            saturday: parse_hhmm(&file.standards.saturday)?,
        };
        file.layout.validate()?;

        Ok(Self {
            standards,
            layout: file.layout,
            work_nature: file.summary.work_nature,
        })
    }

    /// Returns the policy for a staff category.
    pub fn policy(&self, category: StaffCategory) -> PolicyConfig {
        self.standards.policy(category)
    }

    /// Returns all configured standard durations.
    pub fn standards(&self) -> &Standards {
        &self.standards
    }

    /// Returns the document layout.
    pub fn layout(&self) -> &DocumentLayout {
        &self.layout
    }

    /// Returns the work nature shown on summary rows.
    pub fn work_nature(&self) -> &str {
        &self.work_nature
    }
}
