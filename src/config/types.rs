//! Configuration types for timesheet interpretation.
//!
//! This module contains the policy selected by the caller (standard daily
//! durations) and the layout assumptions made about the exported timesheet
//! text, along with the structures deserialized from the YAML policy file.

use std::fmt;
use std::str::FromStr;

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Number of lines, starting at the date line, searched for a day's details.
pub const DEFAULT_LOOKAHEAD_LINES: usize = 10;

/// Number of leading context characters searched for the absence marker.
pub const DEFAULT_ABSENCE_WINDOW_CHARS: usize = 50;

/// Marker printed by the timesheet export on absent days.
pub const DEFAULT_ABSENCE_MARKER: &str = "AB";

/// Year that date tokens are constrained to.
pub const DEFAULT_DOCUMENT_YEAR: i32 = 2025;

/// Work nature shown on every summary row.
pub const DEFAULT_WORK_NATURE: &str = "CoE Work";

/// The classification that selects the standard weekday duration.
///
/// Exactly two options are recognized; the policy is selected, never computed.
///
/// # Example
///
/// ```
/// use timesheet_engine::config::StaffCategory;
///
/// let category: StaffCategory = "Female".parse().unwrap();
/// assert_eq!(category, StaffCategory::Female);
/// assert!("Other".parse::<StaffCategory>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaffCategory {
    /// Standard weekday of 9h10m.
    Male,
    /// Standard weekday of 8h25m.
    Female,
}

impl fmt::Display for StaffCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StaffCategory::Male => write!(f, "Male"),
            StaffCategory::Female => write!(f, "Female"),
        }
    }
}

impl FromStr for StaffCategory {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" => Ok(StaffCategory::Male),
            "female" => Ok(StaffCategory::Female),
            _ => Err(ConfigError::UnknownCategory {
                value: s.to_string(),
            }),
        }
    }
}

/// Standard working durations used to decide when time counts as extra.
///
/// Immutable once constructed. Saturdays are measured against
/// `standard_saturday`; every other day against `standard_weekday`.
///
/// # Example
///
/// ```
/// use timesheet_engine::config::{PolicyConfig, StaffCategory};
/// use chrono::Duration;
///
/// let policy = PolicyConfig::for_category(StaffCategory::Male);
/// assert_eq!(policy.standard_weekday(), Duration::minutes(9 * 60 + 10));
/// assert_eq!(policy.standard_saturday(), Duration::minutes(7 * 60 + 10));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolicyConfig {
    standard_weekday: Duration,
    standard_saturday: Duration,
}

impl PolicyConfig {
    /// Creates a policy from explicit standard durations.
    pub fn new(standard_weekday: Duration, standard_saturday: Duration) -> Self {
        Self {
            standard_weekday,
            standard_saturday,
        }
    }

    /// Returns the built-in policy for a staff category.
    pub fn for_category(category: StaffCategory) -> Self {
        Standards::default().policy(category)
    }

    /// The standard duration for Monday to Friday and Sunday.
    pub fn standard_weekday(&self) -> Duration {
        self.standard_weekday
    }

    /// The standard duration for Saturday.
    pub fn standard_saturday(&self) -> Duration {
        self.standard_saturday
    }
}

/// The full set of standard durations a policy can be selected from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Standards {
    /// Weekday standard for [`StaffCategory::Male`].
    pub male_weekday: Duration,
    /// Weekday standard for [`StaffCategory::Female`].
    pub female_weekday: Duration,
    /// Saturday standard shared by both categories.
    pub saturday: Duration,
}

impl Default for Standards {
    fn default() -> Self {
        Self {
            male_weekday: Duration::minutes(9 * 60 + 10),
            female_weekday: Duration::minutes(8 * 60 + 25),
            saturday: Duration::minutes(7 * 60 + 10),
        }
    }
}

impl Standards {
    /// Selects the policy for a staff category.
    pub fn policy(&self, category: StaffCategory) -> PolicyConfig {
        let weekday = match category {
            StaffCategory::Male => self.male_weekday,
            StaffCategory::Female => self.female_weekday,
        };
        PolicyConfig::new(weekday, self.saturday)
    }
}

/// Layout assumptions about the exported timesheet text.
///
/// Each value encodes how the source document prints a day: the date on one
/// line, the weekday, in/out times and absence marker within the following
/// lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentLayout {
    /// The year date tokens must carry to be recognized.
    pub year: i32,
    /// Lines (including the date line) joined into a day's context.
    pub lookahead_lines: usize,
    /// Leading characters of the context searched for the absence marker.
    pub absence_window_chars: usize,
    /// The literal text marking an absent day.
    pub absence_marker: String,
}

impl Default for DocumentLayout {
    fn default() -> Self {
        Self {
            year: DEFAULT_DOCUMENT_YEAR,
            lookahead_lines: DEFAULT_LOOKAHEAD_LINES,
            absence_window_chars: DEFAULT_ABSENCE_WINDOW_CHARS,
            absence_marker: DEFAULT_ABSENCE_MARKER.to_string(),
        }
    }
}

impl DocumentLayout {
    /// Rejects layouts that could never match a day.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lookahead_lines == 0 {
            return Err(ConfigError::InvalidLayout {
                message: "lookahead_lines must be at least 1".to_string(),
            });
        }
        if self.absence_window_chars == 0 {
            return Err(ConfigError::InvalidLayout {
                message: "absence_window_chars must be at least 1".to_string(),
            });
        }
        if self.absence_marker.is_empty() {
            return Err(ConfigError::InvalidLayout {
                message: "absence_marker must not be empty".to_string(),
            });
        }
        if !(1000..=9999).contains(&self.year) {
            return Err(ConfigError::InvalidLayout {
                message: format!("year {} is not a four-digit year", self.year),
            });
        }
        Ok(())
    }
}

/// Standard durations as written in the policy file.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct StandardsSection {
    /// Male weekday standard as `HH:MM`.
    pub(crate) male: String,
    /// Female weekday standard as `HH:MM`.
    pub(crate) female: String,
    /// Saturday standard as `HH:MM`.
    pub(crate) saturday: String,
}

/// Summary presentation settings from the policy file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub(crate) struct SummarySection {
    /// The work nature shown on summary rows.
    pub(crate) work_nature: String,
}

impl Default for SummarySection {
    fn default() -> Self {
        Self {
            work_nature: DEFAULT_WORK_NATURE.to_string(),
        }
    }
}

/// Policy file structure (`policy.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct PolicyFile {
    /// Standard durations.
    pub(crate) standards: StandardsSection,
    /// Document layout; defaults apply to omitted keys.
    #[serde(default)]
    pub(crate) layout: DocumentLayout,
    /// Summary settings.
    #[serde(default)]
    pub(crate) summary: SummarySection,
}

/// Parses an `HH:MM` duration such as `"09:10"`.
///
/// Hours are not capped at 24; minutes must be below 60.
///
/// # Example
///
/// ```
/// use timesheet_engine::config::parse_hhmm;
/// use chrono::Duration;
///
/// assert_eq!(parse_hhmm("08:25").unwrap(), Duration::minutes(505));
/// assert!(parse_hhmm("8h25").is_err());
/// ```
pub fn parse_hhmm(value: &str) -> Result<Duration, ConfigError> {
    let invalid = || ConfigError::InvalidDuration {
        value: value.to_string(),
    };

    let (hours, minutes) = value.trim().split_once(':').ok_or_else(invalid)?;
    if hours.is_empty() || minutes.len() != 2 {
        return Err(invalid());
    }
    let hours: i64 = hours.parse().map_err(|_| invalid())?;
    let minutes: i64 = minutes.parse().map_err(|_| invalid())?;
    if hours < 0 || !(0..60).contains(&minutes) {
        return Err(invalid());
    }

    hours
        .checked_mul(60)
        .and_then(|m| m.checked_add(minutes))
        .and_then(Duration::try_minutes)
        .ok_or_else(invalid)
}
