use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Weekday slots a timesheet can fill, in assignment order.
///
/// Day names are assigned purely by position: the nth deduplicated match in
/// document order becomes the nth weekday. The extractor has no calendar
/// awareness of which day a time block actually belongs to.
pub const WEEKDAYS: [&str; 5] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];

/// Label used when no week-ending date can be detected in the document
pub const CURRENT_WEEK_LABEL: &str = "Current Week";

/// One weekday's shift, as recovered from the document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAssignment {
    /// Weekday name (Monday..Friday)
    pub day: String,
    /// Shift start time, exactly as it appeared in the document
    pub time: String,
    /// Shift-code note, empty when none was found
    pub note: String,
}

/// A single employee's extracted week
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    /// Week-ending label (a date string, or [`CURRENT_WEEK_LABEL`])
    pub week_ending: String,
    /// At most five assignments, ordered Monday..Friday, sparse
    pub days: Vec<DayAssignment>,
}

impl Schedule {
    /// Create an empty schedule for the given week-ending label
    pub fn new(week_ending: String) -> Self {
        Self {
            week_ending,
            days: Vec::new(),
        }
    }
}

/// A schedule as persisted in the store, keyed by `week_ending`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredSchedule {
    #[serde(flatten)]
    pub schedule: Schedule,
    /// Whether the week-ending label classified as the current week at save time
    pub is_current: bool,
    /// When this record was saved
    pub created_at: DateTime<Utc>,
}

impl StoredSchedule {
    pub fn new(schedule: Schedule, is_current: bool) -> Self {
        Self {
            schedule,
            is_current,
            created_at: Utc::now(),
        }
    }

    /// Store key for this record
    pub fn week_ending(&self) -> &str {
        &self.schedule.week_ending
    }
}
