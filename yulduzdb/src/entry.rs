//! Timetable record type returned by the fetch operation.
//!
use serde::Serialize;

/// One scheduled course session as stored in the `Timetable` table.
///
/// The level a session belongs to is a filter key, not part of the record;
/// callers that need it already hold the value they queried with.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimetableEntry {
    /// Course identifier, rendered verbatim (the table may store it as
    /// integer or text)
    pub course_id: String,
    /// Display name of the course
    pub course_name: String,
    /// Weekday name
    pub day: String,
    /// Start time display string
    pub time: String,
    /// Room name
    pub room: String,
}
