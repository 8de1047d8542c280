//! Yulduz timetable data-access crate.
//!
//! This crate contains the read path shared by the Yulduz web components:
//! the `TimetableEntry` record (`entry`), the database connection settings
//! (`config`), and the single filtered fetch against the `Timetable` table
//! (`fetch`). These modules are intentionally minimal and focus on the
//! timetable read path rather than being a general-purpose database layer.
//!
/// Timetable record type
pub mod entry;
/// Database connection settings
pub mod config;
/// Filtered timetable fetch
pub mod fetch;

#[cfg(test)]
mod tests {
    use crate::config::DbConfig;

    /// Defaults apply when no environment overrides are present
    #[test]
    fn config_defaults() {
        let config = DbConfig::from_lookup(|_| None);
        assert_eq!(config.host, "db");
        assert_eq!(config.port, 5432);
        assert_eq!(config.dbname, "Yulduz");
        assert_eq!(config.user, "student");
        assert_eq!(config.password, "student_pass");
    }

    /// Overridden variables win, untouched ones keep their defaults
    #[test]
    fn config_overrides() {
        let config = DbConfig::from_lookup(|name| match name {
            "DB_HOST" => Some("localhost".into()),
            "DB_NAME" => Some("campus".into()),
            _ => None,
        });
        assert_eq!(config.host, "localhost");
        assert_eq!(config.dbname, "campus");
        assert_eq!(config.user, "student");
        assert_eq!(config.password, "student_pass");
    }
}
