/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Timestamp formats and notification message texts.

use chrono::{DateTime, Local, NaiveDateTime, SecondsFormat, Utc};

use super::consts::*;

/// ISO-8601 with millisecond precision and a `Z` suffix. Due dates are
/// compared against this as plain strings.
pub fn iso_timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn iso_now() -> String {
    iso_timestamp(Utc::now())
}

/// Short en-US form used inside messages, e.g. `Oct 19, 02:05 PM`.
pub fn display_date(at: NaiveDateTime) -> String {
    at.format("%b %-d, %I:%M %p").to_string()
}

pub fn display_now() -> String {
    display_date(Local::now().naive_local())
}

pub fn overdue(key: &str, title: &str) -> String {
    format!("Task {}: \"{}\" is overdue", key, title)
}

pub fn work_added(project: &str, key: &str, title: &str, reporter: Option<&str>, date: &str) -> String {
    format!(
        "Project '{}': New work ({}) '{}' added by {} on {}",
        project,
        key,
        title,
        reporter.unwrap_or(UNKNOWN_ACTOR),
        date
    )
}

pub fn work_completed(project: &str, title: &str, modified_by: Option<&str>, date: &str) -> String {
    format!(
        "Project '{}': Work '{}' is completed by {} on {}",
        project,
        title,
        modified_by.unwrap_or(UNKNOWN_ACTOR),
        date
    )
}

pub fn assignment(
    project: &str,
    title: &str,
    assignee: &str,
    modified_by: Option<&str>,
    date: &str,
) -> String {
    format!(
        "Project '{}': Task '{}' has been assigned to {} by {} on {}",
        project,
        title,
        assignee,
        modified_by.unwrap_or(SYSTEM_ACTOR),
        date
    )
}

pub fn work_deleted(project: &str, title: &str, deleted_by: Option<&str>, date: &str) -> String {
    format!(
        "Project '{}': Work '{}' deleted by {} on {}",
        project,
        title,
        deleted_by.unwrap_or(UNKNOWN_ACTOR),
        date
    )
}

pub fn project_created(name: &str, created_by: &str, date: &str) -> String {
    format!("New project '{}' created by {} on {}", name, created_by, date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    #[test]
    fn test_iso_timestamp() {
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 8, 5, 3).unwrap();
        assert_eq!(iso_timestamp(now), "2026-10-19T08:05:03.000Z");
    }

    #[test]
    fn test_display_date() {
        let afternoon = NaiveDate::from_ymd_opt(2026, 10, 9)
            .unwrap()
            .and_hms_opt(14, 5, 0)
            .unwrap();
        assert_eq!(display_date(afternoon), "Oct 9, 02:05 PM");

        let midnight = NaiveDate::from_ymd_opt(2026, 1, 31)
            .unwrap()
            .and_hms_opt(0, 30, 0)
            .unwrap();
        assert_eq!(display_date(midnight), "Jan 31, 12:30 AM");
    }

    #[test]
    fn test_message_defaults() {
        assert_eq!(
            work_completed("Kanban", "Login page", None, "Oct 9, 02:05 PM"),
            "Project 'Kanban': Work 'Login page' is completed by Unknown on Oct 9, 02:05 PM"
        );
        assert_eq!(
            assignment("Kanban", "Login page", "Alice", None, "Oct 9, 02:05 PM"),
            "Project 'Kanban': Task 'Login page' has been assigned to Alice by System on Oct 9, 02:05 PM"
        );
        assert_eq!(overdue("KAN-3", "Setup"), "Task KAN-3: \"Setup\" is overdue");
    }
}
