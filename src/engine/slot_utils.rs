use chrono::NaiveTime;

use crate::catalog::TimeSlot;
use crate::error::{SplitError, SplitResult};
use crate::roster::CourseMeeting;

/// Weekdays the master schedule supports (no weekend slots)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    /// Parses a full weekday name (e.g. "Monday") as used in catalog files
    pub fn from_name(name: &str) -> Option<Weekday> {
        match name {
            "Monday" => Some(Weekday::Monday),
            "Tuesday" => Some(Weekday::Tuesday),
            "Wednesday" => Some(Weekday::Wednesday),
            "Thursday" => Some(Weekday::Thursday),
            "Friday" => Some(Weekday::Friday),
            _ => None,
        }
    }

    /// Single-letter abbreviation used in roster day-flag columns and
    /// display strings. Thursday is "R" so it doesn't collide with Tuesday.
    pub fn abbrev(self) -> char {
        match self {
            Weekday::Monday => 'M',
            Weekday::Tuesday => 'T',
            Weekday::Wednesday => 'W',
            Weekday::Thursday => 'R',
            Weekday::Friday => 'F',
        }
    }
}

/// Parses a wall-clock time string in HH:MM:SS or HH:MM format
pub fn parse_time(text: &str) -> SplitResult<NaiveTime> {
    NaiveTime::parse_from_str(text, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(text, "%H:%M"))
        .map_err(|_| SplitError::TimeFormat(text.to_string()))
}

/// Checks whether a course meeting conflicts with a schedule slot.
///
/// A meeting with no shared weekday never conflicts. A meeting whose
/// begin or end time cell is empty is silently skipped (never busy).
/// A malformed non-empty time aborts with `TimeFormat` - every meeting
/// must be accounted for before availability can be trusted.
pub fn meeting_overlaps_slot(meeting: &CourseMeeting, slot: &TimeSlot) -> SplitResult<bool> {
    if !meeting.days.iter().any(|day| slot.days.contains(day)) {
        return Ok(false);
    }

    if meeting.begin_time.is_empty() || meeting.end_time.is_empty() {
        return Ok(false);
    }

    let meeting_start = parse_time(&meeting.begin_time)?;
    let meeting_end = parse_time(&meeting.end_time)?;

    // Inclusive on both ends: a meeting ending exactly when a slot
    // starts still counts as a conflict.
    Ok(meeting_start <= slot.end && meeting_end >= slot.start)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(label: &str, days: Vec<Weekday>, start: &str, end: &str) -> TimeSlot {
        TimeSlot {
            label: label.to_string(),
            days,
            start: parse_time(start).unwrap(),
            end: parse_time(end).unwrap(),
            start_time: start.to_string(),
            end_time: end.to_string(),
        }
    }

    fn meeting(days: Vec<Weekday>, begin: &str, end: &str) -> CourseMeeting {
        CourseMeeting {
            student_id: "S1".to_string(),
            course_code: "DEPT 210 01".to_string(),
            days,
            begin_time: begin.to_string(),
            end_time: end.to_string(),
        }
    }

    #[test]
    fn parse_time_with_and_without_seconds_agree() {
        assert_eq!(parse_time("09:00").unwrap(), parse_time("09:00:00").unwrap());
        assert_eq!(parse_time("14:35").unwrap(), parse_time("14:35:00").unwrap());
    }

    #[test]
    fn parse_time_rejects_non_time_strings() {
        for bad in ["9am", "", "25:00", "09-00", "noon"] {
            match parse_time(bad) {
                Err(SplitError::TimeFormat(text)) => assert_eq!(text, bad),
                other => panic!("expected TimeFormat for {:?}, got {:?}", bad, other),
            }
        }
    }

    #[test]
    fn boundary_touch_counts_as_conflict() {
        let s = slot("A1", vec![Weekday::Monday], "10:00", "10:50");
        let m = meeting(vec![Weekday::Monday], "09:00", "10:00");
        assert!(meeting_overlaps_slot(&m, &s).unwrap());

        // And the mirror case: meeting starting when the slot ends
        let m = meeting(vec![Weekday::Monday], "10:50", "11:40");
        assert!(meeting_overlaps_slot(&m, &s).unwrap());
    }

    #[test]
    fn disjoint_days_never_conflict() {
        let s = slot("A1", vec![Weekday::Tuesday, Weekday::Thursday], "09:00", "09:50");
        let m = meeting(vec![Weekday::Monday, Weekday::Wednesday], "09:00", "09:50");
        assert!(!meeting_overlaps_slot(&m, &s).unwrap());
    }

    #[test]
    fn missing_times_are_skipped_not_errors() {
        let s = slot("A1", vec![Weekday::Monday], "09:00", "09:50");
        let m = meeting(vec![Weekday::Monday], "", "");
        assert!(!meeting_overlaps_slot(&m, &s).unwrap());
        let m = meeting(vec![Weekday::Monday], "09:00", "");
        assert!(!meeting_overlaps_slot(&m, &s).unwrap());
    }

    #[test]
    fn malformed_time_on_shared_day_is_an_error() {
        let s = slot("A1", vec![Weekday::Monday], "09:00", "09:50");
        let m = meeting(vec![Weekday::Monday], "9am", "09:50");
        assert!(matches!(
            meeting_overlaps_slot(&m, &s),
            Err(SplitError::TimeFormat(_))
        ));
    }

    #[test]
    fn non_touching_intervals_do_not_conflict() {
        let s = slot("A1", vec![Weekday::Monday], "10:00", "10:50");
        let m = meeting(vec![Weekday::Monday], "08:00", "09:59");
        assert!(!meeting_overlaps_slot(&m, &s).unwrap());
    }
}
