use std::collections::{HashMap, HashSet};
use std::io::Read;
use std::path::Path;

use csv::Reader;

use crate::engine::slot_utils::Weekday;
use crate::error::{SplitError, SplitResult};

/// One enrollment row: a student attending one course section's meeting
#[derive(Debug, Clone)]
pub struct CourseMeeting {
    pub student_id: String,
    pub course_code: String,
    pub days: Vec<Weekday>,
    /// Raw normalized time cells; empty when the row has no meeting time
    pub begin_time: String,
    pub end_time: String,
}

/// Normalized enrollment table plus one-pass indexes by student and course.
/// Built once per load and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Roster {
    meetings: Vec<CourseMeeting>,
    by_student: HashMap<String, Vec<usize>>,
    by_course: HashMap<String, Vec<usize>>,
}

/// Collapses internal whitespace and trims, so "DEPT  210   01 " and
/// "DEPT 210 01" compare equal. Missing cells become the empty string.
fn normalize_cell(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

impl Roster {
    /// Loads an enrollment CSV from disk
    pub fn load<P: AsRef<Path>>(path: P) -> SplitResult<Roster> {
        let path = path.as_ref();
        let reader = Reader::from_path(path).map_err(|e| {
            SplitError::Schema(format!("'{}' could not be read: {}", path.display(), e))
        })?;
        let roster = Self::from_csv(reader)?;
        log::info!(
            "loaded roster '{}' with {} enrollment rows",
            path.display(),
            roster.meetings.len()
        );
        Ok(roster)
    }

    /// Parses roster CSV from any reader
    pub fn from_reader<R: Read>(reader: R) -> SplitResult<Roster> {
        Self::from_csv(Reader::from_reader(reader))
    }

    fn from_csv<R: Read>(mut reader: Reader<R>) -> SplitResult<Roster> {
        let headers = reader
            .headers()
            .map_err(|e| SplitError::Schema(format!("could not read header row: {}", e)))?
            .clone();

        let position = |name: &str| headers.iter().position(|h| h.trim() == name);

        // Student identity and course code are required; nothing downstream
        // works without them.
        let id_col = position("id")
            .ok_or_else(|| SplitError::Schema("'id' column not found".to_string()))?;
        let course_col = position("crs_cde")
            .ok_or_else(|| SplitError::Schema("'crs_cde' column not found".to_string()))?;

        // Day-flag and time columns may be absent; absent means empty.
        let day_cols = [
            (position("M"), Weekday::Monday),
            (position("T"), Weekday::Tuesday),
            (position("W"), Weekday::Wednesday),
            (position("R"), Weekday::Thursday),
            (position("F"), Weekday::Friday),
        ];
        let begin_col = position("begin_time");
        let end_col = position("end_time");

        let cell = |record: &csv::StringRecord, col: Option<usize>| -> String {
            normalize_cell(col.and_then(|i| record.get(i)).unwrap_or(""))
        };

        let mut meetings = Vec::new();
        let mut by_student: HashMap<String, Vec<usize>> = HashMap::new();
        let mut by_course: HashMap<String, Vec<usize>> = HashMap::new();

        for result in reader.records() {
            let record =
                result.map_err(|e| SplitError::Schema(format!("malformed CSV row: {}", e)))?;

            let student_id = cell(&record, Some(id_col));
            let course_code = cell(&record, Some(course_col));

            let mut days = Vec::new();
            for (col, day) in day_cols {
                if !cell(&record, col).is_empty() {
                    days.push(day);
                }
            }

            let meeting = CourseMeeting {
                student_id: student_id.clone(),
                course_code: course_code.clone(),
                days,
                begin_time: cell(&record, begin_col),
                end_time: cell(&record, end_col),
            };

            let index = meetings.len();
            meetings.push(meeting);
            by_student.entry(student_id).or_default().push(index);
            by_course.entry(course_code).or_default().push(index);
        }

        if meetings.is_empty() {
            return Err(SplitError::EmptyData);
        }

        Ok(Roster {
            meetings,
            by_student,
            by_course,
        })
    }

    /// Every offered course code, sorted for deterministic display
    pub fn courses_offered(&self) -> Vec<String> {
        let mut courses: Vec<String> = self.by_course.keys().cloned().collect();
        courses.sort();
        courses
    }

    /// Unique student ids enrolled in a section, in first-seen row order
    pub fn students_in_course(&self, course_code: &str) -> SplitResult<Vec<String>> {
        let rows = self.by_course.get(course_code).ok_or_else(|| {
            SplitError::NotFound(format!(
                "no students found in section '{}'",
                course_code
            ))
        })?;

        let mut seen = HashSet::new();
        let mut students = Vec::new();
        for &row in rows {
            let id = &self.meetings[row].student_id;
            if seen.insert(id.clone()) {
                students.push(id.clone());
            }
        }
        Ok(students)
    }

    /// A student's full weekly schedule across all enrolled courses
    pub fn meetings_for_student(&self, student_id: &str) -> Vec<&CourseMeeting> {
        self.by_student
            .get(student_id)
            .map(|rows| rows.iter().map(|&row| &self.meetings[row]).collect())
            .unwrap_or_default()
    }

    /// All enrollment rows for a section, in file order
    pub fn meetings_for_course(&self, course_code: &str) -> Vec<&CourseMeeting> {
        self.by_course
            .get(course_code)
            .map(|rows| rows.iter().map(|&row| &self.meetings[row]).collect())
            .unwrap_or_default()
    }
}
