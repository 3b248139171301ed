use std::collections::{BTreeMap, HashSet};

use crate::catalog::Catalog;
use crate::error::{SplitError, SplitResult};
use crate::roster::{CourseMeeting, Roster};

use super::slot_utils::meeting_overlaps_slot;

/// Ranked candidate slots: (slot label, eligible student ids), ordered by
/// descending eligible count with ties broken by ascending label. A Vec of
/// pairs rather than a map so the ranked order is the iteration order.
pub type CandidateMap = Vec<(String, Vec<String>)>;

/// Catalog slots overlapped by any of the given meetings, deduplicated
/// and sorted by label
pub fn busy_slots(meetings: &[&CourseMeeting], catalog: &Catalog) -> SplitResult<Vec<String>> {
    let mut busy = HashSet::new();
    for meeting in meetings {
        for block in catalog.blocks() {
            if meeting_overlaps_slot(meeting, block)? {
                busy.insert(block.label.clone());
            }
        }
    }
    let mut labels: Vec<String> = busy.into_iter().collect();
    labels.sort();
    Ok(labels)
}

/// The complement of `busy_slots` within the catalog, in canonical order
pub fn free_slots(meetings: &[&CourseMeeting], catalog: &Catalog) -> SplitResult<Vec<String>> {
    let busy = busy_slots(meetings, catalog)?;
    Ok(catalog
        .all_slots()
        .into_iter()
        .filter(|label| !busy.contains(label))
        .collect())
}

/// Ranks every catalog slot by how many of the section's students could
/// move there without a conflict anywhere in their weekly schedule.
pub fn rank_candidate_slots(
    roster: &Roster,
    catalog: &Catalog,
    course_code: &str,
) -> SplitResult<CandidateMap> {
    let students = roster.students_in_course(course_code)?;
    log::info!(
        "ranking candidate slots for '{}' ({} students)",
        course_code,
        students.len()
    );

    // Invert per-student free sets into slot -> eligible students. The
    // BTreeMap keys give ascending label order before the count sort.
    let mut eligible: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for student in &students {
        let meetings = roster.meetings_for_student(student);
        for label in free_slots(&meetings, catalog)? {
            eligible.entry(label).or_default().push(student.clone());
        }
    }

    if eligible.is_empty() {
        return Err(SplitError::NoCandidates(course_code.to_string()));
    }

    let mut ranked: CandidateMap = eligible.into_iter().collect();
    ranked.sort_by(|a, b| b.1.len().cmp(&a.1.len()).then_with(|| a.0.cmp(&b.0)));
    Ok(ranked)
}

/// Filters the ranking down to slots with at least `min_students` eligible
/// students. Callers must validate `min_students >= 1` before calling.
pub fn propose_sections(
    roster: &Roster,
    catalog: &Catalog,
    course_code: &str,
    min_students: usize,
) -> SplitResult<CandidateMap> {
    debug_assert!(min_students >= 1, "min_students must be positive");

    let ranked = rank_candidate_slots(roster, catalog, course_code)?;
    let suggested: CandidateMap = ranked
        .into_iter()
        .filter(|(_, students)| students.len() >= min_students)
        .collect();

    if suggested.is_empty() {
        return Err(SplitError::ThresholdNotMet { min_students });
    }
    Ok(suggested)
}

/// The first catalog block (file order) overlapping the section's meeting
/// pattern, taken from the course's first roster row
pub fn current_slot(
    roster: &Roster,
    catalog: &Catalog,
    course_code: &str,
) -> SplitResult<String> {
    let meetings = roster.meetings_for_course(course_code);
    let first = meetings.first().ok_or_else(|| {
        SplitError::NotFound(format!("no rows found for course '{}'", course_code))
    })?;

    for block in catalog.blocks() {
        if meeting_overlaps_slot(first, block)? {
            return Ok(block.label.clone());
        }
    }
    Err(SplitError::NotFound(format!(
        "no overlapping slot found for course '{}'",
        course_code
    )))
}
