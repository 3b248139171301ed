use std::collections::HashSet;

use super::availability::CandidateMap;

/// Eligible students for the chosen slot, or an empty list when the slot
/// is not among the candidates. "No movable students" is a reportable
/// outcome, not an error.
pub fn select_shift(candidates: &CandidateMap, slot: &str) -> Vec<String> {
    candidates
        .iter()
        .find(|(label, _)| label == slot)
        .map(|(_, students)| students.clone())
        .unwrap_or_default()
}

/// Splits a section roster into the students staying and the students
/// moving. Remaining keeps the original order; ids in `to_shift` that are
/// not in `original` simply have no effect on the remaining list.
pub fn partition_section(original: &[String], to_shift: &[String]) -> (Vec<String>, Vec<String>) {
    let moving: HashSet<&String> = to_shift.iter().collect();
    let remaining = original
        .iter()
        .filter(|student| !moving.contains(student))
        .cloned()
        .collect();
    (remaining, to_shift.to_vec())
}

/// Renders the downloadable split proposal. Layout is stable for identical
/// inputs so proposals can be compared byte-for-byte.
pub fn render_proposal(
    course_code: &str,
    original_slot: &str,
    new_slot: &str,
    remaining: &[String],
    shifted: &[String],
) -> String {
    let mut text = String::new();
    text.push_str(&format!("Course to Split: {}\n", course_code));
    text.push_str(&format!("Original Course Slot: {}\n", original_slot));
    text.push_str(&format!("New Slot Added: {}\n\n", new_slot));
    text.push_str(&format!(
        "Students in Slot {} ({}):\n",
        original_slot,
        remaining.len()
    ));
    text.push_str(&remaining.join(", "));
    text.push_str("\n\n");
    text.push_str(&format!(
        "Students in Slot {} ({}):\n",
        new_slot,
        shifted.len()
    ));
    text.push_str(&shifted.join(", "));
    text.push('\n');
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn partition_preserves_original_order() {
        let (remaining, shifted) =
            partition_section(&ids(&["A", "B", "C", "D"]), &ids(&["B", "D"]));
        assert_eq!(remaining, ids(&["A", "C"]));
        assert_eq!(shifted, ids(&["B", "D"]));
    }

    #[test]
    fn extraneous_shift_ids_do_not_affect_remaining() {
        let (remaining, shifted) = partition_section(&ids(&["A", "B"]), &ids(&["B", "Z"]));
        assert_eq!(remaining, ids(&["A"]));
        assert_eq!(shifted, ids(&["B", "Z"]));
    }

    #[test]
    fn select_shift_on_absent_slot_is_empty() {
        let candidates: CandidateMap = vec![("S2".to_string(), ids(&["A", "B"]))];
        assert_eq!(select_shift(&candidates, "S2"), ids(&["A", "B"]));
        assert!(select_shift(&candidates, "S9").is_empty());
    }

    #[test]
    fn proposal_layout_is_stable() {
        let text = render_proposal(
            "DEPT 210 01",
            "S1",
            "S2",
            &ids(&["A", "C"]),
            &ids(&["B", "D"]),
        );
        let expected = "\
Course to Split: DEPT 210 01
Original Course Slot: S1
New Slot Added: S2

Students in Slot S1 (2):
A, C

Students in Slot S2 (2):
B, D
";
        assert_eq!(text, expected);
    }
}
