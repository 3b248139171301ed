use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::catalog::Catalog;
use crate::engine::CandidateMap;
use crate::error::{SplitError, SplitResult};

/// Display strings for a slot: day abbreviations (e.g. "MWF") and the raw
/// time range (e.g. "09:00-09:50")
pub fn slot_display_info(catalog: &Catalog, label: &str) -> SplitResult<(String, String)> {
    let block = catalog
        .get(label)
        .ok_or_else(|| SplitError::NotFound(format!("slot '{}' is not in the catalog", label)))?;
    let days: String = block.days.iter().map(|day| day.abbrev()).collect();
    let time = format!("{}-{}", block.start_time, block.end_time);
    Ok((days, time))
}

/// Prints the ranked candidate table in a readable format
pub fn print_candidates(catalog: &Catalog, candidates: &CandidateMap) {
    println!("\n=== Available Slots ===");
    for (label, students) in candidates {
        match slot_display_info(catalog, label) {
            Ok((days, time)) => println!(
                "  Block {} ({} {}) -> {} students available",
                label,
                days,
                time,
                students.len()
            ),
            Err(_) => println!("  Block {} -> {} students available", label, students.len()),
        }
    }
}

/// Writes a rendered proposal to a file
pub fn write_proposal_to_file<P: AsRef<Path>>(text: &str, path: P) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(text.as_bytes())?;
    Ok(())
}

/// File name for a course's proposal download, spaces replaced so the
/// name is shell-friendly
pub fn proposal_file_name(course_code: &str) -> String {
    format!("{}_split_proposal.txt", course_code.replace(' ', "_"))
}
