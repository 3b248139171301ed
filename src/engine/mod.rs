pub mod availability;
pub mod planner;
pub mod slot_utils;

use std::path::Path;

use crate::catalog::Catalog;
use crate::display::slot_display_info;
use crate::error::SplitResult;
use crate::roster::Roster;

pub use availability::{
    busy_slots, current_slot, free_slots, propose_sections, rank_candidate_slots, CandidateMap,
};
pub use planner::{partition_section, render_proposal, select_shift};
pub use slot_utils::{meeting_overlaps_slot, parse_time, Weekday};

/// A loaded roster/catalog pair. Both are read fully up front and never
/// mutated afterwards; every method recomputes its answer from scratch, so
/// identical inputs always give identical output.
pub struct Splitter {
    roster: Roster,
    catalog: Catalog,
}

impl Splitter {
    /// Loads the enrollment CSV and the schedule-block JSON
    pub fn load<P: AsRef<Path>, Q: AsRef<Path>>(
        roster_path: P,
        catalog_path: Q,
    ) -> SplitResult<Splitter> {
        let roster = Roster::load(roster_path)?;
        let catalog = Catalog::load(catalog_path)?;
        Ok(Splitter { roster, catalog })
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Every offered course code, sorted
    pub fn courses_offered(&self) -> Vec<String> {
        self.roster.courses_offered()
    }

    /// Unique student ids enrolled in a section
    pub fn students_in_course(&self, course_code: &str) -> SplitResult<Vec<String>> {
        self.roster.students_in_course(course_code)
    }

    /// The catalog slot the section currently meets in
    pub fn current_slot(&self, course_code: &str) -> SplitResult<String> {
        current_slot(&self.roster, &self.catalog, course_code)
    }

    /// Ranked candidate slots with at least `min_students` eligible students
    pub fn propose_sections(
        &self,
        course_code: &str,
        min_students: usize,
    ) -> SplitResult<CandidateMap> {
        propose_sections(&self.roster, &self.catalog, course_code, min_students)
    }

    /// Day-abbreviation and time-range strings for a slot label
    pub fn slot_display_info(&self, label: &str) -> SplitResult<(String, String)> {
        slot_display_info(&self.catalog, label)
    }
}
