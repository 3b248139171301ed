//! Availability-matching engine for splitting over-enrolled course
//! sections.
//!
//! Given an enrollment roster (CSV) and a catalog of weekly schedule
//! blocks (JSON), the engine computes which blocks are free for which
//! students, ranks candidate blocks by how many of a target section's
//! students could move there without conflicts, and renders a plain-text
//! split proposal.

pub mod catalog;
pub mod display;
pub mod engine;
pub mod error;
pub mod roster;

pub use catalog::{Catalog, TimeSlot};
pub use engine::{CandidateMap, Splitter, Weekday};
pub use error::{SplitError, SplitResult};
pub use roster::{CourseMeeting, Roster};
