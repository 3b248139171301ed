use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveTime;
use serde::Deserialize;

use crate::engine::slot_utils::{parse_time, Weekday};
use crate::error::{SplitError, SplitResult};

/// One weekly recurring block from the institution's master schedule
#[derive(Debug, Clone)]
pub struct TimeSlot {
    pub label: String,
    pub days: Vec<Weekday>,
    pub start: NaiveTime,
    pub end: NaiveTime,
    /// Raw time strings kept verbatim for display
    pub start_time: String,
    pub end_time: String,
}

/// On-disk shape of a catalog file: a top-level "blocks" array
#[derive(Debug, Deserialize)]
struct RawCatalog {
    blocks: Vec<RawBlock>,
}

#[derive(Debug, Deserialize)]
struct RawBlock {
    slot: String,
    days: Vec<String>,
    start_time: String,
    end_time: String,
}

/// The fixed set of schedule blocks, loaded once and read-only afterwards.
/// Blocks keep their file order (used when scanning for a course's current
/// slot); `all_slots` gives the canonical sorted label order used for every
/// deterministic tie-break.
#[derive(Debug, Clone)]
pub struct Catalog {
    blocks: Vec<TimeSlot>,
}

impl Catalog {
    /// Loads a catalog from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> SplitResult<Catalog> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            SplitError::CatalogFormat(format!("'{}' could not be opened: {}", path.display(), e))
        })?;
        let catalog = Self::from_reader(file)?;
        log::info!(
            "loaded schedule catalog '{}' with {} blocks",
            path.display(),
            catalog.blocks.len()
        );
        Ok(catalog)
    }

    /// Parses and validates catalog JSON from any reader
    pub fn from_reader<R: Read>(reader: R) -> SplitResult<Catalog> {
        let raw: RawCatalog = serde_json::from_reader(reader)
            .map_err(|e| SplitError::CatalogFormat(format!("invalid catalog JSON: {}", e)))?;

        let mut seen = HashSet::new();
        let mut blocks = Vec::with_capacity(raw.blocks.len());
        for block in raw.blocks {
            if !seen.insert(block.slot.clone()) {
                return Err(SplitError::CatalogFormat(format!(
                    "duplicate slot label '{}'",
                    block.slot
                )));
            }
            if block.days.is_empty() {
                return Err(SplitError::CatalogFormat(format!(
                    "slot '{}' has no days",
                    block.slot
                )));
            }
            let mut days = Vec::with_capacity(block.days.len());
            for name in &block.days {
                let day = Weekday::from_name(name).ok_or_else(|| {
                    SplitError::CatalogFormat(format!(
                        "slot '{}' has unsupported day '{}'",
                        block.slot, name
                    ))
                })?;
                days.push(day);
            }
            let start = parse_time(&block.start_time).map_err(|e| {
                SplitError::CatalogFormat(format!("slot '{}': {}", block.slot, e))
            })?;
            let end = parse_time(&block.end_time).map_err(|e| {
                SplitError::CatalogFormat(format!("slot '{}': {}", block.slot, e))
            })?;
            if start > end {
                return Err(SplitError::CatalogFormat(format!(
                    "slot '{}' starts after it ends",
                    block.slot
                )));
            }
            blocks.push(TimeSlot {
                label: block.slot,
                days,
                start,
                end,
                start_time: block.start_time,
                end_time: block.end_time,
            });
        }

        Ok(Catalog { blocks })
    }

    /// All blocks in file order
    pub fn blocks(&self) -> &[TimeSlot] {
        &self.blocks
    }

    /// Every slot label, sorted ascending - the canonical ordering
    pub fn all_slots(&self) -> Vec<String> {
        let mut labels: Vec<String> = self.blocks.iter().map(|b| b.label.clone()).collect();
        labels.sort();
        labels
    }

    /// Looks up a block by its slot label
    pub fn get(&self, label: &str) -> Option<&TimeSlot> {
        self.blocks.iter().find(|b| b.label == label)
    }
}
