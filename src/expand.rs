//! Seed a table with an empty record for every character code point.

use crate::config::RangeConfig;
use crate::table::RawTable;
use crate::trace::{debug, info};

/// Insert `""` for every character in `ranges` that has no record yet,
/// then sort the whole table by code point. Returns the number of records
/// added. Existing values are left alone.
pub fn expand(table: &mut RawTable, ranges: &RangeConfig) -> usize {
    let mut added = 0;
    for range in &ranges.character_ranges {
        let before = added;
        for ch in range.chars() {
            if !table.contains_key(ch) {
                table.insert(ch, String::new());
                added += 1;
            }
        }
        debug!(range = %range, added = added - before, "seeded range");
    }
    table.sort_by_code_point();
    info!(added, total = table.len(), "expanded table");
    added
}
