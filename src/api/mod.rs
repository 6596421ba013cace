//! Whole-file operations used by the command line.
//!
//! Each function takes file contents and returns the new contents plus
//! whatever records had to be skipped. Reading and writing files is left to
//! the caller, apart from the two small helpers at the bottom.

use std::path::Path;

use crate::config::RangeConfig;
use crate::diagnostic::Diagnostic;
use crate::error::{Error, Result};
use crate::expand::expand;
use crate::qa::{audit, finding_diagnostics, Finding};
use crate::reduce::{reduce, ComponentSet, ReduceSummary};
use crate::table::{
    format_table, parse_ids_table, parse_raw_table, parse_raw_table_checked, SkippedRecord,
    WriteOptions,
};


/// Result of [`reduce_sources`].
#[derive(Clone, Debug)]
pub struct ReduceOutput {
    /// The reduced IDS table, serialized.
    pub output: String,
    pub summary: ReduceSummary,
    /// Records of the IDS file that were dropped.
    pub ids_skipped: Vec<SkippedRecord>,
    /// Records of the component file that were ignored.
    pub component_skipped: Vec<SkippedRecord>,
}

impl ReduceOutput {
    pub fn is_clean(&self) -> bool {
        self.ids_skipped.is_empty() && self.component_skipped.is_empty()
    }
}

/// Reduce an IDS file against a component file.
pub fn reduce_sources(ids_source: &str, component_source: &str, options: WriteOptions) -> ReduceOutput {
    let mut ids = parse_ids_table(ids_source);
    let components = parse_ids_table(component_source);
    let set = ComponentSet::new(&components.table);
    let summary = reduce(&mut ids.table, &set);
    ReduceOutput {
        output: format_table(&ids.table, options),
        summary,
        ids_skipped: ids.skipped,
        component_skipped: components.skipped,
    }
}

/// Result of [`expand_source`].
#[derive(Clone, Debug)]
pub struct ExpandOutput {
    pub output: String,
    /// Number of placeholder records added.
    pub added: usize,
    pub skipped: Vec<SkippedRecord>,
}

/// Add a placeholder record for every missing character and sort.
pub fn expand_source(source: &str, ranges: &RangeConfig, options: WriteOptions) -> ExpandOutput {
    let mut raw = parse_raw_table(source);
    let added = expand(&mut raw.table, ranges);
    ExpandOutput {
        output: format_table(&raw.table, options),
        added,
        skipped: raw.skipped,
    }
}

/// Result of [`qa_source`].
#[derive(Clone, Debug)]
pub struct QaOutput {
    pub findings: Vec<Finding>,
    /// One warning per finding, spanning its IDS field.
    pub diagnostics: Vec<Diagnostic>,
    pub skipped: Vec<SkippedRecord>,
}

/// Audit the decompositions of an IDS file.
pub fn qa_source(source: &str, ranges: &RangeConfig) -> QaOutput {
    let parsed = parse_ids_table(source);
    let findings = audit(&parsed.table, ranges);
    let diagnostics = finding_diagnostics(&findings, source, ranges);
    QaOutput {
        findings,
        diagnostics,
        skipped: parsed.skipped,
    }
}

/// Result of [`format_source`].
#[derive(Clone, Debug)]
pub struct FormatOutput {
    pub output: String,
    /// Records with a bad key; they are not in the output.
    pub skipped: Vec<SkippedRecord>,
    /// Records whose IDS does not parse; they are written back unchanged.
    pub invalid: Vec<SkippedRecord>,
}

impl FormatOutput {
    pub fn changed(&self, source: &str) -> bool {
        self.output != source
    }
}

/// Re-serialize a table: hex fields recomputed, non-record lines dropped,
/// duplicates collapsed. IDS values are kept as written.
pub fn format_source(source: &str, options: WriteOptions) -> FormatOutput {
    let (raw, invalid) = parse_raw_table_checked(source);
    FormatOutput {
        output: format_table(&raw.table, options),
        skipped: raw.skipped,
        invalid,
    }
}

/// Read a table file.
pub fn read_source(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| Error::read(path, e))
}

/// Write a table file.
pub fn write_output(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents).map_err(|e| Error::write(path, e))
}
