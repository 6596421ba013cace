//! Component audit: every leaf of every decomposition should be a component.

use std::collections::HashMap;

use serde::Serialize;

use crate::config::RangeConfig;
use crate::diagnostic::Diagnostic;
use crate::span::Span;
use crate::table::{format_code_point, records, IdsTable};
use crate::trace::{debug, info};

/// A decomposition that uses characters outside the component ranges.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub character: char,
    pub code_point: String,
    pub ids: String,
    /// Offending leaves, first occurrence order, no repeats.
    pub offending: Vec<char>,
}

impl Finding {
    pub fn message(&self, ranges: &RangeConfig) -> String {
        format!(
            "IDS for character {} {} contains non-{} components: {}",
            self.code_point, self.character, ranges.display_name, self.ids
        )
    }

    /// Advisory diagnostic pointing at the IDS field.
    pub fn diagnostic(&self, ranges: &RangeConfig, span: Span) -> Diagnostic {
        let offending: String = self.offending.iter().collect();
        Diagnostic::warning(self.message(ranges), span)
            .with_note(format!("not in a {} component range: {}", ranges.display_name, offending))
    }
}

/// Diagnostics for `findings` against the table text they came from.
///
/// With duplicate records the last one is pointed at, matching the table.
pub fn finding_diagnostics(findings: &[Finding], source: &str, ranges: &RangeConfig) -> Vec<Diagnostic> {
    let mut spans = HashMap::new();
    for record in records(source) {
        let mut chars = record.key_field.chars();
        if let (Some(ch), None) = (chars.next(), chars.next()) {
            spans.insert(ch, record.ids_span);
        }
    }
    findings
        .iter()
        .map(|finding| {
            let span = spans.get(&finding.character).copied().unwrap_or_default();
            finding.diagnostic(ranges, span)
        })
        .collect()
}

/// Check every entry of `table`. A bare leaf value is checked like any
/// other leaf. The table is not modified.
pub fn audit(table: &IdsTable, ranges: &RangeConfig) -> Vec<Finding> {
    let mut findings = Vec::new();
    for (key, ids) in table.iter() {
        let mut offending = Vec::new();
        for leaf in ids.leaves() {
            if !ranges.is_component(leaf) && !offending.contains(&leaf) {
                offending.push(leaf);
            }
        }
        if offending.is_empty() {
            continue;
        }
        debug!(character = %key, ?offending, "non-component leaves");
        findings.push(Finding {
            character: *key,
            code_point: format_code_point(*key),
            ids: ids.to_string(),
            offending,
        });
    }
    info!(entries = table.len(), findings = findings.len(), "audit finished");
    findings
}

/// Findings as a pretty-printed JSON array.
pub fn findings_to_json(findings: &[Finding]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(findings)
}
