pub mod expand;
pub mod fmt;
pub mod qa;
pub mod reduce;

use std::path::Path;
use std::process;

use tangut_ids::table::SkippedRecord;
use tangut_ids::RangeConfig;

/// Read a table file or exit.
pub fn read_or_exit(path: &Path) -> String {
    match tangut_ids::read_source(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    }
}

/// Write a table file or exit.
pub fn write_or_exit(path: &Path, contents: &str) {
    if let Err(e) = tangut_ids::write_output(path, contents) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

/// Load `--ranges`, or the built-in Tangut ranges when absent.
pub fn load_ranges(path: Option<&Path>) -> RangeConfig {
    match RangeConfig::resolve(path) {
        Ok(ranges) => ranges,
        Err(e) => {
            let shown = path.map(|p| p.display().to_string()).unwrap_or_default();
            eprintln!("error: invalid range configuration '{}': {}", shown, e);
            process::exit(1);
        }
    }
}

/// Render skipped records against their file. Returns true if any were.
pub fn report_skipped(skipped: &[SkippedRecord], path: &Path, source: &str) -> bool {
    let filename = path.to_string_lossy();
    for record in skipped {
        record.diagnostic.render(&filename, source);
    }
    if !skipped.is_empty() {
        eprintln!(
            "{} record(s) in '{}' could not be read",
            skipped.len(),
            path.display()
        );
    }
    !skipped.is_empty()
}
