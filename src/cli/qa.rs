use std::path::PathBuf;
use std::process;

use clap::Args;
use tangut_ids::diagnostic::render_diagnostics;

use super::{load_ranges, read_or_exit, report_skipped};

#[derive(Args)]
pub struct QaArgs {
    /// IDS table to audit
    pub ids_file: PathBuf,
    /// Code-point range configuration (default: built-in Tangut ranges)
    #[arg(long, value_name = "PATH")]
    pub ranges: Option<PathBuf>,
    /// Print findings as JSON on stdout
    #[arg(long)]
    pub json: bool,
    /// Exit 1 if there are any findings
    #[arg(long)]
    pub deny: bool,
}

pub fn cmd_qa(args: QaArgs) {
    let QaArgs {
        ids_file,
        ranges,
        json,
        deny,
    } = args;

    let ranges = load_ranges(ranges.as_deref());
    let source = read_or_exit(&ids_file);
    let result = tangut_ids::qa_source(&source, &ranges);
    let failed = report_skipped(&result.skipped, &ids_file, &source);

    if json {
        match tangut_ids::qa::findings_to_json(&result.findings) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("error: {}", e);
                process::exit(1);
            }
        }
    } else {
        render_diagnostics(&result.diagnostics, &ids_file.to_string_lossy(), &source);
    }

    if result.findings.is_empty() {
        eprintln!("OK: {}", ids_file.display());
    } else {
        eprintln!(
            "{} entr{} with non-{} components in '{}'",
            result.findings.len(),
            if result.findings.len() == 1 { "y" } else { "ies" },
            ranges.display_name,
            ids_file.display()
        );
    }

    if failed || (deny && !result.findings.is_empty()) {
        process::exit(1);
    }
}
