use std::path::PathBuf;
use std::process;

use clap::Args;

use super::{load_ranges, read_or_exit, report_skipped, write_or_exit};

#[derive(Args)]
pub struct ExpandArgs {
    /// IDS table to expand (rewritten in place unless -o is given)
    pub ids_file: PathBuf,
    /// Write the expanded table here instead
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Prefix the output with a byte-order mark
    #[arg(long)]
    pub bom: bool,
    /// Code-point range configuration (default: built-in Tangut ranges)
    #[arg(long, value_name = "PATH")]
    pub ranges: Option<PathBuf>,
}

pub fn cmd_expand(args: ExpandArgs) {
    let ExpandArgs {
        ids_file,
        output,
        bom,
        ranges,
    } = args;

    let ranges = load_ranges(ranges.as_deref());
    let source = read_or_exit(&ids_file);
    let result = tangut_ids::expand_source(&source, &ranges, tangut_ids::WriteOptions { bom });
    let failed = report_skipped(&result.skipped, &ids_file, &source);

    let target = output.unwrap_or(ids_file);
    write_or_exit(&target, &result.output);
    eprintln!(
        "Expanded: {} ({} placeholder records added)",
        target.display(),
        result.added
    );

    if failed {
        process::exit(1);
    }
}
