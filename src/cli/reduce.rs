use std::path::PathBuf;
use std::process;

use clap::Args;

use super::{read_or_exit, report_skipped, write_or_exit};

#[derive(Args)]
pub struct ReduceArgs {
    /// IDS table to reduce (rewritten in place unless -o is given)
    pub ids_file: PathBuf,
    /// Table of component decompositions
    pub component_file: PathBuf,
    /// Write the reduced table here instead
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Prefix the output with a byte-order mark
    #[arg(long)]
    pub bom: bool,
    /// Report what would change without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

pub fn cmd_reduce(args: ReduceArgs) {
    let ReduceArgs {
        ids_file,
        component_file,
        output,
        bom,
        dry_run,
    } = args;

    let ids_source = read_or_exit(&ids_file);
    let component_source = read_or_exit(&component_file);

    let result = tangut_ids::reduce_sources(
        &ids_source,
        &component_source,
        tangut_ids::WriteOptions { bom },
    );

    let mut failed = report_skipped(&result.ids_skipped, &ids_file, &ids_source);
    failed |= report_skipped(&result.component_skipped, &component_file, &component_source);

    let summary = &result.summary;
    let target = output.unwrap_or_else(|| ids_file.clone());
    if dry_run {
        eprintln!(
            "would rewrite {} of {} entries ({} replacements) in '{}'",
            summary.rewritten,
            summary.examined,
            summary.replacements,
            target.display()
        );
    } else {
        write_or_exit(&target, &result.output);
        eprintln!(
            "Reduced: {} ({} entries rewritten, {} replacements)",
            target.display(),
            summary.rewritten,
            summary.replacements
        );
    }

    if failed {
        process::exit(1);
    }
}
