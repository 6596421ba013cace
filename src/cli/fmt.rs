use std::path::PathBuf;
use std::process;

use clap::Args;

use super::{read_or_exit, report_skipped, write_or_exit};

#[derive(Args)]
pub struct FmtArgs {
    /// IDS table to re-serialize in place
    pub ids_file: PathBuf,
    /// Check formatting without modifying (exit 1 if it would change)
    #[arg(long)]
    pub check: bool,
    /// Prefix the output with a byte-order mark
    #[arg(long)]
    pub bom: bool,
}

pub fn cmd_fmt(args: FmtArgs) {
    let FmtArgs {
        ids_file,
        check,
        bom,
    } = args;

    let source = read_or_exit(&ids_file);
    let result = tangut_ids::format_source(&source, tangut_ids::WriteOptions { bom });

    let filename = ids_file.to_string_lossy();
    for record in &result.invalid {
        record.diagnostic.render(&filename, &source);
    }
    // Records with a bad key are dropped from the output.
    let failed = report_skipped(&result.skipped, &ids_file, &source);

    if !result.changed(&source) {
        if check {
            eprintln!("OK: {}", ids_file.display());
        } else {
            eprintln!("Already formatted: {}", ids_file.display());
        }
        return;
    }

    if check {
        eprintln!("would reformat: {}", ids_file.display());
        process::exit(1);
    }

    write_or_exit(&ids_file, &result.output);
    eprintln!("Formatted: {}", ids_file.display());

    if failed {
        process::exit(1);
    }
}
