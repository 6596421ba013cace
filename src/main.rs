mod cli;

use clap::{ArgAction, Parser, Subcommand};

use cli::expand::{cmd_expand, ExpandArgs};
use cli::fmt::{cmd_fmt, FmtArgs};
use cli::qa::{cmd_qa, QaArgs};
use cli::reduce::{cmd_reduce, ReduceArgs};

#[derive(Parser)]
#[command(
    name = "tangut-ids",
    version,
    about = "Maintain Ideographic Description Sequence tables"
)]
struct Cli {
    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Rewrite decompositions to use known components
    Reduce(ReduceArgs),
    /// Add an empty record for every character without one
    Expand(ExpandArgs),
    /// Report decompositions using non-component characters
    Qa(QaArgs),
    /// Re-serialize a table file
    Fmt(FmtArgs),
}

fn main() {
    let cli = Cli::parse();

    let verbosity = if cli.quiet {
        -1
    } else {
        cli.verbose.min(i8::MAX as u8) as i8
    };
    tangut_ids::trace::init_subscriber(verbosity);

    match cli.command {
        Command::Reduce(args) => cmd_reduce(args),
        Command::Expand(args) => cmd_expand(args),
        Command::Qa(args) => cmd_qa(args),
        Command::Fmt(args) => cmd_fmt(args),
    }
}
