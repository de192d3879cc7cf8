use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Molbench Developers",
    version,
    about = "Molbench CLI - an educational molecule workbench: place elements, let nearby atoms bond, and identify the compound you built.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a workbench session: load, place elements, bond, identify, save.
    Bench(BenchArgs),
    /// Browse the element catalog or print one element's data sheet.
    Elements(ElementsArgs),
}

/// Arguments for the `bench` subcommand.
#[derive(Args, Debug)]
pub struct BenchArgs {
    /// Path to the element catalog (CSV).
    #[arg(long, required = true, value_name = "PATH")]
    pub catalog: PathBuf,

    /// Path to the known-compound registry (TOML).
    #[arg(long, required = true, value_name = "PATH")]
    pub compounds: PathBuf,

    /// Restore a previously saved session before placing anything.
    /// A missing file is reported as "nothing to load", not an error.
    #[arg(long, value_name = "PATH")]
    pub load: Option<PathBuf>,

    /// Place an element and evaluate bonding once, as a drag-release would.
    /// Format: ATOMIC_NUMBER@X,Y (e.g. 8@120,80). May be repeated; placements
    /// happen in order.
    #[arg(short, long = "place", value_name = "Z@X,Y")]
    pub place: Vec<String>,

    /// Save the final session state to this path.
    #[arg(long, value_name = "PATH")]
    pub save: Option<PathBuf>,
}

/// Arguments for the `elements` subcommand.
#[derive(Args, Debug)]
pub struct ElementsArgs {
    /// Path to the element catalog (CSV).
    #[arg(long, required = true, value_name = "PATH")]
    pub catalog: PathBuf,

    /// Element to inspect, by symbol ("O") or atomic number ("8").
    /// Omit to list the whole catalog.
    #[arg(value_name = "SYMBOL_OR_NUMBER")]
    pub element: Option<String>,
}
