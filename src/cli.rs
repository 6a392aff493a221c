use clap::Parser;
use std::path::PathBuf;

/// Takes .csv files generated from FlowJo and generates a new .csv file
/// with cell counts for each gate in each tube.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the FlowJo percent-of-parent export (.csv)
    pub input: PathBuf,

    /// Output file for the cell count table (default: <input>_counts.csv)
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Ask for a group per tube and order the output by group
    #[arg(short = 'g', long)]
    pub grouping: bool,

    /// Make a compact .csv output file (default is a long .csv file)
    #[arg(short = 'c', long)]
    pub compact: bool,
}
