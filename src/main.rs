use clap::Parser;

use flowcount::cli::Args;
use flowcount::config::Config;
use flowcount::export::OutputOptions;
use flowcount::prompt::{ConsoleConcentrations, ConsoleStartChooser};

fn main() {
    let args = Args::parse();
    let config = Config::load();
    let options = OutputOptions {
        grouping: args.grouping || config.grouping,
        compact: args.compact || config.compact,
    };

    let result = flowcount::commands::counts::run(
        &args.input,
        args.output,
        options,
        &mut ConsoleStartChooser,
        &mut ConsoleConcentrations,
    );

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
