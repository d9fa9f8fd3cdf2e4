pub mod generate;

use clap::Parser;
use log::LevelFilter;

/// tmplgen - instantiate a generic template once per type
#[derive(Parser, Debug)]
#[command(name = "tmplgen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub generate: generate::GenerateArgs,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress status lines on stderr
    #[arg(short, long)]
    pub quiet: bool,
}

/// Map the `-v` count to a log level.
pub fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
