use clap::Parser;
use miette::Result;
use tmplgen::cli::{log_level, Cli};
use tmplgen::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(log_level(cli.verbose))
        .parse_default_env()
        .init();

    let printer = if cli.quiet {
        Printer::quiet()
    } else {
        Printer::new()
    };
    tmplgen::cli::generate::run(cli.generate, &printer)?;

    Ok(())
}
