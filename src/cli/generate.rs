//! Generate command implementation.
//!
//! Reads one source document and writes its expanded output to `OUT`.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Args;

use crate::error::{GenError, Result};
use crate::generate::{generate_file, write_output};
use crate::output::{display_path, plural, Printer};

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Source document with Control, Head, Generic and Foot sections
    pub source: PathBuf,

    /// Print the generated text to stdout instead of writing OUT.
    /// The Control section must still set OUT.
    #[arg(long)]
    pub stdout: bool,
}

pub fn run(args: GenerateArgs, printer: &Printer) -> Result<()> {
    let generated = generate_file(&args.source)?;
    let summary = plural(generated.instantiations, "instantiation", "instantiations");

    if args.stdout {
        io::stdout()
            .lock()
            .write_all(generated.contents.as_bytes())
            .map_err(|e| GenError::Io {
                path: PathBuf::from("<stdout>"),
                message: format!("Failed to write output: {}", e),
            })?;
        printer.info("Expanded", &format!("{} ({})", display_path(&args.source), summary));
        return Ok(());
    }

    write_output(&generated)?;
    printer.status(
        "Generated",
        &format!("{} ({})", display_path(&generated.out), summary),
    );

    Ok(())
}
