//! Output assembly.
//!
//! The output is built in memory as Head, then one instantiation per `VTYPES`
//! entry, then Foot, and written to `OUT` in a single call. A failure anywhere
//! before the write leaves any existing output untouched.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::control::Control;
use crate::error::{GenError, Result};
use crate::expand::expand;
use crate::parser::parse_document;

/// A fully generated output document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    /// Destination from the Control `OUT` field
    pub out: PathBuf,
    pub contents: String,
    /// Number of Generic instantiations written
    pub instantiations: usize,
}

/// Generate the output document for `source`.
pub fn generate(source: &str) -> Result<Generated> {
    let document = parse_document(source);

    let control = Control::parse(&document.control.payload)?;
    debug!("Control: {:?}", control);

    let out = control.out()?.to_path_buf();
    let instantiations = expand(&document.generic.payload, &control)?;

    let mut contents = String::with_capacity(
        document.head.payload.len()
            + instantiations.iter().map(String::len).sum::<usize>()
            + document.foot.payload.len(),
    );
    contents.push_str(&document.head.payload);
    for instantiation in &instantiations {
        contents.push_str(instantiation);
    }
    contents.push_str(&document.foot.payload);

    Ok(Generated {
        out,
        contents,
        instantiations: instantiations.len(),
    })
}

/// Read a source document from disk and generate its output.
pub fn generate_file(path: &Path) -> Result<Generated> {
    let source = fs::read_to_string(path).map_err(|e| GenError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read source document: {}", e),
    })?;

    generate(&source)
}

/// Write generated output to its `OUT` path, truncating any previous file.
pub fn write_output(generated: &Generated) -> Result<()> {
    fs::write(&generated.out, &generated.contents).map_err(|e| GenError::Io {
        path: generated.out.clone(),
        message: format!("Failed to write output: {}", e),
    })?;

    info!(
        "Wrote {} byte(s) to {}",
        generated.contents.len(),
        generated.out.display()
    );
    Ok(())
}
