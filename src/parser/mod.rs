//! Parser for markdown-style template documents.
//!
//! # Document Structure
//!
//! A document has four sections, each introduced by an exact header line and
//! carrying its content in fenced code blocks:
//! - `# Control` - a single JSON block configuring the generator
//! - `# Head` - text written once at the top of the output
//! - `# Generic` - the template instantiated once per `VTYPES` entry
//! - `# Foot` - text written once at the end of the output
//!
//! Prose between headers and blocks is ignored. `Head`, `Generic` and `Foot`
//! may hold several blocks, which are concatenated.
//!
//! # Usage
//!
//! ```ignore
//! use tmplgen::parser::parse_document;
//!
//! let source = std::fs::read_to_string("vectors.gen.md")?;
//! let document = parse_document(&source);
//! println!("{}", document.generic.payload);
//! ```

mod document;
mod scanner;
pub mod section;

pub use document::{parse_document, ParsedDocument, SourceDocument};
pub use scanner::{scan_section, Section};
pub use section::{SectionKind, Terminator, FENCE, LINE_SEPARATOR};
