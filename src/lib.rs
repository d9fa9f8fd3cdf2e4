//! tmplgen - generic template instantiation
//!
//! A library for expanding markdown-style template documents: a `# Control`
//! JSON block drives how many times the `# Generic` template is instantiated
//! between a `# Head` and a `# Foot`.

pub mod cli;
pub mod control;
pub mod error;
pub mod expand;
pub mod generate;
pub mod output;
pub mod parser;

pub use control::{Control, DEFAULT_ITYPE};
pub use error::{GenError, Result};
pub use expand::{expand, instantiate, Bindings, ITYPE_TOKEN, RTYPE_TOKEN, VTYPE_TOKEN};
pub use generate::{generate, generate_file, write_output, Generated};
pub use parser::{parse_document, scan_section, ParsedDocument, Section, SectionKind, SourceDocument};
