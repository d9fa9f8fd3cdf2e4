//! The generator configuration carried by the `# Control` section.
//!
//! Parsing only checks that the payload is a well-formed JSON object with
//! fields of the right types. Required fields are checked when first read, so
//! a malformed payload ([`GenError::Parse`]) stays distinguishable from a
//! well-formed one that lacks a field ([`GenError::ConfigField`]).

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{GenError, Result};

/// `<ITYPE>` substitution when the Control section does not set one.
pub const DEFAULT_ITYPE: &str = "i32";

/// Parsed contents of the `# Control` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct Control {
    /// Output path (required)
    pub out: Option<PathBuf>,
    /// One instantiation per entry (required)
    pub vtypes: Option<Vec<String>>,
    /// Parallel to `vtypes`, honored only when the lengths match
    pub rtypes: Option<Vec<String>>,
    /// Shared by every instantiation
    pub itype: Option<String>,
}

impl Control {
    /// Parse a Control payload.
    pub fn parse(payload: &str) -> Result<Self> {
        serde_json::from_str(payload).map_err(|e| GenError::Parse {
            message: format!("Invalid JSON in Control section: {}", e),
            help: Some(
                "The # Control block must hold a JSON object such as \
                 {\"OUT\": \"out.rs\", \"VTYPES\": [\"f32\"]}"
                    .to_string(),
            ),
        })
    }

    pub fn out(&self) -> Result<&Path> {
        self.out
            .as_deref()
            .ok_or_else(|| GenError::missing_field("OUT"))
    }

    pub fn vtypes(&self) -> Result<&[String]> {
        self.vtypes
            .as_deref()
            .ok_or_else(|| GenError::missing_field("VTYPES"))
    }

    /// The `RTYPES` list, if it lines up with `VTYPES`.
    pub fn aligned_rtypes(&self) -> Result<Option<&[String]>> {
        let vtypes = self.vtypes()?;
        Ok(self
            .rtypes
            .as_deref()
            .filter(|rtypes| rtypes.len() == vtypes.len()))
    }

    /// Whether `RTYPES` is present but ignored because of a length mismatch.
    pub fn rtypes_mismatched(&self) -> bool {
        match (&self.rtypes, &self.vtypes) {
            (Some(rtypes), Some(vtypes)) => rtypes.len() != vtypes.len(),
            _ => false,
        }
    }

    pub fn itype(&self) -> &str {
        self.itype.as_deref().unwrap_or(DEFAULT_ITYPE)
    }
}
