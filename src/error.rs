use miette::Diagnostic;
use thiserror::Error;

/// Main error type for tmplgen operations
#[derive(Error, Diagnostic, Debug)]
pub enum GenError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(tmplgen::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(tmplgen::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Control section is missing required field '{field}'")]
    #[diagnostic(code(tmplgen::config))]
    ConfigField {
        field: &'static str,
        #[help]
        help: Option<String>,
    },

    #[error("Expansion error: {message}")]
    #[diagnostic(code(tmplgen::expand))]
    Expand { message: String },
}

impl GenError {
    /// A required Control field that was absent when first accessed.
    pub fn missing_field(field: &'static str) -> Self {
        GenError::ConfigField {
            field,
            help: Some(format!("Add \"{}\" to the JSON object under # Control", field)),
        }
    }
}

pub type Result<T> = std::result::Result<T, GenError>;
