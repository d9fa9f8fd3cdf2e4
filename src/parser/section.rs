//! Section kinds and the line markers that delimit them.

use std::fmt;

/// A line consisting solely of this delimiter opens or closes a block.
pub const FENCE: &str = "```";

/// Separator appended after every line copied into a payload.
#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";

/// The four sections of a source document, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Control,
    Head,
    Generic,
    Foot,
}

/// How scanning for a section ends once its first block has closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminator {
    /// Stop at the first closing fence; later blocks are never read.
    FirstBlock,
    /// Keep collecting blocks until this section's header line appears.
    NextHeader(SectionKind),
    /// Keep collecting blocks until the document ends.
    EndOfDocument,
}

impl SectionKind {
    /// All sections in scan order.
    pub const ALL: [SectionKind; 4] = [
        SectionKind::Control,
        SectionKind::Head,
        SectionKind::Generic,
        SectionKind::Foot,
    ];

    /// The exact header line introducing this section.
    pub fn header(self) -> &'static str {
        match self {
            SectionKind::Control => "# Control",
            SectionKind::Head => "# Head",
            SectionKind::Generic => "# Generic",
            SectionKind::Foot => "# Foot",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SectionKind::Control => "Control",
            SectionKind::Head => "Head",
            SectionKind::Generic => "Generic",
            SectionKind::Foot => "Foot",
        }
    }

    pub fn terminator(self) -> Terminator {
        match self {
            SectionKind::Control => Terminator::FirstBlock,
            SectionKind::Head => Terminator::NextHeader(SectionKind::Generic),
            SectionKind::Generic => Terminator::NextHeader(SectionKind::Foot),
            SectionKind::Foot => Terminator::EndOfDocument,
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
