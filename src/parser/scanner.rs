//! Line-oriented section scanner.
//!
//! Each scan is a pure function of the document lines and a start index. It
//! returns the collected payload and the index at which the next scan resumes,
//! so the cursor is threaded explicitly from one section to the next.

use std::ops::Range;

use super::section::{SectionKind, Terminator, FENCE, LINE_SEPARATOR};

/// Scanner state while looking for one section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Skipping lines until the section header.
    SeekingHeader,
    /// Header seen, skipping prose until the first fence.
    SeekingFence,
    /// Copying lines into the payload until a closing fence.
    InBlock,
    /// A block has closed; waiting for another fence or the next header.
    BetweenBlocks,
}

/// Result of scanning a single section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub kind: SectionKind,
    /// Concatenated contents of every honored block
    pub payload: String,
    /// Line index of the header, if it was found
    pub header_line: Option<usize>,
    /// Number of fenced blocks opened under the header
    pub blocks: usize,
    /// Whether the document ended inside an open block
    pub unclosed: bool,
    /// Lines examined by this scan (`start..next`)
    pub lines: Range<usize>,
}

impl Section {
    /// Index of the first line the next scan should examine.
    pub fn next(&self) -> usize {
        self.lines.end
    }

    pub fn is_found(&self) -> bool {
        self.header_line.is_some()
    }
}

/// Scan `lines` from `start` for the section `kind`.
///
/// When scanning stops because the following section's header was seen, the
/// returned `next()` is the index of that header line, so the following scan
/// sees it again. A `Control` scan stops right after its first closing fence.
/// A missing header consumes the rest of the document and yields an empty
/// payload.
pub fn scan_section(lines: &[&str], start: usize, kind: SectionKind) -> Section {
    let start = start.min(lines.len());
    let terminator = kind.terminator();

    let mut state = State::SeekingHeader;
    let mut payload = String::new();
    let mut header_line = None;
    let mut blocks = 0;
    let mut next = lines.len();

    for (index, &line) in lines.iter().enumerate().skip(start) {
        match state {
            State::SeekingHeader => {
                if line == kind.header() {
                    header_line = Some(index);
                    state = State::SeekingFence;
                }
            }
            State::SeekingFence => {
                if line == FENCE {
                    blocks += 1;
                    state = State::InBlock;
                }
            }
            State::InBlock => {
                if line == FENCE {
                    if terminator == Terminator::FirstBlock {
                        next = index + 1;
                        break;
                    }
                    state = State::BetweenBlocks;
                } else {
                    payload.push_str(line);
                    payload.push_str(LINE_SEPARATOR);
                }
            }
            State::BetweenBlocks => match terminator {
                Terminator::NextHeader(following) if line == following.header() => {
                    next = index;
                    break;
                }
                _ if line == FENCE => {
                    blocks += 1;
                    state = State::InBlock;
                }
                _ => {}
            },
        }
    }

    Section {
        kind,
        payload,
        header_line,
        blocks,
        unclosed: state == State::InBlock,
        lines: start..next,
    }
}
