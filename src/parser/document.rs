//! Whole-document parsing.
//!
//! A source document holds four sections in fixed order. Each is scanned in
//! turn, starting where the previous scan left off.

use log::{debug, warn};

use super::scanner::{scan_section, Section};
use super::section::SectionKind;

/// A source document split into lines.
///
/// Lines are split on `\n` only, so a trailing newline yields a final empty
/// line. A `\r` before the `\n` is dropped.
#[derive(Debug, Clone)]
pub struct SourceDocument<'a> {
    lines: Vec<&'a str>,
}

impl<'a> SourceDocument<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            lines: source
                .split('\n')
                .map(|line| line.strip_suffix('\r').unwrap_or(line))
                .collect(),
        }
    }

    pub fn lines(&self) -> &[&'a str] {
        &self.lines
    }

    /// Scan for one section starting at line `start`.
    pub fn scan(&self, start: usize, kind: SectionKind) -> Section {
        scan_section(&self.lines, start, kind)
    }
}

/// The four raw sections of a document, payloads not yet interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDocument {
    pub control: Section,
    pub head: Section,
    pub generic: Section,
    pub foot: Section,
}

/// Parse a source document into its four sections.
///
/// Missing sections are not an error: they yield empty payloads and a warning.
pub fn parse_document(source: &str) -> ParsedDocument {
    let document = SourceDocument::new(source);

    let mut cursor = 0;
    let [control, head, generic, foot] = SectionKind::ALL.map(|kind| {
        let section = document.scan(cursor, kind);
        report(&section);
        cursor = section.next();
        section
    });

    ParsedDocument {
        control,
        head,
        generic,
        foot,
    }
}

fn report(section: &Section) {
    match section.header_line {
        Some(line) => debug!(
            "{} section at line {}: {} block(s), {} byte(s), lines {}..{}",
            section.kind,
            line + 1,
            section.blocks,
            section.payload.len(),
            section.lines.start + 1,
            section.lines.end + 1,
        ),
        None => warn!(
            "'{}' header not found; {} section is empty",
            section.kind.header(),
            section.kind
        ),
    }

    if section.unclosed {
        warn!(
            "{} section has an unclosed code block; reading to end of document",
            section.kind
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::section::LINE_SEPARATOR;
    use pretty_assertions::assert_eq;

    fn normalize(payload: &str) -> String {
        payload.replace(LINE_SEPARATOR, "\n")
    }

    #[test]
    fn test_parse_full_document() {
        let source = r#"# Control
```
{"OUT": "out.txt", "VTYPES": ["f32"]}
```
# Head
```
H
```
# Generic
```
G <VTYPE>
```
# Foot
```
F
```
"#;

        let doc = parse_document(source);

        assert_eq!(
            normalize(&doc.control.payload),
            "{\"OUT\": \"out.txt\", \"VTYPES\": [\"f32\"]}\n"
        );
        assert_eq!(normalize(&doc.head.payload), "H\n");
        assert_eq!(normalize(&doc.generic.payload), "G <VTYPE>\n");
        assert_eq!(normalize(&doc.foot.payload), "F\n");
        assert!(doc.control.is_found());
        assert!(doc.head.is_found());
        assert!(doc.generic.is_found());
        assert!(doc.foot.is_found());
    }

    #[test]
    fn test_parse_document_with_prose() {
        let source = r#"Generated vector types.

# Control
Settings for the generator:
```
{}
```
# Head
The preamble.
```
use core::ops::Add;
```
# Generic
One impl per type.
```
impl Add for <VTYPE> {}
```
Another block for the same type:
```
impl Sub for <VTYPE> {}
```
# Foot
```
// end
```
"#;

        let doc = parse_document(source);

        assert_eq!(normalize(&doc.head.payload), "use core::ops::Add;\n");
        assert_eq!(
            normalize(&doc.generic.payload),
            "impl Add for <VTYPE> {}\nimpl Sub for <VTYPE> {}\n"
        );
        assert_eq!(doc.generic.blocks, 2);
        assert_eq!(normalize(&doc.foot.payload), "// end\n");
    }

    #[test]
    fn test_parse_document_without_foot() {
        let source = "# Control\n```\n{}\n```\n# Head\n```\nH\n```\n# Generic\n```\nG\n```\n";

        let doc = parse_document(source);

        assert!(!doc.foot.is_found());
        assert!(doc.foot.payload.is_empty());
        assert_eq!(normalize(&doc.generic.payload), "G\n");
    }

    #[test]
    fn test_parse_document_without_head() {
        let source = "# Control\n```\n{}\n```\n# Generic\n```\nG\n```\n# Foot\n```\nF\n```\n";

        let doc = parse_document(source);

        // The Head scan consumes the rest of the document.
        assert!(!doc.head.is_found());
        assert!(!doc.generic.is_found());
        assert!(!doc.foot.is_found());
    }

    #[test]
    fn test_parse_empty_document() {
        let doc = parse_document("");

        for section in [&doc.control, &doc.head, &doc.generic, &doc.foot] {
            assert!(section.payload.is_empty());
        }
    }

    #[test]
    fn test_parse_crlf_document() {
        let source = "# Control\r\n```\r\n{}\r\n```\r\n# Head\r\n```\r\nH\r\n```\r\n";

        let doc = parse_document(source);

        assert!(doc.head.is_found());
        assert_eq!(normalize(&doc.head.payload), "H\n");
    }

    #[test]
    fn test_source_document_lines() {
        let document = SourceDocument::new("a\r\nb\n");

        assert_eq!(document.lines(), &["a", "b", ""]);
    }

    #[test]
    fn test_unclosed_final_block_keeps_trailing_empty_line() {
        let document = SourceDocument::new("# Foot\n```\nF\n");

        let foot = document.scan(0, SectionKind::Foot);

        assert!(foot.unclosed);
        assert_eq!(normalize(&foot.payload), "F\n\n");
    }

    #[test]
    fn test_unclosed_block_without_trailing_newline() {
        let document = SourceDocument::new("# Foot\n```\nF");

        let foot = document.scan(0, SectionKind::Foot);

        assert_eq!(normalize(&foot.payload), "F\n");
    }
}
