//! Resume markup codec.
//!
//! The resume format is Markdown-shaped: `#`-prefixed heading lines open
//! sections, every other line belongs to the current section as an entry
//! (bullets start with `- `; blank lines are kept so serialization is
//! byte-exact). Text before the first heading is preamble.
//!
//! Invariant: `serialize(parse(text)?) == text` for every input that parses.

use crate::errors::AppError;

/// One source line of a section body, stored verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub raw: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub name: String,
    /// The heading line exactly as it appeared, e.g. `## Experience`.
    pub header: String,
    pub entries: Vec<Entry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeDocument {
    /// Lines before the first section heading (contact block, title, ...).
    pub preamble: Vec<String>,
    pub sections: Vec<Section>,
    trailing_newline: bool,
}

impl ResumeDocument {
    /// All text that counts as resume content for matching purposes:
    /// preamble lines, section names, and entry lines.
    pub fn content_lines(&self) -> impl Iterator<Item = &str> {
        self.preamble
            .iter()
            .map(String::as_str)
            .chain(self.sections.iter().flat_map(|s| {
                std::iter::once(s.name.as_str())
                    .chain(s.entries.iter().map(|e| e.raw.as_str()))
            }))
    }
}

/// Parses resume markup into a [`ResumeDocument`].
/// Fails when the text contains no section heading at all.
pub fn parse(text: &str) -> Result<ResumeDocument, AppError> {
    let trailing_newline = text.ends_with('\n');
    let mut lines: Vec<&str> = if text.is_empty() {
        Vec::new()
    } else {
        text.split('\n').collect()
    };
    if trailing_newline {
        lines.pop();
    }

    let mut preamble = Vec::new();
    let mut sections: Vec<Section> = Vec::new();

    for line in lines {
        if let Some(name) = heading_name(line) {
            sections.push(Section {
                name,
                header: line.to_string(),
                entries: Vec::new(),
            });
        } else if let Some(current) = sections.last_mut() {
            current.entries.push(Entry {
                raw: line.to_string(),
            });
        } else {
            preamble.push(line.to_string());
        }
    }

    if sections.is_empty() {
        return Err(AppError::Parse(
            "no section headings found; expected lines like `## Experience`".to_string(),
        ));
    }

    Ok(ResumeDocument {
        preamble,
        sections,
        trailing_newline,
    })
}

/// Serializes a document back to text, byte-for-byte where untouched.
pub fn serialize(document: &ResumeDocument) -> String {
    let mut lines: Vec<&str> = Vec::new();
    for line in &document.preamble {
        lines.push(line);
    }
    for section in &document.sections {
        lines.push(&section.header);
        for entry in &section.entries {
            lines.push(&entry.raw);
        }
    }

    let mut out = lines.join("\n");
    if document.trailing_newline {
        out.push('\n');
    }
    out
}

/// Extracts the section name from a heading line (`## Name` -> `Name`).
fn heading_name(line: &str) -> Option<String> {
    let trimmed = line.trim_start();
    let hashes = trimmed.chars().take_while(|c| *c == '#').count();
    if hashes == 0 {
        return None;
    }
    let name = trimmed[hashes..].strip_prefix(' ')?.trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Jane Doe
jane@example.com

## Summary
Backend engineer with eight years of experience.

## Experience
- Built billing pipelines in Go at Acme Corp
- Operated Kubernetes clusters for payment services

## Skills
- Go, SQL, Kubernetes
";

    #[test]
    fn test_parse_extracts_sections_and_preamble() {
        let doc = parse(SAMPLE).unwrap();
        assert_eq!(doc.preamble, vec!["Jane Doe", "jane@example.com", ""]);
        assert_eq!(doc.sections.len(), 3);
        assert_eq!(doc.sections[0].name, "Summary");
        assert_eq!(doc.sections[1].name, "Experience");
        assert_eq!(doc.sections[2].name, "Skills");
    }

    #[test]
    fn test_parse_keeps_blank_lines_as_entries() {
        let doc = parse(SAMPLE).unwrap();
        let summary = &doc.sections[0];
        assert_eq!(summary.entries.len(), 2);
        assert_eq!(summary.entries[1].raw, "");
    }

    #[test]
    fn test_round_trip_is_byte_exact() {
        let doc = parse(SAMPLE).unwrap();
        assert_eq!(serialize(&doc), SAMPLE);
    }

    #[test]
    fn test_round_trip_without_trailing_newline() {
        let text = "## Skills\n- Rust";
        let doc = parse(text).unwrap();
        assert_eq!(serialize(&doc), text);
    }

    #[test]
    fn test_round_trip_preserves_consecutive_blank_lines() {
        let text = "## Skills\n- Rust\n\n\n";
        let doc = parse(text).unwrap();
        assert_eq!(serialize(&doc), text);
    }

    #[test]
    fn test_no_headings_is_a_parse_error() {
        let result = parse("just some text\nwith no headings\n");
        assert!(matches!(result, Err(AppError::Parse(_))));
    }

    #[test]
    fn test_heading_requires_space_after_hashes() {
        assert_eq!(heading_name("## Experience"), Some("Experience".to_string()));
        assert_eq!(heading_name("##Experience"), None);
        assert_eq!(heading_name("# "), None);
        assert_eq!(heading_name("not a heading"), None);
    }

    #[test]
    fn test_content_lines_covers_preamble_names_and_entries() {
        let doc = parse("Jane\n## Skills\n- Rust\n").unwrap();
        let lines: Vec<&str> = doc.content_lines().collect();
        assert_eq!(lines, vec!["Jane", "Skills", "- Rust"]);
    }
}
