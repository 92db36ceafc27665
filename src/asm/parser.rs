//! Line parser (spec §4.1): splits a source line into optional label, mnemonic, and
//! operand text, stripping comments.

/// One parsed source line. A line with neither label nor mnemonic is empty and is
/// discarded by Pass 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    pub label: Option<String>,
    pub mnemonic: Option<String>,
    pub operand: String,
    pub source: String,
}

impl ParsedLine {
    pub fn is_empty(&self) -> bool {
        self.label.is_none() && self.mnemonic.is_none()
    }
}

/// Parse one source line.
pub fn parse_line(line: &str) -> ParsedLine {
    let source = line.to_string();

    // 1. Strip everything at and after the first ';'.
    let without_comment = match line.find(';') {
        Some(idx) => &line[..idx],
        None => line,
    };

    // 2. Trim leading/trailing whitespace.
    let trimmed = without_comment.trim();
    if trimmed.is_empty() {
        return ParsedLine { label: None, mnemonic: None, operand: String::new(), source };
    }

    // 3. Split off a label at the first ':'.
    let (label, body) = match trimmed.find(':') {
        Some(idx) => (Some(trimmed[..idx].trim().to_string()), trimmed[idx + 1..].trim()),
        None => (None, trimmed),
    };

    if body.is_empty() {
        return ParsedLine { label, mnemonic: None, operand: String::new(), source };
    }

    // 4/5. First whitespace-delimited token is the mnemonic; the rest is the operand.
    let (mnemonic, operand) = match body.find(char::is_whitespace) {
        Some(idx) => (&body[..idx], body[idx..].trim()),
        None => (body, ""),
    };

    ParsedLine {
        label,
        mnemonic: Some(mnemonic.to_string()),
        operand: operand.to_string(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_and_comment_only_lines_are_empty() {
        assert!(parse_line("").is_empty());
        assert!(parse_line("   ").is_empty());
        assert!(parse_line("; just a comment").is_empty());
        assert!(parse_line("   ; indented comment").is_empty());
    }

    #[test]
    fn label_only_line() {
        let p = parse_line("start:");
        assert_eq!(p.label.as_deref(), Some("start"));
        assert_eq!(p.mnemonic, None);
    }

    #[test]
    fn label_and_instruction() {
        let p = parse_line("start: ldc 42 ; load 42");
        assert_eq!(p.label.as_deref(), Some("start"));
        assert_eq!(p.mnemonic.as_deref(), Some("ldc"));
        assert_eq!(p.operand, "42");
    }

    #[test]
    fn instruction_without_label() {
        let p = parse_line("   HALT");
        assert_eq!(p.label, None);
        assert_eq!(p.mnemonic.as_deref(), Some("HALT"));
        assert_eq!(p.operand, "");
    }

    #[test]
    fn operand_stored_verbatim_with_inner_whitespace_trimmed() {
        let p = parse_line("ldc   0x10  ");
        assert_eq!(p.mnemonic.as_deref(), Some("ldc"));
        assert_eq!(p.operand, "0x10");
    }

    #[test]
    fn colon_splits_at_first_occurrence_only() {
        let p = parse_line("foo: bar: baz");
        assert_eq!(p.label.as_deref(), Some("foo"));
        assert_eq!(p.mnemonic.as_deref(), Some("bar:"));
        assert_eq!(p.operand, "baz");
    }
}
