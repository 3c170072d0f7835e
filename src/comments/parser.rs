// Comment blob parser.
//
// One comment per non-blank line, order preserved. Authors are recognised in
// two prefix forms, first match wins:
//   "@name: text" / "name: text"
//   "@name - text" / "name - text"
// Anything else is treated as bare comment text with no author.

use once_cell::sync::Lazy;
use regex_lite::Regex;

use crate::analysis::tokenize::trim_blank;

static COLON_PREFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^@?(\w+):\s*(.+)$").expect("colon prefix pattern is valid"));

static DASH_PREFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^@?(\w+)\s*-\s*(.+)$").expect("dash prefix pattern is valid"));

/// A comment line split into its author (if any) and text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedComment {
    /// Always starts with '@' when present
    pub author: Option<String>,
    pub text: String,
}

/// Split a comments blob into trimmed, non-empty lines.
pub fn split_lines(comments_text: &str) -> Vec<&str> {
    comments_text
        .lines()
        .map(trim_blank)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Parse a single (already trimmed) comment line.
pub fn parse_line(line: &str) -> ParsedComment {
    for re in [&*COLON_PREFIX_RE, &*DASH_PREFIX_RE] {
        if let Some(caps) = re.captures(line) {
            if let (Some(name), Some(text)) = (caps.get(1), caps.get(2)) {
                return ParsedComment {
                    author: Some(format!("@{}", name.as_str())),
                    text: trim_blank(text.as_str()).to_string(),
                };
            }
        }
    }

    ParsedComment {
        author: None,
        text: line.to_string(),
    }
}

/// Parse every comment in a newline-delimited blob.
pub fn parse_comments(comments_text: &str) -> Vec<ParsedComment> {
    split_lines(comments_text).into_iter().map(parse_line).collect()
}
