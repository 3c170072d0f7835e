// Output formatting: terminal display and markdown reports.

pub mod markdown;
pub mod terminal;

/// Shorten text for previews to at most `max_chars` characters, appending
/// "..." when something was cut.
///
/// Counts characters, not bytes, so captions full of emoji or accented
/// letters are never split mid-character.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars).collect();
    format!("{kept}...")
}

/// Render a 0-100 value as a fixed-width bar of '=' characters.
pub fn percent_bar(value: f64, width: usize) -> String {
    let filled = ((value.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    format!("[{}{}]", "=".repeat(filled), " ".repeat(width.saturating_sub(filled)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_bar_bounds() {
        assert_eq!(percent_bar(0.0, 4), "[    ]");
        assert_eq!(percent_bar(50.0, 4), "[==  ]");
        assert_eq!(percent_bar(250.0, 4), "[====]");
    }
}
