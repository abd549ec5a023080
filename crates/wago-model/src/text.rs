/// Clean free text from the item tables for single-line output.
///
/// Carriage returns are dropped, newlines become spaces, double quotes are
/// removed and the result is trimmed.
pub fn sanitize_text(raw: &str) -> String {
    let mut cleaned = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '\r' | '"' => {}
            '\n' => cleaned.push(' '),
            other => cleaned.push(other),
        }
    }
    cleaned.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_line_breaks_and_quotes() {
        assert_eq!(sanitize_text("  \"Tough\" Jerky\r\nfor\nyou "), "Tough Jerky for you");
        assert_eq!(sanitize_text(""), "");
        assert_eq!(sanitize_text("\r\n"), "");
    }
}
