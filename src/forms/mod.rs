pub mod brands;
pub mod categories;
pub mod discounts;
pub mod products;

/// Collapse inner whitespace runs and strip control characters from a
/// single-line text field.
pub(crate) fn sanitize_inline_text(input: &str) -> String {
    let mut sanitized = String::with_capacity(input.len());
    let mut previous_whitespace = false;

    for ch in input.trim().chars() {
        if ch.is_whitespace() {
            if !previous_whitespace {
                sanitized.push(' ');
                previous_whitespace = true;
            }
        } else if ch.is_control() {
            continue;
        } else {
            sanitized.push(ch);
            previous_whitespace = false;
        }
    }

    sanitized
}

/// Sanitize a multi-line text field line by line, trimming blank lines from
/// both ends.
pub(crate) fn sanitize_multiline_text(input: &str) -> String {
    let lines: Vec<String> = input.lines().map(sanitize_inline_text).collect();
    let first = lines.iter().position(|line| !line.is_empty());
    let last = lines.iter().rposition(|line| !line.is_empty());

    match (first, last) {
        (Some(first), Some(last)) => lines[first..=last].join("\n"),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_text_collapses_whitespace() {
        assert_eq!(sanitize_inline_text("  Fender \t Stratocaster "), "Fender Stratocaster");
    }

    #[test]
    fn multiline_text_trims_blank_edges() {
        assert_eq!(
            sanitize_multiline_text("\n\n first line \n\n second line \n\n"),
            "first line\n\nsecond line"
        );
    }
}
