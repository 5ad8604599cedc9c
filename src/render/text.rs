/// Passes text through to an output artifact without any escaping.
///
/// Field text is interpolated into Markdown and HTML verbatim; this is a
/// compatibility property of the output contract, not an omission. Keeping
/// every interpolation site behind this one primitive means an escaping
/// policy could later be introduced here without touching each generator.
pub fn literal(text: &str) -> &str {
    text
}

/// Strips everything but word characters and spaces, then truncates.
///
/// Used for diagram labels, which must survive embedding in the flowchart
/// grammar unquoted.
pub fn sanitize_label(text: &str, max_chars: usize) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == ' ')
        .take(max_chars)
        .collect()
}

/// Rewrites an identifier for the flowchart grammar.
///
/// Hyphens become underscores, so two source ids differing only by separator
/// collide in the diagram. Known limitation, kept.
pub fn sanitize_id(id: &str) -> String {
    id.replace('-', "_")
}

/// Truncates to `max_chars` characters, appending `...` when cut.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let mut shortened: String = text.chars().take(max_chars).collect();
        shortened.push_str("...");
        shortened
    }
}

/// Humanizes a camelCase settings key: a space before each internal capital,
/// first letter capitalized. `interruptionSensitivity` becomes
/// `Interruption Sensitivity`.
pub fn humanize_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for (i, c) in key.chars().enumerate() {
        if i == 0 {
            out.extend(c.to_uppercase());
        } else {
            if c.is_uppercase() {
                out.push(' ');
            }
            out.push(c);
        }
    }
    out
}
