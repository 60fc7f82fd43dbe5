//! Word wrapping with a fixed per-character width estimate

/// Estimated advance of one character at the tips panel font size
pub const AVERAGE_CHAR_WIDTH: f64 = 6.0;

/// Greedily wrap `text` into lines narrower than `max_width` pixels.
///
/// Words are split on single spaces, so joining the result with `" "` gives
/// back the input. A word wider than the budget is kept whole on its own line.
pub fn wrap(text: &str, max_width: f64) -> Vec<String> {
    let mut words = text.split(' ');
    let mut lines = Vec::new();
    // split always yields at least one item, possibly empty
    let mut current = words.next().unwrap_or_default().to_string();

    for word in words {
        let candidate = format!("{} {}", current, word);
        if estimate_width(&candidate) < max_width {
            current = candidate;
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        }
    }
    lines.push(current);
    lines
}

/// Estimated rendered width of `text` in pixels
pub fn estimate_width(text: &str) -> f64 {
    text.chars().count() as f64 * AVERAGE_CHAR_WIDTH
}
