//! Text helpers shared by the renderers.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: &str = "...";

/// Shorten `text` to `max` characters, appending `"..."` when cut.
///
/// Text of `max` characters or fewer is returned unchanged.
pub fn truncate_text(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        None => text.to_string(),
        Some((end, _)) => format!("{}{}", &text[..end], ELLIPSIS),
    }
}

/// Fit `text` into exactly `width` terminal columns.
///
/// Pads with spaces when short; cuts on a character boundary and ends with
/// `"..."` when long.
pub fn fit(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width <= width {
        let mut out = String::with_capacity(text.len() + width - text_width);
        out.push_str(text);
        out.extend(std::iter::repeat(' ').take(width - text_width));
        return out;
    }

    let (budget, suffix) = if width >= ELLIPSIS.len() {
        (width - ELLIPSIS.len(), ELLIPSIS)
    } else {
        (width, "")
    };

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str(suffix);
    used += suffix.len();
    out.extend(std::iter::repeat(' ').take(width.saturating_sub(used)));
    out
}

/// Join pre-fitted cells with a two-space gutter and drop trailing blanks.
pub fn row(cells: &[String]) -> String {
    cells.join("  ").trim_end().to_string()
}

/// A dashed rule as wide as `line`.
pub fn rule(line: &str) -> String {
    "-".repeat(line.width())
}
