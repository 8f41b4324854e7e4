// src/indicator.rs
use crate::data_types::{Header, SortDirection};

pub const ASCENDING_GLYPH: char = '\u{25B2}';
pub const DESCENDING_GLYPH: char = '\u{25BC}';

pub fn glyph(direction: SortDirection) -> char {
    match direction {
        SortDirection::Ascending => ASCENDING_GLYPH,
        SortDirection::Descending => DESCENDING_GLYPH,
    }
}

/// Header text with every " ▲" / " ▼" removed.
pub fn strip_indicator(text: &str) -> String {
    text.replace(&format!(" {}", ASCENDING_GLYPH), "")
        .replace(&format!(" {}", DESCENDING_GLYPH), "")
}

/// Clears glyphs from the `selectable` headers and marks `column`.
///
/// A header whose text is blank gets no glyph.
pub fn apply_indicator(
    headers: &mut [Header],
    selectable: &[usize],
    column: usize,
    direction: SortDirection,
) {
    for &index in selectable {
        if let Some(header) = headers.get_mut(index) {
            header.text = strip_indicator(&header.text);
        }
    }

    if let Some(header) = headers.get_mut(column) {
        if !header.text.trim().is_empty() {
            header.text.push(' ');
            header.text.push(glyph(direction));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves_the_glyph_to_the_clicked_header() {
        let mut headers = vec![Header::new("Name"), Header::new("Score"), Header::new("")];
        let all = [0, 1, 2];

        apply_indicator(&mut headers, &all, 0, SortDirection::Ascending);
        assert_eq!(headers[0].text, "Name ▲");

        apply_indicator(&mut headers, &all, 1, SortDirection::Descending);
        assert_eq!(headers[0].text, "Name");
        assert_eq!(headers[1].text, "Score ▼");

        apply_indicator(&mut headers, &all, 2, SortDirection::Ascending);
        assert_eq!(headers[1].text, "Score");
        assert_eq!(headers[2].text, "");
    }

    #[test]
    fn strips_repeated_glyphs() {
        assert_eq!(strip_indicator("Rank ▲ ▼"), "Rank");
        assert_eq!(strip_indicator("▲Rank"), "▲Rank");
    }
}
