//! Plain-text fretboard diagrams.
//!
//! Each string is drawn on its own line, in the fretboard's print order:
//!
//! ```text
//! E | -  -  *  -  -  -  -  -  -  -  -  -  -  -
//! H | -  -  -  -  *  -  -  -  -  -  -  -  -  -
//! ...
//!     1     3     5     7     9       12
//! ```
//!
//! Cells stand for frets `1..=max_frets`, three characters each. A fretted string shows
//! `*` in its cell; an open string (fret 0) shows no marker.

use crate::fretboard::Fretboard;
use crate::tab::Tab;

/// Frets labelled under the diagram by default.
pub const FRET_LABELS: [u8; 6] = [1, 3, 5, 7, 9, 12];

const EMPTY_CELL: &str = " - ";
const MARKED_CELL: &str = " * ";

/// Render `tab` as a text diagram followed by a line of fret numbers.
pub fn render_tab(tab: &Tab, fretboard: &Fretboard, labels: &[u8]) -> String {
    let mut out = String::new();
    let max_frets = fretboard.max_frets();

    for (open, fret) in fretboard.strings().iter().zip(tab.frets()) {
        out.push_str(&format!("{:<2}|", open.symbol()));
        for cell in 1..=max_frets {
            out.push_str(if cell == fret { MARKED_CELL } else { EMPTY_CELL });
        }
        out.push('\n');
    }

    out.push_str(&label_line(max_frets, labels));
    out.push('\n');
    out
}

/// Fret numbers aligned under their cells.
fn label_line(max_frets: u8, labels: &[u8]) -> String {
    let mut line = String::from("   ");
    for cell in 1..=max_frets {
        if labels.contains(&cell) {
            line.push_str(&format!("{:^3}", cell));
        } else {
            line.push_str("   ");
        }
    }
    line.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn string_line(open: &str, fret: u8) -> String {
        let mut line = format!("{:<2}|", open);
        for cell in 1..=14u8 {
            line.push_str(if cell == fret { " * " } else { " - " });
        }
        line
    }

    #[test]
    fn test_render_c_major() {
        let tab = Tab::new([3, 5, 5, 5, 3, 3]);
        let text = render_tab(&tab, &Fretboard::default(), &FRET_LABELS);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], string_line("E", 3));
        assert_eq!(lines[1], string_line("H", 5));
        assert_eq!(lines[4], string_line("A", 3));
        assert_eq!(lines[0], format!("E |{}{}{}", " - ".repeat(2), " * ", " - ".repeat(11)));
    }

    #[test]
    fn test_open_string_has_no_marker() {
        let tab = Tab::new([0, 0, 1, 2, 2, 0]);
        let text = render_tab(&tab, &Fretboard::default(), &FRET_LABELS);
        let first = text.lines().next().unwrap();
        assert_eq!(first, format!("E |{}", " - ".repeat(14)));
        assert!(!first.contains('*'));
    }

    #[test]
    fn test_every_line_has_same_width() {
        let tab = Tab::new([13, 0, 7, 1, 12, 4]);
        let text = render_tab(&tab, &Fretboard::default(), &FRET_LABELS);
        let widths: Vec<usize> = text.lines().take(6).map(str::len).collect();
        assert!(widths.iter().all(|&w| w == 3 + 14 * 3));
    }

    #[test]
    fn test_label_line() {
        assert_eq!(
            label_line(14, &FRET_LABELS),
            "    1     3     5     7     9       12"
        );
        assert_eq!(label_line(14, &[]), "");
    }

    #[test]
    fn test_labels_follow_fret_range() {
        let tab = Tab::new([0, 1, 0, 2, 3, 0]);
        let text = render_tab(&tab, &Fretboard::new(5), &[2, 4]);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[3], "D | -  *  -  -  - ");
        assert_eq!(lines[6], "       2     4");
    }
}
