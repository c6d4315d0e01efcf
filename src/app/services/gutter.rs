//! Line counting and the text shown in the line-number gutter.

/// Advance of one digit in the 14pt monospace gutter font, rounded up.
pub const DIGIT_WIDTH: i32 = 9;
const LABEL_PADDING: i32 = 8;

/// Narrowest label column, wide enough for three digits.
pub const MIN_GUTTER_WIDTH: i32 = 3 * DIGIT_WIDTH + LABEL_PADDING;

/// Left plus right text margin of a text display.
pub const DISPLAY_MARGINS: i32 = 6;

/// Number of lines in `text`: one more than its newline count.
pub fn line_count(text: &str) -> usize {
    text.bytes().filter(|&b| b == b'\n').count() + 1
}

/// Sequential row labels `1..=count`, one per line, no trailing newline.
pub fn line_number_rows(count: usize) -> String {
    let mut rows = String::with_capacity(count * 4);
    for n in 1..=count.max(1) {
        if n > 1 {
            rows.push('\n');
        }
        rows.push_str(&n.to_string());
    }
    rows
}

/// Pixel width of the label column for `count` lines.
pub fn gutter_width(count: usize) -> i32 {
    let digits = count.max(1).to_string().len() as i32;
    (digits * DIGIT_WIDTH + LABEL_PADDING).max(MIN_GUTTER_WIDTH)
}

/// Outer width of a gutter display whose labels need `label_width`, with
/// room for its vertical scrollbar and text margins.
pub fn display_width(label_width: i32, scrollbar: i32) -> i32 {
    label_width + scrollbar.max(0) + DISPLAY_MARGINS
}

/// Height to hold back under the gutter so it shows as many rows as the
/// editor beside it. The editor loses `scrollbar` pixels to a horizontal
/// scrollbar once its widest line, `widest_line` pixels, overflows the
/// `text_area` it has.
pub fn bottom_inset(widest_line: f64, text_area: i32, scrollbar: i32) -> i32 {
    if widest_line > f64::from(text_area.max(0)) {
        scrollbar.max(0)
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_has_one_line() {
        assert_eq!(line_count(""), 1);
        assert_eq!(line_number_rows(line_count("")), "1");
    }

    #[test]
    fn test_counts_newlines_plus_one() {
        assert_eq!(line_count("a\nb\nc"), 3);
        assert_eq!(line_count("a\nb\nc\nd"), 4);
        assert_eq!(line_count("trailing\n"), 2);
        assert_eq!(line_count("\n\n\n"), 4);
    }

    #[test]
    fn test_carriage_returns_are_not_lines() {
        assert_eq!(line_count("a\r\nb"), 2);
        assert_eq!(line_count("a\rb"), 1);
    }

    #[test]
    fn test_rows_are_sequential() {
        assert_eq!(line_number_rows(3), "1\n2\n3");
        let rows = line_number_rows(120);
        let labels: Vec<&str> = rows.lines().collect();
        assert_eq!(labels.len(), 120);
        assert_eq!(labels.first(), Some(&"1"));
        assert_eq!(labels.last(), Some(&"120"));
    }

    #[test]
    fn test_zero_count_still_shows_first_row() {
        assert_eq!(line_number_rows(0), "1");
    }

    #[test]
    fn test_gutter_width_grows_with_digits() {
        assert_eq!(gutter_width(1), MIN_GUTTER_WIDTH);
        assert_eq!(gutter_width(999), MIN_GUTTER_WIDTH);
        assert_eq!(gutter_width(1000), MIN_GUTTER_WIDTH + DIGIT_WIDTH);
        assert!(gutter_width(1_000_000) > gutter_width(10_000));
    }

    #[test]
    fn test_labels_fit_beside_scrollbar() {
        // 16px is FLTK's default scrollbar size.
        for count in [9, 999, 12_345] {
            let digits = count.to_string().len() as i32;
            let outer = display_width(gutter_width(count), 16);
            assert!(outer - 16 - DISPLAY_MARGINS >= digits * DIGIT_WIDTH);
        }
        assert_eq!(display_width(MIN_GUTTER_WIDTH, -4), MIN_GUTTER_WIDTH + DISPLAY_MARGINS);
    }

    #[test]
    fn test_bottom_inset_tracks_horizontal_scrollbar() {
        assert_eq!(bottom_inset(300.0, 800, 16), 0);
        assert_eq!(bottom_inset(800.0, 800, 16), 0);
        assert_eq!(bottom_inset(800.5, 800, 16), 16);
        assert_eq!(bottom_inset(10.0, -20, 16), 16);
        assert_eq!(bottom_inset(0.0, 0, 16), 0);
    }
}
