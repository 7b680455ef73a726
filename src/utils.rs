use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cut `s` to at most `max_width` terminal columns, ending in "…" when shortened.
pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > max_width - 1 {
            break;
        }
        out.push(ch);
        width += ch_width;
    }
    out.push('…');
    out
}

/// Number of rows `s` occupies when word-wrapped to `max_width` columns.
pub fn wrapped_line_count(s: &str, max_width: usize) -> usize {
    if max_width == 0 {
        return 0;
    }

    let mut lines = 0;
    for line in s.split('\n') {
        lines += 1;
        let mut current = 0;
        for word in line.split_whitespace() {
            let width = word.width();
            if current == 0 {
                current = width;
            } else if current + 1 + width <= max_width {
                current += 1 + width;
            } else {
                lines += 1;
                current = width;
            }
            // Words wider than a row are broken across rows.
            while current > max_width {
                lines += 1;
                current -= max_width;
            }
        }
    }
    lines
}
