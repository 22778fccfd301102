use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display width of a string in terminal cells.
pub fn display_width(s: &str) -> u16 {
    s.lines()
        .map(UnicodeWidthStr::width)
        .max()
        .unwrap_or(0)
        .min(u16::MAX as usize) as u16
}

/// Number of lines a string occupies.
pub fn line_count(s: &str) -> u16 {
    s.lines().count().min(u16::MAX as usize) as u16
}

/// Display width of a single character (control characters count as zero).
pub fn char_width(c: char) -> u16 {
    c.width().unwrap_or(0) as u16
}
