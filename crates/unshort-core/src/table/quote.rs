//! Byte-level scan of raw CSV input for what the csv parser hides.
//!
//! The csv parser accepts EOF as the end of a quoted field, which silently
//! swallows the rest of the file into one cell; we reject that instead. It
//! also drops blank lines, which in a one-column file are empty rows.

/// Result of [`scan`].
#[derive(Debug, Default, PartialEq, Eq)]
pub(super) struct Scan {
    /// Input ends while a quoted field is still open.
    pub ends_inside_quotes: bool,
    /// Byte offsets of blank lines outside quoted fields.
    pub blank_lines: Vec<u64>,
}

/// A quote only opens a quoted field at the start of a field; a doubled
/// quote inside a quoted field is an escaped literal. A blank line is a
/// line terminator (`\n` or `\r\n`) directly at the start of a line.
pub(super) fn scan(data: &[u8], delimiter: u8) -> Scan {
    let mut out = Scan::default();
    let mut in_quotes = false;
    let mut at_field_start = true;
    let mut at_line_start = true;
    let mut i = 0;
    while i < data.len() {
        let b = data[i];
        if in_quotes {
            if b == b'"' {
                if data.get(i + 1) == Some(&b'"') {
                    i += 1;
                } else {
                    in_quotes = false;
                }
            }
        } else if b == b'"' && at_field_start {
            in_quotes = true;
        } else if at_line_start
            && (b == b'\n' || (b == b'\r' && data.get(i + 1) == Some(&b'\n')))
        {
            out.blank_lines.push(i as u64);
        }
        at_field_start = !in_quotes && (b == delimiter || b == b'\n' || b == b'\r');
        at_line_start = !in_quotes && b == b'\n';
        i += 1;
    }
    out.ends_inside_quotes = in_quotes;
    out
}
