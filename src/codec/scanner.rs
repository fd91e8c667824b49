//! Lenient tokenizer for hand-editable map rows and declarations
//!
//! Rows are scanned with a three-state machine: skip padding, read one value,
//! skip to the next delimiter. A value that does not parse becomes 0 and the
//! scan continues, so a malformed or short row never aborts a load.

/// Characters skipped before each value in a row
const ROW_PADDING: [u8; 4] = [b'{', b' ', b'\t', b','];

/// Characters that end a value in a row
const VALUE_DELIMITERS: [u8; 3] = [b',', b'}', b'\n'];

/// Parse a decimal integer at the start of `text`
///
/// Leading whitespace is skipped and a single `+` or `-` sign is accepted.
/// Trailing characters are ignored. Returns the value and the number of bytes
/// consumed, or `None` when no digits follow or the value overflows `i32`.
pub fn parse_leading_int(text: &str) -> Option<(i32, usize)> {
    let bytes = text.as_bytes();
    let start = bytes
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(bytes.len());

    let mut pos = start;
    let negative = match bytes.get(pos) {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };

    let digits_start = pos;
    let mut magnitude: i64 = 0;
    while let Some(&b) = bytes.get(pos) {
        if !b.is_ascii_digit() {
            break;
        }
        magnitude = magnitude
            .checked_mul(10)?
            .checked_add(i64::from(b - b'0'))?;
        if magnitude > i64::from(i32::MAX) + 1 {
            return None;
        }
        pos += 1;
    }

    if pos == digits_start {
        return None;
    }

    let value = if negative { -magnitude } else { magnitude };
    i32::try_from(value).ok().map(|v| (v, pos))
}

/// Match a declaration made of fixed words followed by an integer
///
/// Words must appear in order; whitespace between them is optional, as with a
/// `scanf` pattern. The first word must start the line. Anything after the
/// integer (such as a trailing `;`) is ignored.
pub fn parse_declaration(line: &str, words: &[&str]) -> Option<i32> {
    let mut rest = line;
    for (index, word) in words.iter().enumerate() {
        if index > 0 {
            rest = rest.trim_start();
        }
        rest = rest.strip_prefix(word)?;
    }
    parse_leading_int(rest).map(|(value, _)| value)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    SkipPadding,
    ReadValue,
    SkipToDelimiter,
}

/// Yields the cell values of one stored row, left to right
///
/// The iterator never ends: once the line is exhausted every further cell
/// reads as 0. Callers take exactly the grid width.
#[derive(Debug, Clone)]
pub struct RowScanner<'a> {
    line: &'a str,
    pos: usize,
}

impl<'a> RowScanner<'a> {
    /// Start scanning at the beginning of `line`
    pub const fn new(line: &'a str) -> Self {
        Self { line, pos: 0 }
    }

    fn current(&self) -> Option<u8> {
        self.line.as_bytes().get(self.pos).copied()
    }

    fn remaining(&self) -> &'a str {
        self.line.get(self.pos..).unwrap_or_default()
    }
}

impl Iterator for RowScanner<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        let mut state = ScanState::SkipPadding;
        let mut value = 0;

        loop {
            state = match state {
                ScanState::SkipPadding => {
                    while self.current().is_some_and(|b| ROW_PADDING.contains(&b)) {
                        self.pos += 1;
                    }
                    ScanState::ReadValue
                }
                ScanState::ReadValue => {
                    // Unparsable text falls back to an empty cell
                    value = parse_leading_int(self.remaining()).map_or(0, |(v, _)| v);
                    ScanState::SkipToDelimiter
                }
                ScanState::SkipToDelimiter => {
                    while self
                        .current()
                        .is_some_and(|b| !VALUE_DELIMITERS.contains(&b))
                    {
                        self.pos += 1;
                    }
                    return Some(value);
                }
            };
        }
    }
}

/// Scan exactly `width` values from a stored row
pub fn scan_row(line: &str, width: usize) -> Vec<i32> {
    RowScanner::new(line).take(width).collect()
}
