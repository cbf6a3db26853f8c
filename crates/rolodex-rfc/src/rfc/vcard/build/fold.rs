//! Optional line folding.

use rolodex_core::constants::CRLF;

/// Longest physical line, in octets, before a fold is inserted.
const MAX_LINE_OCTETS: usize = 75;

/// Appends `line` to `output`, folding it into physical lines of at most
/// 75 octets.
///
/// Continuation lines start with a single space, which counts toward their
/// length. Folds never split a UTF-8 sequence. No trailing CRLF is written.
pub fn push_folded(line: &str, output: &mut String) {
    if line.len() <= MAX_LINE_OCTETS {
        output.push_str(line);
        return;
    }

    let mut used = 0;

    for c in line.chars() {
        let width = c.len_utf8();
        if used + width > MAX_LINE_OCTETS {
            output.push_str(CRLF);
            output.push(' ');
            used = 1;
        }
        output.push(c);
        used += width;
    }
}
