use crate::syntax::{ARGUMENT_CLOSE, ARGUMENT_OPEN};

/// Extent of a bracketed group starting at an opening bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Balanced {
    /// Bytes covered, brackets included.
    pub len: usize,
    /// `false` when the input ran out before the group balanced.
    pub closed: bool,
}

/// Finds the extent of the bracket group `text` starts with.
///
/// Only the number of opens and closes matters since there is a single
/// bracket pair, so the walk keeps two counters instead of a stack. An
/// unterminated group covers everything up to the end of `text`.
///
/// Returns `None` if `text` does not start with an opening bracket.
pub fn scan_balanced(text: &str) -> Option<Balanced> {
    if !text.starts_with(ARGUMENT_OPEN) {
        return None;
    }

    let mut opens = 1;
    let mut closes = 0;
    let mut position = ARGUMENT_OPEN.len_utf8();

    // each cached index is searched for again only once the scan has passed it
    let mut next_open = find_from(text, position, ARGUMENT_OPEN);
    let mut next_close = find_from(text, position, ARGUMENT_CLOSE);

    while closes < opens {
        let Some(close) = next_close else {
            return Some(Balanced {
                len: text.len(),
                closed: false,
            });
        };

        match next_open {
            Some(open) if open < close => {
                opens += 1;
                position = open + ARGUMENT_OPEN.len_utf8();
                next_open = find_from(text, position, ARGUMENT_OPEN);
            }
            _ => {
                closes += 1;
                position = close + ARGUMENT_CLOSE.len_utf8();
                next_close = find_from(text, position, ARGUMENT_CLOSE);
            }
        }
    }

    Some(Balanced {
        len: position,
        closed: true,
    })
}

fn find_from(text: &str, from: usize, c: char) -> Option<usize> {
    text[from..].find(c).map(|index| from + index)
}
