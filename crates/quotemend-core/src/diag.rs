// crates/quotemend-core/src/diag.rs

use crate::newline::{CR, LF};

pub fn count_char(buffer: &str, ch: char) -> usize {
    if ch.is_ascii() {
        let b = ch as u8;
        buffer.bytes().filter(|&x| x == b).count()
    } else {
        buffer.chars().filter(|&c| c == ch).count()
    }
}

/// CR / LF occurrence counts for one buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BreakCounts {
    pub cr: usize,
    pub lf: usize,
}

impl BreakCounts {
    pub fn of(buffer: &str) -> Self {
        BreakCounts {
            cr: count_char(buffer, CR),
            lf: count_char(buffer, LF),
        }
    }
}
