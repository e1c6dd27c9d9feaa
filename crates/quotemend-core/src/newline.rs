// crates/quotemend-core/src/newline.rs
//
// Line-break tokens recognized inside guarded spans.
// Catalog order is load-bearing: CRLF must be replaced before its one-byte
// constituents, otherwise a single break would be replaced twice.

pub const CR: char = '\r';
pub const LF: char = '\n';

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NewlineToken {
    CrLf,
    Lf,
    Cr,
}

impl NewlineToken {
    pub const fn as_str(self) -> &'static str {
        match self {
            NewlineToken::CrLf => "\r\n",
            NewlineToken::Lf => "\n",
            NewlineToken::Cr => "\r",
        }
    }

    pub const fn byte_len(self) -> usize {
        self.as_str().len()
    }
}

/// The fixed newline catalog, two-byte token first.
pub const CATALOG: [NewlineToken; 3] = [NewlineToken::CrLf, NewlineToken::Lf, NewlineToken::Cr];

/// True if `s` contains any catalog token.
pub fn contains_newline(s: &str) -> bool {
    s.contains([CR, LF])
}
