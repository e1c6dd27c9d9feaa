// crates/quotemend-core/src/scan/spans.rs
//
// Two-state classifier over the input buffer.
//
// Unguarded span: text up to and including the next opening guard (or the
// tail of the buffer). Guarded span: field content up to and including the
// closing guard. Together the spans partition the buffer.

use crate::error::{RepairError, Result};
use crate::scan::guard::find_guard;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpanKind {
    Unguarded,
    Guarded,
}

/// Half-open byte range `[start, end)` over the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub kind: SpanKind,
}

impl Span {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.end]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Unguarded,
    /// Inside a field; holds the offset of the opening guard.
    Guarded { opened_at: usize },
    Done,
}

/// Lazy span sequence. Yields `Err` at most once, then fuses.
#[derive(Debug)]
pub struct Spans<'a> {
    text: &'a str,
    guard: char,
    cursor: usize,
    state: State,
}

impl<'a> Spans<'a> {
    pub fn new(text: &'a str, guard: char) -> Self {
        Spans {
            text,
            guard,
            cursor: 0,
            state: State::Unguarded,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the cursor to just past the guard at `g`.
    fn advance_past(&mut self, g: usize) -> Result<usize> {
        let next = g + self.guard.len_utf8();
        if next < self.cursor || next > self.text.len() {
            return Err(RepairError::CursorOverrun {
                position: next,
                total_length: self.text.len(),
            });
        }
        self.cursor = next;
        Ok(next)
    }

    fn fail(&mut self, err: RepairError) -> Option<Result<Span>> {
        self.state = State::Done;
        Some(Err(err))
    }

    fn step(&mut self) -> Option<Result<Span>> {
        if self.state == State::Done {
            return None;
        }
        let len = self.text.len();
        if self.cursor > len {
            return self.fail(RepairError::CursorOverrun {
                position: self.cursor,
                total_length: len,
            });
        }

        let start = self.cursor;
        match self.state {
            State::Done => None,
            State::Unguarded => match find_guard(self.text, start, self.guard) {
                Some(g) => {
                    let end = match self.advance_past(g) {
                        Ok(end) => end,
                        Err(e) => return self.fail(e),
                    };
                    self.state = State::Guarded { opened_at: g };
                    Some(Ok(Span {
                        start,
                        end,
                        kind: SpanKind::Unguarded,
                    }))
                }
                None => {
                    self.state = State::Done;
                    self.cursor = len;
                    if start == len {
                        None
                    } else {
                        Some(Ok(Span {
                            start,
                            end: len,
                            kind: SpanKind::Unguarded,
                        }))
                    }
                }
            },
            State::Guarded { opened_at } => match find_guard(self.text, start, self.guard) {
                Some(g) => {
                    let end = match self.advance_past(g) {
                        Ok(end) => end,
                        Err(e) => return self.fail(e),
                    };
                    self.state = State::Unguarded;
                    Some(Ok(Span {
                        start,
                        end,
                        kind: SpanKind::Guarded,
                    }))
                }
                None => self.fail(RepairError::UnterminatedGuard {
                    opened_at,
                    stalled_at: len,
                    total_length: len,
                }),
            },
        }
    }
}

impl Iterator for Spans<'_> {
    type Item = Result<Span>;

    fn next(&mut self) -> Option<Self::Item> {
        self.step()
    }
}

impl std::iter::FusedIterator for Spans<'_> {}
