// crates/quotemend-core/src/scan/mod.rs

pub mod guard;
pub mod spans;

pub use guard::find_guard;
pub use spans::{Span, SpanKind, Spans};
