// crates/quotemend-core/src/scan/guard.rs

/// Offset of the next `guard` at or after `from`, or `None` if none remain.
///
/// `from == text.len()` is the normal end-of-buffer probe. `from` past the end
/// or off a char boundary only happens on a caller defect and also yields
/// `None` rather than panicking.
pub fn find_guard(text: &str, from: usize, guard: char) -> Option<usize> {
    let rest = text.get(from..)?;
    rest.find(guard).map(|rel| from + rel)
}
