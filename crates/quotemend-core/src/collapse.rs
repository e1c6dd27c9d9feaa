// crates/quotemend-core/src/collapse.rs
//
// CR CR LF shows up when a legacy Mac break is written in front of a Windows
// break. It is collapsed to a single CR LF everywhere, inside guarded spans
// or not.

pub const QUIRKY_BREAK: &str = "\r\r\n";
pub const STANDARD_BREAK: &str = "\r\n";

/// Returns the rewritten buffer and the number of sites collapsed.
pub fn collapse_quirky_breaks(buffer: String) -> (String, usize) {
    if !buffer.contains(QUIRKY_BREAK) {
        return (buffer, 0);
    }

    let out = buffer.replace(QUIRKY_BREAK, STANDARD_BREAK);
    // Each site shrinks by exactly one byte.
    let count = buffer.len() - out.len();
    if count > 0 {
        tracing::debug!(count, "collapsed CR CR LF sequences");
    }
    (out, count)
}
