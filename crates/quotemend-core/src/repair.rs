// crates/quotemend-core/src/repair.rs

use std::borrow::Cow;

use crate::collapse::collapse_quirky_breaks;
use crate::config::RepairConfig;
use crate::diag::BreakCounts;
use crate::error::Result;
use crate::normalize::normalize_field;
use crate::scan::{SpanKind, Spans};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RepairReport {
    pub input_bytes: usize,
    pub output_bytes: usize,
    pub input_breaks: BreakCounts,
    pub output_breaks: BreakCounts,
    /// CR CR LF sites collapsed to CR LF.
    pub quirky_breaks: usize,
    pub guarded_spans: usize,
    /// Guarded spans whose content changed under normalization.
    pub normalized_spans: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Repaired {
    pub text: String,
    pub report: RepairReport,
}

/// Rewrite guarded spans only; no collapsing, no counting.
///
/// Returns the rewritten buffer plus (guarded spans, normalized spans).
pub fn rewrite_spans(input: &str, cfg: &RepairConfig) -> Result<(String, usize, usize)> {
    let mut out = String::with_capacity(input.len());
    let mut guarded = 0usize;
    let mut normalized = 0usize;

    for span in Spans::new(input, cfg.guard) {
        let span = span?;
        let text = span.slice(input);
        match span.kind {
            SpanKind::Unguarded => out.push_str(text),
            SpanKind::Guarded => {
                guarded += 1;
                match normalize_field(text, cfg.catalog(), &cfg.replacement) {
                    Cow::Borrowed(s) => out.push_str(s),
                    Cow::Owned(s) => {
                        if s != text {
                            normalized += 1;
                        }
                        out.push_str(&s);
                    }
                }
            }
        }
    }

    Ok((out, guarded, normalized))
}

/// Run one full repair: span rewrite, then the CR CR LF collapse.
///
/// Either error is terminal; no partial output is returned.
pub fn repair(input: &str, cfg: &RepairConfig) -> Result<Repaired> {
    let (rewritten, guarded_spans, normalized_spans) = rewrite_spans(input, cfg)?;
    let (text, quirky_breaks) = collapse_quirky_breaks(rewritten);

    let report = RepairReport {
        input_bytes: input.len(),
        output_bytes: text.len(),
        input_breaks: BreakCounts::of(input),
        output_breaks: BreakCounts::of(&text),
        quirky_breaks,
        guarded_spans,
        normalized_spans,
    };

    tracing::debug!(
        guarded_spans,
        normalized_spans,
        quirky_breaks,
        bytes_in = report.input_bytes,
        bytes_out = report.output_bytes,
        "repair done"
    );

    Ok(Repaired { text, report })
}
