// crates/quotemend-core/src/normalize.rs

use std::borrow::Cow;

use crate::newline::{contains_newline, NewlineToken};

/// Replace every catalog token in `field` with `replacement`, token by token
/// in catalog order. Returns the input borrowed when it holds no breaks.
pub fn normalize_field<'a>(
    field: &'a str,
    catalog: &[NewlineToken],
    replacement: &str,
) -> Cow<'a, str> {
    if !contains_newline(field) {
        return Cow::Borrowed(field);
    }

    let mut out = field.to_owned();
    for tok in catalog {
        if out.contains(tok.as_str()) {
            out = out.replace(tok.as_str(), replacement);
        }
    }

    if out.len() != field.len() {
        tracing::debug!(
            before = field.len(),
            after = out.len(),
            "normalized embedded line breaks in guarded span"
        );
    }
    Cow::Owned(out)
}
