// crates/quotemend-core/src/validate.rs

use crate::config::RepairConfig;
use crate::error::{RepairError, Result};
use crate::newline::{contains_newline, CR, LF};

pub fn validate_config(c: &RepairConfig) -> Result<()> {
    // A guard that is itself a break would split on the very thing we rewrite.
    if c.guard == CR || c.guard == LF {
        return Err(RepairError::Validation(
            "guard must not be a line-break character".into(),
        ));
    }

    if c.replacement.is_empty() {
        return Err(RepairError::Validation(
            "replacement token must not be empty".into(),
        ));
    }
    // Keeps normalization idempotent.
    if contains_newline(&c.replacement) {
        return Err(RepairError::Validation(
            "replacement token must not contain CR or LF".into(),
        ));
    }
    if c.replacement.contains(c.guard) {
        return Err(RepairError::Validation(
            "replacement token must not contain the guard character".into(),
        ));
    }

    Ok(())
}

/// Parse a guard argument, which must be exactly one code point.
pub fn parse_guard(s: &str) -> Result<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        (None, _) => Err(RepairError::Validation("guard must not be empty".into())),
        (Some(_), Some(_)) => Err(RepairError::Validation(format!(
            "guard must be exactly one character, got {s:?}"
        ))),
    }
}
