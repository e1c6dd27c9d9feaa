// crates/quotemend-core/src/config.rs

use crate::newline::{NewlineToken, CATALOG};

pub const DEFAULT_GUARD: char = '"';
pub const DEFAULT_REPLACEMENT: &str = " ";

/// Per-run settings handed to [`crate::repair`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RepairConfig {
    pub guard: char,
    pub replacement: String,
}

impl RepairConfig {
    pub fn new(guard: char, replacement: impl Into<String>) -> Self {
        RepairConfig {
            guard,
            replacement: replacement.into(),
        }
    }

    pub fn catalog(&self) -> &'static [NewlineToken] {
        &CATALOG
    }
}

impl Default for RepairConfig {
    fn default() -> Self {
        RepairConfig::new(DEFAULT_GUARD, DEFAULT_REPLACEMENT)
    }
}
