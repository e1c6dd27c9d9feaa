// crates/quotemend-cli/src/cmd/mod.rs

pub mod fix;
pub mod inspect;

use clap::Args;
use quotemend_core::validate::{parse_guard, validate_config};
use quotemend_core::{RepairConfig, RepairError};

use crate::replacement::{self, ReplacementName};
use crate::report::locate;

/// Guard and replacement options shared by every subcommand.
#[derive(Args, Debug)]
pub struct RepairOpts {
    /// Guard (quote) character; exactly one character
    #[arg(long, default_value = "\"")]
    pub guard: String,

    /// Replacement for breaks inside guarded fields
    #[arg(long, value_enum, default_value_t = ReplacementName::Space)]
    pub replace: ReplacementName,

    /// Literal replacement token; overrides --replace
    #[arg(long)]
    pub replace_literal: Option<String>,
}

impl RepairOpts {
    pub fn to_config(&self) -> anyhow::Result<RepairConfig> {
        let guard = parse_guard(&self.guard)?;
        let cfg = RepairConfig::new(
            guard,
            replacement::resolve(self.replace, self.replace_literal.as_deref()),
        );
        validate_config(&cfg)?;
        Ok(cfg)
    }
}

/// Attach the source location to a core failure.
pub fn located(err: RepairError, path: &str, text: &str) -> anyhow::Error {
    match err.offset() {
        Some(off) => {
            let (line, col) = locate(text, off);
            anyhow::Error::new(err).context(format!(
                "{path}: line {line}, column {col} (offset {off})"
            ))
        }
        None => anyhow::Error::new(err),
    }
}
