// crates/quotemend-core/src/lib.rs

pub mod error;
pub mod validate;

pub mod collapse;
pub mod config;
pub mod diag;
pub mod newline;
pub mod normalize;
pub mod repair;
pub mod scan;

pub use crate::config::RepairConfig;
pub use crate::error::{RepairError, Result};
pub use crate::repair::{repair, RepairReport, Repaired};
