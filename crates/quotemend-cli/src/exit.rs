// crates/quotemend-cli/src/exit.rs
//
// Exit codes:
//   0  ok
//   2  usage (clap)
//   3  malformed input (unterminated guard, invalid UTF-8)
//   4  I/O failure
//   5  invalid configuration
//   70 internal defect (cursor overrun)

use std::process::ExitCode;

use quotemend_core::RepairError;

pub const MALFORMED_INPUT: u8 = 3;
pub const IO_FAILURE: u8 = 4;
pub const BAD_CONFIG: u8 = 5;
pub const INTERNAL: u8 = 70;

pub fn code_for(err: &anyhow::Error) -> ExitCode {
    ExitCode::from(raw_code_for(err))
}

pub fn raw_code_for(err: &anyhow::Error) -> u8 {
    if let Some(re) = err.downcast_ref::<RepairError>() {
        return match re {
            RepairError::UnterminatedGuard { .. } => MALFORMED_INPUT,
            RepairError::CursorOverrun { .. } => INTERNAL,
            RepairError::Validation(_) => BAD_CONFIG,
        };
    }
    if err.downcast_ref::<std::string::FromUtf8Error>().is_some() {
        return MALFORMED_INPUT;
    }
    if err.downcast_ref::<std::io::Error>().is_some() {
        return IO_FAILURE;
    }
    // Anything left over comes from file handling around the repair.
    IO_FAILURE
}
