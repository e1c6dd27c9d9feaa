// crates/quotemend-cli/src/io/mod.rs

pub mod backup;
pub mod text_file;
