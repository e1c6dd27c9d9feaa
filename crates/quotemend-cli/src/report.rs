// crates/quotemend-cli/src/report.rs

use std::path::Path;
use std::time::UNIX_EPOCH;

use quotemend_core::RepairReport;

/// Lines as a reader would count them: CR LF, LF and lone CR each end a line,
/// and a trailing unterminated line counts too.
pub fn count_lines(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut lines = 0usize;
    let mut i = 0usize;
    let mut open = false;
    while i < bytes.len() {
        match bytes[i] {
            b'\r' => {
                lines += 1;
                open = false;
                if bytes.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
            }
            b'\n' => {
                lines += 1;
                open = false;
            }
            _ => open = true,
        }
        i += 1;
    }
    lines + usize::from(open)
}

/// 1-based (line, column) of a byte offset, for error messages.
/// Breaks follow `count_lines`; columns count chars.
pub fn locate(text: &str, offset: usize) -> (usize, usize) {
    let offset = offset.min(text.len());
    let head = text.get(..offset).unwrap_or(text);
    let bytes = text.as_bytes();
    let mut line = 1usize;
    let mut line_start = 0usize;
    for (i, &b) in head.as_bytes().iter().enumerate() {
        let ends_line = match b {
            b'\n' => true,
            b'\r' => bytes.get(i + 1) != Some(&b'\n'),
            _ => false,
        };
        if ends_line {
            line += 1;
            line_start = i + 1;
        }
    }
    let col = head[line_start..].chars().count() + 1;
    (line, col)
}

pub fn print_file_meta(label: &str, path: &Path) {
    eprintln!("--- {label} ---");
    eprintln!("file            = {}", path.display());
    match std::fs::metadata(path) {
        Ok(meta) => {
            eprintln!("size            = {}", meta.len());
            let modified = meta
                .modified()
                .ok()
                .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
                .map(|d| d.as_secs());
            match modified {
                Some(secs) => eprintln!("modified_unix   = {secs}"),
                None => eprintln!("modified_unix   = n/a"),
            }
        }
        Err(e) => eprintln!("metadata        = unavailable ({e})"),
    }
}

pub fn print_report(input: &str, output: &str, r: &RepairReport) {
    eprintln!("--- counts ---");
    eprintln!("bytes           = {} -> {}", r.input_bytes, r.output_bytes);
    eprintln!(
        "lines           = {} -> {}",
        count_lines(input),
        count_lines(output)
    );
    eprintln!(
        "cr              = {} -> {}",
        r.input_breaks.cr, r.output_breaks.cr
    );
    eprintln!(
        "lf              = {} -> {}",
        r.input_breaks.lf, r.output_breaks.lf
    );
    eprintln!("guarded_spans   = {}", r.guarded_spans);
    eprintln!("normalized      = {}", r.normalized_spans);
    eprintln!("crcrlf_fixed    = {}", r.quirky_breaks);
}
