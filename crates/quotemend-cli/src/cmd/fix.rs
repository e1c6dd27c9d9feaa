// crates/quotemend-cli/src/cmd/fix.rs

use std::path::{Path, PathBuf};

use clap::Args;
use quotemend_core::repair;

use crate::cmd::{located, RepairOpts};
use crate::io::{backup, text_file};
use crate::report;

#[derive(Args, Debug)]
pub struct FixArgs {
    /// Input file; rewritten in place unless --out is given
    #[arg(long)]
    pub r#in: String,

    /// Write the repaired text here instead of over the input
    #[arg(long)]
    pub out: Option<String>,

    #[command(flatten)]
    pub opts: RepairOpts,

    /// Skip the backup copy when rewriting in place
    #[arg(long, default_value_t = false)]
    pub no_backup: bool,

    /// Directory for the backup copy (default: next to the input)
    #[arg(long)]
    pub backup_dir: Option<String>,

    /// Report only; write nothing
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}

pub fn run(args: FixArgs) -> anyhow::Result<()> {
    let cfg = args.opts.to_config()?;
    let src = PathBuf::from(&args.r#in);

    report::print_file_meta("quotemend fix", &src);
    let loaded = text_file::read_text(&src)?;
    eprintln!("crc32           = {:08x}", loaded.crc32);
    eprintln!(
        "fingerprint     = {}",
        text_file::fingerprint(loaded.text.as_bytes())
    );

    let repaired = repair(&loaded.text, &cfg).map_err(|e| located(e, &args.r#in, &loaded.text))?;
    report::print_report(&loaded.text, &repaired.text, &repaired.report);

    if args.dry_run {
        eprintln!("dry run: nothing written");
        return Ok(());
    }

    let dest = args.out.as_deref().map(PathBuf::from);
    let in_place = dest.as_deref().map_or(true, |d| same_file(&src, d));
    let dest = dest.unwrap_or_else(|| src.clone());

    if in_place && repaired.text == loaded.text {
        eprintln!("fix ok: nothing to repair, {} left untouched", src.display());
        return Ok(());
    }

    if in_place && !args.no_backup {
        let dir = args.backup_dir.as_deref().map(Path::new);
        let bak = backup::create_backup(&src, loaded.text.as_bytes(), dir)?;
        eprintln!("backup          = {}", bak.display());
    }

    text_file::write_atomic(&dest, repaired.text.as_bytes())?;
    tracing::info!(out = %dest.display(), bytes = repaired.text.len(), "repaired file written");
    eprintln!(
        "fix ok: out={} guarded={} normalized={} crcrlf_fixed={}",
        dest.display(),
        repaired.report.guarded_spans,
        repaired.report.normalized_spans,
        repaired.report.quirky_breaks
    );
    Ok(())
}

/// `--out` naming the input (by any spelling) still rewrites it in place.
fn same_file(a: &Path, b: &Path) -> bool {
    match (std::fs::canonicalize(a), std::fs::canonicalize(b)) {
        (Ok(x), Ok(y)) => x == y,
        _ => false,
    }
}
