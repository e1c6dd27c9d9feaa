// crates/quotemend-cli/src/cmd/inspect.rs

use std::path::PathBuf;

use clap::Args;
use quotemend_core::newline::contains_newline;
use quotemend_core::repair;
use quotemend_core::scan::{SpanKind, Spans};

use crate::cmd::{located, RepairOpts};
use crate::io::text_file;
use crate::report;

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Input file to scan
    #[arg(long)]
    pub r#in: String,

    #[command(flatten)]
    pub opts: RepairOpts,

    /// List up to N guarded fields that contain line breaks
    #[arg(long, default_value_t = 20)]
    pub show: usize,
}

pub fn run(args: InspectArgs) -> anyhow::Result<()> {
    let cfg = args.opts.to_config()?;
    let src = PathBuf::from(&args.r#in);

    report::print_file_meta("quotemend inspect", &src);
    let loaded = text_file::read_text(&src)?;
    let text = &loaded.text;
    eprintln!("crc32           = {:08x}", loaded.crc32);

    let repaired = repair(text, &cfg).map_err(|e| located(e, &args.r#in, text))?;
    report::print_report(text, &repaired.text, &repaired.report);

    if args.show > 0 && repaired.report.normalized_spans > 0 {
        let shown = args.show.min(repaired.report.normalized_spans);
        eprintln!("--- first {shown} multi-line fields ---");
        let spans = Spans::new(text, cfg.guard)
            .filter_map(Result::ok)
            .filter(|s| s.kind == SpanKind::Guarded && contains_newline(s.slice(text)))
            .take(shown);
        for (i, span) in spans.enumerate() {
            let (line, col) = report::locate(text, span.start);
            eprintln!(
                "#{:>3} offset={} line={} col={} bytes={}",
                i + 1,
                span.start,
                line,
                col,
                span.len()
            );
        }
    }

    println!(
        "{}\tguarded={}\tnormalized={}\tcrcrlf={}",
        args.r#in,
        repaired.report.guarded_spans,
        repaired.report.normalized_spans,
        repaired.report.quirky_breaks
    );
    Ok(())
}
