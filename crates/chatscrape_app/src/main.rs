//! `chatscrape`: extracts user messages from a saved chat page into a
//! delimited text report.

mod cli;

use std::fs;
use std::process::ExitCode;

use anyhow::Context;
use chatscrape_engine::{
    decode_page, extract_transcript, ReportOptions, ReportSink, ReportSummary,
};
use scrape_logging::LogDestination;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(args) = cli::parse(&args) else {
        println!("{}", cli::USAGE);
        return ExitCode::FAILURE;
    };

    scrape_logging::initialize(LogDestination::Terminal);

    if !args.input.exists() {
        println!("File not found: {}", args.input.display());
        return ExitCode::FAILURE;
    }

    match run(&args) {
        Ok(summary) => {
            log::info!(
                "{} rows from {} user messages",
                summary.row_count,
                summary.message_count
            );
            println!("Output written to: {}", args.output.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            // A failed run leaves whatever was already written in place.
            println!("Error processing file: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &cli::CliArgs) -> anyhow::Result<ReportSummary> {
    let bytes = fs::read(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let page = decode_page(&bytes)?;
    log::debug!("decoded {} as {}", args.input.display(), page.encoding_label);

    let mut sink = ReportSink::create(&args.output)?;
    let summary = extract_transcript(&page.html, &mut sink, &ReportOptions::default())?;
    sink.finish()?;
    Ok(summary)
}
