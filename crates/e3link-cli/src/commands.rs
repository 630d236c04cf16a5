use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::Local;
use comfy_table::Table;
use tracing::{info, info_span, warn};

use e3link_ingest::{IngestOptions, delimiter_name, read_code_table_with_options};
use e3link_model::UrlTemplate;
use e3link_report::{write_links, write_run_report_json};

use crate::cli::{DelimiterArg, GenerateArgs, InspectArgs};
use crate::pipeline::{generate_links, resolve_input};
use crate::summary::apply_table_style;
use crate::types::GenerateResult;

pub fn run_generate(args: &GenerateArgs) -> Result<GenerateResult> {
    let input = resolve_input(args.input.clone(), Path::new("."))?;
    let template = args
        .template
        .as_deref()
        .map_or_else(UrlTemplate::default, UrlTemplate::from);
    let span = info_span!("generate", input = %input.display());
    let _guard = span.enter();

    let options = IngestOptions {
        delimiter: args.delimiter.map(DelimiterArg::as_byte),
    };
    let ingest_start = Instant::now();
    let table = read_code_table_with_options(&input, options)?;
    info!(
        records = table.records.len(),
        delimiter = delimiter_name(table.delimiter),
        header = table.header.is_some(),
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );

    let generate_start = Instant::now();
    let outcome = generate_links(&table.records, &template);
    info!(
        links = outcome.links.len(),
        issues = outcome.issues.len(),
        duration_ms = generate_start.elapsed().as_millis(),
        "generation complete"
    );
    if !outcome.issues.is_empty() {
        warn!(count = outcome.issues.len(), "some records were rejected");
    }

    // An all-invalid batch writes nothing unless the lenient flag asks for a
    // header-only file.
    let no_links = outcome.links.is_empty();
    let failed = no_links && !args.write_empty;
    let output = if args.dry_run || failed {
        None
    } else {
        let path = args.output.clone().unwrap_or_else(default_output_name);
        write_links(&path, &outcome.links)
            .with_context(|| format!("write output {}", path.display()))?;
        info!(path = %path.display(), links = outcome.links.len(), "output written");
        Some(path)
    };

    let result = GenerateResult {
        input,
        output,
        template,
        links: outcome.links,
        issues: outcome.issues,
        dry_run: args.dry_run,
        failed,
    };
    if let Some(report_path) = &args.report {
        write_run_report_json(report_path, &result.to_run_report())
            .with_context(|| format!("write report {}", report_path.display()))?;
        info!(path = %report_path.display(), "run report written");
    }
    Ok(result)
}

pub fn run_inspect(args: &InspectArgs) -> Result<()> {
    let options = IngestOptions {
        delimiter: args.delimiter.map(DelimiterArg::as_byte),
    };
    let table = read_code_table_with_options(&args.input, options)?;

    println!("File: {}", args.input.display());
    let mut overview = Table::new();
    overview.set_header(vec!["Property", "Value"]);
    apply_table_style(&mut overview);
    overview.add_row(vec!["Delimiter", delimiter_name(table.delimiter)]);
    overview.add_row(vec![
        "Header row".to_string(),
        table
            .header
            .as_ref()
            .map_or_else(|| "none".to_string(), |cells| cells.join(", ")),
    ]);
    overview.add_row(vec!["Records".to_string(), table.records.len().to_string()]);
    println!("{overview}");

    if table.records.is_empty() {
        return Ok(());
    }
    let mut preview = Table::new();
    preview.set_header(vec!["Row", "SerialCode"]);
    apply_table_style(&mut preview);
    for record in table.records.iter().take(args.limit) {
        preview.add_row(vec![record.row.to_string(), record.raw.clone()]);
    }
    println!("{preview}");
    if table.records.len() > args.limit {
        println!("... and {} more records", table.records.len() - args.limit);
    }
    Ok(())
}

/// Timestamped default output name in the working directory.
fn default_output_name() -> PathBuf {
    PathBuf::from(format!(
        "dynamic_links_{}.csv",
        Local::now().format("%Y%m%d_%H%M%S")
    ))
}
