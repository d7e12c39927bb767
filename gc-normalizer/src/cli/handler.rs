//! Normalize command handler

use anyhow::{Context, Result};
use colored::*;

use super::NormalizeArgs;
use crate::config::NormalizeConfig;
use crate::excel::{read_table, write_table};
use crate::normalize::{NormalizeReport, Normalized, standardize_with};
use crate::table::Table;

/// Preview cells longer than this are shortened on screen
const PREVIEW_CELL_WIDTH: usize = 24;

/// Read, normalize and write one spreadsheet
///
/// Nothing is written unless every step before the write succeeded.
pub fn handle_normalize_command(args: NormalizeArgs) -> Result<()> {
    if args.no_color {
        colored::control::set_override(false);
    }

    let mut config = match &args.config {
        Some(path) => NormalizeConfig::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => NormalizeConfig::default(),
    };
    if let Some(sheet_name) = args.sheet_name.clone() {
        config.output_sheet = sheet_name;
    }

    let table = read_table(&args.input, args.sheet.as_deref())
        .with_context(|| format!("Failed to read spreadsheet: {}", args.input.display()))?;

    println!(
        "Loaded {} ({} rows, {} columns)",
        args.input.display().to_string().cyan(),
        table.row_count(),
        table.columns().len()
    );

    let Normalized { table, report } =
        standardize_with(table, &config).context("Failed to normalize spreadsheet")?;

    print_report(&report);

    if let Some(limit) = args.preview {
        println!();
        println!("{}", format_preview(&table, limit));
    }

    if args.dry_run {
        println!("{}", "Dry run: no file written".yellow());
        return Ok(());
    }

    write_table(&table, &args.output, &config.output_sheet)
        .with_context(|| format!("Failed to write output to: {}", args.output.display()))?;

    println!(
        "Transformed file saved to: {}",
        args.output.display().to_string().bright_green()
    );

    Ok(())
}

fn print_report(report: &NormalizeReport) {
    println!(
        "Addresses split: {}, postal codes found: {}, codes rewritten: {}",
        report.addresses_split.to_string().bold(),
        report.postal_codes_found.to_string().bold(),
        report.codes_rewritten.to_string().bold()
    );

    if report.truncated.is_empty() {
        println!("No values truncated");
        return;
    }

    println!(
        "Truncated {} values:",
        report.total_truncated().to_string().bold()
    );
    for (column, count) in &report.truncated {
        println!("  {} {}", format!("{:<28}", column).dimmed(), count);
    }
}

/// Render the header and first `limit` rows as a pipe-separated table
fn format_preview(table: &Table, limit: usize) -> String {
    let mut lines = Vec::with_capacity(limit + 1);
    lines.push(table.columns().join(" | "));

    for row in table.rows().iter().take(limit) {
        let cells: Vec<String> = row
            .iter()
            .map(|value| match value.to_text() {
                Some(text) => shorten(&text, PREVIEW_CELL_WIDTH),
                None => String::new(),
            })
            .collect();
        lines.push(cells.join(" | "));
    }

    if table.row_count() > limit {
        lines.push(format!("... {} more rows", table.row_count() - limit));
    }

    lines.join("\n")
}

fn shorten(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let head: String = text.chars().take(width.saturating_sub(1)).collect();
        format!("{}…", head)
    }
}
