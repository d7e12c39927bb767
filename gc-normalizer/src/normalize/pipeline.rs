//! Column pipeline turning a raw contact table into a GC-ready one

use crate::config::NormalizeConfig;
use crate::error::{NormalizeError, Result};
use crate::table::{Table, Value};

use super::address::split_address;
use super::code::transform_code;
use super::constraints::REQUIRED_TRUNCATIONS;
use super::report::NormalizeReport;
use super::truncate::truncate;

/// Column holding the free-text address, replaced by [`ADDRESS_COLUMNS`]
pub const ADDRESS_COLUMN: &str = "Adresse";
/// Column holding the client/supplier code
pub const CODE_COLUMN: &str = "Code";
/// Derived address columns, in the order they are added
pub const ADDRESS_COLUMNS: [&str; 5] = ["Adresse1", "Adresse2", "Code postal", "Commune", "Pays"];

/// Output of a normalization pass
#[derive(Debug, Clone)]
pub struct Normalized {
    pub table: Table,
    pub report: NormalizeReport,
}

/// Normalize a table with the built-in GC limits
pub fn standardize(table: Table) -> Result<Normalized> {
    standardize_with(table, &NormalizeConfig::default())
}

/// Normalize a table for GC import
///
/// Splits `Adresse`, rewrites `Code`, caps `Nom`/`Email`/`Téléphone` and then
/// applies every configured column limit. Row count and order are preserved
/// and columns not named anywhere are left untouched. Fails without
/// producing anything if a required column is missing.
pub fn standardize_with(mut table: Table, config: &NormalizeConfig) -> Result<Normalized> {
    for column in std::iter::once(ADDRESS_COLUMN).chain(REQUIRED_TRUNCATIONS.iter().map(|(c, _)| *c)) {
        if !table.has_column(column) {
            return Err(NormalizeError::missing_column(column));
        }
    }

    let mut report = NormalizeReport::new(table.row_count());

    split_address_column(&mut table, &mut report)?;
    log::debug!("Split '{}' into {:?}", ADDRESS_COLUMN, ADDRESS_COLUMNS);

    if table.has_column(CODE_COLUMN) {
        table.map_column(CODE_COLUMN, |code| {
            let rewritten = transform_code(code);
            if rewritten.to_text() != code.to_text() {
                report.codes_rewritten += 1;
            }
            rewritten
        });
        log::debug!("Rewrote {} codes", report.codes_rewritten);
    } else {
        log::debug!("No '{}' column, skipping code rewrite", CODE_COLUMN);
    }

    for (column, max) in REQUIRED_TRUNCATIONS {
        truncate_column(&mut table, column, *max, &mut report);
    }

    for (column, max) in &config.constraints {
        if !truncate_column(&mut table, column, *max, &mut report) {
            log::trace!("Constrained column '{}' not in table", column);
        }
    }

    Ok(Normalized { table, report })
}

fn split_address_column(table: &mut Table, report: &mut NormalizeReport) -> Result<()> {
    let addresses = table
        .column(ADDRESS_COLUMN)
        .ok_or_else(|| NormalizeError::missing_column(ADDRESS_COLUMN))?;

    let mut derived: [Vec<Value>; 5] = Default::default();
    for address in addresses {
        let parts = split_address(address);
        if parts.adresse1.is_some() {
            report.addresses_split += 1;
        }
        if parts.code_postal.is_some() {
            report.postal_codes_found += 1;
        }
        for (column, value) in derived.iter_mut().zip(parts.into_values()) {
            column.push(value);
        }
    }

    for (name, values) in ADDRESS_COLUMNS.iter().zip(derived) {
        table.set_column(name, values);
    }
    table.drop_column(ADDRESS_COLUMN);
    Ok(())
}

/// Truncate a column if present, returning whether it was
fn truncate_column(table: &mut Table, column: &str, max: usize, report: &mut NormalizeReport) -> bool {
    let mut cut = 0;
    let present = table.map_column(column, |value| {
        let truncated = truncate(value, max);
        if let Some(text) = value.to_text() {
            if text.chars().count() > max {
                cut += 1;
            }
        }
        truncated
    });
    report.record_truncated(column, cut);
    present
}
