//! Read a contact sheet into a [`Table`]

use std::collections::HashMap;
use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

use crate::error::{NormalizeError, Result};
use crate::table::{Table, Value};

/// Read one sheet of a workbook (xlsx, xlsm, xls or ods)
///
/// The first row is the header. When `sheet` is `None` the first sheet of
/// the workbook is used.
pub fn read_table(path: &Path, sheet: Option<&str>) -> Result<Table> {
    let malformed = |message: String| NormalizeError::MalformedInput {
        path: path.to_path_buf(),
        message,
    };

    let mut workbook = open_workbook_auto(path).map_err(|e| malformed(e.to_string()))?;

    let sheet_name = match sheet {
        Some(name) => {
            if !workbook.sheet_names().iter().any(|s| s == name) {
                return Err(malformed(format!("no sheet named '{}'", name)));
            }
            name.to_string()
        }
        None => workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| malformed("workbook has no sheets".to_string()))?,
    };

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| malformed(format!("failed to read sheet '{}': {}", sheet_name, e)))?;

    let mut rows = range.rows();
    let header = rows
        .next()
        .ok_or_else(|| malformed(format!("sheet '{}' is empty", sheet_name)))?;

    let mut table = Table::new(parse_header(header));
    for row in rows {
        table.push_row(row.iter().map(cell_to_value).collect());
    }

    log::info!(
        "Read {} rows x {} columns from {} [{}]",
        table.row_count(),
        table.columns().len(),
        path.display(),
        sheet_name
    );

    Ok(table)
}

/// Column names from the header row
///
/// Blank cells become `Unnamed: <index>` and repeated names get `.1`, `.2`…
/// suffixes so every column stays addressable.
fn parse_header(header: &[Data]) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut names = Vec::with_capacity(header.len());

    for (col, cell) in header.iter().enumerate() {
        let base = cell_to_value(cell)
            .to_text()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| format!("Unnamed: {}", col));

        let mut name = base.clone();
        while seen.contains_key(&name) {
            let count = seen.entry(base.clone()).or_default();
            *count += 1;
            name = format!("{}.{}", base, count);
        }
        seen.insert(name.clone(), 0);
        names.push(name);
    }

    names
}

/// Convert a spreadsheet cell to a [`Value`]
fn cell_to_value(cell: &Data) -> Value {
    match cell {
        Data::Empty => Value::Null,
        Data::String(s) if s.is_empty() => Value::Null,
        Data::String(s) => Value::String(s.clone()),
        Data::Int(i) => Value::Int(*i),
        Data::Float(f) => {
            // Whole numbers come back as floats from xlsx
            if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                Value::Int(*f as i64)
            } else {
                Value::Float(*f)
            }
        }
        Data::Bool(b) => Value::Bool(*b),
        Data::DateTime(dt) => {
            if dt.is_duration() {
                Value::Float(dt.as_f64())
            } else {
                excel_serial_to_datetime(dt.as_f64())
                    .map(Value::DateTime)
                    .unwrap_or(Value::Float(dt.as_f64()))
            }
        }
        Data::DateTimeIso(s) | Data::DurationIso(s) => Value::String(s.clone()),
        Data::Error(e) => {
            log::debug!("Cell error {:?} read as null", e);
            Value::Null
        }
    }
}

/// Excel serial date (1900 system) to a timestamp, rounded to the second
fn excel_serial_to_datetime(serial: f64) -> Option<NaiveDateTime> {
    if !serial.is_finite() || serial < 0.0 {
        return None;
    }
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_hms_opt(0, 0, 0)?;
    let seconds = (serial * 86_400.0).round() as i64;
    epoch.checked_add_signed(TimeDelta::try_seconds(seconds)?)
}
