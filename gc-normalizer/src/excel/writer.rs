//! Write a [`Table`] to a single-sheet xlsx workbook

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};

use crate::error::{NormalizeError, Result};
use crate::table::{Table, Value};

const DATETIME_FORMAT: &str = "yyyy-mm-dd hh:mm:ss";

/// Write `table` to `path` as one sheet named `sheet_name`
///
/// Header first, then one row per record. Null cells are left empty.
pub fn write_table(table: &Table, path: &Path, sheet_name: &str) -> Result<()> {
    let to_error = |e: XlsxError| NormalizeError::Write {
        path: path.to_path_buf(),
        message: e.to_string(),
    };

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name).map_err(to_error)?;

    fill_sheet(worksheet, table).map_err(to_error)?;

    workbook.save(path).map_err(to_error)?;

    log::info!(
        "Wrote {} rows x {} columns to {} [{}]",
        table.row_count(),
        table.columns().len(),
        path.display(),
        sheet_name
    );

    Ok(())
}

fn fill_sheet(ws: &mut Worksheet, table: &Table) -> std::result::Result<(), XlsxError> {
    let datetime_format = Format::new().set_num_format(DATETIME_FORMAT);

    for (col, name) in table.columns().iter().enumerate() {
        ws.write_string(0, col as u16, name)?;
    }

    for (row_idx, row) in table.rows().iter().enumerate() {
        let row_num = (row_idx + 1) as u32;
        for (col, value) in row.iter().enumerate() {
            write_value(ws, row_num, col as u16, value, &datetime_format)?;
        }
    }

    Ok(())
}

fn write_value(
    ws: &mut Worksheet,
    row: u32,
    col: u16,
    value: &Value,
    datetime_format: &Format,
) -> std::result::Result<(), XlsxError> {
    match value {
        Value::Null => { /* Leave cell empty */ }
        Value::String(s) => { ws.write_string(row, col, s)?; }
        Value::Int(i) => { ws.write_number(row, col, *i as f64)?; }
        Value::Float(f) if f.is_finite() => { ws.write_number(row, col, *f)?; }
        Value::Float(_) => { /* NaN/inf have no cell representation */ }
        Value::Bool(b) => { ws.write_boolean(row, col, *b)?; }
        Value::DateTime(dt) => { ws.write_datetime_with_format(row, col, dt, datetime_format)?; }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::excel::read_table;
    use crate::normalize::standardize;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("gc-normalizer-{}-{}.xlsx", std::process::id(), name))
    }

    #[test]
    fn test_round_trip_normalized_table() {
        let mut table = Table::new(["Code", "Nom", "Adresse", "Email", "Téléphone", "Capital"]);
        table.push_row(vec![
            "CLT0012345".into(),
            "SARL Dupont".into(),
            "4 quai des Chartrons 33000 Bordeaux France".into(),
            Value::Null,
            Value::Int(556000000),
            Value::Float(1500.5),
        ]);
        let normalized = standardize(table).unwrap().table;

        let path = temp_path("round-trip");
        write_table(&normalized, &path, "Feuille1").unwrap();
        let read_back = read_table(&path, Some("Feuille1")).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(read_back.columns(), normalized.columns());
        assert_eq!(read_back.get(0, "Code"), Some(&Value::from("012345")));
        assert_eq!(read_back.get(0, "Commune"), Some(&Value::from("Bordeaux")));
        assert_eq!(read_back.get(0, "Email"), Some(&Value::Null));
        assert_eq!(read_back.get(0, "Téléphone"), Some(&Value::from("556000000")));
        assert_eq!(read_back.get(0, "Capital"), Some(&Value::Float(1500.5)));
    }

    #[test]
    fn test_datetime_cells_read_back() {
        let dt = chrono::NaiveDate::from_ymd_opt(2022, 6, 30)
            .unwrap()
            .and_hms_opt(8, 15, 0)
            .unwrap();
        let mut table = Table::new(["Date_Creation"]);
        table.push_row(vec![Value::DateTime(dt)]);

        let path = temp_path("datetime");
        write_table(&table, &path, "Feuille1").unwrap();
        let read_back = read_table(&path, None).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(read_back.get(0, "Date_Creation"), Some(&Value::DateTime(dt)));
    }

    #[test]
    fn test_unwritable_path() {
        let table = Table::new(["Nom"]);
        let err = write_table(&table, Path::new("/nonexistent/dir/out.xlsx"), "Feuille1").unwrap_err();
        assert!(matches!(err, NormalizeError::Write { .. }));
    }
}
