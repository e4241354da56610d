use crate::error::{RaffleError, Result};
use crate::types::{Cell, Table};
use calamine::{open_workbook_auto_from_rs, Data, Reader};
use std::io::Cursor;

/// Decode the first worksheet of an xlsx/xlsm/xlsb/xls/ods file into a
/// row-major table. Row 0 and column 0 are the top-left corner of the used
/// range, wherever it sits on the sheet.
pub fn decode_first_sheet(bytes: Vec<u8>) -> Result<Table> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| RaffleError::spreadsheet("Workbook has no sheets"))??;

    let table: Table = range
        .rows()
        .map(|row| row.iter().map(cell_from_data).collect())
        .collect();

    tracing::debug!("Decoded first sheet: {} rows", table.len());
    Ok(table)
}

fn cell_from_data(data: &Data) -> Cell {
    match data {
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Float(f) => Cell::Number(*f),
        Data::String(s) => Cell::Text(s.clone()),
        Data::Bool(b) => Cell::Bool(*b),
        Data::DateTime(dt) => Cell::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
        _ => Cell::Empty,
    }
}
