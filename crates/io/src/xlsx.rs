// Excel file import (xlsx, xls, xlsb, ods)
//
// One-way conversion: the first sheet's header row plus data rows
// become a RawTable for the reconciliation engine.

use std::path::Path;

use billrecon_core::{RawCell, RawTable};
use calamine::{open_workbook_auto, Data, Reader};

/// Read the first sheet of an Excel file into a raw table.
///
/// The first row is taken as the header; every later row contributes
/// one cell per column. calamine ranges are rectangular, so all
/// columns come out the same length.
pub fn read_table(path: &Path) -> Result<RawTable, String> {
    let mut workbook =
        open_workbook_auto(path).map_err(|e| format!("Failed to open Excel file: {e}"))?;

    let sheet_names = workbook.sheet_names().to_vec();
    let first_sheet = sheet_names
        .first()
        .ok_or_else(|| format!("{}: file contains no sheets", path.display()))?;

    let range = workbook
        .worksheet_range(first_sheet)
        .map_err(|e| format!("Failed to read sheet '{first_sheet}': {e}"))?;

    let mut rows = range.rows();
    let header = rows
        .next()
        .ok_or_else(|| format!("{}: sheet '{first_sheet}' is empty", path.display()))?;

    let mut columns: Vec<(String, Vec<RawCell>)> = header
        .iter()
        .enumerate()
        .map(|(index, cell)| (header_name(cell, index), Vec::new()))
        .collect();

    for row in rows {
        for ((_, cells), cell) in columns.iter_mut().zip(row.iter()) {
            cells.push(convert_cell(cell));
        }
    }

    let mut table = RawTable::new();
    for (name, cells) in columns {
        table.push_column(name, cells);
    }
    Ok(table)
}

fn header_name(cell: &Data, index: usize) -> String {
    let name = match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Empty => String::new(),
        other => other.to_string(),
    };
    if name.is_empty() {
        // Unnamed header cells still need a stable lookup key
        format!("Column{}", index + 1)
    } else {
        name
    }
}

fn convert_cell(cell: &Data) -> RawCell {
    match cell {
        Data::Empty => RawCell::Empty,
        Data::String(s) => {
            if s.is_empty() {
                RawCell::Empty
            } else {
                RawCell::Text(s.clone())
            }
        }
        Data::Float(n) => RawCell::Number(*n),
        Data::Int(n) => RawCell::Number(*n as f64),
        Data::Bool(b) => RawCell::Text(if *b { "TRUE" } else { "FALSE" }.to_string()),
        Data::Error(e) => RawCell::Text(format!("#{e:?}")),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(datetime) => RawCell::Date(datetime.date()),
            // No calendar mapping: surface the raw serial so the
            // engine reports it in the parse error
            None => RawCell::Number(dt.as_f64()),
        },
        Data::DateTimeIso(s) | Data::DurationIso(s) => RawCell::Text(s.clone()),
    }
}
