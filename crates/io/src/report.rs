// Diff report rendering: one formatted xlsx sheet per batch entry.

use std::path::Path;

use billrecon_core::diff::DiffReport;
use billrecon_core::COLUMN_HEADERS;
use rust_xlsxwriter::{Color, Format, FormatAlign, Workbook};

/// Data rows sit below the single header row.
const HEADER_ROW_OFFSET: usize = 1;

/// Column width factor applied to the longest content length.
const WIDTH_FACTOR: f64 = 1.2;

/// Write the diff report to `path` (full path, extension included).
///
/// Marked cells get a red font; every cell is centered both ways;
/// each column is sized to its longest content.
pub fn write_report(path: &Path, report: &DiffReport) -> Result<(), String> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    let centered = Format::new()
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter);
    let highlighted = centered.clone().set_font_color(Color::Red);

    for (col, header) in COLUMN_HEADERS.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, *header, &centered)
            .map_err(|e| format!("Failed to write header '{header}': {e}"))?;
    }

    for (row, diff_row) in report.rows.iter().enumerate() {
        for (col, cell) in diff_row.cells.iter().enumerate() {
            let format = if report.marks.contains(&(row, col)) {
                &highlighted
            } else {
                &centered
            };
            worksheet
                .write_string_with_format((row + HEADER_ROW_OFFSET) as u32, col as u16, cell, format)
                .map_err(|e| format!("Failed to write cell ({row}, {col}): {e}"))?;
        }
    }

    for col in 0..COLUMN_HEADERS.len() {
        let max_len = report
            .rows
            .iter()
            .map(|row| row.cells[col].chars().count())
            .chain(std::iter::once(COLUMN_HEADERS[col].chars().count()))
            .max()
            .unwrap_or(0);
        worksheet
            .set_column_width(col as u16, (max_len + 2) as f64 * WIDTH_FACTOR)
            .map_err(|e| format!("Failed to size column {col}: {e}"))?;
    }

    workbook
        .save(path)
        .map_err(|e| format!("Failed to save XLSX file: {e}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use billrecon_core::diff::build_report;
    use billrecon_core::{BillType, Document, MatchOutput, MatchPair};
    use calamine::{open_workbook_auto, Data, Reader};
    use chrono::NaiveDate;

    fn doc(reference: &str, amount: f64) -> Document {
        Document {
            reference_number: reference.into(),
            bill_date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            amount_due: amount,
            bill_type: BillType::Bill,
        }
    }

    #[test]
    fn report_round_trips_headers_and_rows() {
        let output = MatchOutput {
            pairs: vec![MatchPair {
                source: None,
                target: doc("5", 1234.5),
            }],
            duplicate_source_refs: 0,
        };
        let report = build_report(&output);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("diff.xlsx");
        write_report(&path, &report).unwrap();

        let mut workbook = open_workbook_auto(&path).unwrap();
        let sheet_names = workbook.sheet_names().to_vec();
        let range = workbook.worksheet_range(&sheet_names[0]).unwrap();
        let rows: Vec<_> = range.rows().collect();

        assert_eq!(rows.len(), 2); // header + one diff row
        assert_eq!(
            rows[0][0],
            Data::String("Search Result Reference Number".into())
        );
        assert_eq!(rows[1][0], Data::String("Not Found".into()));
        assert_eq!(rows[1][1], Data::String("5".into()));
        assert_eq!(rows[1][5], Data::String("1,234.50".into()));
    }

    #[test]
    fn empty_report_still_writes_the_header() {
        let report = build_report(&MatchOutput {
            pairs: vec![],
            duplicate_source_refs: 0,
        });

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.xlsx");
        write_report(&path, &report).unwrap();

        let mut workbook = open_workbook_auto(&path).unwrap();
        let sheet_names = workbook.sheet_names().to_vec();
        let range = workbook.worksheet_range(&sheet_names[0]).unwrap();
        assert_eq!(range.rows().count(), 1);
    }
}
