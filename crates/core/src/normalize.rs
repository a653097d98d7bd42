use chrono::{NaiveDate, NaiveDateTime};

use crate::error::ReconError;
use crate::model::Document;
use crate::sources::SourceSpec;
use crate::table::{RawCell, RawTable};

/// Date-only formats tried against free-form date text, most common
/// first.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%m/%d/%y",
    "%Y/%m/%d",
    "%d-%b-%Y",
    "%b %d, %Y",
    "%B %d, %Y",
    "%d %b %Y",
];

/// Datetime formats tried after the date-only ones; only the date
/// component is kept.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Convert one source's raw table into canonical [`Document`]s.
///
/// Rows are walked strictly by position across the four mapped
/// columns; the columns must agree on length. Rows with a missing
/// reference number are skipped entirely; any other unparseable cell
/// aborts the run.
pub fn normalize(table: &RawTable, spec: &SourceSpec) -> Result<Vec<Document>, ReconError> {
    let column = |name: &'static str| -> Result<&[RawCell], ReconError> {
        table.column(name).ok_or_else(|| ReconError::MissingColumn {
            source: spec.name.into(),
            column: name.into(),
        })
    };

    let references = column(spec.columns.reference)?;
    let dates = column(spec.columns.date)?;
    let amounts = column(spec.columns.amount)?;
    let labels = column(spec.columns.bill_type)?;

    for (name, cells) in [
        (spec.columns.date, dates),
        (spec.columns.amount, amounts),
        (spec.columns.bill_type, labels),
    ] {
        if cells.len() != references.len() {
            return Err(ReconError::ColumnLengthMismatch {
                source: spec.name.into(),
                column: name.into(),
                expected: references.len(),
                found: cells.len(),
            });
        }
    }

    let mut documents = Vec::new();

    for row in 0..references.len() {
        let Some(reference_number) = normalize_reference(&references[row]) else {
            // Missing reference: the row carries no record
            continue;
        };

        let bill_date = parse_date(&dates[row]).ok_or_else(|| ReconError::DateParse {
            source: spec.name.into(),
            row,
            value: dates[row].display(),
        })?;

        let amount_due = parse_amount(&amounts[row]).ok_or_else(|| ReconError::AmountParse {
            source: spec.name.into(),
            row,
            value: amounts[row].display(),
        })?;

        let label = labels[row].display();
        let bill_type =
            spec.bill_type_for(&label)
                .ok_or_else(|| ReconError::UnrecognizedBillType {
                    source: spec.name.into(),
                    row,
                    label: label.clone(),
                })?;

        documents.push(Document {
            reference_number,
            bill_date,
            amount_due,
            bill_type,
        });
    }

    Ok(documents)
}

/// Canonical reference-number form, or None when the cell holds no
/// value (empty, NaN, or the literal `nan` text).
///
/// Numeric values and numeric-looking text drop a trailing ".0" when
/// integral and keep their plain decimal form otherwise; anything
/// non-numeric is kept verbatim (trimmed). Idempotent: normalizing an
/// already-normalized string returns it unchanged.
pub fn normalize_reference(cell: &RawCell) -> Option<String> {
    match cell {
        RawCell::Empty => None,
        RawCell::Number(n) => canonical_number(*n),
        RawCell::Date(d) => Some(d.to_string()),
        RawCell::Text(s) => {
            let text = s.trim();
            if text.is_empty() || text.eq_ignore_ascii_case("nan") {
                return None;
            }
            match text.parse::<f64>() {
                Ok(n) => canonical_number(n).or_else(|| Some(text.to_string())),
                Err(_) => Some(text.to_string()),
            }
        }
    }
}

/// Integers render without a fractional part; non-finite values count
/// as missing.
fn canonical_number(n: f64) -> Option<String> {
    if !n.is_finite() {
        return None;
    }
    if n.fract() == 0.0 && n.abs() < 1e15 {
        Some(format!("{}", n as i64))
    } else {
        Some(format!("{n}"))
    }
}

/// Date component of a typed cell, or a free-form parse of date text.
fn parse_date(cell: &RawCell) -> Option<NaiveDate> {
    match cell {
        RawCell::Date(date) => Some(*date),
        RawCell::Text(text) => parse_date_text(text),
        RawCell::Number(_) | RawCell::Empty => None,
    }
}

fn parse_date_text(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return Some(date);
        }
    }
    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(text, format) {
            return Some(datetime.date());
        }
    }
    None
}

/// Numeric cell as-is; text parsed after stripping `$`, `,` and
/// surrounding whitespace.
fn parse_amount(cell: &RawCell) -> Option<f64> {
    match cell {
        RawCell::Number(n) if n.is_finite() => Some(*n),
        RawCell::Text(text) => {
            let cleaned = text.trim().trim_start_matches('$').replace(',', "");
            cleaned.parse::<f64>().ok().filter(|n| n.is_finite())
        }
        _ => None,
    }
}
