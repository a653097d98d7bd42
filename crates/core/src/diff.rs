use std::collections::BTreeSet;

use crate::model::MatchOutput;

/// Output column headers, in sheet order. Field pairs sit at columns
/// (0,1) reference, (2,3) date, (4,5) amount, (6,7) type.
pub const COLUMN_HEADERS: [&str; 8] = [
    "Search Result Reference Number",
    "IR Statement Reference Number",
    "Search Result Bill Date",
    "IR Statement Bill Date",
    "Search Result Amount Due",
    "IR Statement Amount Due",
    "Search Result Bill Type",
    "IR Statement Bill Type",
];

/// Placeholder rendered on the source side when no counterpart exists.
pub const NOT_FOUND: &str = "Not Found";

/// One output row, cells in [`COLUMN_HEADERS`] order.
#[derive(Debug, Clone)]
pub struct DiffRow {
    pub cells: [String; 8],
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DiffSummary {
    /// Records that survived normalization on each side.
    pub source_records: usize,
    pub target_records: usize,
    /// Pairs where both sides exist but disagree on some field.
    pub mismatched: usize,
    /// Target records with no source counterpart.
    pub missing: usize,
    /// Source records discarded by last-wins reference dedup.
    pub duplicate_source_refs: usize,
}

/// Rendered report: display rows plus the 0-based (row, col)
/// coordinates of every cell the renderer should highlight.
#[derive(Debug, Default)]
pub struct DiffReport {
    pub rows: Vec<DiffRow>,
    pub marks: BTreeSet<(usize, usize)>,
    pub summary: DiffSummary,
}

/// Build display rows and highlight coordinates from the match output.
///
/// Per logical field: if the source side is absent or the two typed
/// values differ, both columns of the pair are marked — symmetric
/// highlighting even for one-sided absence. Dates render as
/// `YYYY-MM-DD`, amounts as grouped two-decimal strings.
pub fn build_report(output: &MatchOutput) -> DiffReport {
    let mut report = DiffReport::default();
    report.summary.duplicate_source_refs = output.duplicate_source_refs;

    for (row_index, pair) in output.pairs.iter().enumerate() {
        let target = &pair.target;
        let row = match &pair.source {
            Some(source) => {
                report.summary.mismatched += 1;
                DiffRow {
                    cells: [
                        source.reference_number.clone(),
                        target.reference_number.clone(),
                        source.bill_date.to_string(),
                        target.bill_date.to_string(),
                        format_amount(source.amount_due),
                        format_amount(target.amount_due),
                        source.bill_type.to_string(),
                        target.bill_type.to_string(),
                    ],
                }
            }
            None => {
                report.summary.missing += 1;
                DiffRow {
                    cells: [
                        NOT_FOUND.into(),
                        target.reference_number.clone(),
                        NOT_FOUND.into(),
                        target.bill_date.to_string(),
                        NOT_FOUND.into(),
                        format_amount(target.amount_due),
                        NOT_FOUND.into(),
                        target.bill_type.to_string(),
                    ],
                }
            }
        };
        report.rows.push(row);

        let source = pair.source.as_ref();
        let differing_fields = [
            source.map_or(true, |s| s.reference_number != target.reference_number),
            source.map_or(true, |s| s.bill_date != target.bill_date),
            source.map_or(true, |s| s.amount_due != target.amount_due),
            source.map_or(true, |s| s.bill_type != target.bill_type),
        ];
        for (field, differs) in differing_fields.into_iter().enumerate() {
            if differs {
                report.marks.insert((row_index, field * 2));
                report.marks.insert((row_index, field * 2 + 1));
            }
        }
    }

    report
}

/// Grouped two-decimal amount string: 1234.5 becomes "1,234.50".
pub fn format_amount(amount: f64) -> String {
    let negative = amount < 0.0;
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if negative {
        format!("-{grouped}.{frac_part}")
    } else {
        format!("{grouped}.{frac_part}")
    }
}
