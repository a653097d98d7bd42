use crate::diff::{build_report, DiffReport};
use crate::error::ReconError;
use crate::matcher::match_documents;
use crate::normalize::normalize;
use crate::sources::{SEARCH_RESULT, STATEMENT};
use crate::table::RawTable;

/// Run one reconciliation: normalize both sides, join on reference
/// number, build the display report. Pure and synchronous; the caller
/// does all file I/O.
pub fn run(search: &RawTable, statement: &RawTable) -> Result<DiffReport, ReconError> {
    let source = normalize(search, &SEARCH_RESULT)?;
    let target = normalize(statement, &STATEMENT)?;

    let output = match_documents(&source, &target);

    let mut report = build_report(&output);
    report.summary.source_records = source.len();
    report.summary.target_records = target.len();
    Ok(report)
}
