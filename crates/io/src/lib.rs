// Spreadsheet I/O - Excel import and report rendering

pub mod report;
pub mod xlsx;
