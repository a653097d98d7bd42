use std::fmt;

/// Fatal processing errors. None are retried; the batch aborts on the
/// first one.
#[derive(Debug)]
pub enum ReconError {
    /// JSON parse / deserialization error in the batch config.
    ConfigParse(String),
    /// Config validation error (empty entry list, empty field, ...).
    ConfigValidation(String),
    /// Required column header missing from an input sheet.
    MissingColumn { source: String, column: String },
    /// Selected columns disagree on row count.
    ColumnLengthMismatch {
        source: String,
        column: String,
        expected: usize,
        found: usize,
    },
    /// Unparseable date cell.
    DateParse { source: String, row: usize, value: String },
    /// Unparseable amount cell.
    AmountParse { source: String, row: usize, value: String },
    /// Type label not in the source's vocabulary.
    UnrecognizedBillType { source: String, row: usize, label: String },
    /// IO error (file read, etc.).
    Io(String),
}

impl fmt::Display for ReconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigParse(msg) => write!(f, "config parse error: {msg}"),
            Self::ConfigValidation(msg) => write!(f, "config validation error: {msg}"),
            Self::MissingColumn { source, column } => {
                write!(f, "{source}: missing column '{column}'")
            }
            Self::ColumnLengthMismatch { source, column, expected, found } => {
                write!(
                    f,
                    "{source}: column '{column}' has {found} row(s), expected {expected}"
                )
            }
            Self::DateParse { source, row, value } => {
                write!(f, "{source}, row {row}: cannot parse date '{value}'")
            }
            Self::AmountParse { source, row, value } => {
                write!(f, "{source}, row {row}: cannot parse amount '{value}'")
            }
            Self::UnrecognizedBillType { source, row, label } => {
                write!(f, "{source}, row {row}: unrecognized bill type '{label}'")
            }
            Self::Io(msg) => write!(f, "IO error: {msg}"),
        }
    }
}

impl std::error::Error for ReconError {}
