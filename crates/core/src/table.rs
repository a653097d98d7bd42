use chrono::NaiveDate;

/// One input cell, decoded to the few shapes the normalizer cares
/// about. The io crate converts reader cells into this so the engine
/// never depends on a spreadsheet crate.
#[derive(Debug, Clone, PartialEq)]
pub enum RawCell {
    Empty,
    Text(String),
    Number(f64),
    Date(NaiveDate),
}

impl RawCell {
    /// Rendering for error messages.
    pub fn display(&self) -> String {
        match self {
            Self::Empty => "<empty>".to_string(),
            Self::Text(s) => s.clone(),
            Self::Number(n) => n.to_string(),
            Self::Date(d) => d.to_string(),
        }
    }
}

/// Ordered named columns, looked up by header name.
#[derive(Debug, Default)]
pub struct RawTable {
    columns: Vec<(String, Vec<RawCell>)>,
}

impl RawTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_column(&mut self, name: impl Into<String>, cells: Vec<RawCell>) {
        self.columns.push((name.into(), cells));
    }

    /// Cells of the first column with a matching header.
    pub fn column(&self, name: &str) -> Option<&[RawCell]> {
        self.columns
            .iter()
            .find(|(header, _)| header == name)
            .map(|(_, cells)| cells.as_slice())
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_lookup_by_header() {
        let mut table = RawTable::new();
        table.push_column("A", vec![RawCell::Number(1.0)]);
        table.push_column("B", vec![RawCell::Text("x".into())]);

        assert_eq!(table.column("B"), Some(&[RawCell::Text("x".into())][..]));
        assert!(table.column("C").is_none());
        assert!(!table.is_empty());
    }
}
