use crate::model::BillType;

/// Raw column headers for the four logical record fields.
#[derive(Debug, Clone, Copy)]
pub struct ColumnNames {
    pub reference: &'static str,
    pub date: &'static str,
    pub amount: &'static str,
    pub bill_type: &'static str,
}

/// Fixed contract for one input source: where each logical field
/// lives and how its type labels map onto [`BillType`].
#[derive(Debug, Clone, Copy)]
pub struct SourceSpec {
    /// Short name used in progress and error messages.
    pub name: &'static str,
    pub columns: ColumnNames,
    vocabulary: &'static [(&'static str, BillType)],
}

impl SourceSpec {
    /// Canonical type for a source-specific label (trimmed, exact
    /// match), or None when the label is not in the vocabulary.
    pub fn bill_type_for(&self, label: &str) -> Option<BillType> {
        let label = label.trim();
        self.vocabulary
            .iter()
            .find(|(known, _)| *known == label)
            .map(|(_, bill_type)| *bill_type)
    }
}

/// The search-result export.
pub const SEARCH_RESULT: SourceSpec = SourceSpec {
    name: "search result",
    columns: ColumnNames {
        reference: "ReferenceNumber",
        date: "BillDate",
        amount: "AmountDue",
        bill_type: "BillType",
    },
    vocabulary: &[("Bill", BillType::Bill), ("Credit", BillType::Credit)],
};

/// The IR statement export.
pub const STATEMENT: SourceSpec = SourceSpec {
    name: "IR statement",
    columns: ColumnNames {
        reference: "Document Number",
        date: "Document Date",
        amount: "Amount Due",
        bill_type: "Document Type",
    },
    vocabulary: &[
        ("Invoice", BillType::Bill),
        ("Credit Memo", BillType::Credit),
    ],
};
