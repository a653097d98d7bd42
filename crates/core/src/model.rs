use chrono::NaiveDate;

/// Canonical bill classification. Each input source maps its own label
/// vocabulary onto this enum (see [`crate::sources`]); `Display`
/// renders the output vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillType {
    Bill,
    Credit,
}

impl std::fmt::Display for BillType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bill => write!(f, "Bill"),
            Self::Credit => write!(f, "Credit"),
        }
    }
}

/// A single normalized bill record from either source.
///
/// Two records are equal iff all four fields compare equal. Records
/// are built once during normalization and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Normalized join key (see [`crate::normalize::normalize_reference`]).
    pub reference_number: String,
    pub bill_date: NaiveDate,
    pub amount_due: f64,
    pub bill_type: BillType,
}

/// A target record paired with its source counterpart, if any.
/// The target side is always present: the statement drives the join.
#[derive(Debug, Clone)]
pub struct MatchPair {
    pub source: Option<Document>,
    pub target: Document,
}

/// Matcher output: mismatched or source-missing pairs, in target
/// order. Exact matches are elided entirely.
#[derive(Debug)]
pub struct MatchOutput {
    pub pairs: Vec<MatchPair>,
    /// Source records discarded because a later record reused their
    /// reference number (last one wins).
    pub duplicate_source_refs: usize,
}
