use std::collections::HashMap;

use crate::model::{Document, MatchOutput, MatchPair};

/// One-sided join: the target (statement) list drives, the source
/// (search result) list is the lookup. Exactly-equal pairs produce
/// nothing; everything else comes back in target order.
///
/// Duplicate reference numbers on the source side keep the last
/// record seen (known limitation, surfaced via the overwrite count).
/// Source records with no target counterpart are never reported; the
/// reconciliation is intentionally one-directional.
pub fn match_documents(source: &[Document], target: &[Document]) -> MatchOutput {
    let mut by_reference: HashMap<&str, &Document> = HashMap::with_capacity(source.len());
    let mut duplicate_source_refs = 0;
    for document in source {
        if by_reference
            .insert(document.reference_number.as_str(), document)
            .is_some()
        {
            duplicate_source_refs += 1;
        }
    }

    let mut pairs = Vec::new();
    for target_document in target {
        match by_reference.get(target_document.reference_number.as_str()) {
            None => pairs.push(MatchPair {
                source: None,
                target: target_document.clone(),
            }),
            Some(found) if *found != target_document => pairs.push(MatchPair {
                source: Some((*found).clone()),
                target: target_document.clone(),
            }),
            Some(_) => {} // exact match: elided
        }
    }

    MatchOutput {
        pairs,
        duplicate_source_refs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BillType;
    use chrono::NaiveDate;

    fn doc(reference: &str, date: &str, amount: f64, bill_type: BillType) -> Document {
        Document {
            reference_number: reference.into(),
            bill_date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            amount_due: amount,
            bill_type,
        }
    }

    #[test]
    fn equal_records_emit_nothing() {
        let source = vec![doc("1", "2024-01-01", 100.0, BillType::Bill)];
        let target = vec![doc("1", "2024-01-01", 100.0, BillType::Bill)];
        let output = match_documents(&source, &target);
        assert!(output.pairs.is_empty());
        assert_eq!(output.duplicate_source_refs, 0);
    }

    #[test]
    fn missing_source_is_reported() {
        let source = vec![doc("1", "2024-01-01", 100.0, BillType::Bill)];
        let target = vec![doc("5", "2024-01-02", 50.0, BillType::Credit)];
        let output = match_documents(&source, &target);
        assert_eq!(output.pairs.len(), 1);
        assert!(output.pairs[0].source.is_none());
        assert_eq!(output.pairs[0].target.reference_number, "5");
    }

    #[test]
    fn field_mismatch_is_reported_with_both_sides() {
        let source = vec![doc("1", "2024-01-01", 100.0, BillType::Bill)];
        let target = vec![doc("1", "2024-01-02", 100.0, BillType::Bill)];
        let output = match_documents(&source, &target);
        assert_eq!(output.pairs.len(), 1);
        let pair = &output.pairs[0];
        assert_eq!(pair.source.as_ref().unwrap().reference_number, "1");
        assert_ne!(pair.source.as_ref().unwrap().bill_date, pair.target.bill_date);
    }

    #[test]
    fn target_order_is_preserved() {
        let source = vec![doc("2", "2024-01-01", 1.0, BillType::Bill)];
        let target = vec![
            doc("9", "2024-01-01", 1.0, BillType::Bill),
            doc("2", "2024-02-01", 1.0, BillType::Bill),
            doc("7", "2024-01-01", 1.0, BillType::Bill),
        ];
        let output = match_documents(&source, &target);
        let refs: Vec<_> = output
            .pairs
            .iter()
            .map(|p| p.target.reference_number.as_str())
            .collect();
        assert_eq!(refs, ["9", "2", "7"]);
    }

    #[test]
    fn duplicate_source_reference_last_wins() {
        let source = vec![
            doc("1", "2024-01-01", 100.0, BillType::Bill),
            doc("1", "2024-01-31", 200.0, BillType::Bill),
        ];
        // Target agrees with the later source record, so nothing is
        // emitted for it
        let target = vec![doc("1", "2024-01-31", 200.0, BillType::Bill)];
        let output = match_documents(&source, &target);
        assert!(output.pairs.is_empty());
        assert_eq!(output.duplicate_source_refs, 1);
    }

    #[test]
    fn source_only_records_never_surface() {
        let source = vec![
            doc("1", "2024-01-01", 100.0, BillType::Bill),
            doc("2", "2024-01-02", 200.0, BillType::Bill),
        ];
        let target = vec![doc("1", "2024-01-01", 100.0, BillType::Bill)];
        let output = match_documents(&source, &target);
        assert!(output.pairs.is_empty());
    }
}
