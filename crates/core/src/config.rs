use serde::Deserialize;

use crate::error::ReconError;

/// One batch entry: filename patterns for the two inputs and the base
/// name (no extension) of the report to write. The config file is a
/// JSON array of these, camelCase keys.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchEntry {
    pub statement_file_name: String,
    pub search_file_name: String,
    pub output_file_name: String,
}

impl BatchEntry {
    /// Parse the JSON entry list and validate it.
    pub fn parse_list(input: &str) -> Result<Vec<BatchEntry>, ReconError> {
        let entries: Vec<BatchEntry> =
            serde_json::from_str(input).map_err(|e| ReconError::ConfigParse(e.to_string()))?;
        validate(&entries)?;
        Ok(entries)
    }
}

fn validate(entries: &[BatchEntry]) -> Result<(), ReconError> {
    if entries.is_empty() {
        return Err(ReconError::ConfigValidation(
            "config contains no entries".into(),
        ));
    }
    for (index, entry) in entries.iter().enumerate() {
        for (field, value) in [
            ("statementFileName", &entry.statement_file_name),
            ("searchFileName", &entry.search_file_name),
            ("outputFileName", &entry.output_file_name),
        ] {
            if value.trim().is_empty() {
                return Err(ReconError::ConfigValidation(format!(
                    "entry {index}: {field} is empty"
                )));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_list() {
        let input = r#"[
            {
                "statementFileName": "Statement March",
                "searchFileName": "SearchResults March",
                "outputFileName": "march-diff"
            },
            {
                "statementFileName": "Statement April",
                "searchFileName": "SearchResults April",
                "outputFileName": "april-diff"
            }
        ]"#;
        let entries = BatchEntry::parse_list(input).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].statement_file_name, "Statement March");
        assert_eq!(entries[1].output_file_name, "april-diff");
    }

    #[test]
    fn extra_keys_are_ignored() {
        let input = r#"[{
            "statementFileName": "s",
            "searchFileName": "f",
            "outputFileName": "o",
            "note": "ignored"
        }]"#;
        assert_eq!(BatchEntry::parse_list(input).unwrap().len(), 1);
    }

    #[test]
    fn reject_malformed_json() {
        let err = BatchEntry::parse_list("{ not json").unwrap_err();
        assert!(matches!(err, ReconError::ConfigParse(_)), "{err}");
    }

    #[test]
    fn reject_missing_key() {
        let input = r#"[{ "statementFileName": "s", "searchFileName": "f" }]"#;
        let err = BatchEntry::parse_list(input).unwrap_err();
        assert!(err.to_string().contains("outputFileName"), "{err}");
    }

    #[test]
    fn reject_empty_list() {
        let err = BatchEntry::parse_list("[]").unwrap_err();
        assert!(matches!(err, ReconError::ConfigValidation(_)), "{err}");
    }

    #[test]
    fn reject_blank_field() {
        let input = r#"[{
            "statementFileName": "s",
            "searchFileName": "  ",
            "outputFileName": "o"
        }]"#;
        let err = BatchEntry::parse_list(input).unwrap_err();
        assert!(err.to_string().contains("searchFileName"), "{err}");
    }
}
