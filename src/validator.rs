//! Position validator: diffs claimed successors against the oracle

use std::collections::HashSet;

use crate::config::MalformedPolicy;
use crate::error::ValidateError;
use crate::oracle::{normalize, Oracle};
use crate::parser::{FenString, ValidationRecord};

/// Outcome of checking one record against the oracle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub origin: FenString,
    /// Legal successors the generator did not produce
    pub missing: HashSet<FenString>,
    /// Claimed successors that are not legal
    pub extra: HashSet<FenString>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.missing.is_empty() && self.extra.is_empty()
    }
}

/// Per-record outcome: a diff, or the reason the origin could not be evaluated.
pub type Outcome = Result<ValidationResult, ValidateError>;

/// Validate a single record. Only a malformed origin produces an error.
///
/// Claimed tokens are compared textually after whitespace normalization; they
/// are not re-parsed, since a round trip through a position would fill in an
/// en-passant square the generator left out and hide that mismatch.
pub fn validate_record<O: Oracle + ?Sized>(
    record: &ValidationRecord,
    oracle: &O,
) -> Result<ValidationResult, ValidateError> {
    let true_successors = oracle.successors(&record.origin)?;
    let claimed: HashSet<FenString> = record.claimed.iter().map(|c| normalize(c)).collect();

    let missing = true_successors.difference(&claimed).cloned().collect();
    let extra = claimed.difference(&true_successors).cloned().collect();

    Ok(ValidationResult {
        origin: record.origin.clone(),
        missing,
        extra,
    })
}

/// Ordered outcomes of a whole run. Indices are 1-based, matching log order.
#[derive(Debug, Default)]
pub struct Summary {
    pub outcomes: Vec<(usize, Outcome)>,
    /// Index of the malformed record that stopped the run, if any
    pub aborted_at: Option<usize>,
}

impl Summary {
    pub fn all_valid(&self) -> bool {
        self.outcomes
            .iter()
            .all(|(_, outcome)| matches!(outcome, Ok(result) if result.is_valid()))
    }

    pub fn invalid_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| matches!(outcome, Ok(result) if !result.is_valid()))
            .count()
    }

    pub fn unevaluated_count(&self) -> usize {
        self.outcomes.iter().filter(|(_, outcome)| outcome.is_err()).count()
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

/// Validate every record in order.
///
/// A malformed origin is always kept in the summary. With
/// [`MalformedPolicy::Skip`] the run continues; with [`MalformedPolicy::Abort`]
/// it stops there and [`Summary::aborted_at`] names the record, so the
/// outcomes already computed can still be reported.
pub fn validate_all<O: Oracle + ?Sized>(
    records: &[ValidationRecord],
    oracle: &O,
    policy: MalformedPolicy,
) -> Result<Summary, ValidateError> {
    let mut summary = Summary::default();

    for (i, record) in records.iter().enumerate() {
        let index = i + 1;
        match validate_record(record, oracle) {
            Ok(result) => {
                log::debug!(
                    "position {}: {} missing, {} extra",
                    index,
                    result.missing.len(),
                    result.extra.len()
                );
                summary.outcomes.push((index, Ok(result)));
            }
            Err(e) if e.is_malformed() => {
                summary.outcomes.push((index, Err(e)));
                if policy == MalformedPolicy::Abort {
                    log::error!("aborting at malformed position {}", index);
                    summary.aborted_at = Some(index);
                    break;
                }
                log::warn!("skipping malformed position {}", index);
            }
            Err(e) => return Err(e),
        }
    }

    log::info!(
        "validated {} positions: {} invalid, {} unevaluated",
        summary.len(),
        summary.invalid_count(),
        summary.unevaluated_count()
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Table-driven oracle; unknown origins are malformed.
    struct TableOracle(HashMap<&'static str, Vec<&'static str>>);

    impl Oracle for TableOracle {
        fn successors(&self, fen: &str) -> Result<HashSet<FenString>, ValidateError> {
            self.0
                .get(fen)
                .map(|s| s.iter().map(|x| x.to_string()).collect())
                .ok_or_else(|| ValidateError::malformed(fen, "unknown position"))
        }
    }

    fn record(origin: &str, claimed: &[&str]) -> ValidationRecord {
        ValidationRecord {
            origin: origin.to_string(),
            claimed: claimed.iter().map(|c| c.to_string()).collect(),
        }
    }

    fn oracle() -> TableOracle {
        TableOracle(HashMap::from([("a", vec!["b", "c"]), ("mate", vec![])]))
    }

    #[test]
    fn exact_match_is_valid() {
        let result = validate_record(&record("a", &["c", "b"]), &oracle()).unwrap();
        assert!(result.is_valid());
    }

    #[test]
    fn missing_and_extra_are_split() {
        let result = validate_record(&record("a", &["b", "x"]), &oracle()).unwrap();
        assert_eq!(result.missing, HashSet::from(["c".to_string()]));
        assert_eq!(result.extra, HashSet::from(["x".to_string()]));
        assert!(!result.is_valid());
    }

    #[test]
    fn duplicates_collapse() {
        let result = validate_record(&record("a", &["b", "b", "c", "c"]), &oracle()).unwrap();
        assert!(result.is_valid());
    }

    #[test]
    fn abort_policy_stops_at_malformed() {
        let records = vec![
            record("a", &["b", "x"]),
            record("??", &[]),
            record("mate", &[]),
        ];
        let summary = validate_all(&records, &oracle(), MalformedPolicy::Abort).unwrap();
        assert_eq!(summary.aborted_at, Some(2));
        assert_eq!(summary.len(), 2);
        assert_eq!(summary.invalid_count(), 1);
        assert!(summary.outcomes[1].1.as_ref().unwrap_err().is_malformed());
    }

    #[test]
    fn skip_policy_keeps_going() {
        let records = vec![record("??", &[]), record("mate", &[])];
        let summary = validate_all(&records, &oracle(), MalformedPolicy::Skip).unwrap();
        assert_eq!(summary.len(), 2);
        assert_eq!(summary.unevaluated_count(), 1);
        assert_eq!(summary.invalid_count(), 0);
        assert_eq!(summary.aborted_at, None);
        assert!(!summary.all_valid());
        assert!(summary.outcomes[1].1.as_ref().unwrap().is_valid());
    }
}
