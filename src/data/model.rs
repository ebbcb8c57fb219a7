use std::collections::{BTreeMap, BTreeSet};

/// Label substituted for an empty supervisor at aggregation/chart time.
/// Records themselves keep the raw (possibly empty) value.
pub const UNASSIGNED: &str = "Unassigned";

// ---------------------------------------------------------------------------
// ProjectRecord – one row of the source CSV
// ---------------------------------------------------------------------------

/// A single project entry (one row of the source CSV).
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectRecord {
    /// NTP number – unique external identifier, always non-empty.
    pub id: String,
    /// Assigned supervisor; empty string when unassigned.
    pub supervisor: String,
    /// SOW estimated cost. Unparsable source values coerce to `0.0`.
    pub cost: f64,
    /// Remaining columns preserved verbatim: column_name → trimmed value.
    pub extra: BTreeMap<String, String>,
}

impl ProjectRecord {
    /// Supervisor label for grouping: [`UNASSIGNED`] when the field is empty.
    pub fn supervisor_label(&self) -> &str {
        if self.supervisor.is_empty() {
            UNASSIGNED
        } else {
            &self.supervisor
        }
    }
}

// ---------------------------------------------------------------------------
// ProjectDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset, immutable for the session.
///
/// Row order matches the source file. Duplicate NTP numbers are kept as-is.
#[derive(Debug, Clone)]
pub struct ProjectDataset {
    /// All records (rows), source order.
    pub records: Vec<ProjectRecord>,
    /// Distinct non-empty supervisor values, for the filter selector.
    pub supervisors: BTreeSet<String>,
}

impl ProjectDataset {
    /// Build the supervisor index from the loaded records.
    pub fn from_records(records: Vec<ProjectRecord>) -> Self {
        let supervisors = records
            .iter()
            .filter(|r| !r.supervisor.is_empty())
            .map(|r| r.supervisor.clone())
            .collect();
        ProjectDataset {
            records,
            supervisors,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, supervisor: &str, cost: f64) -> ProjectRecord {
        ProjectRecord {
            id: id.to_string(),
            supervisor: supervisor.to_string(),
            cost,
            extra: BTreeMap::new(),
        }
    }

    #[test]
    fn supervisor_label_substitutes_unassigned() {
        assert_eq!(record("N1", "Alice", 1.0).supervisor_label(), "Alice");
        assert_eq!(record("N2", "", 1.0).supervisor_label(), UNASSIGNED);
    }

    #[test]
    fn supervisor_index_skips_empty_and_dedups() {
        let ds = ProjectDataset::from_records(vec![
            record("N1", "Alice", 1.0),
            record("N2", "", 2.0),
            record("N3", "Bob", 3.0),
            record("N4", "Alice", 4.0),
        ]);
        assert_eq!(ds.len(), 4);
        let sups: Vec<&str> = ds.supervisors.iter().map(String::as_str).collect();
        assert_eq!(sups, vec!["Alice", "Bob"]);
    }
}
