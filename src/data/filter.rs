use super::model::ProjectDataset;

// ---------------------------------------------------------------------------
// Supervisor filter
// ---------------------------------------------------------------------------

/// Return indices of records passing the supervisor filter, in source order.
///
/// An empty `supervisor` means "no filter" and selects every record; this is
/// the default state, not a sentinel value stored in the data. Otherwise a
/// record passes only on exact string equality with its supervisor field.
/// Pure: the dataset is never mutated and each call returns a fresh `Vec`.
pub fn filtered_indices(dataset: &ProjectDataset, supervisor: &str) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, r)| supervisor.is_empty() || r.supervisor == supervisor)
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::data::model::ProjectRecord;

    fn dataset() -> ProjectDataset {
        let rows = [("N1", "A", 100.0), ("N2", "B", 20.0), ("N3", "A", 30.0), ("N4", "", 5.0)];
        ProjectDataset::from_records(
            rows.iter()
                .map(|&(id, sup, cost)| ProjectRecord {
                    id: id.to_string(),
                    supervisor: sup.to_string(),
                    cost,
                    extra: BTreeMap::new(),
                })
                .collect(),
        )
    }

    #[test]
    fn empty_selector_is_the_identity_filter() {
        let ds = dataset();
        assert_eq!(filtered_indices(&ds, ""), vec![0, 1, 2, 3]);
    }

    #[test]
    fn exact_match_preserves_order() {
        let ds = dataset();
        assert_eq!(filtered_indices(&ds, "A"), vec![0, 2]);
        assert_eq!(filtered_indices(&ds, "B"), vec![1]);
    }

    #[test]
    fn no_partial_or_case_insensitive_matching() {
        let ds = dataset();
        assert!(filtered_indices(&ds, "a").is_empty());
        assert!(filtered_indices(&ds, "A ").is_empty());
        assert!(filtered_indices(&ds, "nobody").is_empty());
    }

    #[test]
    fn repeated_calls_are_equal() {
        let ds = dataset();
        assert_eq!(filtered_indices(&ds, "A"), filtered_indices(&ds, "A"));
    }
}
