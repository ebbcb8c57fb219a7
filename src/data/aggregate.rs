use std::collections::BTreeMap;

use super::model::ProjectDataset;

// ---------------------------------------------------------------------------
// Aggregate – summary statistics over a filtered view
// ---------------------------------------------------------------------------

/// Derived statistics for the current view, recomputed on every filter
/// change and consumed by the summary cards, the chart, and the top bar.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Aggregate {
    /// Number of records in the view.
    pub record_count: usize,
    /// Sum of costs over the view.
    pub total_cost: f64,
    /// Cost summed per supervisor label (empty supervisor → "Unassigned").
    pub cost_by_supervisor: BTreeMap<String, f64>,
}

/// A record's cost as stored, with non-finite values read as `0.0`.
/// Re-applies the parse-time coercion so the sums below can never be `NaN`.
fn sanitized_cost(cost: f64) -> f64 {
    if cost.is_finite() {
        cost
    } else {
        0.0
    }
}

/// Compute the [`Aggregate`] for the view given by `indices` into `dataset`.
///
/// Pure and deterministic: equal inputs produce equal results, each record
/// contributes to exactly one supervisor group, and sums are exact (no
/// rounding – currency formatting happens at render time).
pub fn aggregate(dataset: &ProjectDataset, indices: &[usize]) -> Aggregate {
    let mut total_cost = 0.0;
    let mut cost_by_supervisor: BTreeMap<String, f64> = BTreeMap::new();

    for &idx in indices {
        let record = &dataset.records[idx];
        let cost = sanitized_cost(record.cost);
        total_cost += cost;
        *cost_by_supervisor
            .entry(record.supervisor_label().to_string())
            .or_insert(0.0) += cost;
    }

    Aggregate {
        record_count: indices.len(),
        total_cost,
        cost_by_supervisor,
    }
}
