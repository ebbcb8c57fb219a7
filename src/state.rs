use std::collections::BTreeSet;
use std::path::Path;

use crate::color::ColorMap;
use crate::data::aggregate::{aggregate, Aggregate};
use crate::data::filter::filtered_indices;
use crate::data::loader;
use crate::data::model::{ProjectDataset, ProjectRecord, UNASSIGNED};

// ---------------------------------------------------------------------------
// Session state machine
// ---------------------------------------------------------------------------

/// Session lifecycle: `Loading → Ready` on a successful load,
/// `Loading → Failed` otherwise. `Failed` is terminal – there is no retry.
/// Filter changes are `Ready → Ready` self-transitions on [`DashboardState`].
pub enum Session {
    Loading,
    Ready(DashboardState),
    Failed(String),
}

impl Session {
    /// Perform the one-shot load transition out of `Loading`.
    pub fn load(path: &Path) -> Self {
        match loader::load_path(path) {
            Ok(dataset) => {
                log::info!(
                    "loaded {} projects, {} supervisors",
                    dataset.len(),
                    dataset.supervisors.len()
                );
                Session::Ready(DashboardState::new(dataset))
            }
            Err(e) => {
                log::error!("{e}");
                Session::Failed(e.to_string())
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Dashboard state (the record store)
// ---------------------------------------------------------------------------

/// All `Ready`-state data, independent of rendering.
///
/// Owns the immutable dataset plus the derived view and aggregate; the only
/// mutation surface is [`DashboardState::set_filter`].
pub struct DashboardState {
    /// Loaded dataset, read-only for the session.
    dataset: ProjectDataset,

    /// Currently selected supervisor; empty string = no filter.
    pub supervisor_filter: String,

    /// Indices of records passing the current filter (the active view).
    pub visible_indices: Vec<usize>,

    /// Statistics over the active view.
    pub aggregate: Aggregate,

    /// Bar colour per supervisor label, fixed for the session.
    pub color_map: ColorMap,
}

impl DashboardState {
    /// Ingest the loaded dataset; the initial view is the full dataset.
    pub fn new(dataset: ProjectDataset) -> Self {
        let visible_indices: Vec<usize> = (0..dataset.len()).collect();
        let aggregate = aggregate(&dataset, &visible_indices);
        let labels: Vec<&str> = dataset
            .supervisors
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(UNASSIGNED))
            .collect();
        let color_map = ColorMap::new(&labels);

        DashboardState {
            dataset,
            supervisor_filter: String::new(),
            visible_indices,
            aggregate,
            color_map,
        }
    }

    /// The full dataset (no mutation possible from outside).
    pub fn dataset(&self) -> &ProjectDataset {
        &self.dataset
    }

    /// Distinct supervisor values for the selector control.
    pub fn supervisors(&self) -> &BTreeSet<String> {
        &self.dataset.supervisors
    }

    /// Records of the active view, in source order, for the table.
    pub fn visible_records(&self) -> impl Iterator<Item = &ProjectRecord> + '_ {
        self.visible_indices.iter().map(|&i| &self.dataset.records[i])
    }

    /// Handle a filter-change event: replace the view and its aggregate.
    /// Idempotent; each call fully supersedes the previous selection.
    pub fn set_filter(&mut self, supervisor: String) {
        self.supervisor_filter = supervisor;
        self.visible_indices = filtered_indices(&self.dataset, &self.supervisor_filter);
        self.aggregate = aggregate(&self.dataset, &self.visible_indices);
    }
}
