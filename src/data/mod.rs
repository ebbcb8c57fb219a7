/// Data layer: core types, CSV ingestion, filtering, and aggregation.
///
/// Architecture:
/// ```text
///   projects.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse CSV → ProjectDataset (rows without an id dropped)
///   └──────────┘
///        │
///        ▼
///   ┌────────────────┐
///   │ ProjectDataset  │  Vec<ProjectRecord>, supervisor index
///   └────────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  apply supervisor predicate → view indices
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate  │  count / total cost / cost per supervisor
///   └───────────┘
/// ```

pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod model;
