use std::collections::BTreeMap;
use std::path::Path;

use thiserror::Error;

use super::model::{ProjectDataset, ProjectRecord};

/// Exact header labels expected in the source CSV.
pub const ID_COLUMN: &str = "NTP Number";
pub const SUPERVISOR_COLUMN: &str = "Assigned Supervisor";
pub const COST_COLUMN: &str = "SOW Estimated Cost";

// ---------------------------------------------------------------------------
// LoadError – the single user-visible failure category
// ---------------------------------------------------------------------------

/// Failure to produce a dataset, fatal for the session.
///
/// Every variant renders with the same "failed to load data" prefix; the
/// UI does not distinguish a fetch failure from a parse failure.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to load data: {0}")]
    Fetch(#[from] std::io::Error),
    #[error("failed to load data: {0}")]
    Parse(#[from] csv::Error),
    #[error("failed to load data: missing required column '{0}'")]
    MissingColumn(&'static str),
}

// ---------------------------------------------------------------------------
// Cost coercion
// ---------------------------------------------------------------------------

/// Coerce a raw cost cell to a number.
///
/// A successful finite parse keeps the value; anything else (empty,
/// non-numeric, `NaN`, infinities) becomes `0.0`. This is the one coercion
/// rule for cost values – the parser applies it per cell and the aggregator
/// re-applies the finite guard, so a malformed cost can never surface as
/// `NaN` downstream.
pub fn to_cost(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the project dataset from a CSV file on disk.
pub fn load_path(path: &Path) -> Result<ProjectDataset, LoadError> {
    let raw = std::fs::read_to_string(path)?;
    parse_csv(&raw)
}

/// Parse raw CSV text into a [`ProjectDataset`].
///
/// Layout: header row with column names, one project per subsequent row.
/// Headers and field values are trimmed of surrounding whitespace. Rows
/// whose [`ID_COLUMN`] cell is empty after trimming are dropped silently;
/// this is a data-quality filter, not an error. Empty lines are skipped and
/// ragged rows are tolerated (missing cells read as empty).
pub fn parse_csv(raw: &str) -> Result<ProjectDataset, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(raw.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

    let id_idx = headers
        .iter()
        .position(|h| h == ID_COLUMN)
        .ok_or(LoadError::MissingColumn(ID_COLUMN))?;
    // Supervisor and cost columns are optional: a missing column reads as
    // empty/0 for every row rather than failing the whole load.
    let supervisor_idx = headers.iter().position(|h| h == SUPERVISOR_COLUMN);
    let cost_idx = headers.iter().position(|h| h == COST_COLUMN);

    let mut records = Vec::new();

    for row in reader.records() {
        let row = row?;

        let id = row.get(id_idx).unwrap_or("");
        if id.is_empty() {
            continue;
        }

        let supervisor = supervisor_idx
            .and_then(|i| row.get(i))
            .unwrap_or("")
            .to_string();
        let cost = to_cost(cost_idx.and_then(|i| row.get(i)).unwrap_or(""));

        let mut extra = BTreeMap::new();
        for (col_idx, value) in row.iter().enumerate() {
            if col_idx == id_idx || Some(col_idx) == supervisor_idx || Some(col_idx) == cost_idx {
                continue;
            }
            if let Some(col_name) = headers.get(col_idx) {
                extra.insert(col_name.clone(), value.to_string());
            }
        }

        records.push(ProjectRecord {
            id: id.to_string(),
            supervisor,
            cost,
            extra,
        });
    }

    Ok(ProjectDataset::from_records(records))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "NTP Number,Assigned Supervisor,SOW Estimated Cost";

    #[test]
    fn to_cost_keeps_finite_numbers() {
        assert_eq!(to_cost("100"), 100.0);
        assert_eq!(to_cost("  42.5 "), 42.5);
        assert_eq!(to_cost("-5"), -5.0);
    }

    #[test]
    fn to_cost_coerces_garbage_to_zero() {
        assert_eq!(to_cost(""), 0.0);
        assert_eq!(to_cost("abc"), 0.0);
        assert_eq!(to_cost("12abc"), 0.0);
        assert_eq!(to_cost("NaN"), 0.0);
        assert_eq!(to_cost("inf"), 0.0);
    }

    #[test]
    fn rows_without_id_are_dropped() {
        let raw = format!("{HEADER}\nN1,A,100\nN2,B,abc\n,A,50\n");
        let ds = parse_csv(&raw).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[0].id, "N1");
        assert_eq!(ds.records[0].cost, 100.0);
        assert_eq!(ds.records[1].id, "N2");
        assert_eq!(ds.records[1].cost, 0.0);
    }

    #[test]
    fn headers_and_fields_are_trimmed() {
        let raw = " NTP Number , Assigned Supervisor , SOW Estimated Cost \n N1 , Alice , 10 \n";
        let ds = parse_csv(raw).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.records[0].id, "N1");
        assert_eq!(ds.records[0].supervisor, "Alice");
        assert_eq!(ds.records[0].cost, 10.0);
    }

    #[test]
    fn empty_lines_are_skipped() {
        let raw = format!("{HEADER}\nN1,A,1\n\nN2,B,2\n\n");
        let ds = parse_csv(&raw).unwrap();
        assert_eq!(ds.len(), 2);
    }

    #[test]
    fn ragged_rows_read_missing_cells_as_empty() {
        let raw = format!("{HEADER}\nN1\nN2,Bob\n");
        let ds = parse_csv(&raw).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[0].supervisor, "");
        assert_eq!(ds.records[0].cost, 0.0);
        assert_eq!(ds.records[1].supervisor, "Bob");
    }

    #[test]
    fn extra_columns_are_preserved() {
        let raw = "NTP Number,Region,Assigned Supervisor,SOW Estimated Cost\nN1,West,A,5\n";
        let ds = parse_csv(raw).unwrap();
        assert_eq!(ds.records[0].extra.get("Region").map(String::as_str), Some("West"));
        assert!(!ds.records[0].extra.contains_key(SUPERVISOR_COLUMN));
    }

    #[test]
    fn missing_id_column_is_an_error() {
        let err = parse_csv("Assigned Supervisor,SOW Estimated Cost\nA,1\n").unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn(ID_COLUMN)));
        assert!(err.to_string().starts_with("failed to load data"));
    }

    #[test]
    fn missing_file_is_a_fetch_error() {
        let err = load_path(Path::new("no-such-file.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Fetch(_)));
        assert!(err.to_string().starts_with("failed to load data"));
    }
}
