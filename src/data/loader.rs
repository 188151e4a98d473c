use std::collections::BTreeMap;

use anyhow::{Context, Result};
use thiserror::Error;

use super::model::{FieldValue, Penguin, PenguinDataset};

/// The dataset ships inside the binary; there is no runtime data source.
static PENGUINS_CSV: &str = include_str!("../../assets/penguins.csv");

/// Columns the dashboard models explicitly; everything else passes through.
const FIXED_COLUMNS: [&str; 5] = [
    "species",
    "island",
    "bill_length_mm",
    "bill_depth_mm",
    "body_mass_g",
];

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("dataset is missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("dataset contains no rows")]
    Empty,
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Parse the bundled penguins dataset.  Called exactly once at startup;
/// any failure here is fatal, the process cannot start without its data.
pub fn load_bundled() -> Result<PenguinDataset> {
    let dataset = parse_csv(PENGUINS_CSV).context("parsing bundled penguins.csv")?;
    log::info!(
        "Loaded {} penguins, species {:?}",
        dataset.len(),
        dataset.species
    );
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names; `NA` or empty cells mark
/// missing measurements. The five fixed columns must be present, any other
/// column is kept as passthrough data in file order.
pub fn parse_csv(text: &str) -> Result<PenguinDataset> {
    let mut reader = csv::Reader::from_reader(text.as_bytes());
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut fixed_idx = [0usize; FIXED_COLUMNS.len()];
    for (slot, name) in fixed_idx.iter_mut().zip(FIXED_COLUMNS) {
        *slot = headers
            .iter()
            .position(|h| h == name)
            .ok_or(LoadError::MissingColumn(name))?;
    }
    let [species_idx, island_idx, bill_length_idx, bill_depth_idx, mass_idx] = fixed_idx;

    let extra_columns: Vec<String> = headers
        .iter()
        .filter(|h| !FIXED_COLUMNS.contains(&h.as_str()))
        .cloned()
        .collect();

    let mut penguins = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        let cell = |idx: usize| record.get(idx).unwrap_or("").trim();

        let mut extra = BTreeMap::new();
        for (col_idx, col_name) in headers.iter().enumerate() {
            if fixed_idx.contains(&col_idx) {
                continue;
            }
            extra.insert(col_name.clone(), guess_field_type(cell(col_idx)));
        }

        penguins.push(Penguin {
            species: cell(species_idx).to_string(),
            island: cell(island_idx).to_string(),
            bill_length_mm: parse_measurement(cell(bill_length_idx), row_no, "bill_length_mm")?,
            bill_depth_mm: parse_measurement(cell(bill_depth_idx), row_no, "bill_depth_mm")?,
            body_mass_g: parse_measurement(cell(mass_idx), row_no, "body_mass_g")?,
            extra,
        });
    }

    if penguins.is_empty() {
        return Err(LoadError::Empty.into());
    }

    Ok(PenguinDataset::from_penguins(penguins, extra_columns))
}

/// Numeric measurement cell: `NA`/empty is a missing value, anything else
/// must parse as a float.
fn parse_measurement(s: &str, row: usize, col: &str) -> Result<Option<f64>> {
    if s.is_empty() || s == "NA" {
        return Ok(None);
    }
    s.parse::<f64>()
        .map(Some)
        .with_context(|| format!("Row {row}, {col}: '{s}' is not a number"))
}

fn guess_field_type(s: &str) -> FieldValue {
    if s.is_empty() || s == "NA" {
        return FieldValue::Null;
    }
    if let Ok(i) = s.parse::<i64>() {
        return FieldValue::Integer(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        return FieldValue::Float(f);
    }
    FieldValue::String(s.to_string())
}
