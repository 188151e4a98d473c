use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

// ---------------------------------------------------------------------------
// FieldValue – a single cell in a passthrough column
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value for columns the dashboard does not model
/// explicitly (e.g. `flipper_length_mm`, `sex`, `year`).
/// Using `BTreeMap` / `BTreeSet` downstream so `FieldValue` must be `Ord`.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    String(String),
    Integer(i64),
    Float(f64),
    Null,
}

// -- Manual Eq/Ord so we can put FieldValue in ordered collections --

impl Eq for FieldValue {}

impl PartialOrd for FieldValue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FieldValue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        use FieldValue::*;
        fn discriminant(v: &FieldValue) -> u8 {
            match v {
                Null => 0,
                Integer(_) => 1,
                Float(_) => 2,
                String(_) => 3,
            }
        }
        let da = discriminant(self);
        let db = discriminant(other);
        if da != db {
            return da.cmp(&db);
        }
        match (self, other) {
            (Null, Null) => std::cmp::Ordering::Equal,
            (Integer(a), Integer(b)) => a.cmp(b),
            (Float(a), Float(b)) => a.total_cmp(b),
            (String(a), String(b)) => a.cmp(b),
            _ => std::cmp::Ordering::Equal,
        }
    }
}

impl std::hash::Hash for FieldValue {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            FieldValue::String(s) => s.hash(state),
            FieldValue::Integer(i) => i.hash(state),
            FieldValue::Float(f) => f.to_bits().hash(state),
            FieldValue::Null => {}
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::String(s) => write!(f, "{s}"),
            FieldValue::Integer(i) => write!(f, "{i}"),
            FieldValue::Float(v) => write!(f, "{v:.1}"),
            FieldValue::Null => write!(f, "NA"),
        }
    }
}

impl FieldValue {
    /// Try to interpret the value as an `f64` for numeric aggregation.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Float(v) => Some(*v),
            FieldValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Penguin – one row of the dataset
// ---------------------------------------------------------------------------

/// A single observation. The five columns the dashboard reasons about are
/// modelled as fixed fields; everything else rides along in `extra`.
/// Missing measurements (`NA` cells in the source) are `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct Penguin {
    pub species: String,
    pub island: String,
    pub bill_length_mm: Option<f64>,
    pub bill_depth_mm: Option<f64>,
    pub body_mass_g: Option<f64>,
    /// Passthrough columns: column_name → value.
    pub extra: BTreeMap<String, FieldValue>,
}

impl Penguin {
    /// Look up any column by name, fixed or passthrough.
    pub fn field(&self, column: &str) -> FieldValue {
        fn opt_float(v: Option<f64>) -> FieldValue {
            v.map(FieldValue::Float).unwrap_or(FieldValue::Null)
        }
        match column {
            "species" => FieldValue::String(self.species.clone()),
            "island" => FieldValue::String(self.island.clone()),
            "bill_length_mm" => opt_float(self.bill_length_mm),
            "bill_depth_mm" => opt_float(self.bill_depth_mm),
            "body_mass_g" => opt_float(self.body_mass_g),
            other => self.extra.get(other).cloned().unwrap_or(FieldValue::Null),
        }
    }

    /// Numeric value of a column, `None` for missing or non-numeric cells.
    pub fn numeric_field(&self, column: &str) -> Option<f64> {
        match column {
            "bill_length_mm" => self.bill_length_mm,
            "bill_depth_mm" => self.bill_depth_mm,
            "body_mass_g" => self.body_mass_g,
            other => self.extra.get(other).and_then(FieldValue::as_f64),
        }
    }
}

// ---------------------------------------------------------------------------
// PenguinDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset. Immutable after load: shared by reference with
/// the filtering pipeline and every widget, never mutated.
#[derive(Debug, Clone)]
pub struct PenguinDataset {
    /// All penguins (rows), in file order.
    pub penguins: Vec<Penguin>,
    /// Sorted unique species labels.
    pub species: Vec<String>,
    /// Ordered passthrough column names (excludes the fixed fields).
    pub extra_columns: Vec<String>,
}

impl PenguinDataset {
    /// Build the species index from the rows.
    pub fn from_penguins(penguins: Vec<Penguin>, extra_columns: Vec<String>) -> Self {
        let species: Vec<String> = penguins
            .iter()
            .map(|p| p.species.clone())
            .collect::<BTreeSet<String>>()
            .into_iter()
            .collect();
        PenguinDataset {
            penguins,
            species,
            extra_columns,
        }
    }

    /// Number of penguins.
    pub fn len(&self) -> usize {
        self.penguins.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.penguins.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn penguin(species: &str, mass: Option<f64>) -> Penguin {
        Penguin {
            species: species.to_string(),
            island: "Dream".to_string(),
            bill_length_mm: Some(40.0),
            bill_depth_mm: Some(18.0),
            body_mass_g: mass,
            extra: BTreeMap::from([
                ("year".to_string(), FieldValue::Integer(2008)),
                ("sex".to_string(), FieldValue::String("female".to_string())),
            ]),
        }
    }

    #[test]
    fn species_index_is_sorted_and_deduplicated() {
        let ds = PenguinDataset::from_penguins(
            vec![
                penguin("Gentoo", Some(5000.0)),
                penguin("Adelie", Some(3700.0)),
                penguin("Gentoo", Some(5100.0)),
            ],
            vec!["sex".to_string(), "year".to_string()],
        );
        assert_eq!(ds.species, vec!["Adelie", "Gentoo"]);
        assert_eq!(ds.len(), 3);
        assert!(!ds.is_empty());
    }

    #[test]
    fn field_lookup_covers_fixed_and_passthrough_columns() {
        let p = penguin("Adelie", Some(3700.0));
        assert_eq!(p.field("species"), FieldValue::String("Adelie".into()));
        assert_eq!(p.field("body_mass_g"), FieldValue::Float(3700.0));
        assert_eq!(p.field("year"), FieldValue::Integer(2008));
        assert_eq!(p.field("no_such_column"), FieldValue::Null);
    }

    #[test]
    fn missing_measurement_is_null_not_zero() {
        let p = penguin("Adelie", None);
        assert_eq!(p.field("body_mass_g"), FieldValue::Null);
        assert_eq!(p.numeric_field("body_mass_g"), None);
        assert_eq!(p.numeric_field("year"), Some(2008.0));
        assert_eq!(p.numeric_field("sex"), None);
    }

    #[test]
    fn field_value_display_formats_floats_to_one_decimal() {
        assert_eq!(FieldValue::Float(39.12).to_string(), "39.1");
        assert_eq!(FieldValue::Integer(2007).to_string(), "2007");
        assert_eq!(FieldValue::Null.to_string(), "NA");
    }
}
