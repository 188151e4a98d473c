/// Data layer: core types, loading, filtering, and view accessors.
///
/// Architecture:
/// ```text
///  assets/penguins.csv (bundled)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse CSV → PenguinDataset (once, at startup)
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ PenguinDataset │  Vec<Penguin>, species index  (immutable)
///   └───────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  (dataset, criteria) → surviving indices
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │   view    │  row count / means / projection / species groups
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod view;
