/// Data layer: core types, CSV parsing/serialization, and filtering.
///
/// Architecture:
/// ```text
///      .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  split lines → Table  (merge appends to one)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Table    │  columns + rows, delete/update/add
///   └──────────┘
///     │       │
///     ▼       ▼
/// ┌────────┐ ┌────────────┐
/// │ filter  │ │ serializer  │  query → view     Table → .csv
/// └────────┘ └────────────┘
/// ```
pub mod filter;
pub mod loader;
pub mod model;
pub mod serializer;
