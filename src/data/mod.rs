/// Data layer: the numeric table and how it is read from disk.
///
/// ```text
///   whitespace-delimited text file
///        │
///        ▼
///   ┌──────────┐
///   │  loader  │  parse lines → Table (or LoadError)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Table   │  rectangular, row-major f64
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
