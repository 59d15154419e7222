pub mod columns;
pub mod csv_import;
pub mod csv_reader;
pub mod normalizer;
pub mod row;
pub mod template;
pub mod validation;

pub use csv_import::build_preview;
pub use csv_reader::{read_rows, ParsedCsv};
pub use normalizer::{normalize, CategoryResolver};
pub use row::{FieldValue, RawRow};
pub use validation::{validate_row, validate_rows};
