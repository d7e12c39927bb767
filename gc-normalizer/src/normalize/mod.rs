//! Field normalization rules for GC imports

mod address;
mod code;
mod constraints;
mod pipeline;
mod report;
mod truncate;

pub use address::{AddressParts, split_address};
pub use code::transform_code;
pub use constraints::{COLUMN_CONSTRAINTS, REQUIRED_TRUNCATIONS, limit_for};
pub use pipeline::{ADDRESS_COLUMN, ADDRESS_COLUMNS, CODE_COLUMN, Normalized, standardize, standardize_with};
pub use report::NormalizeReport;
pub use truncate::truncate;
