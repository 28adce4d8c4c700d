//! Data module - CSV loading and cleaning

mod cleaner;
mod loader;

pub use cleaner::{CleanerError, DataCleaner};
pub use loader::{DataLoader, LoaderError};

/// Column names expected in the source file.
pub const DATE: &str = "Date";
pub const PRODUCT: &str = "Product Name";
pub const UNITS: &str = "Units Sold";
pub const UNIT_PRICE: &str = "Unit Price";
pub const REVENUE: &str = "Total Revenue";
pub const REGION: &str = "Region";
/// Derived year-month bucket column, e.g. "2024-03".
pub const MONTH: &str = "Month";
