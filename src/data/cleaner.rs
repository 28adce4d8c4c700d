//! Data Cleaner Module
//! Fixed-order cleaning pipeline: date coercion, product-name
//! canonicalization, deduplication, month bucket derivation.

use polars::prelude::*;
use thiserror::Error;

use crate::data::{DATE, MONTH, PRODUCT};

#[derive(Error, Debug)]
pub enum CleanerError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
}

/// Date layout of the source file.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Exact-match rename rules applied to product names while cleaning:
/// legacy label on the left, current label on the right.
const RENAME_RULES: &[(&str, &str)] = &[("Apple MacBook Pro 16-inch", "MacBook Pro 16-inch")];

/// Handles data cleaning operations. Each stage takes an owned table and
/// returns a new one; later stages depend on earlier normalization, so the
/// order in [`DataCleaner::clean`] is part of the contract.
pub struct DataCleaner;

impl DataCleaner {
    /// Run the full cleaning pipeline.
    pub fn clean(df: DataFrame) -> Result<DataFrame, CleanerError> {
        let df = Self::coerce_dates(df)?;
        let df = Self::canonicalize_products(df)?;
        let df = Self::drop_duplicates(df)?;
        Self::derive_month(df)
    }

    /// Parse the raw `Date` strings into date values.
    ///
    /// Parsing is lenient: values that do not match the expected layout
    /// become null and their rows stay in the table.
    pub fn coerce_dates(df: DataFrame) -> Result<DataFrame, CleanerError> {
        let options = StrptimeOptions {
            format: Some(DATE_FORMAT.into()),
            strict: false,
            ..Default::default()
        };
        let df = df
            .lazy()
            .with_column(col(DATE).str().to_date(options))
            .collect()?;
        Ok(df)
    }

    /// Rewrite legacy product labels to their current form.
    pub fn canonicalize_products(df: DataFrame) -> Result<DataFrame, CleanerError> {
        let mut renamed = col(PRODUCT);
        for (legacy, current) in RENAME_RULES {
            renamed = renamed.str().replace_all(lit(*legacy), lit(*current), true);
        }
        let df = df.lazy().with_column(renamed.alias(PRODUCT)).collect()?;
        Ok(df)
    }

    /// Drop rows that duplicate an earlier row in every column. The first
    /// occurrence wins and the remaining order is preserved.
    pub fn drop_duplicates(df: DataFrame) -> Result<DataFrame, CleanerError> {
        let df = df
            .lazy()
            .unique_stable(None, UniqueKeepStrategy::First)
            .collect()?;
        Ok(df)
    }

    /// Add the `Month` bucket column derived from the parsed date. Rows
    /// with a null date get a null bucket.
    pub fn derive_month(df: DataFrame) -> Result<DataFrame, CleanerError> {
        let df = df
            .lazy()
            .with_column(col(DATE).dt().to_string("%Y-%m").alias(MONTH))
            .collect()?;
        Ok(df)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{REGION, REVENUE, UNITS, UNIT_PRICE};

    fn sample_df() -> DataFrame {
        df!(
            DATE => ["2024-01-05", "2024-01-05", "2024-02-11"],
            PRODUCT => ["Apple MacBook Pro 16-inch", "Apple MacBook Pro 16-inch", "Mouse Pad"],
            UNITS => [1i64, 1, 3],
            UNIT_PRICE => [2499.0, 2499.0, 9.99],
            REVENUE => [2499.0, 2499.0, 29.97],
            REGION => ["North America", "North America", "Europe"],
        )
        .unwrap()
    }

    fn product_names(df: &DataFrame) -> Vec<String> {
        df.column(PRODUCT)
            .unwrap()
            .as_materialized_series()
            .str()
            .unwrap()
            .into_iter()
            .map(|v| v.unwrap().to_string())
            .collect()
    }

    #[test]
    fn duplicate_rows_collapse_to_first() {
        let cleaned = DataCleaner::clean(sample_df()).unwrap();
        assert_eq!(cleaned.height(), 2);
        assert_eq!(
            product_names(&cleaned),
            vec!["MacBook Pro 16-inch", "Mouse Pad"]
        );
    }

    #[test]
    fn dedup_keeps_the_distinct_row_set() {
        let distinct = DataCleaner::drop_duplicates(sample_df()).unwrap();
        let twice = DataCleaner::drop_duplicates(distinct.clone()).unwrap();
        assert!(twice.equals_missing(&distinct));
    }

    #[test]
    fn canonicalization_is_idempotent() {
        let once = DataCleaner::canonicalize_products(sample_df()).unwrap();
        let twice = DataCleaner::canonicalize_products(once.clone()).unwrap();
        assert!(twice.equals_missing(&once));
    }

    #[test]
    fn unparseable_date_degrades_to_null_and_row_survives() {
        let df = df!(
            DATE => ["2024-03-20", "not a date"],
            PRODUCT => ["Keyboard", "Webcam"],
            UNITS => [1i64, 2],
            UNIT_PRICE => [49.5, 30.0],
            REVENUE => [49.5, 60.0],
            REGION => ["Asia", "Europe"],
        )
        .unwrap();

        let cleaned = DataCleaner::clean(df).unwrap();
        assert_eq!(cleaned.height(), 2);
        assert_eq!(
            cleaned
                .column(DATE)
                .unwrap()
                .as_materialized_series()
                .null_count(),
            1
        );

        let months = cleaned.column(MONTH).unwrap().as_materialized_series();
        let months = months.str().unwrap();
        assert_eq!(months.get(0), Some("2024-03"));
        assert_eq!(months.get(1), None);
    }

    #[test]
    fn month_bucket_uses_year_month_layout() {
        let cleaned = DataCleaner::clean(sample_df()).unwrap();
        let months = cleaned.column(MONTH).unwrap().as_materialized_series();
        let months = months.str().unwrap();
        assert_eq!(months.get(0), Some("2024-01"));
        assert_eq!(months.get(1), Some("2024-02"));
    }

    #[test]
    fn cleaning_preserves_row_order() {
        let df = df!(
            DATE => ["2024-02-01", "2024-01-01", "2024-03-01"],
            PRODUCT => ["C", "A", "B"],
            UNITS => [1i64, 1, 1],
            UNIT_PRICE => [1.0, 1.0, 1.0],
            REVENUE => [1.0, 1.0, 1.0],
            REGION => ["West", "East", "West"],
        )
        .unwrap();

        let cleaned = DataCleaner::clean(df).unwrap();
        assert_eq!(product_names(&cleaned), vec!["C", "A", "B"]);
    }
}
