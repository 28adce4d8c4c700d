//! CSV Data Loader Module
//! Loads the sales dataset into a DataFrame using Polars.

use polars::prelude::*;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Error: {path} not found. Please ensure the file is in the same folder.")]
    SourceNotFound { path: String },
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
}

/// Handles CSV file loading with Polars.
pub struct DataLoader;

impl DataLoader {
    /// Load the sales CSV file.
    ///
    /// A missing file is reported as [`LoaderError::SourceNotFound`]; no
    /// retry, no alternate path search. Schema inference runs over the whole
    /// file so numeric columns come out with a consistent dtype.
    pub fn load(path: &Path) -> Result<DataFrame, LoaderError> {
        if !path.is_file() {
            return Err(LoaderError::SourceNotFound {
                path: path.display().to_string(),
            });
        }

        // Use lazy evaluation for memory efficiency, then collect
        let df = LazyCsvReader::new(path)
            .with_infer_schema_length(None)
            .finish()?
            .collect()?;
        Ok(df)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{DATE, PRODUCT, REGION, REVENUE, UNITS, UNIT_PRICE};
    use std::io::Write;

    #[test]
    fn missing_source_is_reported_not_found() {
        let err = DataLoader::load(Path::new("no_such_file.csv")).unwrap_err();
        assert!(matches!(err, LoaderError::SourceNotFound { .. }));
        assert!(err.to_string().contains("no_such_file.csv not found"));
    }

    #[test]
    fn loads_csv_from_disk() {
        let mut file = tempfile::Builder::new()
            .suffix(".csv")
            .tempfile()
            .unwrap();
        writeln!(
            file,
            "Date,Product Name,Units Sold,Unit Price,Total Revenue,Region"
        )
        .unwrap();
        writeln!(file, "2024-01-01,Mouse Pad,2,9.99,19.98,Europe").unwrap();
        writeln!(file, "2024-01-02,Keyboard,1,49.50,49.50,Asia").unwrap();
        file.flush().unwrap();

        let df = DataLoader::load(file.path()).unwrap();
        assert_eq!(df.shape(), (2, 6));
        let names: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(names, vec![DATE, PRODUCT, UNITS, UNIT_PRICE, REVENUE, REGION]);
    }
}
