//! Statistics Calculator Module
//! Grouped revenue sums, IQR outlier detection and the Pearson correlation
//! matrix over the cleaned sales table.

use polars::prelude::*;
use statrs::statistics::Statistics;
use std::cmp::Ordering;

use crate::data::{PRODUCT, REGION, REVENUE, UNIT_PRICE};

/// How many products the best-seller list keeps.
pub const TOP_PRODUCT_LIMIT: usize = 5;

/// Tukey fence multiplier for the IQR outlier rule.
const OUTLIER_IQR_FACTOR: f64 = 1.5;

/// Aggregates computed from the cleaned table, consumed by the report and
/// the chart figures.
#[derive(Debug, Clone)]
pub struct SalesSummary {
    pub total_revenue: f64,
    /// Product name and summed revenue, descending. Ties keep the order in
    /// which the groups were first encountered.
    pub top_products: Vec<(String, f64)>,
    /// Region name and summed revenue, in first-encountered order.
    pub regional_revenue: Vec<(String, f64)>,
    pub correlation: CorrelationMatrix,
    pub outlier_count: usize,
}

impl SalesSummary {
    pub fn top_product(&self) -> Option<&str> {
        self.top_products.first().map(|(name, _)| name.as_str())
    }

    /// Region with the highest summed revenue. On ties the
    /// first-encountered region wins.
    pub fn top_region(&self) -> Option<&str> {
        let mut best: Option<(&str, f64)> = None;
        for (name, revenue) in &self.regional_revenue {
            match best {
                Some((_, current)) if *revenue <= current => {}
                _ => best = Some((name, *revenue)),
            }
        }
        best.map(|(name, _)| name)
    }

    pub fn price_revenue_correlation(&self) -> f64 {
        self.correlation
            .get(UNIT_PRICE, REVENUE)
            .unwrap_or(f64::NAN)
    }
}

/// Symmetric Pearson correlation matrix, indexed by column name both ways.
#[derive(Debug, Clone)]
pub struct CorrelationMatrix {
    pub columns: Vec<String>,
    pub values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        let row = self.columns.iter().position(|c| c == a)?;
        let col = self.columns.iter().position(|c| c == b)?;
        Some(self.values[row][col])
    }
}

/// Handles statistical calculations over the cleaned table.
pub struct StatsCalculator;

impl StatsCalculator {
    /// Compute every aggregate the report and figures need.
    pub fn summarize(df: &DataFrame) -> PolarsResult<SalesSummary> {
        let revenue = Self::column_values(df, REVENUE)?;
        let total_revenue = revenue.iter().sum();

        let mut top_products = Self::revenue_by_group(df, PRODUCT)?;
        top_products.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        top_products.truncate(TOP_PRODUCT_LIMIT);

        Ok(SalesSummary {
            total_revenue,
            top_products,
            regional_revenue: Self::revenue_by_group(df, REGION)?,
            correlation: Self::correlation_matrix(df)?,
            outlier_count: Self::iqr_outlier_count(&revenue),
        })
    }

    /// Sum revenue per distinct value of `key`, in first-encountered order.
    fn revenue_by_group(df: &DataFrame, key: &str) -> PolarsResult<Vec<(String, f64)>> {
        let grouped = df
            .clone()
            .lazy()
            .group_by_stable([col(key)])
            .agg([col(REVENUE).sum()])
            .collect()?;

        let names = grouped.column(key)?.as_materialized_series().str()?;
        let sums = grouped.column(REVENUE)?.as_materialized_series().f64()?;
        Ok(names
            .into_iter()
            .zip(sums)
            .map(|(name, sum)| (name.unwrap_or_default().to_string(), sum.unwrap_or(0.0)))
            .collect())
    }

    /// Pull one column as f64 values, dropping nulls.
    pub fn column_values(df: &DataFrame, name: &str) -> PolarsResult<Vec<f64>> {
        let casted = df.column(name)?.cast(&DataType::Float64)?;
        Ok(casted.f64()?.into_iter().flatten().collect())
    }

    /// Calculate a quantile using linear interpolation (NumPy compatible).
    /// `sorted` must be ascending; an empty slice yields NaN.
    pub fn quantile(sorted: &[f64], q: f64) -> f64 {
        let n = sorted.len();
        if n == 0 {
            return f64::NAN;
        }
        if n == 1 {
            return sorted[0];
        }

        let rank = q * (n - 1) as f64;
        let lower = rank.floor() as usize;
        let upper = (rank.ceil() as usize).min(n - 1);
        let frac = rank - lower as f64;

        if lower == upper {
            sorted[lower]
        } else {
            sorted[lower] * (1.0 - frac) + sorted[upper] * frac
        }
    }

    /// Count values outside the Tukey fences
    /// `[Q1 - 1.5*IQR, Q3 + 1.5*IQR]`.
    pub fn iqr_outlier_count(values: &[f64]) -> usize {
        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

        let q1 = Self::quantile(&sorted, 0.25);
        let q3 = Self::quantile(&sorted, 0.75);
        if q1.is_nan() || q3.is_nan() {
            return 0;
        }

        let iqr = q3 - q1;
        let lower = q1 - OUTLIER_IQR_FACTOR * iqr;
        let upper = q3 + OUTLIER_IQR_FACTOR * iqr;
        values.iter().filter(|v| **v < lower || **v > upper).count()
    }

    /// Pairwise Pearson correlation over every numeric column. The diagonal
    /// is pinned to 1.0 and the matrix is symmetric.
    pub fn correlation_matrix(df: &DataFrame) -> PolarsResult<CorrelationMatrix> {
        let numeric = Self::numeric_columns(df)?;
        let size = numeric.len();
        let mut values = vec![vec![1.0; size]; size];
        for row in 0..size {
            for col in (row + 1)..size {
                let r = Self::pearson(&numeric[row].1, &numeric[col].1);
                values[row][col] = r;
                values[col][row] = r;
            }
        }
        Ok(CorrelationMatrix {
            columns: numeric.into_iter().map(|(name, _)| name).collect(),
            values,
        })
    }

    fn numeric_columns(df: &DataFrame) -> PolarsResult<Vec<(String, Vec<f64>)>> {
        let mut columns = Vec::new();
        for column in df.get_columns() {
            if !matches!(
                column.dtype(),
                DataType::Float32
                    | DataType::Float64
                    | DataType::Int8
                    | DataType::Int16
                    | DataType::Int32
                    | DataType::Int64
                    | DataType::UInt8
                    | DataType::UInt16
                    | DataType::UInt32
                    | DataType::UInt64
            ) {
                continue;
            }
            let casted = column.cast(&DataType::Float64)?;
            let values = casted
                .f64()?
                .into_iter()
                .map(|v| v.unwrap_or(f64::NAN))
                .collect();
            columns.push((column.name().to_string(), values));
        }
        Ok(columns)
    }

    fn pearson(x: &[f64], y: &[f64]) -> f64 {
        let covariance = x.iter().covariance(y.iter());
        covariance / (x.iter().std_dev() * y.iter().std_dev())
    }
}
