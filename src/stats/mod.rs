//! Stats module - Aggregation and descriptive statistics

mod calculator;

pub use calculator::{CorrelationMatrix, SalesSummary, StatsCalculator, TOP_PRODUCT_LIMIT};
