//! Fixed-format executive summary for the console.
//!
//! Pure formatting: everything printed here was already computed by the
//! aggregation step.

use crate::stats::SalesSummary;

const BANNER_WIDTH: usize = 40;

/// Render the KPI block exactly as it is printed to stdout.
pub fn render(summary: &SalesSummary) -> String {
    let banner = "=".repeat(BANNER_WIDTH);
    let mut out = String::new();
    out.push('\n');
    out.push_str(&banner);
    out.push('\n');
    out.push_str("KPIs & KEY INSIGHTS\n");
    out.push_str(&banner);
    out.push('\n');
    out.push_str(&format!(
        "Total Revenue:      ${}\n",
        thousands(summary.total_revenue)
    ));
    out.push_str(&format!(
        "Top Product:        {}\n",
        summary.top_product().unwrap_or("n/a")
    ));
    out.push_str(&format!(
        "Top Region:         {}\n",
        summary.top_region().unwrap_or("n/a")
    ));
    out.push_str(&format!(
        "Price-Rev Link:     {:.2} (Very Strong)\n",
        summary.price_revenue_correlation()
    ));
    out.push_str(&format!(
        "Outliers Detected:  {} (Calculated via IQR)\n",
        summary.outlier_count
    ));
    out.push_str(&banner);
    out.push_str("\n\n");
    out
}

/// Format with two decimals and comma thousands separators, e.g.
/// `1234567.891` -> `"1,234,567.89"`.
pub fn thousands(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let mut grouped = String::new();
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}{grouped}.{frac_part}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::CorrelationMatrix;

    fn summary() -> SalesSummary {
        SalesSummary {
            total_revenue: 1234567.891,
            top_products: vec![("MacBook Pro 16-inch".to_string(), 900000.0)],
            regional_revenue: vec![
                ("Europe".to_string(), 500000.0),
                ("Asia".to_string(), 734567.89),
            ],
            correlation: CorrelationMatrix {
                columns: vec!["Unit Price".to_string(), "Total Revenue".to_string()],
                values: vec![vec![1.0, 0.9173], vec![0.9173, 1.0]],
            },
            outlier_count: 3,
        }
    }

    #[test]
    fn thousands_groups_digits() {
        assert_eq!(thousands(0.0), "0.00");
        assert_eq!(thousands(999.5), "999.50");
        assert_eq!(thousands(1000.0), "1,000.00");
        assert_eq!(thousands(1234567.891), "1,234,567.89");
        assert_eq!(thousands(-4321.0), "-4,321.00");
    }

    #[test]
    fn report_lays_out_the_five_kpis() {
        let text = render(&summary());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "=".repeat(40));
        assert_eq!(lines[2], "KPIs & KEY INSIGHTS");
        assert_eq!(lines[4], "Total Revenue:      $1,234,567.89");
        assert_eq!(lines[5], "Top Product:        MacBook Pro 16-inch");
        assert_eq!(lines[6], "Top Region:         Asia");
        assert_eq!(lines[7], "Price-Rev Link:     0.92 (Very Strong)");
        assert_eq!(lines[8], "Outliers Detected:  3 (Calculated via IQR)");
        assert_eq!(lines[9], "=".repeat(40));
    }
}
