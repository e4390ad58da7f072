//! CSV export of a [`SalesReport`]

use super::aggregate::SalesReport;
use super::error::SalesError;

/// Column labels of the exported table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportColumns {
    pub id: &'static str,
    pub product_name: &'static str,
    pub unit_price: &'static str,
    pub quantity: &'static str,
    pub sales: &'static str,
    pub total_label: &'static str,
}

impl Default for ReportColumns {
    fn default() -> Self {
        Self {
            id: "ID",
            product_name: "Product Name",
            unit_price: "Unit Price (JPY)",
            quantity: "Quantity",
            sales: "Sales (JPY)",
            total_label: "Total",
        }
    }
}

impl ReportColumns {
    pub fn headers(&self) -> [&'static str; 5] {
        [
            self.id,
            self.product_name,
            self.unit_price,
            self.quantity,
            self.sales,
        ]
    }
}

/// Fixed-point with 2 decimals and `.` as separator, e.g. `7.50`
pub fn format_fixed2(value: f64) -> String {
    // -0.0 would print as "-0.00"
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{:.2}", value)
}

/// File name of the export, e.g. `sales_report_shop_3.csv`
pub fn report_filename(prefix: &str, shop_id: i64) -> String {
    format!("{}{}.csv", prefix, shop_id)
}

/// Renders header, one row per sale line and the total row
pub fn render_csv(report: &SalesReport, columns: &ReportColumns) -> Result<String, SalesError> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    let write_err = |e: csv::Error| SalesError::Export(e.to_string());

    writer.write_record(columns.headers()).map_err(write_err)?;

    for line in &report.lines {
        writer
            .write_record([
                line.product_id.to_string(),
                line.product_name.clone(),
                format_fixed2(line.unit_price),
                line.amount.to_string(),
                format_fixed2(line.sale_amount),
            ])
            .map_err(write_err)?;
    }

    let total = format_fixed2(report.total);
    writer
        .write_record([columns.total_label, "", "", "", total.as_str()])
        .map_err(write_err)?;

    let bytes = writer
        .into_inner()
        .map_err(|e| SalesError::Export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| SalesError::Export(e.to_string()))
}

impl SalesReport {
    /// CSV with the default column labels
    pub fn to_csv(&self) -> Result<String, SalesError> {
        render_csv(self, &ReportColumns::default())
    }
}

#[cfg(test)]
mod tests {
    use super::super::aggregate::aggregate_sales;
    use super::super::dto::Product;
    use super::*;

    const HEADER: &str = "ID,Product Name,Unit Price (JPY),Quantity,Sales (JPY)";

    fn product(id: i64, name: &str, amount: i64, price: &str) -> Product {
        Product {
            id,
            shop_id: 1,
            name: name.to_string(),
            amount,
            price: price.to_string(),
        }
    }

    #[test]
    fn test_format_fixed2() {
        assert_eq!(format_fixed2(7.5), "7.50");
        assert_eq!(format_fixed2(0.0), "0.00");
        assert_eq!(format_fixed2(-0.0), "0.00");
        assert_eq!(format_fixed2(1234.567), "1234.57");
        assert_eq!(format_fixed2(-3.2), "-3.20");
    }

    #[test]
    fn test_report_filename() {
        assert_eq!(
            report_filename("sales_report_shop_", 3),
            "sales_report_shop_3.csv"
        );
    }

    #[test]
    fn test_empty_report() {
        let csv = SalesReport::default().to_csv().unwrap();
        assert_eq!(csv, format!("{}\nTotal,,,,0.00\n", HEADER));
    }

    #[test]
    fn test_widget_scenario() {
        let report = aggregate_sales(&[product(10, "Widget", 3, "2.50")]).unwrap();
        let csv = report.to_csv().unwrap();
        let rows: Vec<&str> = csv.lines().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], HEADER);
        assert_eq!(rows[1], "10,Widget,2.50,3,7.50");
        assert_eq!(rows[2], "Total,,,,7.50");
    }

    #[test]
    fn test_rows_follow_report_order() {
        let report = aggregate_sales(&[
            product(2, "Second", 1, "1"),
            product(1, "First", 0, "9.99"),
        ])
        .unwrap();
        let csv = report.to_csv().unwrap();
        let rows: Vec<&str> = csv.lines().collect();
        assert_eq!(rows[1], "2,Second,1.00,1,1.00");
        assert_eq!(rows[2], "1,First,9.99,0,0.00");
        assert_eq!(rows[3], "Total,,,,1.00");
    }

    #[test]
    fn test_total_rounded_only_at_output() {
        // rounding each line first would give 0.99
        let report = aggregate_sales(&[
            product(1, "A", 1, "0.334"),
            product(2, "B", 1, "0.334"),
            product(3, "C", 1, "0.334"),
        ])
        .unwrap();
        let csv = report.to_csv().unwrap();
        assert!(csv.contains("1,A,0.33,1,0.33\n"));
        assert!(csv.ends_with("Total,,,,1.00\n"));
    }

    #[test]
    fn test_names_with_separators_are_quoted() {
        let report = aggregate_sales(&[product(5, "Bolt, M6 \"zinc\"", 2, "0.10")]).unwrap();
        let csv = report.to_csv().unwrap();
        assert_eq!(
            csv.lines().nth(1),
            Some("5,\"Bolt, M6 \"\"zinc\"\"\",0.10,2,0.20")
        );
    }

    #[test]
    fn test_custom_labels() {
        let columns = ReportColumns {
            total_label: "Grand total",
            ..ReportColumns::default()
        };
        let csv = render_csv(&SalesReport::default(), &columns).unwrap();
        assert!(csv.ends_with("Grand total,,,,0.00\n"));
    }
}
