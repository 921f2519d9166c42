//! Report document rendering.
//!
//! Turns a product search result into a self-contained HTML document served
//! as a download. Rows render in visual groups of five, separated the way
//! the printed report expects.
//!
//! The handler owns filtering and the empty-result 404; this module only
//! renders whatever sequence it is given.

use stockroom_core::Product;

/// Fixed attachment name for the generated document.
pub const REPORT_FILE_NAME: &str = "report.html";

/// Rows per visual group.
const ROWS_PER_GROUP: usize = 5;

/// Renders the product report document.
pub fn render_report(products: &[Product]) -> String {
    let mut html = String::with_capacity(1024 + products.len() * 160);

    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>Products Report</title>\n<style>\n");
    html.push_str("table { border-collapse: collapse; }\n");
    html.push_str("th, td { border: 1px solid #444; padding: 4px 10px; }\n");
    html.push_str("tbody.group { border-bottom: 3px double #444; }\n");
    html.push_str("</style>\n</head>\n<body>\n<h1>Products Report</h1>\n<table>\n");
    html.push_str("<thead>\n<tr>");
    for heading in [
        "Product ID",
        "Name",
        "Manufacturer",
        "SKU",
        "UPC",
        "Price Per Unit",
        "Quantity On Hand",
    ] {
        html.push_str("<th>");
        html.push_str(heading);
        html.push_str("</th>");
    }
    html.push_str("</tr>\n</thead>\n");

    for group in products.chunks(ROWS_PER_GROUP) {
        html.push_str("<tbody class=\"group\">\n");
        for product in group {
            html.push_str("<tr>");
            push_cell(&mut html, &product.product_id.to_string());
            push_cell(&mut html, &product.product_name);
            push_cell(&mut html, &product.manufacturer);
            push_cell(&mut html, &product.sku);
            push_cell(&mut html, &product.upc);
            push_cell(&mut html, &format!("{:.2}", product.price_per_unit));
            push_cell(&mut html, &product.quantity_on_hand.to_string());
            html.push_str("</tr>\n");
        }
        html.push_str("</tbody>\n");
    }

    html.push_str("</table>\n</body>\n</html>\n");
    html
}

fn push_cell(html: &mut String, value: &str) {
    html.push_str("<td>");
    html.push_str(&escape(value));
    html.push_str("</td>");
}

/// Minimal HTML escaping for text content.
fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, name: &str) -> Product {
        Product {
            product_id: id,
            manufacturer: "acme".to_string(),
            sku: "acm-001".to_string(),
            upc: "012345678905".to_string(),
            price_per_unit: 9.99,
            quantity_on_hand: 42,
            product_name: name.to_string(),
        }
    }

    #[test]
    fn test_report_contains_product_fields() {
        let html = render_report(&[product(1, "anvil")]);
        assert!(html.contains("<td>anvil</td>"));
        assert!(html.contains("<td>acme</td>"));
        assert!(html.contains("<td>acm-001</td>"));
        assert!(html.contains("<td>9.99</td>"));
        assert!(html.contains("<td>42</td>"));
    }

    #[test]
    fn test_rows_group_in_fives() {
        let products: Vec<Product> = (1..=12).map(|i| product(i, "item")).collect();
        let html = render_report(&products);
        // 12 rows → groups of 5, 5, 2
        assert_eq!(html.matches("<tbody class=\"group\">").count(), 3);
    }

    #[test]
    fn test_values_are_escaped() {
        let html = render_report(&[product(1, "<script>alert(1)</script>")]);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
