//! Tests for catalog normalization and report building through the public API.

use compute_sales::{build_report, normalize_catalog, render_warnings_block};
use serde_json::{json, Value};

fn sale(id: Value, date: &str, product: &str, quantity: Value) -> Value {
    json!({"SALE_ID": id, "SALE_Date": date, "Product": product, "Quantity": quantity})
}

#[test]
fn test_single_widget_sale() {
    let catalog = normalize_catalog(&json!([{"title": "Widget", "price": 10}]));
    let sales = json!([sale(json!(1), "2024-01-01", "Widget", json!(3))]);

    let result = build_report(&catalog.prices, &sales);

    assert!(result
        .report_text
        .contains("\n1 | 2024-01-01 | Widget | 3 | 10.00 | 30.00\n"));
    assert!(result.report_text.contains("Valid records: 1\n"));
    assert!(result.report_text.contains("Invalid records: 0\n"));
    assert!(result.report_text.contains("Total cost: 30.00\n"));
    assert_eq!(result.total_cost, 30.0);
}

#[test]
fn test_unknown_product_is_reported() {
    let catalog = normalize_catalog(&json!([{"title": "Widget", "price": 10}]));
    let sales = json!([sale(json!(7), "2024-01-01", "Unknown", json!(1))]);

    let result = build_report(&catalog.prices, &sales);

    assert_eq!(result.valid_count, 0);
    assert_eq!(result.invalid_count, 1);
    assert!(result
        .report_text
        .contains("[#1] Producto no existe en catálogo: 'Unknown'"));
}

#[test]
fn test_catalog_entry_without_price_is_excluded() {
    let catalog = normalize_catalog(&json!([
        {"title": "Widget", "price": 10},
        {"title": "Gizmo"}
    ]));

    assert!(!catalog.prices.contains_key("Gizmo"));
    assert_eq!(catalog.warnings.len(), 1);
    assert!(catalog.warnings[0].contains("'Gizmo'"));
    assert!(catalog.warnings[0].contains("'price'"));

    let block = render_warnings_block(&catalog.warnings);
    assert!(block.starts_with("Advertencias del catálogo (no fatales):\n"));
    assert!(block.contains("- Catálogo: 'Gizmo' no tiene 'price' numérico válido.\n"));
}

#[test]
fn test_negative_quantity_reported_once() {
    let catalog = normalize_catalog(&json!([{"title": "Widget", "price": 10}]));
    let sales = json!([sale(json!(1), "2024-01-01", "Widget", json!(-1))]);

    let result = build_report(&catalog.prices, &sales);

    assert!(result
        .report_text
        .contains("[#1] Quantity no puede ser negativa\n"));
    assert!(!result.report_text.contains("Quantity inválido o faltante"));
}

#[test]
fn test_counts_cover_every_record_and_total_sums_valid_lines() {
    let catalog = normalize_catalog(&json!([
        {"title": "Widget", "price": 10},
        {"title": "Gadget", "price": 0.1},
        {"title": "Bulk", "price": 1500.25}
    ]));
    let sales = json!([
        sale(json!(1), "2024-01-01", "Widget", json!(3)),
        sale(json!(true), "2024-01-01", "Widget", json!(3)),
        sale(json!(3), "2024-01-02", "Gadget", json!("5")),
        sale(json!(4), "2024-01-02", "Gadget", json!("5.5")),
        sale(json!("5"), "2024-01-03", "Bulk", json!(1000)),
        sale(json!(6), "", "Bulk", json!(false)),
        json!(null),
        sale(json!(8), "2024-01-04", "Widget", json!(0))
    ]);

    let result = build_report(&catalog.prices, &sales);

    assert_eq!(result.valid_count + result.invalid_count, 8);
    assert_eq!(result.valid_count, 4);
    assert_eq!(result.invalid_count, 4);

    let expected_total = 10.0 * 3.0 + 0.1 * 5.0 + 1500.25 * 1000.0 + 10.0 * 0.0;
    assert_eq!(result.total_cost, expected_total);

    assert!(result
        .report_text
        .contains("5 | 2024-01-03 | Bulk | 1000 | 1,500.25 | 1,500,250.00"));
    assert!(result
        .report_text
        .contains("Total cost: 1,500,280.50\n"));
    assert!(result.report_text.contains("[#2] SALE_ID inválido o faltante\n"));
    assert!(result.report_text.contains("[#4] Quantity inválido o faltante\n"));
    assert!(result.report_text.contains(
        "[#6] SALE_Date inválido o faltante; Quantity inválido o faltante\n"
    ));
    assert!(result
        .report_text
        .contains("[#7] Registro no es un objeto JSON (dict).\n"));
}

#[test]
fn test_errors_keep_input_order() {
    let catalog = normalize_catalog(&json!([{"title": "Widget", "price": 10}]));
    let sales = json!([
        sale(json!(1), "d", "Nope", json!(1)),
        sale(json!(2), "d", "Widget", json!(1)),
        sale(json!(3), "d", "Other", json!(1))
    ]);

    let result = build_report(&catalog.prices, &sales);

    let first = result.report_text.find("[#1]").unwrap();
    let third = result.report_text.find("[#3]").unwrap();
    assert!(first < third);
    assert!(!result.report_text.contains("[#2]"));
}

#[test]
fn test_sales_object_is_structural_error() {
    let catalog = normalize_catalog(&json!([{"title": "Widget", "price": 10}]));

    let result = build_report(&catalog.prices, &json!({}));

    assert_eq!(
        result.report_text,
        "ERROR: El archivo de ventas no contiene una lista de registros.\nNo se puede procesar.\n"
    );
    assert_eq!(result.total_cost, 0.0);
    assert_eq!(result.valid_count, 0);
    assert_eq!(result.invalid_count, 0);
}

#[test]
fn test_report_is_deterministic() {
    let catalog = normalize_catalog(&json!([
        {"title": "A", "price": 1.25},
        {"title": "B", "price": 3}
    ]));
    let sales = json!([
        sale(json!(1), "d", "A", json!(2)),
        sale(json!(2), "d", "C", json!(2)),
        sale(json!(3), "d", "B", json!("4"))
    ]);

    let first = build_report(&catalog.prices, &sales);
    let second = build_report(&catalog.prices, &sales);

    assert_eq!(first, second);
}
