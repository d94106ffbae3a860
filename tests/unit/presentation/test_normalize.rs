use lifeline_client::presentation::normalize::*;
use serde_json::json;

#[test]
fn test_to_pascal_case() {
    assert_eq!(to_pascal_case("vendor_name"), "VendorName");
    assert_eq!(to_pascal_case("tax id"), "TaxId");
    assert_eq!(to_pascal_case("email"), "Email");
    assert_eq!(to_pascal_case("CompanyID"), "CompanyID");
    assert_eq!(to_pascal_case("_private"), "Private");
    assert_eq!(to_pascal_case(""), "");
}

#[test]
fn test_aliases_never_overwrite() {
    let value = json!({"vendor_name": "Acme", "VendorName": "Legacy"});
    let aliased = add_pascal_aliases(&value);
    assert_eq!(aliased["vendor_name"], "Acme");
    assert_eq!(aliased["VendorName"], "Legacy");
}

#[test]
fn test_nested_objects_are_aliased() {
    let value = json!({
        "invoice_id": 7,
        "customer": {"display_name": "Globex", "tax_id": "X1"},
        "lines": [{"line_total": 1}]
    });
    let aliased = add_pascal_aliases(&value);

    assert_eq!(aliased["InvoiceId"], 7);
    assert_eq!(aliased["Customer"]["DisplayName"], "Globex");
    assert_eq!(aliased["Customer"]["display_name"], "Globex");
    // the original key keeps the untouched object
    assert_eq!(aliased["customer"], json!({"display_name": "Globex", "tax_id": "X1"}));
    // arrays are not walked
    assert_eq!(aliased["Lines"], json!([{"line_total": 1}]));
}

#[test]
fn test_non_objects_pass_through() {
    assert_eq!(add_pascal_aliases(&json!(3)), json!(3));
    assert_eq!(add_pascal_aliases(&json!([{"a_b": 1}])), json!([{"a_b": 1}]));
    assert_eq!(normalize_array(&json!({"a_b": 1})), json!({"a_b": 1}));
}

#[test]
fn test_normalize_array() {
    let normalized = normalize_array(&json!([{"first_name": "Ada"}, 5]));
    assert_eq!(normalized, json!([{"first_name": "Ada", "FirstName": "Ada"}, 5]));
}
