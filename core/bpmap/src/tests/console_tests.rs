use crate::adapter::console::{display_address, render_branch_hits, render_product_hits};
use common::domain::{Branch, OpeningHours, Product};
use common::query::{BranchHit, ProductHit};
use serde_json::json;

#[test]
fn test_display_address_variants() {
    assert_eq!(display_address(&json!(null)), "N/A");
    assert_eq!(display_address(&json!("")), "N/A");
    assert_eq!(
        display_address(&json!("4 Micklegate, York")),
        "4 Micklegate, York"
    );
    // オブジェクトは文字列フィールドの値を連結する
    let structured = json!({
        "address1": "12 Albion Street",
        "postcode": "LS1 5AA",
        "town": "Leeds"
    });
    let rendered = display_address(&structured);
    assert!(rendered.contains("12 Albion Street"));
    assert!(rendered.contains("LS1 5AA"));
    assert!(rendered.contains(", "));
}

#[test]
fn test_render_product_hits_empty() {
    assert_eq!(
        render_product_hits(&[]),
        "No products found matching your search."
    );
}

#[test]
fn test_render_branch_hits_empty() {
    assert_eq!(
        render_branch_hits(&[]),
        "No branches found matching your search."
    );
}

#[test]
fn test_render_product_hit_table() {
    let hit = ProductHit {
        product: Product::new("PC001", "Motor Insurance"),
        branches: vec![Branch {
            name: Some("Leeds".to_string()),
            manager: Some("Sarah Whitfield".to_string()),
            address: json!("12 Albion Street"),
            opening_hours: OpeningHours::Text("Mon-Fri 09:00-17:00".to_string()),
            product_codes: vec!["PC001".to_string()],
        }],
    };
    let out = render_product_hits(&[hit]);
    assert!(out.contains("Motor Insurance (PC001)"));
    assert!(out.contains("Allocated branches: 1 found."));
    assert!(out.contains("branch_name"));
    assert!(out.contains("opening_hours"));
    assert!(out.contains("Leeds"));
    // ヘッダー直下に区切り線がある
    assert!(out.contains("-+-"));
}

#[test]
fn test_render_product_hit_without_branches() {
    let hit = ProductHit {
        product: Product::new("PC999", "Ghost Product"),
        branches: Vec::new(),
    };
    let out = render_product_hits(&[hit]);
    assert!(out.contains("Ghost Product (PC999)"));
    assert!(out.contains("No branches found for this product."));
    assert!(!out.contains("Allocated branches"));
}

#[test]
fn test_render_branch_hit_sections() {
    let hit = BranchHit {
        branch: Branch {
            name: Some("York".to_string()),
            manager: None,
            address: json!(null),
            opening_hours: OpeningHours::Unknown,
            product_codes: vec!["PC001".to_string()],
        },
        products: vec![Product::new("PC001", "Motor Insurance")],
    };
    let out = render_branch_hits(&[hit]);
    assert!(out.contains("York"));
    assert!(out.contains("Manager: N/A"));
    assert!(out.contains("Address: N/A"));
    assert!(out.contains("Opening Hours: N/A"));
    assert!(out.contains("Products allocated to this branch: 1"));
    assert!(out.contains("product_code"));
    assert!(out.contains("Motor Insurance"));
}

#[test]
fn test_missing_product_fields_render_na() {
    let hit = ProductHit {
        product: Product::default(),
        branches: Vec::new(),
    };
    let out = render_product_hits(&[hit]);
    assert!(out.contains("N/A (N/A)"));
}
