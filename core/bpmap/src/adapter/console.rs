//! 検索結果のテキスト描画
//!
//! 検索結果を見出し＋表のプレーンテキストに描画する。スタイリングは
//! 持たない。0 件のシグナルはここで警告文に変換する:
//! - 外側 0 件 → "No products/branches found matching your search."
//! - 内側 0 件 → "No branches found for this product." /
//!   "No products found for this branch."

use common::query::{BranchHit, ProductHit};
use serde_json::Value;

/// 欠損フィールドの表示
fn display_or_na(field: Option<&str>) -> String {
    match field {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => "N/A".to_string(),
    }
}

/// 住所の表示
///
/// 上流は構造化オブジェクトと文字列の両方を返す。オブジェクトは
/// 文字列フィールドの値を ", " で連結し、それ以外は JSON 表現に
/// フォールバックする。
pub fn display_address(address: &Value) -> String {
    match address {
        Value::Null => "N/A".to_string(),
        Value::String(s) if s.is_empty() => "N/A".to_string(),
        Value::String(s) => s.clone(),
        Value::Object(map) => {
            let parts: Vec<&str> = map
                .values()
                .filter_map(|v| v.as_str())
                .filter(|s| !s.is_empty())
                .collect();
            if parts.is_empty() {
                address.to_string()
            } else {
                parts.join(", ")
            }
        }
        other => other.to_string(),
    }
}

/// 列幅を揃えたプレーンテキストの表を描画する
fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }
    }

    let format_row = |cells: &[String]| -> String {
        cells
            .iter()
            .enumerate()
            .map(|(i, cell)| format!("{:<width$}", cell, width = widths[i]))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    let separator = widths
        .iter()
        .map(|w| "-".repeat(*w))
        .collect::<Vec<_>>()
        .join("-+-");

    let mut lines = vec![format_row(&header_cells), separator];
    for row in rows {
        lines.push(format_row(row));
    }
    lines.join("\n")
}

/// 製品→店舗検索の結果を描画する
pub fn render_product_hits(hits: &[ProductHit]) -> String {
    if hits.is_empty() {
        return "No products found matching your search.".to_string();
    }

    let mut sections = Vec::new();
    for hit in hits {
        let mut lines = vec![format!(
            "{} ({})",
            display_or_na(hit.product.name.as_deref()),
            display_or_na(hit.product.code.as_deref())
        )];

        if hit.branches.is_empty() {
            lines.push("No branches found for this product.".to_string());
        } else {
            lines.push(format!("Allocated branches: {} found.", hit.branches.len()));
            let rows: Vec<Vec<String>> = hit
                .branches
                .iter()
                .map(|b| {
                    vec![
                        display_or_na(b.name.as_deref()),
                        display_or_na(b.manager.as_deref()),
                        display_address(&b.address),
                        b.opening_hours.display(),
                    ]
                })
                .collect();
            lines.push(render_table(
                &["branch_name", "branch_manager", "address", "opening_hours"],
                &rows,
            ));
        }
        sections.push(lines.join("\n"));
    }
    sections.join("\n\n")
}

/// 店舗→製品検索の結果を描画する
pub fn render_branch_hits(hits: &[BranchHit]) -> String {
    if hits.is_empty() {
        return "No branches found matching your search.".to_string();
    }

    let mut sections = Vec::new();
    for hit in hits {
        let mut lines = vec![
            display_or_na(hit.branch.name.as_deref()),
            format!("Manager: {}", display_or_na(hit.branch.manager.as_deref())),
            format!("Address: {}", display_address(&hit.branch.address)),
            format!("Opening Hours: {}", hit.branch.opening_hours.display()),
        ];

        if hit.products.is_empty() {
            lines.push("No products found for this branch.".to_string());
        } else {
            lines.push(format!(
                "Products allocated to this branch: {}",
                hit.products.len()
            ));
            let rows: Vec<Vec<String>> = hit
                .products
                .iter()
                .map(|p| {
                    vec![
                        display_or_na(p.code.as_deref()),
                        display_or_na(p.name.as_deref()),
                    ]
                })
                .collect();
            lines.push(render_table(&["product_code", "product_name"], &rows));
        }
        sections.push(lines.join("\n"));
    }
    sections.join("\n\n")
}
