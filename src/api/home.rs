//! Server-rendered listing page served at `/`.
//!
//! The page receives the full, unfiltered product collection ordered by price.

use crate::{api::AppState, entities::ProductModel, errors::Result};
use axum::{extract::State, response::Html};

/// `GET /` - HTML table of every product.
pub async fn listing_page(State(state): State<AppState>) -> Result<Html<String>> {
    let products = state.store.query(None).await?;
    Ok(Html(render_listing(&products)))
}

/// Renders `products` into a standalone HTML document.
#[must_use]
pub fn render_listing(products: &[ProductModel]) -> String {
    let rows: String = products
        .iter()
        .map(|product| {
            format!(
                "      <tr><td>{}</td><td>{}</td><td>{}</td><td>{:.2}</td></tr>\n",
                product.id,
                escape_html(&product.name),
                escape_html(&product.description),
                product.price,
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>Products</title>
</head>
<body>
  <h1>Products</h1>
  <table>
    <thead>
      <tr><th>Id</th><th>Name</th><th>Description</th><th>Price</th></tr>
    </thead>
    <tbody>
{rows}    </tbody>
  </table>
</body>
</html>
"#
    )
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
