//! Cart snapshot codec.
//!
//! A snapshot is the full line-item sequence as a JSON array:
//!
//! ```json
//! [{"id":"p1","name":"Shirt","price":100.0,"image":"https://...","quantity":2}]
//! ```
//!
//! Decoding is lenient in two ways. A literal `null` decodes to an empty
//! cart, and records repeating an earlier `id` are folded into the first
//! occurrence so the decoded cart holds at most one line per product.

use std::collections::HashMap;

use thiserror::Error;
use tracing::warn;
use vitrine_core::LineItem;

/// Errors raised while encoding or decoding a snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The snapshot is not a valid JSON line-item array.
    #[error("Malformed cart snapshot: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Serialize line items into a snapshot string.
///
/// # Errors
///
/// Returns [`SnapshotError::Malformed`] if serialization fails.
pub fn encode(items: &[LineItem]) -> Result<String, SnapshotError> {
    Ok(serde_json::to_string(items)?)
}

/// Parse a snapshot string into line items, preserving order.
///
/// # Errors
///
/// Returns [`SnapshotError::Malformed`] if `raw` is not a JSON array of
/// valid line items (missing fields, negative price, zero quantity, blank
/// id, ...).
pub fn decode(raw: &str) -> Result<Vec<LineItem>, SnapshotError> {
    let items: Option<Vec<LineItem>> = serde_json::from_str(raw)?;
    Ok(fold_duplicates(items.unwrap_or_default()))
}

fn fold_duplicates(items: Vec<LineItem>) -> Vec<LineItem> {
    let mut positions: HashMap<String, usize> = HashMap::with_capacity(items.len());
    let mut folded: Vec<LineItem> = Vec::with_capacity(items.len());

    for item in items {
        if let Some(&pos) = positions.get(item.id.as_str()) {
            warn!(product_id = %item.id, "Folding duplicate line item in snapshot");
            if let Some(first) = folded.get_mut(pos) {
                first.quantity = first.quantity.saturating_add(item.quantity.get());
            }
            continue;
        }
        positions.insert(item.id.as_str().to_owned(), folded.len());
        folded.push(item);
    }

    folded
}
