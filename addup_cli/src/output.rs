//! Rendering for machine consumers.

use serde_json::json;

/// One JSON object line carrying the total.
pub fn render_json(total: i32) -> String {
    json!({ "total": total }).to_string()
}
