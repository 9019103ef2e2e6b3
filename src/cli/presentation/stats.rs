//! Stats presentation: variant counts as a table or json.

use crate::error::ApiError;
use crate::views::TreeStats;
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;

pub fn format_stats_text(stats: &TreeStats) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Variant", "Nodes"]);
    table.add_row(vec!["folder".to_string(), stats.folders.to_string()]);
    table.add_row(vec!["model".to_string(), stats.models.to_string()]);
    table.add_row(vec!["other_file".to_string(), stats.other_files.to_string()]);
    table.add_row(vec!["total".to_string(), stats.total().to_string()]);

    let mut out = table.to_string();
    out.push_str(&format!("\nDepth: {}", stats.depth));
    if stats.model_filenames.is_empty() {
        out.push_str("\nModel files: none");
    } else {
        out.push_str(&format!("\nModel files: {}", stats.model_filenames.join(", ")));
    }
    out
}

pub fn format_stats_json(stats: &TreeStats) -> Result<String, ApiError> {
    let out = serde_json::json!({
        "folders": stats.folders,
        "models": stats.models,
        "other_files": stats.other_files,
        "total": stats.total(),
        "depth": stats.depth,
        "model_filenames": stats.model_filenames,
    });
    Ok(serde_json::to_string_pretty(&out)?)
}
