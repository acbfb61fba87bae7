//! Format dump summaries as text.

use crate::dump::DumpStats;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;

/// Format a section heading with bold/underline.
pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

/// Format dump statistics as a human-readable table.
pub fn format_stats_text(source: &str, stats: &DumpStats) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Dump Summary")));
    out.push_str(&format!("  Source: {}\n\n", source));

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Metric", "Value"]);
    table.add_row(vec!["Files".to_string(), stats.files.to_string()]);
    table.add_row(vec!["Leaf files".to_string(), stats.leaf_files.to_string()]);
    table.add_row(vec!["Records".to_string(), stats.records.to_string()]);
    table.add_row(vec!["Record bytes".to_string(), stats.bytes.to_string()]);
    table.add_row(vec!["Depth".to_string(), stats.depth.to_string()]);
    out.push_str(&format!("{}\n", table));

    if stats.shadowed_files > 0 {
        out.push_str(&format!(
            "\n{} container file(s) hold records that will not be written.\n",
            stats.shadowed_files
        ));
    }
    out
}
