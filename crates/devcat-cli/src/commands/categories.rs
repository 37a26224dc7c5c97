use devcat_core::responses::CategoryRow;
use devcat_query::{CategoryCounts, compute_category_counts};

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output_rows;

/// Handle `devcat categories`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let records = ctx.records().await;
    let counts = compute_category_counts(&records);
    let rows = category_rows(&counts);
    let footer = format!("{} projects in total", counts.total());
    output_rows(&rows, &rows, &footer, flags.format)
}

/// One row per category in display order, empty categories included.
fn category_rows(counts: &CategoryCounts) -> Vec<CategoryRow> {
    counts
        .iter()
        .map(|(category, count)| CategoryRow {
            category,
            label: category.label().to_string(),
            description: category.description().to_string(),
            count,
        })
        .collect()
}
