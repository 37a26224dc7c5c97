use std::fmt::Write as _;

use devcat_core::entities::ProjectRecord;
use devcat_core::responses::{ListResponse, RecordSummary};
use devcat_query::{CatalogView, QueryState};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ListArgs;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output_rows;

/// Handle `devcat list`.
pub async fn handle(
    args: &ListArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let records = ctx.records().await;
    let query = QueryState::new(args.search.clone(), args.category, args.status);
    let limit = effective_limit(flags.limit, ctx.config.general.default_limit);

    let response = build_response(&query, &records, limit);
    let footer = footer(&response);
    output_rows(&response, &response.records, &footer, flags.format)
}

fn build_response(
    query: &QueryState,
    records: &[ProjectRecord],
    limit: Option<usize>,
) -> ListResponse {
    let CatalogView {
        records: matched,
        total,
        shown: matched_count,
        ..
    } = query.apply(records);

    let summaries = matched
        .into_iter()
        .take(limit.unwrap_or(usize::MAX))
        .map(RecordSummary::from)
        .collect::<Vec<_>>();

    ListResponse {
        total,
        matched: matched_count,
        shown: summaries.len(),
        has_active_filters: query.has_active_filters(),
        records: summaries,
    }
}

fn footer(response: &ListResponse) -> String {
    if response.total == 0 {
        return String::from("no projects found in the catalog source");
    }
    let mut line = format!("showing {} of {} projects", response.shown, response.total);
    if response.shown < response.matched {
        let _ = write!(line, " ({} matched, output limited)", response.matched);
    }
    if response.matched == 0 && response.has_active_filters {
        line.push_str("; no projects match the current filters");
    }
    line
}
