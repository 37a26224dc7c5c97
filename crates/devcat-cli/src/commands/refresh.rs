use chrono::Utc;
use devcat_core::responses::RefreshResponse;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `devcat refresh`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let records = ctx.reload().await?;
    let scope = ctx.config.cache.scope.clone();
    let loaded_at = ctx.cache.loaded_at(&scope).await.unwrap_or_else(Utc::now);

    let response = RefreshResponse {
        scope,
        source: ctx.loader.source().to_string(),
        records: records.len(),
        loaded_at,
    };
    output(&response, flags.format)
}
