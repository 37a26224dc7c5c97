use crate::cli::GlobalFlags;
use crate::cli::root_commands::ShowArgs;
use crate::context::{AppContext, require_record};
use crate::output::output;

/// Handle `devcat show`.
pub async fn handle(
    args: &ShowArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let records = ctx.records().await;
    let record = require_record(&records, &args.id)?;
    output(record, flags.format)
}
