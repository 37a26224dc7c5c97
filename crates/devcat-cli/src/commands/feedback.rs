use devcat_feedback::{FeedbackDraft, FeedbackMessage};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::FeedbackArgs;
use crate::context::{AppContext, require_record};
use crate::output::output;

/// Handle `devcat feedback`.
pub async fn handle(
    args: &FeedbackArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let draft = draft_from_args(args);
    draft.validate()?;

    let records = ctx.records().await;
    let record = require_record(&records, &args.id)?;

    if !ctx.config.feedback.is_configured() {
        tracing::warn!(
            email = %ctx.config.feedback.email,
            "feedback recipient is the placeholder address; set feedback.email or DEVCATALOG_FEEDBACK__EMAIL"
        );
    }
    if args.rating.is_some() && draft.effective_rating().is_none() {
        tracing::warn!(kind = %draft.kind, "rating only applies to general feedback; ignoring it");
    }

    let message = FeedbackMessage::compose(record, &draft)?;
    let response = message.into_response(record, &draft, &ctx.config.feedback.email)?;
    output(&response, flags.format)
}

fn draft_from_args(args: &FeedbackArgs) -> FeedbackDraft {
    FeedbackDraft {
        kind: args.kind,
        title: args.title.clone(),
        description: args.description.clone(),
        rating: args.rating,
    }
}
