use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::List(args) => commands::list::handle(&args, ctx, flags).await,
        Commands::Categories => commands::categories::handle(ctx, flags).await,
        Commands::Show(args) => commands::show::handle(&args, ctx, flags).await,
        Commands::Feedback(args) => commands::feedback::handle(&args, ctx, flags).await,
        Commands::Refresh => commands::refresh::handle(ctx, flags).await,
        Commands::Schema(args) => commands::schema::handle(&args, flags),
    }
}
