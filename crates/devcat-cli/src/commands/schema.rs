use devcat_core::entities::ProjectRecord;
use devcat_core::responses::{CategoryRow, FeedbackResponse, ListResponse, RefreshResponse};
use devcat_query::{CatalogView, CategoryCounts};
use schemars::{Schema, schema_for};

use crate::cli::GlobalFlags;
use crate::cli::OutputFormat;
use crate::cli::root_commands::{SchemaArgs, SchemaType};
use crate::output::output;

/// Handle `devcat schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = schema_for_type(args.type_name);
    // A schema has no sensible table form.
    let format = match flags.format {
        OutputFormat::Table => OutputFormat::Json,
        other => other,
    };
    output(&schema, format)
}

fn schema_for_type(type_name: SchemaType) -> Schema {
    match type_name {
        SchemaType::Record => schema_for!(ProjectRecord),
        SchemaType::CatalogView => schema_for!(CatalogView<'static>),
        SchemaType::CategoryCounts => schema_for!(CategoryCounts),
        SchemaType::List => schema_for!(ListResponse),
        SchemaType::Categories => schema_for!(Vec<CategoryRow>),
        SchemaType::Feedback => schema_for!(FeedbackResponse),
        SchemaType::Refresh => schema_for!(RefreshResponse),
    }
}
