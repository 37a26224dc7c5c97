use clap::{Args, Subcommand, ValueEnum};
use devcat_core::enums::FeedbackKind;
use devcat_query::{CategoryFilter, StatusFilter};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// List projects, optionally filtered by search term, category and status.
    List(ListArgs),
    /// Show project counts for every category.
    Categories,
    /// Show every field of one project.
    Show(ShowArgs),
    /// Compose a feedback email about a project.
    Feedback(FeedbackArgs),
    /// Print the JSON Schema of a command response.
    Schema(SchemaArgs),
    /// Reload the catalog from its source.
    Refresh,
}

/// Arguments for `devcat list`.
#[derive(Clone, Debug, Args)]
pub struct ListArgs {
    /// Case-insensitive substring of name, summary or tech stack.
    #[arg(long, short = 's', default_value = "")]
    pub search: String,
    /// Category to keep, or `all`.
    #[arg(long, short = 'c', default_value = "all")]
    pub category: CategoryFilter,
    /// Lifecycle status to keep, or `all`.
    #[arg(long, default_value = "all")]
    pub status: StatusFilter,
}

/// Arguments for `devcat show`.
#[derive(Clone, Debug, Args)]
pub struct ShowArgs {
    pub id: String,
}

/// Arguments for `devcat feedback`.
#[derive(Clone, Debug, Args)]
pub struct FeedbackArgs {
    /// Project id the feedback is about.
    pub id: String,
    /// bug, feature or general.
    #[arg(long, short = 'k', default_value = "general")]
    pub kind: FeedbackKind,
    #[arg(long, short = 't')]
    pub title: String,
    #[arg(long, short = 'd')]
    pub description: String,
    /// Star rating from 1 to 5 (general feedback only).
    #[arg(long, short = 'r')]
    pub rating: Option<u8>,
}

/// Arguments for `devcat schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    #[arg(value_enum)]
    pub type_name: SchemaType,
}

/// Response types with a published schema.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaType {
    Record,
    CatalogView,
    CategoryCounts,
    List,
    Categories,
    Feedback,
    Refresh,
}
