//! Entity structs for DevCatalog domain objects.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! output and schema export.

mod record;

pub use record::{MediaItem, ProjectRecord};
