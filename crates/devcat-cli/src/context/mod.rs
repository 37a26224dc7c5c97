mod app_context;
mod config_warnings;

pub use app_context::{AppContext, require_record};
pub use config_warnings::warn_unconfigured;
