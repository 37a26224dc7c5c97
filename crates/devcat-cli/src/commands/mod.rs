pub mod categories;
pub mod dispatch;
pub mod feedback;
pub mod list;
pub mod refresh;
pub mod schema;
pub mod shared;
pub mod show;
