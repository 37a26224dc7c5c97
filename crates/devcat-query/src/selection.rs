//! "All or one" filter selections.

use std::fmt;
use std::str::FromStr;

use devcat_core::enums::{Category, LifecycleStatus};
use devcat_core::errors::CoreError;

/// Either every value passes, or only one specific value does.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Selection<T> {
    #[default]
    All,
    Only(T),
}

pub type CategoryFilter = Selection<Category>;
pub type StatusFilter = Selection<LifecycleStatus>;

impl<T: PartialEq> Selection<T> {
    /// Whether `value` passes this selection.
    #[must_use]
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == value,
        }
    }

    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl<T> From<Option<T>> for Selection<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::All, Self::Only)
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        Self::Only(category)
    }
}

impl From<LifecycleStatus> for StatusFilter {
    fn from(status: LifecycleStatus) -> Self {
        Self::Only(status)
    }
}

impl<T> FromStr for Selection<T>
where
    T: FromStr<Err = CoreError>,
{
    type Err = CoreError;

    /// `"all"` (any case) or anything `T` parses.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if raw.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        raw.parse().map(Self::Only)
    }
}

impl<T: fmt::Display> fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(value) => value.fmt(f),
        }
    }
}
