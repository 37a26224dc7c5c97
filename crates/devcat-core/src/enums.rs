//! Category, lifecycle status, and feedback kind enums for DevCatalog.
//!
//! Wire names follow the spreadsheet values (`web`, `in-progress`, ...).
//! Each enum carries an immutable descriptor table (labels, descriptions)
//! so rendering layers never keep their own lookup maps.
//!
//! Spreadsheet cells go through the lenient `from_cell` constructors, which
//! fall back to a fixed default instead of failing. `FromStr` is strict and
//! is what command-line input uses.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

/// Lowercase, trim, and fold `_` and spaces into `-`.
fn normalize(raw: &str) -> String {
    raw.trim()
        .to_ascii_lowercase()
        .chars()
        .map(|c| if c == '_' || c == ' ' { '-' } else { c })
        .collect()
}

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Platform category of a cataloged project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Android,
    Ios,
    Web,
    Extension,
    Website,
    Internal,
}

/// Display metadata for a [`Category`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryDescriptor {
    /// Heading used for category cards ("Web Apps").
    pub label: &'static str,
    /// Singular badge text ("Web App").
    pub badge: &'static str,
    pub description: &'static str,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Self; 6] = [
        Self::Android,
        Self::Ios,
        Self::Web,
        Self::Extension,
        Self::Website,
        Self::Internal,
    ];

    /// Category assigned to rows whose `type` cell is blank or unrecognized.
    pub const FALLBACK: Self = Self::Web;

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Android => "android",
            Self::Ios => "ios",
            Self::Web => "web",
            Self::Extension => "extension",
            Self::Website => "website",
            Self::Internal => "internal",
        }
    }

    #[must_use]
    pub const fn descriptor(self) -> CategoryDescriptor {
        match self {
            Self::Android => CategoryDescriptor {
                label: "Android",
                badge: "Android",
                description: "Native Android applications built for mobile devices.",
            },
            Self::Ios => CategoryDescriptor {
                label: "iOS",
                badge: "iOS",
                description: "Native iOS apps designed for iPhone and iPad.",
            },
            Self::Web => CategoryDescriptor {
                label: "Web Apps",
                badge: "Web App",
                description: "Full-featured web applications with rich functionality.",
            },
            Self::Extension => CategoryDescriptor {
                label: "Extensions",
                badge: "Extension",
                description: "Browser extensions and plugins to enhance workflows.",
            },
            Self::Website => CategoryDescriptor {
                label: "Websites",
                badge: "Website",
                description: "Informational and marketing websites.",
            },
            Self::Internal => CategoryDescriptor {
                label: "Internal Tools",
                badge: "Internal",
                description: "Private tools built for internal team use.",
            },
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        self.descriptor().label
    }

    #[must_use]
    pub const fn badge(self) -> &'static str {
        self.descriptor().badge
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        self.descriptor().description
    }

    /// Lenient conversion for spreadsheet cells.
    #[must_use]
    pub fn from_cell(raw: &str) -> Self {
        raw.parse().unwrap_or(Self::FALLBACK)
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match normalize(raw).as_str() {
            "android" => Ok(Self::Android),
            "ios" => Ok(Self::Ios),
            "web" | "web-app" | "webapp" => Ok(Self::Web),
            "extension" | "browser-extension" => Ok(Self::Extension),
            "website" | "marketing-site" => Ok(Self::Website),
            "internal" | "internal-tool" => Ok(Self::Internal),
            _ => Err(CoreError::invalid_value(
                "category",
                raw,
                &Self::ALL.map(Self::as_str),
            )),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// LifecycleStatus
// ---------------------------------------------------------------------------

/// Development state of a cataloged project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum LifecycleStatus {
    Live,
    InProgress,
    Archived,
}

impl LifecycleStatus {
    pub const ALL: [Self; 3] = [Self::Live, Self::InProgress, Self::Archived];

    /// Status assigned to rows whose `status` cell is blank or unrecognized.
    pub const FALLBACK: Self = Self::InProgress;

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::InProgress => "in-progress",
            Self::Archived => "archived",
        }
    }

    /// Badge text.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Live => "LIVE",
            Self::InProgress => "IN PROGRESS",
            Self::Archived => "ARCHIVED",
        }
    }

    /// Tab title used by status filters.
    #[must_use]
    pub const fn tab_title(self) -> &'static str {
        match self {
            Self::Live => "Live",
            Self::InProgress => "In Progress",
            Self::Archived => "Archived",
        }
    }

    #[must_use]
    pub fn from_cell(raw: &str) -> Self {
        raw.parse().unwrap_or(Self::FALLBACK)
    }
}

impl FromStr for LifecycleStatus {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match normalize(raw).as_str() {
            "live" => Ok(Self::Live),
            "in-progress" | "inprogress" => Ok(Self::InProgress),
            "archived" => Ok(Self::Archived),
            _ => Err(CoreError::invalid_value(
                "status",
                raw,
                &Self::ALL.map(Self::as_str),
            )),
        }
    }
}

impl fmt::Display for LifecycleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// FeedbackKind
// ---------------------------------------------------------------------------

/// Kind of feedback a visitor submits about a project.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackKind {
    Bug,
    Feature,
    #[default]
    General,
}

impl FeedbackKind {
    pub const ALL: [Self; 3] = [Self::Bug, Self::Feature, Self::General];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bug => "bug",
            Self::Feature => "feature",
            Self::General => "general",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bug => "Bug Report",
            Self::Feature => "Feature Request",
            Self::General => "General Feedback",
        }
    }

    /// Only general feedback carries a star rating.
    #[must_use]
    pub const fn accepts_rating(self) -> bool {
        matches!(self, Self::General)
    }
}

impl FromStr for FeedbackKind {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match normalize(raw).as_str() {
            "bug" => Ok(Self::Bug),
            "feature" => Ok(Self::Feature),
            "general" => Ok(Self::General),
            _ => Err(CoreError::invalid_value(
                "feedback kind",
                raw,
                &Self::ALL.map(Self::as_str),
            )),
        }
    }
}

impl fmt::Display for FeedbackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
