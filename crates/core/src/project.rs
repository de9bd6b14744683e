//! The project record and its JSON contract.
//!
//! [`Project`] is what the API returns; [`CreateProject`] and
//! [`UpdateProject`] are the request bodies. Both the server and the client
//! speak these types, so they live here rather than next to the store.
//!
//! The server stores category and craft as free text (any non-empty value
//! is accepted), so [`Category`] and [`Craft`] describe what the client
//! offers rather than what the store enforces.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::{Date, DbId, Timestamp};
use crate::validation::{PatchDraft, ProjectDraft};

/// A stored project.
///
/// `completed` and `progress` serialize as JSON booleans; the dates use the
/// client's `startDate`/`endDate` names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub category: String,
    pub craft: String,
    pub pattern: Option<String>,
    pub yarn: Option<String>,
    #[serde(rename = "startDate")]
    pub start_date: Option<Date>,
    #[serde(rename = "endDate")]
    pub end_date: Option<Date>,
    pub completed: bool,
    pub progress: bool,
    pub created_at: Timestamp,
}

/// DTO for creating a new project.
///
/// Every field is optional on the wire so that a missing title or category
/// surfaces as a validation message rather than a deserialization failure.
/// Dates are `YYYY-MM-DD` strings; an empty string means "no date".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateProject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub craft: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yarn: Option<String>,
    #[serde(rename = "startDate", default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(rename = "endDate", default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

impl CreateProject {
    /// Borrow the raw fields for validation.
    pub fn as_draft(&self) -> ProjectDraft<'_> {
        ProjectDraft {
            title: self.title.as_deref(),
            category: self.category.as_deref(),
            craft: self.craft.as_deref(),
            pattern: self.pattern.as_deref(),
            yarn: self.yarn.as_deref(),
            start_date: self.start_date.as_deref(),
            end_date: self.end_date.as_deref(),
        }
    }
}

/// DTO for updating an existing project. All fields are optional; absent
/// fields keep their stored value. For `pattern`, `yarn` and the dates an
/// empty string clears the column.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub craft: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yarn: Option<String>,
    #[serde(rename = "startDate", default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(rename = "endDate", default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<bool>,
}

impl UpdateProject {
    pub fn as_draft(&self) -> PatchDraft<'_> {
        PatchDraft {
            title: self.title.as_deref(),
            category: self.category.as_deref(),
            craft: self.craft.as_deref(),
            pattern: self.pattern.as_deref(),
            yarn: self.yarn.as_deref(),
            start_date: self.start_date.as_deref(),
            end_date: self.end_date.as_deref(),
            completed: self.completed,
            progress: self.progress,
        }
    }
}

/// What a finished project is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Clothing,
    Accessory,
    Home,
    Other,
}

impl Category {
    /// All categories in the order the forms list them.
    pub const ALL: [Category; 4] = [
        Category::Clothing,
        Category::Accessory,
        Category::Home,
        Category::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Clothing => "Clothing",
            Category::Accessory => "Accessory",
            Category::Home => "Home",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    /// Case-insensitive match against the known categories.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| {
                format!(
                    "Unknown category '{trimmed}'. Must be one of: {}",
                    join_names(Category::ALL.iter().map(|c| c.as_str()))
                )
            })
    }
}

/// The technique a project is worked in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Craft {
    Knit,
    Crochet,
}

impl Craft {
    pub const ALL: [Craft; 2] = [Craft::Knit, Craft::Crochet];

    pub fn as_str(self) -> &'static str {
        match self {
            Craft::Knit => "Knit",
            Craft::Crochet => "Crochet",
        }
    }
}

impl fmt::Display for Craft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Craft {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Craft::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| {
                format!(
                    "Unknown craft '{trimmed}'. Must be one of: {}",
                    join_names(Craft::ALL.iter().map(|c| c.as_str()))
                )
            })
    }
}

fn join_names<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<_>>().join(", ")
}
