//! Validation rules for project input.
//!
//! One rule set serves both sides: the API re-validates every create and
//! edit (authoritative), and the client runs the same functions before it
//! sends anything so the user sees the message without a round trip.
//!
//! Checks run in a fixed order and stop at the first failure, so callers
//! always get exactly one field-specific message.

use validator::ValidateLength;

use crate::types::Date;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Minimum length of a title, pattern or yarn name after trimming.
pub const MIN_TEXT_LENGTH: u64 = 3;

/// Maximum length of a title, pattern or yarn name after trimming.
pub const MAX_TEXT_LENGTH: u64 = 100;

/// Wire format for start and end dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// ---------------------------------------------------------------------------
// Input / output types
// ---------------------------------------------------------------------------

/// Raw field values for a new project, exactly as submitted.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectDraft<'a> {
    pub title: Option<&'a str>,
    pub category: Option<&'a str>,
    pub craft: Option<&'a str>,
    pub pattern: Option<&'a str>,
    pub yarn: Option<&'a str>,
    pub start_date: Option<&'a str>,
    pub end_date: Option<&'a str>,
}

/// A project that passed validation, with text trimmed, empty optional
/// fields collapsed to `None` and the status flags derived from the dates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub title: String,
    pub category: String,
    pub craft: String,
    pub pattern: Option<String>,
    pub yarn: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub completed: bool,
    pub progress: bool,
}

/// Raw field values for a partial update. `None` means "not supplied";
/// an empty string for an optional field means "clear it".
#[derive(Debug, Clone, Copy, Default)]
pub struct PatchDraft<'a> {
    pub title: Option<&'a str>,
    pub category: Option<&'a str>,
    pub craft: Option<&'a str>,
    pub pattern: Option<&'a str>,
    pub yarn: Option<&'a str>,
    pub start_date: Option<&'a str>,
    pub end_date: Option<&'a str>,
    pub completed: Option<bool>,
    pub progress: Option<bool>,
}

/// A validated partial update.
///
/// Outer `None` leaves the stored column untouched; `Some(None)` on an
/// optional column clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectChanges {
    pub title: Option<String>,
    pub category: Option<String>,
    pub craft: Option<String>,
    pub pattern: Option<Option<String>>,
    pub yarn: Option<Option<String>>,
    pub start_date: Option<Option<Date>>,
    pub end_date: Option<Option<Date>>,
    pub completed: Option<bool>,
    pub progress: Option<bool>,
}

impl ProjectChanges {
    /// True when the update would not touch any column.
    pub fn is_empty(&self) -> bool {
        *self == ProjectChanges::default()
    }
}

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

/// Validate a new project and derive its status flags.
pub fn validate_project(draft: &ProjectDraft<'_>) -> Result<NewProject, String> {
    let title = validate_title(draft.title.unwrap_or_default())?;
    let category = validate_required(draft.category, "Category is required.")?;
    let craft = validate_required(draft.craft, "Craft type is required.")?;
    let pattern = validate_optional_text(draft.pattern, "Pattern name")?;
    let yarn = validate_optional_text(draft.yarn, "Yarn name")?;
    let start_date = parse_optional_date(draft.start_date, "Start date")?;
    let end_date = parse_optional_date(draft.end_date, "End date")?;
    validate_date_order(start_date, end_date)?;

    let (completed, progress) = derive_flags(start_date, end_date);

    Ok(NewProject {
        title,
        category,
        craft,
        pattern,
        yarn,
        start_date,
        end_date,
        completed,
        progress,
    })
}

/// Validate only the supplied fields of a partial update.
///
/// Date ordering is not checked here because it depends on the stored
/// record when only one side is supplied; see [`validate_date_order`].
pub fn validate_patch(draft: &PatchDraft<'_>) -> Result<ProjectChanges, String> {
    let title = draft.title.map(validate_title).transpose()?;
    let category = draft
        .category
        .map(|c| validate_required(Some(c), "Category is required."))
        .transpose()?;
    let craft = draft
        .craft
        .map(|c| validate_required(Some(c), "Craft type is required."))
        .transpose()?;
    let pattern = draft
        .pattern
        .map(|p| validate_optional_text(Some(p), "Pattern name"))
        .transpose()?;
    let yarn = draft
        .yarn
        .map(|y| validate_optional_text(Some(y), "Yarn name"))
        .transpose()?;
    let start_date = draft
        .start_date
        .map(|d| parse_optional_date(Some(d), "Start date"))
        .transpose()?;
    let end_date = draft
        .end_date
        .map(|d| parse_optional_date(Some(d), "End date"))
        .transpose()?;

    Ok(ProjectChanges {
        title,
        category,
        craft,
        pattern,
        yarn,
        start_date,
        end_date,
        completed: draft.completed,
        progress: draft.progress,
    })
}

/// Title: required, 3 to 100 characters after trimming.
pub fn validate_title(title: &str) -> Result<String, String> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err("Project title is required.".to_string());
    }
    check_length(trimmed, "Project title")?;
    Ok(trimmed.to_string())
}

/// Optional free text (pattern, yarn): blank collapses to `None`,
/// otherwise the trimmed value must be 3 to 100 characters.
pub fn validate_optional_text(value: Option<&str>, label: &str) -> Result<Option<String>, String> {
    let trimmed = value.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return Ok(None);
    }
    check_length(trimmed, label)?;
    Ok(Some(trimmed.to_string()))
}

/// Reject a start date later than the end date. Equal dates and missing
/// sides pass.
pub fn validate_date_order(start: Option<Date>, end: Option<Date>) -> Result<(), String> {
    match (start, end) {
        (Some(start), Some(end)) if start > end => {
            Err("Start date cannot be later than end date.".to_string())
        }
        _ => Ok(()),
    }
}

/// Parse a `YYYY-MM-DD` date; blank means "no date".
pub fn parse_optional_date(value: Option<&str>, label: &str) -> Result<Option<Date>, String> {
    let trimmed = value.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return Ok(None);
    }
    Date::parse_from_str(trimmed, DATE_FORMAT)
        .map(Some)
        .map_err(|_| format!("{label} must be a valid date (YYYY-MM-DD)."))
}

/// Status flags implied by the dates at creation time: `(completed, progress)`.
///
/// A finished project has an end date; one in progress has a start date
/// and no end date yet.
pub fn derive_flags(start: Option<Date>, end: Option<Date>) -> (bool, bool) {
    let completed = end.is_some();
    let progress = start.is_some() && end.is_none();
    (completed, progress)
}

fn validate_required(value: Option<&str>, message: &str) -> Result<String, String> {
    let trimmed = value.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return Err(message.to_string());
    }
    Ok(trimmed.to_string())
}

fn check_length(trimmed: &str, label: &str) -> Result<(), String> {
    if !trimmed.validate_length(Some(MIN_TEXT_LENGTH), None, None) {
        return Err(format!(
            "{label} must be at least {MIN_TEXT_LENGTH} characters long."
        ));
    }
    if !trimmed.validate_length(None, Some(MAX_TEXT_LENGTH), None) {
        return Err(format!(
            "{label} must not exceed {MAX_TEXT_LENGTH} characters."
        ));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
