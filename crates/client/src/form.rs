//! Add and edit forms.
//!
//! Both forms run the shared validation rules before anything is sent, so
//! the user gets the same message the server would return without a round
//! trip. The server still re-validates every payload.

use knitnote_core::types::{Date, DbId};
use knitnote_core::validation::{validate_project, NewProject, ProjectDraft, DATE_FORMAT};
use knitnote_core::project::{CreateProject, Project, UpdateProject};

/// Field values as typed into a form. Empty strings mean "not filled in".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectForm {
    pub title: String,
    pub category: String,
    pub craft: String,
    pub pattern: String,
    pub yarn: String,
    pub start_date: String,
    pub end_date: String,
}

impl ProjectForm {
    /// Run the shared rules over the current field values.
    pub fn validate(&self) -> Result<NewProject, String> {
        validate_project(&ProjectDraft {
            title: Some(self.title.as_str()),
            category: Some(self.category.as_str()),
            craft: Some(self.craft.as_str()),
            pattern: Some(self.pattern.as_str()),
            yarn: Some(self.yarn.as_str()),
            start_date: Some(self.start_date.as_str()),
            end_date: Some(self.end_date.as_str()),
        })
    }

    /// Reset every field, as after a successful submission.
    pub fn clear(&mut self) {
        *self = ProjectForm::default();
    }
}

/// The add-project form.
#[derive(Debug, Clone, Default)]
pub struct AddForm {
    pub fields: ProjectForm,
}

impl AddForm {
    pub fn new(fields: ProjectForm) -> Self {
        Self { fields }
    }

    /// Validate and build the create payload with trimmed values.
    pub fn submit(&self) -> Result<CreateProject, String> {
        let valid = self.fields.validate()?;
        Ok(CreateProject {
            title: Some(valid.title),
            category: Some(valid.category),
            craft: Some(valid.craft),
            pattern: Some(valid.pattern.unwrap_or_default()),
            yarn: Some(valid.yarn.unwrap_or_default()),
            start_date: Some(format_date(valid.start_date)),
            end_date: Some(format_date(valid.end_date)),
        })
    }
}

/// The edit dialog for one existing project.
///
/// Opening pre-populates every field from the record. Submitting yields a
/// full replacement payload; cancelling drops the form without producing
/// anything to send.
#[derive(Debug, Clone)]
pub struct EditForm {
    id: DbId,
    pub fields: ProjectForm,
}

impl EditForm {
    pub fn open(project: &Project) -> Self {
        Self {
            id: project.id,
            fields: ProjectForm {
                title: project.title.clone(),
                category: project.category.clone(),
                craft: project.craft.clone(),
                pattern: project.pattern.clone().unwrap_or_default(),
                yarn: project.yarn.clone().unwrap_or_default(),
                start_date: format_date(project.start_date),
                end_date: format_date(project.end_date),
            },
        }
    }

    /// Id of the project being edited.
    pub fn id(&self) -> DbId {
        self.id
    }

    /// Validate and build the replacement payload. Blank optional fields
    /// are sent as empty strings so the server clears them.
    pub fn submit(&self) -> Result<UpdateProject, String> {
        let valid = self.fields.validate()?;
        Ok(UpdateProject {
            title: Some(valid.title),
            category: Some(valid.category),
            craft: Some(valid.craft),
            pattern: Some(valid.pattern.unwrap_or_default()),
            yarn: Some(valid.yarn.unwrap_or_default()),
            start_date: Some(format_date(valid.start_date)),
            end_date: Some(format_date(valid.end_date)),
            completed: None,
            progress: None,
        })
    }

    /// Discard the edit. Nothing is sent.
    pub fn cancel(self) {
        tracing::debug!(id = self.id, "Edit cancelled");
    }
}

fn format_date(date: Option<Date>) -> String {
    date.map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ProjectForm {
        ProjectForm {
            title: "  Lace Shawl ".into(),
            category: "Accessory".into(),
            craft: "Knit".into(),
            pattern: "".into(),
            yarn: " Kidsilk ".into(),
            start_date: "2024-04-01".into(),
            end_date: "".into(),
        }
    }

    fn stored() -> Project {
        Project {
            id: 3,
            title: "Amigurumi Fox".into(),
            category: "Other".into(),
            craft: "Crochet".into(),
            pattern: Some("Fox Pattern".into()),
            yarn: None,
            start_date: Date::from_ymd_opt(2024, 2, 1),
            end_date: Date::from_ymd_opt(2024, 2, 9),
            completed: true,
            progress: false,
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn add_submit_trims_values() {
        let payload = AddForm::new(filled()).submit().unwrap();
        assert_eq!(payload.title.as_deref(), Some("Lace Shawl"));
        assert_eq!(payload.yarn.as_deref(), Some("Kidsilk"));
        assert_eq!(payload.pattern.as_deref(), Some(""));
        assert_eq!(payload.start_date.as_deref(), Some("2024-04-01"));
        assert_eq!(payload.end_date.as_deref(), Some(""));
    }

    #[test]
    fn add_submit_reports_first_error() {
        let mut fields = filled();
        fields.title = "ok".into();
        fields.category.clear();
        assert_eq!(
            AddForm::new(fields).submit().unwrap_err(),
            "Project title must be at least 3 characters long."
        );
    }

    #[test]
    fn clear_resets_all_fields() {
        let mut fields = filled();
        fields.clear();
        assert_eq!(fields, ProjectForm::default());
    }

    #[test]
    fn edit_form_is_prepopulated() {
        let form = EditForm::open(&stored());
        assert_eq!(form.id(), 3);
        assert_eq!(form.fields.title, "Amigurumi Fox");
        assert_eq!(form.fields.pattern, "Fox Pattern");
        assert_eq!(form.fields.yarn, "");
        assert_eq!(form.fields.start_date, "2024-02-01");
        assert_eq!(form.fields.end_date, "2024-02-09");
    }

    #[test]
    fn edit_submit_sends_full_replacement() {
        let mut form = EditForm::open(&stored());
        form.fields.pattern.clear();

        let payload = form.submit().unwrap();

        assert_eq!(payload.title.as_deref(), Some("Amigurumi Fox"));
        assert_eq!(payload.pattern.as_deref(), Some(""));
        assert_eq!(payload.end_date.as_deref(), Some("2024-02-09"));
        assert!(payload.completed.is_none());
        assert!(payload.progress.is_none());
    }

    #[test]
    fn edit_submit_rejects_reversed_dates() {
        let mut form = EditForm::open(&stored());
        form.fields.start_date = "2024-03-01".into();
        assert_eq!(
            form.submit().unwrap_err(),
            "Start date cannot be later than end date."
        );
    }
}
