//! The project board: the one place that owns the in-memory project list.
//!
//! Every intent (add, edit, delete, toggle) goes to the server first and the
//! local list changes only from the server's answer. A failed call leaves
//! the list exactly as it was.

use std::fmt;
use std::str::FromStr;

use knitnote_core::types::DbId;
use knitnote_core::project::{Project, UpdateProject};

use crate::api::{ApiClient, ClientError};
use crate::form::{AddForm, EditForm};

/// Which status checkbox a toggle flips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Progress,
    Completed,
}

impl Toggle {
    /// Partial update that flips this flag relative to `project`.
    pub fn payload(self, project: &Project) -> UpdateProject {
        match self {
            Toggle::Progress => UpdateProject {
                progress: Some(!project.progress),
                ..Default::default()
            },
            Toggle::Completed => UpdateProject {
                completed: Some(!project.completed),
                ..Default::default()
            },
        }
    }
}

impl fmt::Display for Toggle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Toggle::Progress => f.write_str("progress"),
            Toggle::Completed => f.write_str("completed"),
        }
    }
}

impl FromStr for Toggle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "progress" | "in-progress" => Ok(Toggle::Progress),
            "completed" | "done" => Ok(Toggle::Completed),
            other => Err(format!(
                "Unknown toggle '{other}'. Must be one of: progress, completed"
            )),
        }
    }
}

/// Errors surfaced by board intents.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    /// The form failed client-side validation; nothing was sent.
    #[error("{0}")]
    Invalid(String),

    /// The id is not in the loaded collection.
    #[error("Project {0} is not on the board")]
    UnknownProject(DbId),

    /// The server or the network rejected the call.
    #[error(transparent)]
    Client(#[from] ClientError),
}

/// Root UI state: the API client plus the project collection it mirrors.
#[derive(Debug)]
pub struct ProjectBoard {
    api: ApiClient,
    projects: Vec<Project>,
}

impl ProjectBoard {
    /// An empty board. Call [`ProjectBoard::load`] once to fill it.
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            projects: Vec::new(),
        }
    }

    /// Projects in display order (newest first).
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn get(&self, id: DbId) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Replace the collection with the server's list.
    pub async fn load(&mut self) -> Result<(), BoardError> {
        self.projects = self.api.get_projects().await?;
        tracing::debug!(count = self.projects.len(), "Board loaded");
        Ok(())
    }

    /// Fetch one project from the server and put it on the board, replacing
    /// a stale copy or inserting it at its newest-first position.
    pub async fn fetch(&mut self, id: DbId) -> Result<&Project, BoardError> {
        let project = self.api.get_project(id).await?;
        let slot = match self.projects.iter().position(|p| p.id == id) {
            Some(slot) => {
                self.projects[slot] = project;
                slot
            }
            None => {
                let slot = self
                    .projects
                    .iter()
                    .position(|p| p.id < id)
                    .unwrap_or(self.projects.len());
                self.projects.insert(slot, project);
                slot
            }
        };
        Ok(&self.projects[slot])
    }

    /// Validate the form, create the project and put the stored record at
    /// the top of the list. The form is cleared on success.
    pub async fn add(&mut self, form: &mut AddForm) -> Result<&Project, BoardError> {
        let payload = form.submit().map_err(BoardError::Invalid)?;
        let created = self.api.add_project(&payload).await?;
        form.fields.clear();
        Ok(self.prepend(created))
    }

    /// Open the edit dialog for a project on the board.
    pub fn begin_edit(&self, id: DbId) -> Result<EditForm, BoardError> {
        self.get(id)
            .map(EditForm::open)
            .ok_or(BoardError::UnknownProject(id))
    }

    /// Submit an edit dialog and swap in the server's version of the record.
    pub async fn edit(&mut self, form: &EditForm) -> Result<&Project, BoardError> {
        let payload = form.submit().map_err(BoardError::Invalid)?;
        let updated = self.api.update_project(form.id(), &payload).await?;
        self.replace(updated)
    }

    /// Flip one status flag.
    pub async fn toggle(&mut self, id: DbId, which: Toggle) -> Result<&Project, BoardError> {
        let project = self.get(id).ok_or(BoardError::UnknownProject(id))?;
        let payload = which.payload(project);
        let updated = self.api.update_project(id, &payload).await?;
        self.replace(updated)
    }

    /// Delete a project and drop it from the list.
    pub async fn delete(&mut self, id: DbId) -> Result<(), BoardError> {
        self.api.delete_project(id).await?;
        self.remove(id);
        Ok(())
    }

    // ---- reconciliation ----

    fn prepend(&mut self, project: Project) -> &Project {
        self.projects.insert(0, project);
        &self.projects[0]
    }

    fn replace(&mut self, updated: Project) -> Result<&Project, BoardError> {
        let id = updated.id;
        let slot = self
            .projects
            .iter_mut()
            .position(|p| p.id == id)
            .ok_or(BoardError::UnknownProject(id))?;
        self.projects[slot] = updated;
        Ok(&self.projects[slot])
    }

    fn remove(&mut self, id: DbId) {
        self.projects.retain(|p| p.id != id);
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use knitnote_core::types::Date;

    use super::*;

    fn project(id: DbId, title: &str) -> Project {
        Project {
            id,
            title: title.into(),
            category: "Home".into(),
            craft: "Knit".into(),
            pattern: None,
            yarn: None,
            start_date: Date::from_ymd_opt(2024, 1, 1),
            end_date: None,
            completed: false,
            progress: true,
            created_at: chrono::Utc::now(),
        }
    }

    fn board_with(projects: Vec<Project>) -> ProjectBoard {
        ProjectBoard {
            api: ApiClient::new("http://127.0.0.1:9"),
            projects,
        }
    }

    #[test]
    fn toggle_payload_flips_only_one_flag() {
        let p = project(1, "Rug");
        let progress = Toggle::Progress.payload(&p);
        assert_eq!(progress.progress, Some(false));
        assert!(progress.completed.is_none());

        let completed = Toggle::Completed.payload(&p);
        assert_eq!(completed.completed, Some(true));
        assert!(completed.progress.is_none());
        assert!(completed.title.is_none());
    }

    #[test]
    fn toggle_parses_from_cli_words() {
        assert_eq!("progress".parse::<Toggle>().unwrap(), Toggle::Progress);
        assert_eq!("Completed".parse::<Toggle>().unwrap(), Toggle::Completed);
        assert!("finished?".parse::<Toggle>().is_err());
    }

    #[test]
    fn prepend_puts_new_project_first() {
        let mut board = board_with(vec![project(1, "Old")]);
        board.prepend(project(2, "New"));
        let ids: Vec<_> = board.projects().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn replace_keeps_position() {
        let mut board = board_with(vec![project(3, "C"), project(2, "B"), project(1, "A")]);
        let mut updated = project(2, "B2");
        updated.completed = true;

        let replaced = board.replace(updated).unwrap();
        assert_eq!(replaced.title, "B2");

        let titles: Vec<_> = board.projects().iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["C", "B2", "A"]);
    }

    #[test]
    fn replace_unknown_is_an_error() {
        let mut board = board_with(vec![project(1, "A")]);
        assert_matches!(
            board.replace(project(9, "Z")),
            Err(BoardError::UnknownProject(9))
        );
    }

    #[test]
    fn remove_drops_only_matching_id() {
        let mut board = board_with(vec![project(2, "B"), project(1, "A")]);
        board.remove(2);
        assert_eq!(board.projects().len(), 1);
        assert!(board.get(2).is_none());
        assert!(board.get(1).is_some());
    }

    #[test]
    fn begin_edit_unknown_project() {
        let board = board_with(vec![]);
        assert_matches!(board.begin_edit(5), Err(BoardError::UnknownProject(5)));
    }

    #[tokio::test]
    async fn invalid_add_never_reaches_the_server() {
        let mut board = board_with(vec![]);
        let mut form = AddForm::default();

        let result = board.add(&mut form).await;

        assert_matches!(result, Err(BoardError::Invalid(msg)) if msg == "Project title is required.");
        assert!(board.projects().is_empty());
    }
}
