//! Row mapping for the `Projects` table.

use chrono::NaiveDate;
use knitnote_core::project::Project;
use knitnote_core::types::Date;
use knitnote_core::validation::DATE_FORMAT;
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};

/// A `Projects` row decoded into a [`Project`].
///
/// Databases written by the earlier JavaScript server hold `''` rather than
/// NULL in the optional text and date columns. Both read back as `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectRow(pub Project);

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        row.0
    }
}

impl<'r> FromRow<'r, SqliteRow> for ProjectRow {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(Project {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            category: row.try_get("category")?,
            craft: row.try_get("craft")?,
            pattern: non_empty(row.try_get("pattern")?),
            yarn: non_empty(row.try_get("yarn")?),
            start_date: date_column(row, "startDate")?,
            end_date: date_column(row, "endDate")?,
            completed: row.try_get("completed")?,
            progress: row.try_get("progress")?,
            created_at: row.try_get("created_at")?,
        }))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn date_column(row: &SqliteRow, column: &str) -> Result<Option<Date>, sqlx::Error> {
    let Some(raw) = non_empty(row.try_get(column)?) else {
        return Ok(None);
    };
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map(Some)
        .map_err(|e| sqlx::Error::ColumnDecode {
            index: column.to_string(),
            source: Box::new(e),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_is_none() {
        assert_eq!(non_empty(Some("".into())), None);
        assert_eq!(non_empty(Some("   ".into())), None);
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some("Aran".into())).as_deref(), Some("Aran"));
    }
}
