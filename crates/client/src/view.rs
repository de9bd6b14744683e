//! Plain-text rendering of the project list.

use std::fmt::Write;

use knitnote_core::types::Date;
use knitnote_core::project::Project;

/// Placeholder shown for a missing start or end date.
pub const NO_DATE: &str = "( no date set )";

/// Shown instead of the list when there are no projects.
pub const EMPTY_LIST: &str = "You have no projects. Add your first one!";

/// `MM/DD/YYYY - MM/DD/YYYY`, with [`NO_DATE`] standing in for a missing
/// side. With neither date set the placeholder appears once.
pub fn format_date_range(start: Option<Date>, end: Option<Date>) -> String {
    match (start, end) {
        (None, None) => NO_DATE.to_string(),
        (start, end) => format!("{} - {}", display_date(start), display_date(end)),
    }
}

/// Days between the two dates, e.g. `1 day` or `12 days`. `None` unless
/// both dates are set.
pub fn elapsed_days(start: Option<Date>, end: Option<Date>) -> Option<String> {
    let (start, end) = (start?, end?);
    let days = (end - start).num_days().abs();
    Some(if days == 1 {
        "1 day".to_string()
    } else {
        format!("{days} days")
    })
}

/// One project as a small card.
pub fn render_project(project: &Project) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "#{} {}", project.id, project.title);
    let _ = writeln!(out, "    Category  {}", or_na(&project.category));
    let _ = writeln!(out, "    Craft     {}", or_na(&project.craft));
    if let Some(pattern) = &project.pattern {
        let _ = writeln!(out, "    Pattern   {pattern}");
    }
    if let Some(yarn) = &project.yarn {
        let _ = writeln!(out, "    Yarn      {yarn}");
    }
    let _ = writeln!(
        out,
        "    [{}] In Progress   [{}] Completed",
        checkbox(project.progress),
        checkbox(project.completed)
    );
    let range = format_date_range(project.start_date, project.end_date);
    match elapsed_days(project.start_date, project.end_date) {
        Some(elapsed) => {
            let _ = writeln!(out, "    {range}  ({elapsed})");
        }
        None => {
            let _ = writeln!(out, "    {range}");
        }
    }
    out
}

/// All projects in the order given, separated by blank lines.
pub fn render_list(projects: &[Project]) -> String {
    if projects.is_empty() {
        return format!("{EMPTY_LIST}\n");
    }
    projects
        .iter()
        .map(render_project)
        .collect::<Vec<_>>()
        .join("\n")
}

fn display_date(date: Option<Date>) -> String {
    date.map(|d| d.format("%m/%d/%Y").to_string())
        .unwrap_or_else(|| NO_DATE.to_string())
}

fn checkbox(checked: bool) -> char {
    if checked {
        'x'
    } else {
        ' '
    }
}

fn or_na(value: &str) -> &str {
    if value.is_empty() {
        "N/A"
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> Option<Date> {
        Date::from_ymd_opt(y, m, day)
    }

    fn sample() -> Project {
        Project {
            id: 4,
            title: "Market Bag".into(),
            category: "Accessory".into(),
            craft: "Crochet".into(),
            pattern: Some("Mesh Tote".into()),
            yarn: None,
            start_date: d(2024, 3, 1),
            end_date: d(2024, 3, 15),
            completed: true,
            progress: false,
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn date_range_variants() {
        assert_eq!(format_date_range(None, None), "( no date set )");
        assert_eq!(
            format_date_range(d(2024, 1, 5), None),
            "01/05/2024 - ( no date set )"
        );
        assert_eq!(
            format_date_range(None, d(2024, 12, 31)),
            "( no date set ) - 12/31/2024"
        );
        assert_eq!(
            format_date_range(d(2024, 1, 5), d(2024, 2, 1)),
            "01/05/2024 - 02/01/2024"
        );
    }

    #[test]
    fn elapsed_days_needs_both_dates() {
        assert_eq!(elapsed_days(d(2024, 1, 1), None), None);
        assert_eq!(elapsed_days(None, d(2024, 1, 1)), None);
    }

    #[test]
    fn elapsed_days_singular_and_plural() {
        assert_eq!(elapsed_days(d(2024, 1, 1), d(2024, 1, 2)).unwrap(), "1 day");
        assert_eq!(elapsed_days(d(2024, 1, 1), d(2024, 1, 1)).unwrap(), "0 days");
        // Leap year February.
        assert_eq!(elapsed_days(d(2024, 2, 1), d(2024, 3, 1)).unwrap(), "29 days");
    }

    #[test]
    fn card_shows_optional_fields_only_when_set() {
        let card = render_project(&sample());
        assert!(card.starts_with("#4 Market Bag\n"));
        assert!(card.contains("Pattern   Mesh Tote"));
        assert!(!card.contains("Yarn"));
        assert!(card.contains("[ ] In Progress   [x] Completed"));
        assert!(card.contains("03/01/2024 - 03/15/2024  (14 days)"));
    }

    #[test]
    fn empty_list_message() {
        assert_eq!(render_list(&[]), format!("{EMPTY_LIST}\n"));
    }

    #[test]
    fn list_keeps_order() {
        let mut newer = sample();
        newer.id = 5;
        newer.title = "Tea Cozy".into();
        let out = render_list(&[newer, sample()]);
        let tea = out.find("Tea Cozy").unwrap();
        let bag = out.find("Market Bag").unwrap();
        assert!(tea < bag);
    }
}
