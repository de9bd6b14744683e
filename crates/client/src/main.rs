//! knitnote -- track knitting and crochet projects from the terminal.
//!
//! ## Subcommands
//!
//! - `list`                          show every project, newest first
//! - `add --title ... [fields]`      add a project
//! - `edit <id> [fields]`            change fields of a project
//! - `delete <id>`                   remove a project
//! - `toggle <id> progress|completed` flip a status checkbox
//!
//! The API location comes from `--api-url` or `KNITNOTE_API_URL`.

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use knitnote_client::api::ApiClient;
use knitnote_client::board::{ProjectBoard, Toggle};
use knitnote_client::form::{AddForm, ProjectForm};
use knitnote_client::view::{render_list, render_project};
use knitnote_core::project::{Category, Craft};
use knitnote_core::types::DbId;

#[derive(Parser)]
#[command(name = "knitnote", about = "A fiber-arts project tracker")]
struct Cli {
    /// Base URL of the knitnote API server.
    #[arg(long, env = "KNITNOTE_API_URL", default_value = "http://localhost:3000")]
    api_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show every project, newest first.
    List,
    /// Add a new project.
    Add(FieldArgs),
    /// Edit an existing project. Unspecified fields keep their values;
    /// pass an empty string to clear pattern, yarn or a date.
    Edit {
        id: DbId,
        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Delete a project.
    Delete { id: DbId },
    /// Flip the "in progress" or "completed" checkbox.
    Toggle { id: DbId, which: Toggle },
}

#[derive(Args, Default)]
struct FieldArgs {
    #[arg(long)]
    title: Option<String>,
    /// Clothing, Accessory, Home or Other.
    #[arg(long)]
    category: Option<Category>,
    /// Knit or Crochet.
    #[arg(long)]
    craft: Option<Craft>,
    #[arg(long)]
    pattern: Option<String>,
    #[arg(long)]
    yarn: Option<String>,
    /// Start date, YYYY-MM-DD.
    #[arg(long)]
    start: Option<String>,
    /// End date, YYYY-MM-DD.
    #[arg(long)]
    end: Option<String>,
}

impl FieldArgs {
    fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.category.is_none()
            && self.craft.is_none()
            && self.pattern.is_none()
            && self.yarn.is_none()
            && self.start.is_none()
            && self.end.is_none()
    }

    /// Overwrite the form fields that were given on the command line.
    fn apply_to(self, form: &mut ProjectForm) {
        if let Some(title) = self.title {
            form.title = title;
        }
        if let Some(category) = self.category {
            form.category = category.to_string();
        }
        if let Some(craft) = self.craft {
            form.craft = craft.to_string();
        }
        if let Some(pattern) = self.pattern {
            form.pattern = pattern;
        }
        if let Some(yarn) = self.yarn {
            form.yarn = yarn;
        }
        if let Some(start) = self.start {
            form.start_date = start;
        }
        if let Some(end) = self.end {
            form.end_date = end;
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "knitnote_client=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let mut board = ProjectBoard::new(ApiClient::new(cli.api_url));

    match cli.command {
        Command::List => {
            board
                .load()
                .await
                .context("Could not load projects from the API")?;
            print!("{}", render_list(board.projects()));
        }
        Command::Add(fields) => {
            let mut form = AddForm::default();
            fields.apply_to(&mut form.fields);
            let project = board.add(&mut form).await?;
            print!("{}", render_project(project));
        }
        Command::Edit { id, fields } => {
            board.fetch(id).await?;
            let mut form = board.begin_edit(id)?;
            if fields.is_empty() {
                form.cancel();
                println!("Nothing to change.");
                return Ok(());
            }
            fields.apply_to(&mut form.fields);
            let project = board.edit(&form).await?;
            print!("{}", render_project(project));
        }
        Command::Delete { id } => {
            board.delete(id).await?;
            println!("Project deleted");
        }
        Command::Toggle { id, which } => {
            board.fetch(id).await?;
            let project = board.toggle(id, which).await?;
            print!("{}", render_project(project));
        }
    }

    Ok(())
}
