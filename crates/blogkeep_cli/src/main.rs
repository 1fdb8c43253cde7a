//! Command-line front end for `blogkeep_core`.
//!
//! # Responsibility
//! - Open a database, run one author/post use-case, print the result as JSON.
//! - Turn validation failures into a readable message and a non-zero exit.

use anyhow::{bail, Context, Result};
use blogkeep_core::db::open_db;
use blogkeep_core::{
    AuthorListQuery, AuthorService, Category, PostDraft, PostListQuery, PostService, RecordId,
    SqliteAuthorRepository, SqlitePostRepository,
};
use clap::{Args, Parser, Subcommand};
use log::info;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Manage validated blog authors and posts.
#[derive(Parser, Debug)]
#[command(name = "blogkeep", version, about, long_about = None)]
struct Cli {
    /// SQLite database file (created and migrated on first use)
    #[arg(long, env = "BLOGKEEP_DB", default_value = "blogkeep.sqlite3", global = true)]
    db: PathBuf,

    /// Log level: trace|debug|info|warn|error
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Absolute directory for rolling log files; logging stays off when unset
    #[arg(long, env = "BLOGKEEP_LOG_DIR", global = true)]
    log_dir: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print core ping and version without touching the database
    Ping,
    /// Author records
    #[command(subcommand)]
    Author(AuthorCommand),
    /// Post records
    #[command(subcommand)]
    Post(PostCommand),
}

#[derive(Subcommand, Debug)]
enum AuthorCommand {
    /// Create an author
    Add {
        #[arg(long)]
        name: String,
        /// Exactly ten characters
        #[arg(long)]
        phone: Option<String>,
    },
    /// Rename an existing author
    Rename {
        #[arg(long)]
        id: RecordId,
        #[arg(long)]
        name: String,
    },
    /// Set the phone number; omit --phone to clear it
    SetPhone {
        #[arg(long)]
        id: RecordId,
        #[arg(long)]
        phone: Option<String>,
    },
    /// List authors in creation order
    List(PageArgs),
}

#[derive(Subcommand, Debug)]
enum PostCommand {
    /// Create a post
    Add(PostFields),
    /// Replace every field of an existing post
    Update {
        #[arg(long)]
        id: RecordId,
        #[command(flatten)]
        fields: PostFields,
    },
    /// Show one post
    Show {
        #[arg(long)]
        id: RecordId,
    },
    /// List posts in creation order
    List {
        /// Fiction or Non-Fiction
        #[arg(long)]
        category: Option<String>,
        #[command(flatten)]
        page: PageArgs,
    },
}

#[derive(Args, Debug)]
struct PostFields {
    #[arg(long)]
    title: String,
    /// Fiction or Non-Fiction
    #[arg(long)]
    category: Option<String>,
    /// At least 250 characters
    #[arg(long)]
    content: Option<String>,
    /// At most 250 characters
    #[arg(long)]
    summary: Option<String>,
}

impl From<PostFields> for PostDraft {
    fn from(value: PostFields) -> Self {
        Self {
            title: value.title,
            content: value.content,
            summary: value.summary,
            category: value.category,
        }
    }
}

#[derive(Args, Debug)]
struct PageArgs {
    #[arg(long)]
    limit: Option<u32>,
    #[arg(long, default_value_t = 0)]
    offset: u32,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli
            .log_level
            .as_deref()
            .unwrap_or(blogkeep_core::default_log_level());
        blogkeep_core::init_logging(level, log_dir).context("failed to initialize logging")?;
    }

    match cli.command {
        Command::Ping => {
            println!("blogkeep_core ping={}", blogkeep_core::ping());
            println!("blogkeep_core version={}", blogkeep_core::core_version());
            Ok(())
        }
        Command::Author(command) => run_author(&cli.db, command),
        Command::Post(command) => run_post(&cli.db, command),
    }
}

fn run_author(db: &Path, command: AuthorCommand) -> Result<()> {
    let conn = open_db(db).with_context(|| format!("failed to open {}", db.display()))?;
    let service = AuthorService::new(SqliteAuthorRepository::new(&conn));
    info!("event=cli_command module=cli status=start command=author");

    match command {
        AuthorCommand::Add { name, phone } => print_json(&service.create_author(name, phone)?),
        AuthorCommand::Rename { id, name } => print_json(&service.rename_author(id, name)?),
        AuthorCommand::SetPhone { id, phone } => {
            print_json(&service.set_phone_number(id, phone)?)
        }
        AuthorCommand::List(page) => print_json(&service.list_authors(&AuthorListQuery {
            limit: page.limit,
            offset: page.offset,
        })?),
    }
}

fn run_post(db: &Path, command: PostCommand) -> Result<()> {
    let conn = open_db(db).with_context(|| format!("failed to open {}", db.display()))?;
    let service = PostService::new(SqlitePostRepository::new(&conn));
    info!("event=cli_command module=cli status=start command=post");

    match command {
        PostCommand::Add(fields) => print_json(&service.create_post(&fields.into())?),
        PostCommand::Update { id, fields } => {
            print_json(&service.update_post(id, &fields.into())?)
        }
        PostCommand::Show { id } => match service.get_post(id)? {
            Some(post) => print_json(&post),
            None => bail!("post not found: {id}"),
        },
        PostCommand::List { category, page } => {
            let category = category.as_deref().map(parse_category).transpose()?;
            print_json(&service.list_posts(&PostListQuery {
                category,
                limit: page.limit,
                offset: page.offset,
            })?)
        }
    }
}

fn parse_category(value: &str) -> Result<Category> {
    match Category::parse(value) {
        Some(category) => Ok(category),
        None => {
            let known = Category::ALL.map(Category::as_str).join(", ");
            bail!("unknown category `{value}`; expected one of: {known}")
        }
    }
}

fn print_json(value: &impl Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
