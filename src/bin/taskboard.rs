//! Command-line entry point for the task board.
//!
//! Usage:
//!
//! ```text
//! taskboard [--store memory|postgres] [--database-url URL] [COMMAND]
//! ```
//!
//! Without a command the interactive terminal board starts. The other
//! commands run one store operation and exit; they are only useful against
//! a persistent store.

use std::io::{self, Write};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use diesel::{
    PgConnection,
    r2d2::{ConnectionManager, Pool, PoolError},
};
use mockable::DefaultClock;
use thiserror::Error;

use taskboard::{
    board::BoardView,
    config::{BoardConfig, ConfigError, StoreBackend},
    task::{
        adapters::{memory::InMemoryTaskRepository, postgres::PostgresTaskRepository},
        domain::{DueDate, TaskDomainError, TaskFields, TaskId, TaskPatch, TaskPriority, TaskStatus},
        ports::{TaskRepository, TaskRepositoryError},
        services::{BoardController, BoardError},
    },
    telemetry::{self, LogTarget, TelemetryError},
    tui::{self, App},
};


/// Errors surfaced by the binary.
#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
    #[error("failed to build connection pool: {0}")]
    Pool(#[from] PoolError),
    #[error("connection pool task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
    #[error("failed to encode tasks: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("edit needs at least one field to change")]
    EmptyPatch,
}

#[derive(Debug, Parser)]
#[command(author, version, about = "Kanban task board", long_about = None)]
struct Cli {
    /// Task store backend; overrides TASKBOARD_STORE.
    #[arg(long, global = true, value_name = "BACKEND")]
    store: Option<StoreBackend>,
    /// PostgreSQL connection string; overrides TASKBOARD_DATABASE_URL.
    #[arg(long, global = true, value_name = "URL")]
    database_url: Option<String>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
enum Command {
    /// Open the interactive board (default).
    Tui,
    /// Print every task grouped by column.
    List {
        /// Print the task documents as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Create a task.
    Add {
        /// Task title.
        title: String,
        /// Due date as YYYY-MM-DD.
        #[arg(long)]
        date: String,
        /// Free-form description.
        #[arg(long, default_value = "")]
        description: String,
        /// TODO, IN PROGRESS, or COMPLETED.
        #[arg(long, default_value = "TODO")]
        status: String,
        /// High, Medium, or Low.
        #[arg(long, default_value = "Medium")]
        priority: String,
    },
    /// Change fields of a task.
    Edit {
        /// Task identifier.
        id: String,
        /// New title.
        #[arg(long)]
        title: Option<String>,
        /// New description.
        #[arg(long)]
        description: Option<String>,
        /// New due date as YYYY-MM-DD.
        #[arg(long)]
        date: Option<String>,
        /// New status.
        #[arg(long)]
        status: Option<String>,
        /// New priority.
        #[arg(long)]
        priority: Option<String>,
    },
    /// Move a task to another column.
    Status {
        /// Task identifier.
        id: String,
        /// TODO, IN PROGRESS, or COMPLETED.
        status: String,
    },
    /// Delete a task.
    Delete {
        /// Task identifier.
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let mut config = BoardConfig::from_env()?;
    if let Some(store) = cli.store {
        config = config.with_store(store);
    }
    if let Some(url) = cli.database_url {
        config = config.with_database_url(url);
    }
    let command = cli.command.unwrap_or(Command::Tui);

    let target = if command == Command::Tui {
        LogTarget::file_or_discard(config.log_file())
    } else {
        LogTarget::Stderr
    };
    telemetry::init(config.log_filter(), &target)?;

    match config.store() {
        StoreBackend::Memory => {
            execute(command, Arc::new(InMemoryTaskRepository::new()), &config).await
        }
        StoreBackend::Postgres => {
            let repository = connect(&config).await?;
            execute(command, Arc::new(repository), &config).await
        }
    }
}

async fn connect(config: &BoardConfig) -> Result<PostgresTaskRepository, CliError> {
    let url = config.require_database_url()?.to_owned();
    let max_size = config.pool_size().get();
    let pool = tokio::task::spawn_blocking(move || {
        Pool::builder()
            .max_size(max_size)
            .build(ConnectionManager::<PgConnection>::new(url))
    })
    .await??;
    let repository = PostgresTaskRepository::new(pool);
    repository.ensure_schema().await?;
    tracing::info!(pool_size = max_size, "connected to postgres task store");
    Ok(repository)
}

async fn execute<R>(command: Command, repository: Arc<R>, config: &BoardConfig) -> Result<(), CliError>
where
    R: TaskRepository,
{
    let mut controller = BoardController::new(repository, Arc::new(DefaultClock))
        .with_notice_ttl(config.notice_ttl());
    let mut stdout = io::stdout();

    match command {
        Command::Tui => {
            let mut app = App::new(controller);
            tui::run(&mut app).await?;
        }
        Command::List { json } => {
            controller.load().await?;
            if json {
                writeln!(stdout, "{}", serde_json::to_string_pretty(controller.tasks())?)?;
            } else {
                write_columns(&mut stdout, &controller)?;
            }
        }
        Command::Add {
            title,
            date,
            description,
            status,
            priority,
        } => {
            let fields = TaskFields::new(title, DueDate::parse(&date)?)
                .with_description(description)
                .with_status(TaskStatus::try_from(status.as_str())?)
                .with_priority(TaskPriority::try_from(priority.as_str())?);
            let id = controller.create(fields).await?;
            writeln!(stdout, "{id}")?;
        }
        Command::Edit {
            id,
            title,
            description,
            date,
            status,
            priority,
        } => {
            let patch = build_patch(title, description, date, status, priority)?;
            controller.update(&TaskId::new(id)?, patch).await?;
        }
        Command::Status { id, status } => {
            controller.load().await?;
            controller
                .change_status(&TaskId::new(id)?, TaskStatus::try_from(status.as_str())?)
                .await?;
        }
        Command::Delete { id } => {
            controller.remove(&TaskId::new(id)?).await?;
        }
    }
    Ok(())
}

fn build_patch(
    title: Option<String>,
    description: Option<String>,
    date: Option<String>,
    status: Option<String>,
    priority: Option<String>,
) -> Result<TaskPatch, CliError> {
    let patch = TaskPatch {
        title,
        description,
        date: date.as_deref().map(DueDate::parse).transpose()?,
        status: status.as_deref().map(TaskStatus::try_from).transpose()?,
        priority: priority.as_deref().map(TaskPriority::try_from).transpose()?,
    };
    if patch.is_empty() {
        return Err(CliError::EmptyPatch);
    }
    Ok(patch)
}

fn write_columns<R>(
    out: &mut impl Write,
    controller: &BoardController<R, DefaultClock>,
) -> io::Result<()>
where
    R: TaskRepository,
{
    let view = BoardView::build(controller.tasks());
    for column in view.columns() {
        writeln!(out, "{} ({})", column.status(), column.len())?;
        for task in column.cards() {
            writeln!(
                out,
                "  {}  [{}]  {}  {}",
                task.id(),
                task.priority(),
                task.date(),
                task.title()
            )?;
        }
    }
    Ok(())
}
