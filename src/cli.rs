//! Command-line front end.
//!
//! `roadmap serve` runs the HTTP API; every other command calls a running API through
//! `ApiClient` and prints the JSON result on stdout.

use clap::{Parser, Subcommand};
use thiserror::Error;

#[cfg(feature = "client")]
use clap::Args;
#[cfg(feature = "client")]
use serde::Serialize;

#[cfg(feature = "client")]
use crate::{
    client::{model::error::ApiError, ApiClient},
    model::progress::RoadmapPhase,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Track roadmap progress, skills and income streams")]
pub struct Cli {
    /// Base URL of the roadmap API
    #[arg(
        long,
        global = true,
        env = "ROADMAP_API_URL",
        default_value = "http://localhost:8080"
    )]
    pub api_url: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP API server
    #[cfg(feature = "server")]
    Serve,

    /// Register users
    #[cfg(feature = "client")]
    #[command(subcommand)]
    User(UserCommand),

    /// Read or record roadmap phase progress
    #[cfg(feature = "client")]
    #[command(subcommand)]
    Progress(ProgressCommand),

    /// Read or record skill levels
    #[cfg(feature = "client")]
    #[command(subcommand)]
    Skill(SkillCommand),

    /// Read or record income streams
    #[cfg(feature = "client")]
    #[command(subcommand)]
    Income(IncomeCommand),
}

#[cfg(feature = "client")]
#[derive(Subcommand, Debug)]
pub enum UserCommand {
    /// Register a user, or confirm an existing id
    Create {
        #[arg(long)]
        user_id: Option<String>,
    },
}

#[cfg(feature = "client")]
#[derive(Args, Debug)]
pub struct UserArg {
    pub user_id: String,
}

#[cfg(feature = "client")]
#[derive(Subcommand, Debug)]
pub enum ProgressCommand {
    /// List progress per phase
    List(UserArg),
    /// Record progress for a phase
    Set {
        user_id: String,
        /// Phase number (1-4) or name (foundation, integration, expansion, pivot-scale)
        phase: RoadmapPhase,
        /// Completion percentage, 0 to 100
        #[arg(long)]
        progress: Option<i32>,
        /// Comma-separated task ids, replacing the stored list
        #[arg(long, value_delimiter = ',')]
        completed_tasks: Option<Vec<String>>,
    },
}

#[cfg(feature = "client")]
#[derive(Subcommand, Debug)]
pub enum SkillCommand {
    /// List skills
    List(UserArg),
    /// Record a skill level
    Set {
        user_id: String,
        category: String,
        name: String,
        /// Level, 0 to 100
        #[arg(long)]
        level: Option<i32>,
    },
}

#[cfg(feature = "client")]
#[derive(Subcommand, Debug)]
pub enum IncomeCommand {
    /// List income streams
    List(UserArg),
    /// Record the status of an income stream
    Set {
        user_id: String,
        stream_type: String,
        #[arg(long)]
        active: Option<bool>,
        /// Monthly revenue in whole currency units
        #[arg(long)]
        revenue: Option<i32>,
    },
}

#[derive(Error, Debug)]
pub enum CliError {
    #[cfg(feature = "server")]
    #[error(transparent)]
    Server(#[from] crate::server::error::AppError),

    #[cfg(feature = "client")]
    #[error("API request failed ({}): {}", .0.status, .0.message)]
    Api(#[from] ApiError),

    #[error("Failed to encode output: {0}")]
    Output(#[from] serde_json::Error),
}

/// Runs the parsed command to completion.
pub async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        #[cfg(feature = "server")]
        Command::Serve => serve().await,

        #[cfg(feature = "client")]
        command => {
            let client = ApiClient::new(&cli.api_url)?;
            run_client(&client, command).await
        }
    }
}

#[cfg(feature = "server")]
async fn serve() -> Result<(), CliError> {
    use crate::server::{config::Config, startup, state::AppState};

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    tracing::info!("Starting server");

    startup::serve(&config, AppState::new(db)).await?;

    Ok(())
}

#[cfg(feature = "client")]
async fn run_client(client: &ApiClient, command: Command) -> Result<(), CliError> {
    match command {
        #[cfg(feature = "server")]
        Command::Serve => serve().await,

        Command::User(UserCommand::Create { user_id }) => {
            print_json(&client.create_user(user_id.as_deref()).await?)
        }

        Command::Progress(ProgressCommand::List(UserArg { user_id })) => {
            print_json(&client.fetch_user_progress(&user_id).await?)
        }
        Command::Progress(ProgressCommand::Set {
            user_id,
            phase,
            progress,
            completed_tasks,
        }) => print_json(
            &client
                .update_user_progress(&user_id, phase, progress, completed_tasks)
                .await?,
        ),

        Command::Skill(SkillCommand::List(UserArg { user_id })) => {
            print_json(&client.fetch_user_skills(&user_id).await?)
        }
        Command::Skill(SkillCommand::Set {
            user_id,
            category,
            name,
            level,
        }) => print_json(
            &client
                .update_skill_progress(&user_id, &category, &name, level)
                .await?,
        ),

        Command::Income(IncomeCommand::List(UserArg { user_id })) => {
            print_json(&client.fetch_user_income_streams(&user_id).await?)
        }
        Command::Income(IncomeCommand::Set {
            user_id,
            stream_type,
            active,
            revenue,
        }) => print_json(
            &client
                .update_income_stream(&user_id, &stream_type, active, revenue)
                .await?,
        ),
    }
}

#[cfg(feature = "client")]
fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
