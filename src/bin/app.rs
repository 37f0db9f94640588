use std::fmt::Debug;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Args, Parser, Subcommand};
use kernel::model::{
    envelope::ApiResponse,
    export::{ExportKind, ExportRequest},
    id::{ReservationId, RoomId},
    legacy::LegacyApplication,
    lost_found::LostAndFoundQuery,
    reservation::{
        event::{ApplicationForm, ReservationQuery, ReviewDecision, ReviewReservation},
        ReservationStatus,
    },
    storage::UploadFile,
    time::compose_datetime,
};
use registry::AppRegistry;
use shared::config::AppConfig;
use shared::env::{which, Environment};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Campus room reservation client", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Quote of the day
    Quote,
    /// Submit a reservation application
    Reserve(ReserveArgs),
    /// Look up your own reservations
    Search {
        #[arg(long)]
        student_id: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        status: Option<ReservationStatus>,
        #[arg(long)]
        page: Option<u32>,
    },
    /// Approve or reject a reservation as an admin
    Review {
        #[arg(long)]
        id: i64,
        #[arg(long, conflicts_with = "reject", required_unless_present = "reject")]
        approve: bool,
        #[arg(long)]
        reject: bool,
        #[arg(long, requires = "reject")]
        reason: Option<String>,
        #[command(flatten)]
        login: AdminLogin,
    },
    /// Browse lost-and-found records
    LostFound {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value = "")]
        query: String,
        #[arg(long, default_value = "")]
        token: String,
        #[arg(long)]
        clue: bool,
        /// Resolve attachment preview URLs too
        #[arg(long)]
        previews: bool,
    },
    /// Reservation statistics
    Overview {
        #[command(flatten)]
        login: AdminLogin,
    },
    /// Upload a file to object storage and print its key
    Upload {
        path: PathBuf,
        #[arg(long, default_value = "application/octet-stream")]
        content_type: String,
    },
    /// Download an export for a date range
    Export {
        kind: ExportKind,
        /// First day, YYYY-MM-DD
        #[arg(long)]
        from: String,
        /// Last day, YYYY-MM-DD
        #[arg(long)]
        to: String,
        #[arg(long)]
        token: String,
    },
    /// Dump the room policies served by the PHP backend
    LegacyPolicy,
}

#[derive(Args, Debug)]
struct ReserveArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    room: i64,
    #[arg(long)]
    student_id: String,
    #[arg(long)]
    email: String,
    /// YYYY-MM-DD
    #[arg(long)]
    date: String,
    /// HH:MM
    #[arg(long)]
    start: String,
    /// HH:MM
    #[arg(long)]
    end: String,
    #[arg(long)]
    reason: String,
    #[arg(long)]
    turnstile_token: Option<String>,
    /// Send through the PHP endpoint instead
    #[arg(long)]
    legacy: bool,
}

#[derive(Args, Debug)]
struct AdminLogin {
    #[arg(long, env = "ADMIN_USERNAME", requires = "password")]
    username: Option<String>,
    #[arg(long, env = "ADMIN_PASSWORD", hide_env_values = true)]
    password: Option<String>,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    init_logger()?;
    let cli = Cli::parse();
    let app_config = AppConfig::new()?;
    let registry = AppRegistry::new(app_config)?;
    run(cli.command, &registry).await
}

fn init_logger() -> Result<()> {
    let log_level = match which() {
        Environment::Development => "debug",
        Environment::Production => "info",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| log_level.into());

    let subscriber = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_target(false);

    tracing_subscriber::registry()
        .with(subscriber)
        .with(env_filter)
        .try_init()?;

    Ok(())
}

async fn run(command: Command, registry: &AppRegistry) -> Result<ExitCode> {
    match command {
        Command::Quote => Ok(report(registry.quote_repository().today().await)),
        Command::Reserve(args) => reserve(args, registry).await,
        Command::Search {
            student_id,
            email,
            status,
            page,
        } => {
            let query = ReservationQuery {
                student_id,
                email,
                status,
                page,
            };
            Ok(report(registry.reservation_repository().search(query).await))
        }
        Command::Review {
            id,
            approve,
            reject: _,
            reason,
            login,
        } => {
            if let Some(code) = login_if_needed(&login, registry).await {
                return Ok(code);
            }
            let decision = if approve {
                ReviewDecision::Approve
            } else {
                ReviewDecision::Reject { reason }
            };
            let event = ReviewReservation::new(ReservationId::new(id), decision);
            Ok(report(registry.reservation_repository().review(event).await))
        }
        Command::LostFound {
            page,
            query,
            token,
            clue,
            previews,
        } => {
            let query = LostAndFoundQuery {
                page,
                query,
                token,
                clue,
            };
            let repo = registry.lost_found_repository();
            if previews {
                Ok(report(repo.list_with_previews(query).await))
            } else {
                Ok(report(repo.list(query).await))
            }
        }
        Command::Overview { login } => {
            if let Some(code) = login_if_needed(&login, registry).await {
                return Ok(code);
            }
            Ok(report(registry.analytics_repository().overview().await))
        }
        Command::Upload { path, content_type } => {
            let bytes = tokio::fs::read(&path)
                .await
                .with_context(|| format!("cannot read {}", path.display()))?;
            let file_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .context("path has no file name")?
                .to_string();
            let file = UploadFile {
                file_name,
                content_type,
                bytes,
            };
            Ok(report(registry.storage_repository().upload(file).await))
        }
        Command::Export {
            kind,
            from,
            to,
            token,
        } => {
            let request = ExportRequest {
                kind,
                start: compose_datetime(&Local, &from, "00:00:00")?,
                end: compose_datetime(&Local, &to, "23:59:59")?,
                token,
            };
            registry.export_repository().export(request).await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::LegacyPolicy => {
            let policy = registry.legacy_repository().fetch_policy().await?;
            println!("{policy:#?}");
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn reserve(args: ReserveArgs, registry: &AppRegistry) -> Result<ExitCode> {
    let legacy = args.legacy;
    let form = ApplicationForm {
        student_name: args.name,
        selected_room: Some(RoomId::new(args.room)),
        student_id: args.student_id,
        email: args.email,
        date: args.date,
        start_time: args.start,
        end_time: args.end,
        reason: args.reason,
        turnstile_token: args.turnstile_token,
    };
    let event = form.into_event()?;

    if legacy {
        let answer = registry
            .legacy_repository()
            .post_application(LegacyApplication::from(event))
            .await?;
        println!("{answer:#}");
        return Ok(ExitCode::SUCCESS);
    }
    Ok(report(registry.reservation_repository().create(event).await))
}

async fn login_if_needed(login: &AdminLogin, registry: &AppRegistry) -> Option<ExitCode> {
    let (Some(username), Some(password)) = (&login.username, &login.password) else {
        return None;
    };
    let res = registry.admin_repository().login(username, password).await;
    if res.success {
        None
    } else {
        Some(report(res))
    }
}

fn report<T: Debug>(res: ApiResponse<T>) -> ExitCode {
    println!("{res:#?}");
    if res.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
