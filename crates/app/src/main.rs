use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppServices, Clock, CourseCatalog, ResumeController, ResumeService};
use thiserror::Error;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const LOG_ENV: &str = "COURSE_LOG";

#[derive(Debug, Error)]
enum LaunchError {
    #[error("invalid --db value: {raw}")]
    InvalidDbUrl { raw: String },

    #[error("failed to initialize logging: {0}")]
    Logging(String),
}

/// Desktop course viewer.
#[derive(Parser, Debug, Clone)]
#[command(name = "course", version, about, long_about = None)]
struct Args {
    /// SQLite database holding the last-viewed resource
    #[arg(long = "db", env = "COURSE_DB_URL", default_value = "sqlite://course.sqlite3")]
    db_url: String,

    /// JSON course catalog to load instead of the built-in course
    #[arg(long, env = "COURSE_CATALOG")]
    catalog: Option<PathBuf>,

    /// Milliseconds the loading screen stays up before resuming
    #[arg(long, env = "COURSE_RESUME_DELAY_MS", default_value_t = 1000)]
    resume_delay_ms: u64,

    /// Forget the last-viewed resource before launching
    #[arg(long, default_value_t = false)]
    forget_last_viewed: bool,
}

struct DesktopApp {
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn catalog(&self) -> CourseCatalog {
        self.services.catalog()
    }

    fn resume(&self) -> Arc<ResumeService> {
        self.services.resume()
    }

    fn resume_controller(&self) -> Arc<ResumeController> {
        self.services.resume_controller()
    }
}

fn init_tracing() -> Result<(), LaunchError> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|err| LaunchError::Logging(err.to_string()))
}

fn normalize_sqlite_url(raw: &str) -> Result<String, LaunchError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(LaunchError::InvalidDbUrl {
            raw: raw.to_string(),
        });
    }
    if trimmed == "sqlite::memory:" || trimmed.starts_with("sqlite://") {
        return Ok(trimmed.to_string());
    }

    let path_str = trimmed.strip_prefix("sqlite:").unwrap_or(trimmed);
    let path = std::path::Path::new(path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };
    Ok(format!("sqlite://{}", absolute.display()))
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| LaunchError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(LaunchError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

fn load_catalog(path: Option<&PathBuf>) -> Result<CourseCatalog, services::CatalogError> {
    match path {
        Some(path) => CourseCatalog::from_json_file(path),
        None => Ok(CourseCatalog::builtin()),
    }
}

async fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let db_url = normalize_sqlite_url(&args.db_url)?;
    let catalog = load_catalog(args.catalog.as_ref())?;

    // Open + migrate SQLite here so the library crates never touch the filesystem layout.
    prepare_sqlite_file(&db_url)?;
    let services = AppServices::new_sqlite(
        &db_url,
        catalog,
        Clock::system(),
        Duration::from_millis(args.resume_delay_ms),
    )
    .await?;

    if args.forget_last_viewed {
        let removed = services.forget_last_viewed().await?;
        tracing::info!(removed, "cleared last-viewed resource");
    }

    tracing::info!(
        db = %db_url,
        modules = services.catalog().modules().len(),
        resume_delay_ms = args.resume_delay_ms,
        "launching course viewer"
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services });
    let context = build_app_context(&app);

    // Some tao setups default to always-on-top; keep it a normal window.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Curso")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    if let Err(err) = init_tracing() {
        eprintln!("{err}");
        std::process::exit(2);
    }
    if let Err(err) = run(args).await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
