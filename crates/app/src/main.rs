use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use edu_core::{Credentials, Route};
use services::{API_BASE_URL_ENV, ApiConfig, AppServices, DEFAULT_API_BASE_URL};
use storage::Storage;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const SESSION_FILE_ENV: &str = "EDU_SESSION_FILE";

#[derive(Debug)]
enum CliError {
    NoDataDir,
    UnknownPath(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NoDataDir => {
                write!(f, "no data directory on this platform; pass --session-file")
            }
            CliError::UnknownPath(path) => write!(f, "no page at {path}"),
        }
    }
}

impl std::error::Error for CliError {}

#[derive(Debug, Parser)]
#[command(name = "edu-portal", about = "Role-based e-learning client")]
struct Cli {
    /// Base URL of the course backend.
    #[arg(long, env = API_BASE_URL_ENV, default_value = DEFAULT_API_BASE_URL)]
    api_url: String,

    /// Where the signed-in session is persisted.
    #[arg(long, env = SESSION_FILE_ENV)]
    session_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Open the desktop window (default).
    Ui,
    /// Sign in and store the session.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Drop the stored session.
    Logout,
    /// Print the stored session.
    Status,
    /// Check whether the stored session may open a page.
    Visit { path: String },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn session_path(cli: &Cli) -> Result<PathBuf, CliError> {
    if let Some(path) = &cli.session_file {
        return Ok(path.clone());
    }
    dirs::data_dir()
        .map(|dir| dir.join("edu-portal").join("session.json"))
        .ok_or(CliError::NoDataDir)
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing();

    let config = ApiConfig::new(&cli.api_url)?;
    let path = session_path(&cli)?;
    tracing::debug!(api = %config.base_url(), session = %path.display(), "starting");
    let storage = Storage::file(path);
    let services = Arc::new(AppServices::new(config, &storage));

    match cli.command.unwrap_or(Command::Ui) {
        Command::Ui => {
            let app: Arc<dyn UiApp> = services;
            let context = build_app_context(&app);

            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("EduPortal")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
        }
        Command::Login { email, password } => {
            let credentials = Credentials::new(email, password)?;
            let landing = services.auth().login(&credentials).await?;
            println!("signed in, landing on {}", landing.path());
        }
        Command::Logout => {
            let landing = services.auth().logout()?;
            println!("signed out, landing on {}", landing.path());
        }
        Command::Status => {
            let session = services.session_guard().get_session();
            if session.is_authenticated() {
                let name = session.username().unwrap_or("-");
                println!("{} ({name})", session.role());
            } else {
                println!("signed out");
            }
        }
        Command::Visit { path } => {
            let route = Route::from_path(&path).ok_or(CliError::UnknownPath(path))?;
            let outcome = services.session_guard().guard(route.required_role());
            match outcome.redirect() {
                None => println!("allow"),
                Some(target) => println!("redirect {}", target.path()),
            }
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
