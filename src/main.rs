use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, level_filters::LevelFilter, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use ummah_client::config::{
    AppConfig, CliConfig, FileConfig, DEFAULT_PROVIDER_URL, DEFAULT_REQUEST_TIMEOUT_SEC,
};
use ummah_client::identity::ProfileUpdate;
use ummah_client::notifications::DEFAULT_TOAST_DURATION_SECS;
use ummah_client::session::AuthError;
use ummah_client::{
    HttpIdentityProvider, Session, SessionService, SessionState, SqliteCredentialStore, Toaster,
};

fn parse_path(s: &str) -> Result<PathBuf> {
    let path_buf = PathBuf::from(s);
    let original_path = match path_buf.canonicalize() {
        Ok(path) => path,
        Err(msg) => {
            if msg.kind() == std::io::ErrorKind::NotFound {
                path_buf
            } else {
                return Err(msg).with_context(|| format!("Error resolving path: {}", s));
            }
        }
    };
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
struct CliArgs {
    /// Directory where local state (credential database) lives.
    #[clap(long, value_parser = parse_path)]
    pub state_dir: Option<PathBuf>,

    /// Base URL of the identity provider.
    #[clap(long)]
    pub provider_url: Option<String>,

    /// Timeout in seconds for identity provider requests.
    #[clap(long, default_value_t = DEFAULT_REQUEST_TIMEOUT_SEC)]
    pub request_timeout_sec: u64,

    /// How long a notification stays visible, in seconds.
    #[clap(long, default_value_t = DEFAULT_TOAST_DURATION_SECS)]
    pub toast_duration_sec: i64,

    /// Path to an optional TOML config file. TOML values override CLI.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in with email and password.
    Login {
        email: String,
        password: String,
    },
    /// Create an account and sign in.
    Register {
        email: String,
        password: String,
        name: String,
        username: String,
    },
    /// End the current session.
    Logout,
    /// Show the current session state.
    Status,
    /// Update fields of the signed-in profile.
    UpdateProfile {
        #[clap(long)]
        name: Option<String>,
        #[clap(long)]
        bio: Option<String>,
        #[clap(long)]
        location: Option<String>,
        #[clap(long)]
        website: Option<String>,
        #[clap(long)]
        avatar_url: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .unwrap();

    let file_config = match &cli_args.config {
        Some(path) => Some(FileConfig::load(path)?),
        None => None,
    };
    let cli_config = CliConfig {
        state_dir: cli_args.state_dir.clone(),
        provider_url: cli_args.provider_url.clone(),
        request_timeout_sec: cli_args.request_timeout_sec,
        toast_duration_sec: cli_args.toast_duration_sec,
    };
    let config = AppConfig::resolve(&cli_config, file_config)?;

    info!(
        "Opening credential database at {:?}...",
        config.credential_db_path()
    );
    let credentials = Arc::new(SqliteCredentialStore::new(&config.credential_db_path())?);

    if config.provider_url == DEFAULT_PROVIDER_URL {
        warn!("Using default provider URL {}", DEFAULT_PROVIDER_URL);
    }
    let provider = Arc::new(HttpIdentityProvider::new(
        config.provider_url.clone(),
        config.request_timeout_sec,
    )?);

    let service = SessionService::new(provider, credentials);
    service.initialize().await;

    let mut toaster = Toaster::with_duration_secs(config.toast_duration_sec);

    let succeeded = match cli_args.command {
        Command::Login { email, password } => report_session(
            service.login(&email, &password).await,
            &mut toaster,
            |session| format!("Signed in as {}", session.display_name),
        )
        .is_some(),
        Command::Register {
            email,
            password,
            name,
            username,
        } => {
            let session = report_session(
                service.register(&email, &password, &name, &username).await,
                &mut toaster,
                |session| format!("Welcome, {}", session.display_name),
            );
            match session {
                Some(session) => {
                    if !session.verified {
                        toaster.success("Check your inbox to verify your email");
                    }
                    true
                }
                None => false,
            }
        }
        Command::Logout => {
            service.logout().await;
            toaster.success("Signed out");
            true
        }
        Command::Status => {
            match service.state() {
                SessionState::Authenticated(session) => {
                    println!(
                        "Signed in as {} (@{}) role={} verified={}",
                        session.display_name,
                        session.username,
                        session.role.as_str(),
                        session.verified
                    );
                }
                SessionState::Unauthenticated => println!("Not signed in"),
                SessionState::Initializing => println!("Session state unknown"),
            }
            true
        }
        Command::UpdateProfile {
            name,
            bio,
            location,
            website,
            avatar_url,
        } => {
            let update = ProfileUpdate {
                name,
                avatar_url,
                bio,
                location,
                website,
            };
            report_session(service.update_profile(update).await, &mut toaster, |session| {
                format!("Profile updated for {}", session.display_name)
            })
            .is_some()
        }
    };

    for toast in toaster.active(Utc::now()) {
        println!("[{:?}] {}", toast.kind, toast.message);
    }

    // scripts rely on the exit code reflecting the outcome
    if !succeeded {
        std::process::exit(1);
    }
    Ok(())
}

/// Turns an auth call outcome into exactly one toast; returns the
/// session on success so callers can follow up on it.
fn report_session(
    result: Result<Session, AuthError>,
    toaster: &mut Toaster,
    success_message: impl FnOnce(&Session) -> String,
) -> Option<Session> {
    match result {
        Ok(session) => {
            let message = success_message(&session);
            toaster.success(message);
            Some(session)
        }
        Err(err) => {
            toaster.notify_auth_error(&err);
            None
        }
    }
}
