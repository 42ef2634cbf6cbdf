use std::net::SocketAddr;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};
use yansi::Paint;

use unwetter::assets::WebAssetRegistry;
use unwetter::config::{self, Settings, DEFAULT_HOST, DEFAULT_PORT};
use unwetter::models::AppState;
use unwetter::routes::build_router;
use unwetter::services::{load_render_input, load_warnings_file};
use unwetter::view::WarningListView;

fn build_state(settings: Settings) -> AppState {
    match AppState::from_settings(settings) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!(%e, "Invalid configuration");
            eprintln!("{}: {}", "Invalid configuration".red(), e);
            process::exit(1);
        }
    }
}

async fn start_server(state: AppState, host: &str, port: u16) {
    let addr: SocketAddr = match format!("{}:{}", host, port).parse() {
        Ok(a) => a,
        Err(e) => {
            tracing::error!(%e, "Invalid host/port format");
            eprintln!("{}: {}", "Invalid host/port format".red(), e);
            process::exit(1);
        }
    };

    tracing::info!(
        %addr,
        warnings_file = %state.settings.warnings_file.display(),
        language = state.language.tag(),
        "Starting warning module preview"
    );
    println!("{} {}", "Preview running on".green(), format!("http://{}", addr).cyan());

    let app = build_router(state);
    match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!(%e, "Server encountered an error while running");
                eprintln!("{}: {}", "Server error".red(), e);
                process::exit(1);
            }
        }
        Err(e) => {
            tracing::error!(%e, "Failed to bind to address; is the port already in use?");
            eprintln!(
                "{}: {}\n{}",
                format!("Failed to bind to {}", addr).red(),
                e,
                "Please stop any process using this port, or start the preview with a different --port value.".yellow()
            );
            process::exit(1);
        }
    }
}

fn render_once(state: &AppState, error: Option<String>) {
    let mut input = load_render_input(&state.settings.warnings_file, &state.settings.module_id);
    if let Some(message) = error {
        input = input.with_error(message);
    }

    let mut registry = WebAssetRegistry::new(state.manifest.clone());
    let view = WarningListView::new(&state.language, &state.dates);
    match view.render(&input, &state.settings.params, &mut registry) {
        Ok(html) => {
            for tag in registry.tags() {
                tracing::info!(href = %tag.href, defer = tag.defer, "Page asset required");
            }
            println!("{}", html);
        }
        Err(e) => {
            tracing::error!(%e, "Failed to render warnings module");
            eprintln!("{}: {}", "Render failed".red(), e);
            process::exit(1);
        }
    }
}

fn check_config(settings: Settings) {
    let mut ok = true;

    match AppState::from_settings(settings.clone()) {
        Ok(state) => println!(
            "{} language {} (UTC offset {})",
            "✔".green(),
            state.language.tag(),
            state.dates.offset()
        ),
        Err(e) => {
            eprintln!("{} {}", "✘".red(), e);
            ok = false;
        }
    }

    match load_warnings_file(&settings.warnings_file) {
        Ok(warnings) => println!(
            "{} {} warning(s) in {}",
            "✔".green(),
            warnings.len(),
            settings.warnings_file.display()
        ),
        Err(e) => {
            eprintln!("{} {}", "✘".red(), e);
            ok = false;
        }
    }

    println!(
        "{} show_severity={} auto_refresh={} cache_time={}s",
        "ℹ".cyan(),
        settings.params.show_severity,
        settings.params.auto_refresh,
        settings.params.cache_time
    );

    if !ok {
        process::exit(1);
    }
}

#[derive(Parser)]
#[command(
    name = "unwetter",
    author,
    version,
    about = "Severe weather warning module renderer",
    long_about = r#"Render the severe weather warning module from prepared warning records.

Warnings are read from a JSON file (a list of records, or an object with a `warnings` list).
Module settings come from UNWETTER_* environment variables or an `.env` file.

Examples:
  1) Preview in the browser:
      unwetter serve --port 8080
  2) Print the module markup:
      unwetter render warnings.json --auto-refresh --cache-time 900
"#,
    after_help = "Use `unwetter <subcommand> --help` to get subcommand specific options."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the preview server
    Serve {
        /// Host to bind to
        #[arg(long, default_value_t = String::from(DEFAULT_HOST))]
        host: String,
        /// Port to bind to
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,
        /// Path to .env file
        #[arg(long)]
        env_file: Option<String>,
    },
    /// Render the module once and print the markup
    Render {
        /// JSON file with warning records
        warnings: PathBuf,
        /// Render the error state with this message
        #[arg(long)]
        error: Option<String>,
        /// Module instance id used for DOM ids
        #[arg(long)]
        module_id: Option<String>,
        /// Hide severity badges
        #[arg(long)]
        hide_severity: bool,
        /// Emit the auto-refresh hook
        #[arg(long)]
        auto_refresh: bool,
        /// Cache lifetime in seconds (refresh interval)
        #[arg(long)]
        cache_time: Option<u32>,
        /// Language tag (en-GB, de-DE)
        #[arg(long)]
        language: Option<String>,
        /// Path to .env file
        #[arg(long)]
        env_file: Option<String>,
    },
    /// Validate configuration, language strings and the warnings file
    CheckConfig {
        /// Path to .env file
        #[arg(long)]
        env_file: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }

    // Without a command the preview server runs with defaults
    let Some(command) = cli.command else {
        config::load_env_file(None);
        let state = build_state(Settings::from_env());
        start_server(state, DEFAULT_HOST, DEFAULT_PORT).await;
        return;
    };

    match command {
        Commands::Serve { host, port, env_file } => {
            config::load_env_file(env_file.as_deref());
            let state = build_state(Settings::from_env());
            start_server(state, &host, port).await;
        }
        Commands::Render {
            warnings,
            error,
            module_id,
            hide_severity,
            auto_refresh,
            cache_time,
            language,
            env_file,
        } => {
            config::load_env_file(env_file.as_deref());
            let mut settings = Settings::from_env();
            if let Some(id) = module_id {
                settings.module_id = id;
            }
            if hide_severity {
                settings.params.show_severity = false;
            }
            if auto_refresh {
                settings.params.auto_refresh = true;
            }
            if let Some(seconds) = cache_time {
                settings.params.cache_time = seconds;
            }
            if let Some(tag) = language {
                settings.language = tag;
            }
            settings.warnings_file = warnings;

            let state = build_state(settings);
            render_once(&state, error);
        }
        Commands::CheckConfig { env_file } => {
            config::load_env_file(env_file.as_deref());
            check_config(Settings::from_env());
        }
    }
}
