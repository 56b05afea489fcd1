use spawnbox::{api, config, routes};
use spawnbox::models::{build_client, AppState, CreationOutcome, CreationRequest, OsKind};

use std::net::SocketAddr;
use std::process;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use comfy_table::{Table, presets, modifiers, ContentArrangement};
use terminal_size::{Width, terminal_size};

use config::{DEFAULT_HOST, DEFAULT_PORT};

fn build_state_from_env(env_file: Option<&str>) -> AppState {
    config::load_env_file(env_file);
    match AppState::from_env() {
        Ok(state) => state,
        Err(e) => {
            tracing::error!(%e, "Invalid configuration");
            eprintln!("{}: {}", yansi::Paint::new("Invalid configuration").red(), e);
            process::exit(1);
        }
    }
}

async fn start_server(state: AppState, host: &str, port: u16) {
    let addr: SocketAddr = match format!("{}:{}", host, port).parse() {
        Ok(a) => a,
        Err(e) => {
            tracing::error!(%e, "Invalid host/port format");
            eprintln!("{}: {}", yansi::Paint::new("Invalid host/port format").red(), e);
            process::exit(1);
        }
    };
    let backend = state.backend_url.clone();
    let app = routes::build_router(state);
    tracing::info!(%addr, %backend, "Starting Spawnbox server");
    println!(
        "{} {} {} {}",
        yansi::Paint::new("Web server running on").green(),
        yansi::Paint::new(format!("http://{}", addr)).cyan(),
        yansi::Paint::new("forwarding to").green(),
        yansi::Paint::new(&backend).cyan()
    );
    match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!(%e, "Server encountered an error while running");
                eprintln!("{}: {}", yansi::Paint::new("Server error").red(), e);
                process::exit(1);
            }
        }
        Err(e) => {
            tracing::error!(%e, "Failed to bind to address; is the port already in use?");
            eprintln!("{}: {}\n{}", yansi::Paint::new(format!("Failed to bind to {}", addr)).red(), e, yansi::Paint::new("Please stop any process using this port, or start the server with a different --port value.").yellow());
            process::exit(1);
        }
    }
}

fn print_os_table() {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    if let Some((Width(w), _)) = terminal_size() {
        table.set_width(w.saturating_sub(4));
    }
    table.set_header(vec!["ID", "Label"]);
    for os in OsKind::all() {
        table.add_row(vec![os.id(), os.label()]);
    }
    println!("\n{table}\n");
}

fn print_outcome(outcome: &CreationOutcome) {
    match outcome {
        CreationOutcome::Created { .. } => println!(
            "{} {}",
            yansi::Paint::new("Created successfully. Instance ID:").green(),
            yansi::Paint::new(outcome.instance_id().unwrap_or_default()).cyan()
        ),
        CreationOutcome::Failed { .. } => eprintln!(
            "{} {}",
            yansi::Paint::new("Creation failed.").red(),
            outcome.text()
        ),
    }
}

#[derive(Parser)]
#[command(
    name = "spawnbox",
    author,
    version,
    about = "Spawnbox: create containers from a browser form",
    long_about = r#"Spawnbox serves a small form where you pick an operating system image and an instance name, and forwards the choice to an existing creation service (`POST /create/{os}/{name}`).

Examples:
  1) Run the web server (dev):
      cargo run -- serve --host 127.0.0.1 --port 3000
  2) Create an instance through a running server:
      spawnbox create --os ubuntu --name web1
  3) List supported images:
      spawnbox os list
"#,
    after_help = "Use `spawnbox <subcommand> --help` to get subcommand specific options and usage examples."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
    /// Disable request/response logging
    #[arg(long, global = true)]
    silent: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
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
    /// Validate configuration and creation service connectivity
    #[command(about = "Validate configuration and ensure the creation service is reachable.", long_about = "Validate BACKEND_URL and BACKEND_TIMEOUT_SECS, then fetch the creation service's root document to confirm it answers with JSON.")]
    CheckConfig {
        #[arg(long)]
        env_file: Option<String>,
    },
    /// Submit a creation request to a running Spawnbox server
    #[command(about = "Create an instance", long_about = "Send the same request the web form sends (`POST /api/build`) to a running Spawnbox server and print the result. Exits with status 1 when creation fails.")]
    Create {
        /// Operating system image
        #[arg(long, value_enum)]
        os: OsKind,
        /// Instance name (sent as-is)
        #[arg(long)]
        name: String,
        /// Base URL of the Spawnbox server (defaults to PROXY_URL or http://127.0.0.1:3000)
        #[arg(long)]
        proxy_url: Option<String>,
        /// Print the raw result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Supported operating system images
    Os {
        #[command(subcommand)]
        sub: OsCommands,
    },
}

#[derive(Subcommand)]
enum OsCommands {
    #[command(about = "List supported images", long_about = "List the operating system identifiers the creation form offers.")]
    List,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }

    if cli.silent {
        api::set_silent(true);
    }

    // Serve the web app when no command is given
    let Some(command) = cli.command else {
        let state = build_state_from_env(None);
        start_server(state, DEFAULT_HOST, DEFAULT_PORT).await;
        return;
    };
    match command {
        Commands::Serve { host, port, env_file } => {
            let state = build_state_from_env(env_file.as_deref());
            start_server(state, &host, port).await;
        }
        Commands::CheckConfig { env_file } => {
            let state = build_state_from_env(env_file.as_deref());
            match api::ping_backend(&state.client, &state.backend_url).await {
                Ok(_) => {
                    println!("{} {}", yansi::Paint::new("Creation service reachable at").green(), state.backend_url);
                }
                Err(e) => {
                    eprintln!("{}: {}", yansi::Paint::new("Creation service check failed").red(), e);
                    process::exit(1);
                }
            }
        }
        Commands::Create { os, name, proxy_url, json } => {
            config::load_env_file(None);
            let proxy_url = proxy_url.unwrap_or_else(config::get_proxy_url);
            let client = match build_client(None) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("{}: {}", yansi::Paint::new("Failed to create HTTP client").red(), e);
                    process::exit(1);
                }
            };
            let request = CreationRequest { os: os.id().to_string(), name };
            let outcome = match api::submit_build(&client, &proxy_url, &request).await {
                Ok(outcome) => outcome,
                Err(e) => {
                    tracing::warn!(%e, "Build request failed");
                    CreationOutcome::from(&e)
                }
            };
            if json {
                match serde_json::to_string_pretty(&outcome) {
                    Ok(s) => println!("{}", s),
                    Err(e) => {
                        tracing::error!(%e, "Failed to serialize result");
                        eprintln!("{}: {}", yansi::Paint::new("Failed to serialize result").red(), e);
                    }
                }
            } else {
                print_outcome(&outcome);
            }
            if !outcome.is_created() {
                process::exit(1);
            }
        }
        Commands::Os { sub } => match sub {
            OsCommands::List => print_os_table(),
        },
    }
}
