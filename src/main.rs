use std::io::Read;
use std::net::SocketAddr;
use std::process;

use clap::{Parser, Subcommand};
use comfy_table::{modifiers, presets, ContentArrangement, Table};
use terminal_size::{terminal_size, Width};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use bodhi_web::config;
use bodhi_web::models::{AppState, ReleaseStats};
use bodhi_web::navigation::route;
use bodhi_web::render_job::{load_view_model, parse_param, RenderJob};
use bodhi_web::routes::build_router;
use bodhi_web::runtime::RuntimeInfo;
use bodhi_web::settings::{self, Settings, BASE_ADDRESS, KNOWN_SETTINGS};
use bodhi_web::PageShell;

fn load_settings(env_file: Option<&str>) -> Settings {
    config::load_env_file(env_file);
    let settings = Settings::from_env();
    tracing::info!(keys = settings.iter().count(), "Loaded settings from environment");
    settings
}

fn exit_on_missing_settings(settings: &Settings) {
    let missing = settings.missing_required();
    if missing.is_empty() {
        return;
    }
    for key in &missing {
        tracing::error!(setting = key, "Required setting is missing");
        eprintln!("{} {}", yansi::Paint::red("Missing required setting:"), key);
    }
    process::exit(1);
}

async fn load_release_stats(path: &str) -> Vec<ReleaseStats> {
    let raw = match tokio::fs::read_to_string(path).await {
        Ok(raw) => raw,
        Err(e) => {
            tracing::error!(%e, path, "Failed to read release stats file");
            eprintln!("{} {}: {}", yansi::Paint::red("Failed to read release stats at"), path, e);
            process::exit(1);
        }
    };
    match serde_json::from_str(&raw) {
        Ok(stats) => stats,
        Err(e) => {
            tracing::error!(%e, path, "Release stats file is not valid JSON");
            eprintln!("{} {}: {}", yansi::Paint::red("Invalid release stats in"), path, e);
            process::exit(1);
        }
    }
}

async fn start_server(state: AppState, host: &str, port: u16, static_dir: &str) {
    let addr: SocketAddr = match format!("{}:{}", host, port).parse() {
        Ok(a) => a,
        Err(e) => {
            tracing::error!(%e, "Invalid host/port format");
            eprintln!("{}: {}", yansi::Paint::red("Invalid host/port format"), e);
            process::exit(1);
        }
    };
    let app = build_router(state, static_dir);
    tracing::info!(%addr, "Starting Bodhi web front-end");
    println!("{} {}", yansi::Paint::new("Web server running on").green(), yansi::Paint::new(format!("http://{}", addr)).cyan());
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

fn print_settings_table(settings: &Settings) {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    if let Some((Width(w), _)) = terminal_size() {
        table.set_width(w.saturating_sub(4));
    }
    table.set_header(vec!["Setting", "Variable", "Required", "Value"]);
    for (key, var) in KNOWN_SETTINGS {
        let required = if settings::REQUIRED_SETTINGS.contains(key) { "yes" } else { "no" };
        let value = settings.get(key).unwrap_or("(unset)");
        table.add_row(vec![*key, *var, required, value]);
    }
    println!("\n{table}\n");
}

#[derive(Parser)]
#[command(
    name = "bodhi-web",
    author,
    version,
    about = "Fedora Updates System web front-end",
    long_about = r#"Serve or render Bodhi pages wrapped in the site layout.

Settings are read from BODHI_* environment variables, optionally loaded from a
.env file. BODHI_CORS_CONNECT_SRC and BODHI_BASE_ADDRESS are required.

Examples:
  1) Run the server:
      bodhi-web serve --port 6543 --env-file production.env
  2) Render a static page:
      bodhi-web render --route metrics body.html > metrics.html
  3) Render a user's page as that user sees it:
      bodhi-web render --route user --param name=alice --user alice body.html
  4) Validate configuration:
      bodhi-web check-config --env-file production.env
"#,
    after_help = "Use `bodhi-web <subcommand> --help` to get subcommand specific options and usage examples."
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
    /// Start the web server
    Serve {
        /// Host to bind to (defaults to BODHI_HOST or 127.0.0.1)
        #[arg(long)]
        host: Option<String>,
        /// Port to bind to (defaults to BODHI_PORT or 6543)
        #[arg(long)]
        port: Option<u16>,
        /// Path to .env file
        #[arg(long)]
        env_file: Option<String>,
        /// JSON file with per-release stable update counts for the metrics page
        #[arg(long)]
        stats_file: Option<String>,
        /// Directory served under /static
        #[arg(long, default_value = "static")]
        static_dir: String,
    },
    /// Render one page to stdout
    #[command(about = "Render a page body inside the site layout", long_about = "Read page markup from BODY_FILE (or stdin) and print the complete HTML document, as the server would render it for the given route and user.")]
    Render {
        /// Path to .env file
        #[arg(long)]
        env_file: Option<String>,
        /// Route name used for navigation highlighting
        #[arg(long, default_value = route::HOME)]
        route: String,
        /// Render as if this user were logged in
        #[arg(long)]
        user: Option<String>,
        /// Current URL (defaults to the base address)
        #[arg(long)]
        url: Option<String>,
        /// Path parameter as KEY=VALUE; repeatable
        #[arg(long = "param", value_name = "KEY=VALUE", value_parser = parse_param)]
        params: Vec<(String, String)>,
        /// JSON view model, e.g. {"update": {"user": "alice", "builds": [...]}}
        #[arg(long, value_name = "FILE")]
        view: Option<String>,
        /// File holding the page body; stdin when omitted
        body_file: Option<String>,
    },
    /// Validate configuration
    #[command(about = "Validate configuration.", long_about = "Print every known setting and fail when a required one is missing.")]
    CheckConfig {
        /// Path to .env file
        #[arg(long)]
        env_file: Option<String>,
    },
}

fn read_body(body_file: Option<&str>) -> std::io::Result<String> {
    match body_file {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut body = String::new();
            std::io::stdin().read_to_string(&mut body)?;
            Ok(body)
        }
    }
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

    let command = cli.command.unwrap_or(Commands::Serve {
        host: None,
        port: None,
        env_file: None,
        stats_file: None,
        static_dir: "static".to_string(),
    });

    match command {
        Commands::Serve {
            host,
            port,
            env_file,
            stats_file,
            static_dir,
        } => {
            let settings = load_settings(env_file.as_deref());
            exit_on_missing_settings(&settings);
            let shell = PageShell::from_settings(settings, RuntimeInfo::detect());
            let mut state = AppState::new(shell, config::get_user_header());
            if let Some(path) = stats_file {
                let stats = load_release_stats(&path).await;
                tracing::info!(releases = stats.len(), path, "Loaded release stats");
                state = state.with_release_stats(stats);
            }
            let host = host.unwrap_or_else(config::get_host);
            let port = port.unwrap_or_else(config::get_port);
            start_server(state, &host, port, &static_dir).await;
        }
        Commands::Render {
            env_file,
            route,
            user,
            url,
            params,
            view,
            body_file,
        } => {
            let settings = load_settings(env_file.as_deref());
            let url = url.unwrap_or_else(|| settings.get(BASE_ADDRESS).unwrap_or_default().to_string());
            let body = match read_body(body_file.as_deref()) {
                Ok(body) => body,
                Err(e) => {
                    eprintln!("{}: {}", yansi::Paint::red("Failed to read page body"), e);
                    process::exit(1);
                }
            };
            let view = match view.map(load_view_model).transpose() {
                Ok(view) => view,
                Err(e) => {
                    tracing::error!(%e, "Failed to load view model");
                    eprintln!("{}: {}", yansi::Paint::red("Failed to load view model"), e);
                    process::exit(1);
                }
            };
            let job = RenderJob {
                route,
                url,
                user,
                params,
                view,
            };
            let shell = PageShell::from_settings(settings, RuntimeInfo::detect());
            match shell.render(&job.request(), &body, &job.view_model()) {
                Ok(html) => println!("{}", html),
                Err(e) => {
                    tracing::error!(%e, "Render failed");
                    eprintln!("{}: {}", yansi::Paint::red("Render failed"), e);
                    process::exit(1);
                }
            }
        }
        Commands::CheckConfig { env_file } => {
            let shell = PageShell::from_settings(load_settings(env_file.as_deref()), RuntimeInfo::detect());
            print_settings_table(shell.settings());
            let runtime = shell.runtime();
            println!("Footer will report Bodhi v{} on {}", runtime.version, runtime.hostname);
            exit_on_missing_settings(shell.settings());
            println!("{}", yansi::Paint::new("Configuration looks valid").green());
        }
    }
}
