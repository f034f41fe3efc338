//! SpeechPro API server entry point.

use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use speechpro_api::api::openapi_json;
use speechpro_api::config::{Config, LogFormat};
use speechpro_api::server;

/// REST API for the SpeechPro speech pathology equipment store.
#[derive(Parser, Debug)]
#[command(name = "speechpro-api")]
#[command(about = "REST API for Speech Pathology Equipment Store")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Address to bind (overrides HOST).
    #[arg(long, global = true)]
    host: Option<String>,

    /// Port to listen on (overrides PORT).
    #[arg(short, long, global = true)]
    port: Option<u16>,

    /// Emit logs as JSON lines (overrides LOG_FORMAT).
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the HTTP API (default).
    Serve,

    /// Check configuration validity.
    CheckConfig,

    /// Print the OpenAPI document as JSON.
    Openapi,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = Config::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        e
    })?;
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    config.verbose |= args.verbose;
    if args.json {
        config.log_format = LogFormat::Json;
    }

    init_logging(&config);

    match args.command {
        Some(Command::CheckConfig) => cmd_check_config(&config),
        Some(Command::Openapi) => cmd_openapi(),
        Some(Command::Serve) | None => cmd_serve(config).await,
    }
}

fn init_logging(config: &Config) {
    let filter = if config.verbose {
        EnvFilter::new("speechpro_api=debug,info")
    } else {
        EnvFilter::try_new(&config.rust_log).unwrap_or_else(|_| EnvFilter::new("info"))
    };

    match config.log_format {
        LogFormat::Text => tracing_subscriber::registry()
            .with(fmt::layer())
            .with(filter)
            .init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(filter)
            .init(),
    }
}

/// Check configuration validity.
fn cmd_check_config(config: &Config) -> anyhow::Result<()> {
    println!("======================================================================");
    println!("SPEECHPRO API - CONFIGURATION CHECK");
    println!("======================================================================");

    print!("Validating configuration... ");
    match config.validate() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration validation failed"));
        }
    }

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Bind Address: {}", config.bind_addr()?);
    match config.metrics_addr()? {
        Some(addr) => println!("  Metrics: {}", addr),
        None => println!("  Metrics: Disabled"),
    }
    println!(
        "  Log Filter: {}",
        if config.verbose {
            "verbose"
        } else {
            config.rust_log.as_str()
        }
    );
    println!("  Log Format: {:?}", config.log_format);
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Print the OpenAPI document.
fn cmd_openapi() -> anyhow::Result<()> {
    println!("{}", openapi_json()?);
    Ok(())
}

/// Run the HTTP server until a shutdown signal arrives.
async fn cmd_serve(config: Config) -> anyhow::Result<()> {
    server::run(config).await.map_err(|e| {
        error!("Server failed: {}", e);
        anyhow::Error::from(e)
    })
}
