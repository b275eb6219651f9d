use anyhow::Result;
use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

use backend_infrastructure::CONFIG_PATH_ENV;

#[derive(Parser, Debug)]
#[command(name = "trashvision")]
#[command(about = "TrashVision log API and dashboard", long_about = None)]
struct Args {
    /// Path to config file
    #[arg(short, long)]
    config: Option<String>,

    /// Write logs to daily rolling files in this directory instead of stdout
    #[arg(long)]
    log_dir: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,

    /// Start even when DB_* settings are incomplete; /api/logs reports the
    /// missing key on every call until they are set
    #[arg(long)]
    allow_missing_db_config: bool,
}

fn init_tracing(args: &Args) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let (writer, guard) = match &args.log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "trashvision.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (BoxMakeWriter::new(writer), Some(guard))
        }
        None => (BoxMakeWriter::new(std::io::stdout), None),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(args.log_dir.is_none())
        .with_writer(writer);
    if args.log_json {
        builder.json().init();
    } else {
        builder.init();
    }
    guard
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let _guard = init_tracing(&args);

    if let Some(config) = &args.config {
        std::env::set_var(CONFIG_PATH_ENV, config);
    }

    backend_bootstrap::run_standalone(args.allow_missing_db_config).await
}
