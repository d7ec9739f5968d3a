use anyhow::Result;
use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "rekt-insights")]
#[command(about = "Crypto exploit statistics over the DeFiYield rekt database", long_about = None)]
struct Args {
    /// Path to config file
    #[arg(short, long)]
    config: Option<String>,

    /// Build one dashboard, print it as JSON and exit
    #[arg(long)]
    snapshot: bool,

    /// Record limit for --snapshot (defaults to the configured default_limit)
    #[arg(long)]
    limit: Option<usize>,

    /// Write the resolved category taxonomy to this YAML file and exit
    #[arg(long)]
    write_taxonomy: Option<String>,

    /// Also write daily-rolling log files into this directory
    #[arg(long)]
    log_dir: Option<String>,
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

// Logs go to stderr so snapshot JSON on stdout stays clean.
fn init_tracing(log_dir: Option<&str>) -> Option<WorkerGuard> {
    match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "rekt-insights.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_ansi(false)
                .with_writer(writer)
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(std::io::stderr)
                .init();
            None
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let _guard = init_tracing(args.log_dir.as_deref());

    if let Some(config) = args.config {
        std::env::set_var("REKT_CONFIG", config);
    }

    if let Some(path) = args.write_taxonomy.as_deref() {
        return rekt_bootstrap::run_write_taxonomy(path).await;
    }
    if args.snapshot {
        return rekt_bootstrap::run_snapshot(args.limit).await;
    }
    rekt_bootstrap::run_standalone().await
}
