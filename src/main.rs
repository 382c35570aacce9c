use clap::{Parser, ValueEnum};
use eventsim::core::config::Config;
use eventsim::core::traits::EventSink;
use eventsim::dispatch::{run_dispatch, DispatchOptions};
use eventsim::sinks::{HttpSink, StdoutSink};
use eventsim::sources::cloudseim::catalog::EventSet;
use eventsim::sources::cloudseim::SimGenerator;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Parser)]
#[command(name = "eventsim")]
#[command(about = "CloudSEIM event simulator", long_about = None)]
struct Cli {
    /// Base URL of the ingestion API; events are posted to `<api-base>/logs`.
    #[arg(long, required_unless_present_any = ["config", "dry_run"])]
    api_base: Option<String>,
    /// Number of events to send [default: 100].
    #[arg(long, allow_negative_numbers = true)]
    events: Option<i64>,
    /// Pause between sends in milliseconds [default: 50].
    #[arg(long, allow_negative_numbers = true)]
    delay_ms: Option<i64>,
    /// Event kinds to generate [default: minimal].
    #[arg(long, value_enum)]
    event_set: Option<EventSet>,
    /// RNG seed for reproducible traffic.
    #[arg(long)]
    seed: Option<u64>,
    /// TOML config file; flags override its values.
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Print events as JSON lines instead of sending them.
    #[arg(long)]
    dry_run: bool,
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut loaded = match &cli.config {
        Some(path) => Config::from_path(path)?,
        None => Config::default(),
    };

    if let Some(api_base) = cli.api_base {
        loaded.dispatch.api_base = Some(api_base);
    }
    if let Some(events) = cli.events {
        loaded.dispatch.events = events;
    }
    if let Some(delay_ms) = cli.delay_ms {
        loaded.dispatch.delay_ms = delay_ms;
    }
    if let Some(event_set) = cli.event_set {
        loaded.source.event_set = event_set;
    }
    if cli.seed.is_some() {
        loaded.seed = cli.seed;
    }

    init_logging(loaded.log_level(), cli.log_format, cli.dry_run);

    let mut generator = SimGenerator::from_config(&loaded.source, loaded.seed)?;
    let mut sink: Box<dyn EventSink> = if cli.dry_run {
        Box::new(StdoutSink::stdout())
    } else {
        let api_base = loaded.dispatch.require_api_base()?;
        let sink = HttpSink::new(api_base)?;
        tracing::info!(
            endpoint = sink.endpoint(),
            events = loaded.dispatch.events,
            delay_ms = loaded.dispatch.delay_ms,
            event_set = ?loaded.source.event_set,
            "sending events"
        );
        Box::new(sink)
    };

    let options = DispatchOptions {
        total_events: loaded.dispatch.events,
        delay_ms: loaded.dispatch.delay_ms,
    };
    let summary = run_dispatch(&mut generator, sink.as_mut(), &options);

    if cli.dry_run {
        eprintln!("{summary}");
    } else {
        println!("{summary}");
    }
    Ok(())
}

/// Logs go to stdout, except during dry runs where stdout carries the events.
fn init_logging(default_level: &str, format: LogFormat, to_stderr: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let registry = tracing_subscriber::registry().with(filter);
    match (format, to_stderr) {
        (LogFormat::Text, false) => registry.with(tracing_subscriber::fmt::layer()).init(),
        (LogFormat::Text, true) => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
        (LogFormat::Json, false) => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        (LogFormat::Json, true) => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init(),
    }
}
