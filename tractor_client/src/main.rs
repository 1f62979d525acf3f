use clap::Parser;
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tractor_client::Session;

/// Relays between a tractor game authority and a user interface.
///
/// Reads one JSON message per line on stdin (state pushes from the
/// authority and commands from the user) and writes one JSON message per
/// line on stdout (views to display and actions to forward).
#[derive(Parser)]
struct Args {
    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    initialize_logging(args.log_level);

    info!("Starting client session");
    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();
    Session::new().run(stdin, stdout)
}

// Stdout carries the protocol, so logs go to stderr.
fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
