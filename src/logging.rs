use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Map a `-v` count to a log level.
pub fn level_for(verbosity: u8) -> tracing::Level {
    match verbosity {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    }
}

/// Install the global subscriber writing to stderr.
pub fn init(verbosity: u8) {
    init_with_writer(verbosity, std::io::stderr);
}

/// Install the global subscriber writing to `writer`.
///
/// `RUST_LOG` directives are honored on top of the verbosity level. Calling
/// this more than once keeps the first subscriber.
pub fn init_with_writer<W>(verbosity: u8, writer: W)
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let filter =
        tracing_subscriber::EnvFilter::from_default_env().add_directive(level_for(verbosity).into());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_target(false)
        .with_thread_names(false)
        .with_line_number(false);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
