use crate::core::config::LoggingConfig;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Pick the output layer: human readable when `console` is set or the format
/// is "console", one JSON object per line otherwise.
fn output_layer(config: &LoggingConfig) -> BoxedLayer {
    if config.console || config.format == "console" {
        fmt::layer()
            .with_target(true)
            .with_ansi(true)
            .with_line_number(true)
            .boxed()
    } else {
        // Request spans from TraceLayer carry method and uri
        fmt::layer().json().with_current_span(true).with_span_list(false).boxed()
    }
}

/// Install the global subscriber. `RUST_LOG` wins over `logging.level`.
pub fn init_tracing(config: &LoggingConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    tracing_subscriber::registry()
        .with(output_layer(config))
        .with(env_filter)
        .init();
}
