use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn default_directive(debug: bool) -> &'static str {
    if debug { "tfplan=debug" } else { "tfplan=warn" }
}

/// Install the stderr subscriber; `RUST_LOG` overrides the default level
pub fn init_logger(debug: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(debug)));

    // stdout carries the rendered plan, so diagnostics go to stderr
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .without_time()
                .compact(),
        )
        .try_init();
}
