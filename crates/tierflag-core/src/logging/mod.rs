use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with optional quiet mode.
///
/// When `quiet` is true, only error-level events are emitted.
/// When `quiet` is false, info-level and above events are emitted.
/// `RUST_LOG` directives are honoured on top of either default.
pub fn init_logging(quiet: bool) {
    let directive = if quiet { "tierflag=error" } else { "tierflag=info" };
    let core_directive = if quiet {
        "tierflag_core=error"
    } else {
        "tierflag_core=info"
    };

    let mut filter = EnvFilter::from_default_env();
    for d in [directive, core_directive] {
        match d.parse() {
            Ok(d) => filter = filter.add_directive(d),
            Err(e) => eprintln!("Warning: ignoring invalid log directive '{}': {}", d, e),
        }
    }

    // A subscriber may already be installed by an embedding application.
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(filter)
        .try_init();
}
