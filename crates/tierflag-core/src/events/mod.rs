use tracing::{error, info};

use crate::resolve::Resolved;

pub fn log_app_startup() {
    info!(
        event = "core.app.startup_completed",
        version = env!("CARGO_PKG_VERSION")
    );
}

pub fn log_app_error(error: &dyn std::error::Error) {
    error!(
        event = "core.app.error_occurred",
        error = %error,
        error_type = std::any::type_name_of_val(error)
    );
}

/// One event per resolved scope: how many options it holds and where each
/// explicitly set value came from.
pub fn log_values_resolved(resolved: &Resolved) {
    let entries = resolved.entries();
    let explicit: Vec<String> = entries
        .iter()
        .filter_map(|(name, sourced)| {
            sourced
                .filter(|s| s.source.is_explicit())
                .map(|s| format!("{}={}", name, s.source))
        })
        .collect();

    info!(
        event = "core.resolve.completed",
        option_count = entries.len(),
        explicit = %explicit.join(",")
    );
}
