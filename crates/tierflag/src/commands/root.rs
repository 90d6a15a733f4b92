use tracing::{error, info};

use tierflag_core::{Invocation, events};

use super::print_count;

pub(crate) fn handle_root_action(root: &Invocation) -> Result<(), Box<dyn std::error::Error>> {
    info!(event = "cli.root_started");

    match print_count(root) {
        Ok(()) => {
            info!(event = "cli.root_completed");
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", e);
            error!(event = "cli.root_failed", error = %e);
            events::log_app_error(e.as_ref());
            Err(e)
        }
    }
}
