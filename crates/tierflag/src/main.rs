use tierflag_core::{ProcessEnv, init_logging};

mod app;
mod commands;
mod flags;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env = ProcessEnv;
    let flags = flags::Flags::new(&env)?;
    let matches = app::build_cli(&flags).get_matches();

    // Extract verbose flag before initializing logging
    let verbose = matches.get_flag("verbose");
    init_logging(!verbose);

    commands::run_command(&matches, &flags, &env)?;

    Ok(())
}
