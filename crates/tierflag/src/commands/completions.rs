use clap::ArgMatches;
use clap_complete::Shell;

use crate::app::build_cli;
use crate::flags::{APP_NAME, Flags};

pub(crate) fn handle_completions_command(
    matches: &ArgMatches,
    flags: &Flags,
) -> Result<(), Box<dyn std::error::Error>> {
    let shell = matches
        .get_one::<Shell>("shell")
        .ok_or("Shell argument is required")?;

    let mut cmd = build_cli(flags);
    clap_complete::generate(*shell, &mut cmd, APP_NAME, &mut std::io::stdout());

    Ok(())
}
