use clap::ArgMatches;
use tracing::error;

use tierflag_core::{Environment, Invocation, events};

use crate::flags::{COUNT, Flags};

mod completions;
mod names;
mod root;
mod split;

pub fn run_command(
    matches: &ArgMatches,
    flags: &Flags,
    env: &dyn Environment,
) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    let mut root = Invocation::new(matches, &flags.app, env);
    root.before();

    match matches.subcommand() {
        None => root::handle_root_action(&root),
        Some(("split", sub_matches)) => split::handle_split_command(&root, sub_matches, flags, env),
        Some(("names", sub_matches)) => names::handle_names_command(sub_matches, env),
        Some(("completions", sub_matches)) => {
            completions::handle_completions_command(sub_matches, flags)
        }
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}

/// Value of `--count` if it was set anywhere other than a default.
pub(crate) fn lookup_count(root: &Invocation) -> Result<Option<i64>, Box<dyn std::error::Error>> {
    let option = root.option(COUNT)?;
    if !root.is_set(option) {
        return Ok(None);
    }
    Ok(root.resolve()?.get::<i64>(COUNT)?)
}

/// Print the line shared by the root action and `split`.
pub(crate) fn print_count(root: &Invocation) -> Result<(), Box<dyn std::error::Error>> {
    match lookup_count(root)? {
        Some(count) => println!("count {}", count),
        None => println!("count not set"),
    }
    Ok(())
}
