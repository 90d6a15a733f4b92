use clap::ArgMatches;
use tracing::{error, info};

use tierflag_core::{Environment, ExclusiveGroup, Invocation, Resolved, events};

use super::print_count;
use crate::flags::{Flags, HORIZONTAL, VERTICAL};

pub(crate) fn handle_split_command(
    root: &Invocation,
    matches: &ArgMatches,
    flags: &Flags,
    env: &dyn Environment,
) -> Result<(), Box<dyn std::error::Error>> {
    info!(event = "cli.split_started");

    let mut invocation = Invocation::new(matches, &flags.split, env);
    invocation.before();

    match run_split(root, &invocation) {
        Ok(()) => {
            info!(event = "cli.split_completed");
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", e);
            error!(event = "cli.split_failed", error = %e);
            events::log_app_error(e.as_ref());
            Err(e)
        }
    }
}

fn run_split(root: &Invocation, invocation: &Invocation) -> Result<(), Box<dyn std::error::Error>> {
    print_count(root)?;

    let horizontal = invocation.option(HORIZONTAL)?;
    let vertical = invocation.option(VERTICAL)?;
    let resolved = invocation.resolve()?;
    let direction = ExclusiveGroup::new([horizontal, vertical]);

    invocation.select(
        direction
            .select()
            .on(horizontal, || {
                println!("horizontal {}", size(&resolved, HORIZONTAL)?);
                Ok(())
            })
            .on(vertical, || {
                println!("vertical {}", size(&resolved, VERTICAL)?);
                Ok(())
            })
            .otherwise(|| Err("--horizontal or --vertical is required".into())),
    )
}

fn size(resolved: &Resolved, name: &str) -> Result<u32, Box<dyn std::error::Error>> {
    resolved
        .get::<u32>(name)?
        .ok_or_else(|| format!("--{} has no value", name).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::build_cli;
    use tierflag_core::{ExclusiveError, MapEnv};

    fn split(args: &[&str], env: &MapEnv) -> Result<(), Box<dyn std::error::Error>> {
        let flags = Flags::new(env).unwrap();
        let matches = build_cli(&flags).try_get_matches_from(args).unwrap();
        let mut root = Invocation::new(&matches, &flags.app, env);
        root.before();
        let sub_matches = matches.subcommand_matches("split").unwrap();
        let mut invocation = Invocation::new(sub_matches, &flags.split, env);
        invocation.before();
        run_split(&root, &invocation)
    }

    #[test]
    fn test_split_requires_direction() {
        let err = split(&["tierflag", "split"], &MapEnv::new()).unwrap_err();
        assert_eq!(err.to_string(), "--horizontal or --vertical is required");
    }

    #[test]
    fn test_split_single_direction() {
        assert!(split(&["tierflag", "split", "-H", "80"], &MapEnv::new()).is_ok());

        let env = MapEnv::new().with("TIERFLAG_SPLIT_V", "24");
        assert!(split(&["tierflag", "split"], &env).is_ok());
    }

    #[test]
    fn test_split_conflict_in_args() {
        let err = split(
            &["tierflag", "split", "-H", "80", "--vertical", "24"],
            &MapEnv::new(),
        )
        .unwrap_err();
        let conflict = err.downcast_ref::<tierflag_core::SelectError>();
        assert!(matches!(
            conflict,
            Some(tierflag_core::SelectError::Exclusive(ExclusiveError::InArgs { .. }))
        ));
        assert_eq!(
            err.to_string(),
            "more than one flags are set in args (-horizontal,-vertical)"
        );
    }

    #[test]
    fn test_split_conflict_in_envs() {
        let env = MapEnv::new()
            .with("TIERFLAG_SPLIT_HORIZONTAL", "80")
            .with("TIERFLAG_SPLIT_VERTICAL", "24");
        let err = split(&["tierflag", "split"], &env).unwrap_err();
        assert_eq!(
            err.to_string(),
            "more than one flags are set in envs (-horizontal,-vertical)"
        );

        assert!(split(&["tierflag", "split", "-V", "10"], &env).is_ok());
    }

    #[test]
    fn test_split_invalid_size() {
        let err = split(&["tierflag", "split", "-H", "wide"], &MapEnv::new()).unwrap_err();
        assert!(err.to_string().contains("Invalid value 'wide' for 'horizontal'"));
    }
}
