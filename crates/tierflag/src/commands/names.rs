use clap::ArgMatches;
use serde::Serialize;
use tracing::info;

use tierflag_core::{Environment, FlagPrefix, NameResolver, OptionName};

/// JSON shape of `tierflag names --json`: the derived names plus the
/// `_FILE` variable paired with each environment variable.
#[derive(Serialize)]
struct NamesOutput<'a> {
    #[serde(flatten)]
    option: &'a OptionName,
    file_vars: Vec<String>,
}

impl<'a> From<&'a OptionName> for NamesOutput<'a> {
    fn from(option: &'a OptionName) -> Self {
        Self {
            option,
            file_vars: option.env_vars.iter().map(|v| format!("{}_FILE", v)).collect(),
        }
    }
}

pub(crate) fn handle_names_command(
    matches: &ArgMatches,
    env: &dyn Environment,
) -> Result<(), Box<dyn std::error::Error>> {
    let name = matches
        .get_one::<String>("name")
        .ok_or("Name argument is required")?;
    let prefix = matches
        .get_one::<String>("prefix")
        .map(String::as_str)
        .unwrap_or_default();
    let group = matches
        .get_one::<String>("group")
        .map(String::as_str)
        .unwrap_or_default();
    let json_output = matches.get_flag("json");

    info!(event = "cli.names_started", name = name, prefix = prefix, group = group);

    let resolver = NameResolver::new(FlagPrefix::new(prefix))
        .with_env(env)
        .group(group);
    let option = match matches.get_one::<String>("alias") {
        Some(alias) => resolver.name_with_alias(name, alias),
        None => resolver.name(name),
    };

    if json_output {
        println!(
            "{}",
            serde_json::to_string_pretty(&NamesOutput::from(&option))?
        );
    } else {
        print_names(&option);
    }

    info!(event = "cli.names_completed", name = %option.name);
    Ok(())
}

fn print_names(option: &OptionName) {
    let output = NamesOutput::from(option);
    println!("Name:      --{}", option.name);
    if option.aliases.is_empty() {
        println!("Aliases:   (none)");
    } else {
        let aliases: Vec<String> = option.aliases.iter().map(|a| format!("-{}", a)).collect();
        println!("Aliases:   {}", aliases.join(", "));
    }
    println!("Env vars:  {}", option.env_vars.join(", "));
    println!("File vars: {}", output.file_vars.join(", "));
    match &option.file_path {
        Some(path) => println!("File:      {}", path.display()),
        None => println!("File:      (none)"),
    }
}
