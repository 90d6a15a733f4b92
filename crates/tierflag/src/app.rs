use clap::{Arg, ArgAction, Command};
use clap_complete::Shell;

use crate::flags::Flags;

pub fn build_cli(flags: &Flags) -> Command {
    let root = Command::new("tierflag")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Demo of layered, mutually exclusive command-line options")
        .long_about(
            "Every option can be given as an argument, an environment variable, a secret file \
            named by an environment variable, or a file under the user's config directory. \
            Arguments win over everything else; among mutually exclusive options, setting more \
            than one at the same level is an error.",
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(flags.split.apply(
            Command::new("split")
                .about("Split the window horizontally or vertically")
                .long_about(
                    "Split the window. Exactly one of --horizontal and --vertical must be set, \
                    either as an argument or through the environment.",
                ),
        ))
        .subcommand(
            Command::new("names")
                .about("Show the names derived for an option")
                .arg(
                    Arg::new("name")
                        .help("Base name of the option")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("prefix")
                        .long("prefix")
                        .short('p')
                        .help("Environment variable prefix")
                        .default_value(""),
                )
                .arg(
                    Arg::new("group")
                        .long("group")
                        .short('g')
                        .help("Group qualifying the name")
                        .default_value(""),
                )
                .arg(
                    Arg::new("alias")
                        .long("alias")
                        .short('a')
                        .help("Explicit alias (default: first letter of each word)"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completion scripts")
                .arg(
                    Arg::new("shell")
                        .help("Shell to generate completions for")
                        .required(true)
                        .index(1)
                        .value_parser(clap::value_parser!(Shell)),
                ),
        );

    flags.app.apply(root)
}
