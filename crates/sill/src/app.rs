use clap::{Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("sill")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Profile-driven window placement")
        .long_about(
            "sill enumerates the session's top-level windows, finds the one matching a \
             stored profile's condition (title pattern, process pattern, or pid), and \
             moves/resizes it to the profile's position. Profiles live in profiles.json \
             next to the executable.",
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("list")
                .about("List windows whose title matches a pattern")
                .arg(
                    Arg::new("pattern")
                        .help("Regex searched against window titles (default: all windows)")
                        .index(1),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("run")
                .about("Apply a stored placement profile to the first matching window")
                .arg(Arg::new("id").help("Profile id to run").required(true).index(1))
                .arg(
                    Arg::new("profiles")
                        .long("profiles")
                        .short('p')
                        .help("Path to profiles.json (default: next to the executable)"),
                ),
        )
}
