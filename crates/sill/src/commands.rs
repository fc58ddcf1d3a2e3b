use std::path::PathBuf;

use clap::ArgMatches;
use regex::Regex;
use tracing::{error, info};

use sill_core::events;
use sill_core::{RunOutcome, list_windows, load_profile, native_system, run_profile};

use crate::table;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    match matches.subcommand() {
        Some(("list", sub_matches)) => handle_list_command(sub_matches),
        Some(("run", sub_matches)) => handle_run_command(sub_matches),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}

fn handle_list_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");
    let pattern = matches
        .get_one::<String>("pattern")
        .map(String::as_str)
        .unwrap_or("");

    info!(
        event = "cli.list_windows_started",
        json_output = json_output,
        pattern = pattern
    );

    let title_pattern = match Regex::new(pattern) {
        Ok(regex) => regex,
        Err(e) => {
            eprintln!("Invalid title pattern: {}", e);
            error!(event = "cli.list_windows_bad_pattern", error = %e);
            return Err(e.into());
        }
    };

    let system = native_system();
    match list_windows(&system, &title_pattern) {
        Ok(windows) => {
            if json_output {
                println!("{}", serde_json::to_string_pretty(&windows)?);
            } else if windows.is_empty() {
                println!("No matching windows.");
            } else {
                table::print_windows_table(&windows);
            }

            info!(event = "cli.list_windows_completed", count = windows.len());
            Ok(())
        }
        Err(e) => {
            eprintln!("Failed to list windows: {}", e);
            error!(event = "cli.list_windows_failed", error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}

fn handle_run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let Some(id) = matches.get_one::<String>("id") else {
        return Err("Missing profile id".into());
    };

    let profiles_path = match matches.get_one::<String>("profiles") {
        Some(path) => PathBuf::from(path),
        None => sill_core::default_profiles_path()?,
    };

    info!(
        event = "cli.run_profile_started",
        id = %id,
        profiles = %profiles_path.display()
    );

    let profile = match load_profile(&profiles_path, id) {
        Ok(profile) => profile,
        Err(e) => {
            eprintln!("{}", e);
            error!(event = "cli.run_profile_config_failed", error = %e);
            events::log_app_error(&e);
            return Err(e.into());
        }
    };

    let system = native_system();
    match run_profile(&system, &profile) {
        Ok(RunOutcome::Applied {
            title,
            pid,
            placement,
        }) => {
            let position = if placement.preserve_position() {
                "unchanged".to_string()
            } else {
                format!("({}, {})", placement.x, placement.y)
            };
            let size = if placement.preserve_size() {
                "unchanged".to_string()
            } else {
                format!("{}x{}", placement.width, placement.height)
            };
            println!(
                "Applied profile '{}' to '{}' (pid {}): position {}, size {}",
                id, title, pid, position, size
            );
            info!(event = "cli.run_profile_completed", id = %id);
            Ok(())
        }
        Ok(RunOutcome::NoMatch) => {
            println!("No matched window");
            info!(event = "cli.run_profile_no_match", id = %id);
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", e);
            error!(event = "cli.run_profile_failed", error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}
