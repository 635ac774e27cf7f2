//! snaps: find earlier versions of a file in filesystem snapshots
//! This tool looks for a snapshot container next to a file or directory and
//! lists the snapshots that hold a copy of it.

use anyhow::Result;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command as ClapCommand};
use std::path::PathBuf;
use std::sync::Arc;

use snapshot_finder::commands::check::handle_check_command;
use snapshot_finder::commands::config::handle_config_command;
use snapshot_finder::commands::list::handle_list_command;
use snapshot_finder::core::{load_locator_config, SnapshotLocator};
use snapshot_finder::display::RenderOptions;
use snapshot_finder::utils::init_logging;

fn build_cli() -> ClapCommand {
    ClapCommand::new("snaps")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Find earlier versions of a file or directory in filesystem snapshots")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("FILE")
                .help("Settings file (overrides $SNAPS_CONFIG and the default location)")
                .value_parser(value_parser!(PathBuf))
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log discovery details to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            ClapCommand::new("list")
                .about("List snapshots holding a copy of each path")
                .arg(
                    Arg::new("paths")
                        .value_name("PATH")
                        .num_args(1..)
                        .default_value(".")
                        .value_parser(value_parser!(PathBuf)),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print machine-readable JSON")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("expand")
                        .long("expand")
                        .help("Show the members of unchanged groups")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("no-group")
                        .long("no-group")
                        .help("List every snapshot on its own line")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("paths-column")
                        .long("paths")
                        .help("Show where each copy lives")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("utc")
                        .long("utc")
                        .help("Print times in UTC instead of local time")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            ClapCommand::new("check")
                .about("Exit 0 if snapshots are available for PATH, 1 otherwise")
                .arg(
                    Arg::new("path")
                        .value_name("PATH")
                        .required(true)
                        .value_parser(value_parser!(PathBuf)),
                ),
        )
        .subcommand(
            ClapCommand::new("config")
                .about("Show container names and timestamp templates in effect"),
        )
}

fn render_options(matches: &ArgMatches) -> RenderOptions {
    RenderOptions {
        group: !matches.get_flag("no-group"),
        expand: matches.get_flag("expand"),
        paths: matches.get_flag("paths-column"),
        utc: matches.get_flag("utc"),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let matches = build_cli().get_matches();

    init_logging(matches.get_flag("verbose"));

    let explicit = matches.get_one::<PathBuf>("config").map(PathBuf::as_path);
    let (config, source) = load_locator_config(explicit)?;
    let locator = Arc::new(SnapshotLocator::new(config));

    match matches.subcommand() {
        Some(("list", sub)) => {
            let paths: Vec<PathBuf> = sub
                .get_many::<PathBuf>("paths")
                .map(|values| values.cloned().collect())
                .unwrap_or_default();
            handle_list_command(locator, paths, sub.get_flag("json"), render_options(sub)).await?;
        }
        Some(("check", sub)) => {
            let found = sub
                .get_one::<PathBuf>("path")
                .is_some_and(|path| handle_check_command(&locator, path));
            if !found {
                std::process::exit(1);
            }
        }
        Some(("config", _)) => handle_config_command(locator.config(), &source),
        _ => build_cli().print_help()?,
    }

    Ok(())
}
