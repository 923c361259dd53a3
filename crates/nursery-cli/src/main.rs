//! `nursery` binary: catalog listing, scripted runs and the interactive shell

use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, Command};
use nursery_cli::{build_storefront, catalog_screen, run_script, AppOptions, Shell, VERSION};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    Command::new("nursery")
        .version(VERSION)
        .about("Paradise Nursery storefront")
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Path to a TOML config file"),
        )
        .arg(
            Arg::new("catalog")
                .long("catalog")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Path to a TOML or JSON catalog (overrides config)"),
        )
        .subcommand(
            Command::new("catalog")
                .about("Print the catalog")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output as JSON"),
                ),
        )
        .subcommand(Command::new("shell").about("Start an interactive shopping session"))
        .subcommand(
            Command::new("run")
                .about("Apply a sequence of shell commands and print the result")
                .arg(
                    Arg::new("commands")
                        .num_args(1..)
                        .required(true)
                        .help("Commands, one per argument (e.g. 'add 2' 'cart')"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output the final snapshot as JSON"),
                ),
        )
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let matches = cli().get_matches();
    let options = AppOptions {
        config: matches.get_one::<PathBuf>("config").cloned(),
        catalog: matches.get_one::<PathBuf>("catalog").cloned(),
    };
    let mut store = build_storefront(&options).context("failed to open storefront")?;

    match matches.subcommand() {
        Some(("catalog", args)) => {
            if args.get_flag("json") {
                println!("{}", serde_json::to_string_pretty(&store.catalog().to_file())?);
            } else {
                print!("{}", catalog_screen(&store));
            }
        }
        Some(("run", args)) => {
            let commands: Vec<&String> = args
                .get_many::<String>("commands")
                .map(|values| values.collect())
                .unwrap_or_default();
            let report = run_script(&mut store, commands)?;

            if args.get_flag("json") {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                for ack in &report.checkouts {
                    println!("{}", ack.message);
                }
                print!("{}", Shell::new(store).screen());
            }
        }
        _ => {
            let stdin = io::stdin();
            Shell::new(store).run(stdin.lock(), io::stdout().lock())?;
        }
    }

    Ok(())
}
