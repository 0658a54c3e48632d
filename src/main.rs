use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;

use clprobe::{OutputFormat, ProbeConfig};

fn build_cli() -> Command {
    Command::new("clprobe")
        .about("List the OpenCL platforms and devices installed on this machine")
        .disable_version_flag(true)
        .arg(
            Arg::new("version")
                .short('v')
                .short_alias('V')
                .long("version")
                .help("Print version information")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("library")
                .long("library")
                .value_name("PATH")
                .help("OpenCL library to try before the system defaults (repeatable)")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the inventory as JSON")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Log each enumeration step to stderr")
                .action(ArgAction::SetTrue),
        )
}

fn config_from_matches(matches: &ArgMatches) -> ProbeConfig {
    let library_paths = matches
        .get_many::<PathBuf>("library")
        .map(|paths| paths.cloned().collect())
        .unwrap_or_default();

    let format = if matches.get_flag("json") {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    ProbeConfig {
        library_paths,
        format,
        verbose: matches.get_flag("verbose"),
    }
}

fn main() -> Result<()> {
    let matches = build_cli().get_matches();

    if matches.get_flag("version") {
        println!("clprobe version {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let config = config_from_matches(&matches);
    clprobe::init_logging(config.log_level());

    clprobe::commands::probe(&config)
}
