use anyhow::Result;
use clap::{Arg, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use std::path::PathBuf;

use labmath_cli::config::{load_demo_config, DemoConfig};
use labmath_cli::demo::{complex_report, vector_report};

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("LABMATH_LOG", "error,labmath=info"))
        .init();

    let config_arg = || {
        Arg::new("config")
            .help("Path to a JSON demo configuration file. Defaults are used when omitted.")
            .required(false)
            .value_parser(clap::value_parser!(PathBuf))
            .value_hint(ValueHint::FilePath)
    };

    let matches = Command::new("labmath")
        .version(clap::crate_version!())
        .about("Vector and complex number demos")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("vector")
                .about("Run the vector arithmetic demo")
                .arg(config_arg()),
        )
        .subcommand(
            Command::new("complex")
                .about("Run the complex arithmetic demo")
                .arg(config_arg()),
        )
        .subcommand(Command::new("template").about("Print the default configuration as JSON"))
        .get_matches();

    match matches.subcommand() {
        Some(("vector", vector_matches)) => {
            let config = resolve_config(vector_matches)?;
            print_lines(vector_report(&config.vector)?);
            Ok(())
        }
        Some(("complex", complex_matches)) => {
            let config = resolve_config(complex_matches)?;
            print_lines(complex_report(&config.complex)?);
            Ok(())
        }
        Some(("template", _)) => {
            println!("{}", serde_json::to_string_pretty(&DemoConfig::default())?);
            Ok(())
        }
        _ => unreachable!(),
    }
}

fn resolve_config(matches: &ArgMatches) -> Result<DemoConfig> {
    match matches.get_one::<PathBuf>("config") {
        Some(config_path) => {
            log::info!("[labmath] Using config: {:?}", config_path);
            load_demo_config(config_path)
        }
        None => {
            log::info!("[labmath] No config provided; using defaults.");
            Ok(DemoConfig::default())
        }
    }
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{}", line);
    }
}
