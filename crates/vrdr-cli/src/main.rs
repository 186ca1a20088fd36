//! `vrdr` command-line tool.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use vrdr_cli::logging::{LogConfig, LogFormat, init_logging};
use vrdr_ije::{MRE, TRX};

mod cli;
mod commands;

use crate::cli::{Cli, Command, LogFormatArg};
use crate::commands::{
    run_ack, run_fields, run_ije_to_json, run_ije_to_subformat, run_inspect, run_json_to_ije,
    run_subformat_to_ije, run_wrap,
};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let result = match &cli.command {
        Command::IjeToJson(args) => run_ije_to_json(args),
        Command::JsonToIje(args) => run_json_to_ije(args),
        Command::IjeToTrx(args) => run_ije_to_subformat(args, &TRX),
        Command::TrxToIje(args) => run_subformat_to_ije(args, &TRX),
        Command::IjeToMre(args) => run_ije_to_subformat(args, &MRE),
        Command::MreToIje(args) => run_subformat_to_ije(args, &MRE),
        Command::Fields(args) => run_fields(args),
        Command::Inspect(args) => run_inspect(args),
        Command::Wrap(args) => run_wrap(args),
        Command::Ack(args) => run_ack(args),
    };
    let exit_code = match result {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig::default().with_level(cli.verbosity.tracing_level_filter());
    config.use_env_filter = !cli.verbosity.is_present();
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
