// src/cli.rs
use anyhow::Result;
use clap::parser::ValueSource;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::{env, path::PathBuf, process::ExitCode};

use crate::core::config::DEFAULT_CONFIG_FILE;
use crate::infra::t;
use crate::suites::Suite;

pub mod commands;

/// Pre-parses the command line arguments to find the language setting.
/// This allows i18n to be initialized before the full CLI is built.
/// It looks for a `--lang <VALUE>` or `--lang=<VALUE>` argument.
fn pre_parse_language() -> Option<String> {
    let args: Vec<String> = env::args().collect();
    if let Some(pos) = args.iter().position(|arg| arg == "--lang") {
        return args.get(pos + 1).cloned();
    }
    args.iter()
        .find_map(|arg| arg.strip_prefix("--lang=").map(str::to_string))
}

/// Detects the system language, falling back to English.
fn detect_language() -> String {
    sys_locale::get_locale().unwrap_or_else(|| "en".to_string())
}

pub fn build_cli(locale: &str) -> Command {
    Command::new("dyntest")
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli.about", locale = locale).to_string())
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("lang")
                .long("lang")
                .help(t!("cli.lang", locale = locale).to_string())
                .value_name("LANGUAGE")
                .global(true)
                .action(ArgAction::Set),
        )
        .subcommand(
            Command::new("run")
                .about(t!("cli.run_about", locale = locale).to_string())
                .arg(
                    Arg::new("config")
                        .short('c')
                        .long("config")
                        .help(t!("cli.arg_config", locale = locale).to_string())
                        .value_name("CONFIG")
                        .default_value(DEFAULT_CONFIG_FILE)
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .help(t!("cli.arg_seed", locale = locale).to_string())
                        .value_name("SEED")
                        .value_parser(clap::value_parser!(u64))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("dynamic-tests")
                        .short('n')
                        .long("dynamic-tests")
                        .help(t!("cli.arg_dynamic_tests", locale = locale).to_string())
                        .value_name("COUNT")
                        .value_parser(clap::value_parser!(usize))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("suite")
                        .short('s')
                        .long("suite")
                        .help(t!("cli.arg_suite", locale = locale).to_string())
                        .value_name("SUITE")
                        .value_parser(Suite::ALL.map(|s| s.as_str()))
                        .action(ArgAction::Append),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help(t!("cli.arg_json", locale = locale).to_string())
                        .value_name("JSON")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("html")
                        .long("html")
                        .help(t!("cli.arg_html", locale = locale).to_string())
                        .value_name("HTML")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("no-color")
                        .long("no-color")
                        .help(t!("cli.arg_no_color", locale = locale).to_string())
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("init")
                .about(t!("cli.init_about", locale = locale).to_string())
                .arg(
                    Arg::new("non-interactive")
                        .long("non-interactive")
                        .help(t!("cli.arg_non_interactive", locale = locale).to_string())
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("path")
                        .long("path")
                        .help(t!("cli.arg_init_path", locale = locale).to_string())
                        .value_name("PATH")
                        .default_value(DEFAULT_CONFIG_FILE)
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                ),
        )
        .subcommand(
            Command::new("count")
                .about(t!("cli.count_about", locale = locale).to_string())
                .arg(
                    Arg::new("root")
                        .help(t!("cli.arg_root", locale = locale).to_string())
                        .value_name("ROOT")
                        .default_value(".")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .help(t!("cli.arg_output", locale = locale).to_string())
                        .value_name("MARKDOWN")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("top")
                        .long("top")
                        .help(t!("cli.arg_top", locale = locale).to_string())
                        .value_name("N")
                        .default_value("5")
                        .value_parser(clap::value_parser!(usize))
                        .action(ArgAction::Set),
                ),
        )
}

/// Parses the command line and dispatches to the selected command.
/// The returned exit code reflects the outcome of the command.
pub fn run() -> Result<ExitCode> {
    // Pre-parse language and initialize i18n first.
    let explicit_lang = pre_parse_language();
    let language = explicit_lang.clone().unwrap_or_else(detect_language);
    let locale = crate::init_locale(&language);

    let matches = build_cli(&locale).get_matches();

    match matches.subcommand() {
        Some(("run", run_matches)) => {
            let options = run_options(run_matches, explicit_lang)?;
            let summary = commands::run::execute(options)?;
            Ok(summary.exit_code())
        }
        Some(("init", init_matches)) => {
            let non_interactive = init_matches.get_flag("non-interactive");
            let path = init_matches
                .get_one::<PathBuf>("path")
                .cloned()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

            // Show language detection message if it was auto-detected
            if explicit_lang.is_none() {
                println!("{}", t!("init.system_language_detected", lang = &language));
            }
            commands::init::run_init_wizard(&path, non_interactive)?;
            Ok(ExitCode::SUCCESS)
        }
        Some(("count", count_matches)) => {
            let root = count_matches
                .get_one::<PathBuf>("root")
                .cloned()
                .unwrap_or_else(|| PathBuf::from("."));
            let output = count_matches.get_one::<PathBuf>("output").cloned();
            let top = count_matches.get_one::<usize>("top").copied().unwrap_or(5);
            commands::count::execute(&root, output.as_deref(), top)?;
            Ok(ExitCode::SUCCESS)
        }
        // `subcommand_required` makes clap print help and exit before this.
        _ => Ok(ExitCode::SUCCESS),
    }
}

fn run_options(matches: &ArgMatches, lang: Option<String>) -> Result<commands::run::RunOptions> {
    let config = matches
        .get_one::<PathBuf>("config")
        .cloned()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    let config_explicit = matches.value_source("config") == Some(ValueSource::CommandLine);
    let suites = matches
        .get_many::<String>("suite")
        .map(|values| values.map(|v| v.parse::<Suite>()).collect::<Result<Vec<_>>>())
        .transpose()?;

    Ok(commands::run::RunOptions {
        config,
        config_explicit,
        lang,
        seed: matches.get_one::<u64>("seed").copied(),
        dynamic_tests: matches.get_one::<usize>("dynamic-tests").copied(),
        suites,
        json: matches.get_one::<PathBuf>("json").cloned(),
        html: matches.get_one::<PathBuf>("html").cloned(),
        no_color: matches.get_flag("no-color"),
    })
}
