// Command-line interface for snip
//
// snipconv converts the snippets defined in a Geany `snippets.conf` into
// Sublime Text `.sublime-snippet` files, one folder per configured rule.
// The conversion itself lives in snip-babel; this binary resolves the inputs
// (environment, flags, configuration), sets up logging and reports the result.
//
// Usage:
//  snipconv                                  - Convert every enabled rule
//  snipconv --rule go [--rule php]           - Convert only the named rules
//  snipconv --list-rules                     - Show configured rules
//  snipconv --list-sections                  - Show sections of the source file
//
// Inputs:
//  SUBLIME_USER_PATH   / --dest      destination root (e.g. ~/.config/sublime-text/Packages/User)
//  GEANY_SNIPPETS_CONF / --source    Geany snippets.conf
//  --template                        defaults to sublime-snippet.sample next to the executable
//
// Startup problems (missing inputs, unreadable template or source, bad configuration)
// exit with status 1. Problems with individual rules or files are logged and
// reported, and the process still exits with status 0.

mod report;

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use snip_babel::{ConvertContext, GeanyConfig, RuleRegistry, SnippetTemplate};
use snip_config::{Loader, SnipConfig, LOCAL_CONFIG_FILE};
use std::fmt::Display;
use std::path::PathBuf;

const DEST_ENV: &str = "SUBLIME_USER_PATH";
const SOURCE_ENV: &str = "GEANY_SNIPPETS_CONF";

fn build_cli() -> Command {
    Command::new("snipconv")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert Geany snippets into Sublime Text snippets")
        .long_about(
            "snipconv reads snippet definitions from a Geany snippets.conf file and\n\
            writes one .sublime-snippet file per snippet.\n\n\
            Each rule maps a Geany section to a folder and scope:\n  \
            go:         [Go]         -> <dest>/go/         (source.go)\n  \
            javascript: [Javascript] -> <dest>/javascript/ (source.js)\n  \
            php:        [PHP]        -> <dest>/php/        (source.php)\n\n\
            Rules are configured in snip.toml (see --config and --set).\n\n\
            Examples:\n  \
            snipconv                                   # Convert using the environment\n  \
            snipconv --rule go                         # Only the Go snippets\n  \
            snipconv --set rules.php.enabled=false     # Everything but PHP\n  \
            snipconv --list-sections                   # Inspect the source file",
        )
        .arg(
            Arg::new("dest")
                .long("dest")
                .short('d')
                .value_name("DIR")
                .env(DEST_ENV)
                .help("Destination root for generated snippet folders")
                .value_hint(ValueHint::DirPath),
        )
        .arg(
            Arg::new("source")
                .long("source")
                .short('s')
                .value_name("FILE")
                .env(SOURCE_ENV)
                .help("Geany snippets.conf to read")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("template")
                .long("template")
                .short('t')
                .value_name("FILE")
                .help("Snippet template (defaults to the configured file next to the executable)")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a snip.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("set")
                .long("set")
                .value_name("KEY=VALUE")
                .help("Override a configuration value (repeatable)")
                .action(ArgAction::Append)
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("rule")
                .long("rule")
                .short('r')
                .value_name("NAME")
                .help("Only convert the named rule (repeatable)")
                .action(ArgAction::Append)
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("list-rules")
                .long("list-rules")
                .help("List configured rules and exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-sections")
                .long("list-sections")
                .help("List the sections of the source file and exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print results as JSON")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .help("Only log warnings and errors")
                .action(ArgAction::SetTrue),
        )
}

fn main() {
    let matches = build_cli().get_matches();

    let json = matches.get_flag("json");
    setup_logging(matches.get_flag("quiet"), json);

    let config = load_cli_config(&matches);

    if matches.get_flag("list-rules") {
        handle_list_rules_command(&config, json);
        return;
    }

    let source_path = required_path(&matches, "source", SOURCE_ENV);
    let source = GeanyConfig::load(&source_path).unwrap_or_else(|e| fatal(e));

    if matches.get_flag("list-sections") {
        handle_list_sections_command(&source, json);
        return;
    }

    let dest = required_path(&matches, "dest", DEST_ENV);
    let template_path = resolve_template_path(&matches, &config);
    let template = SnippetTemplate::load(&template_path).unwrap_or_else(|e| fatal(e));

    let ctx = ConvertContext::new(source, template, dest)
        .unwrap_or_else(|e| fatal(e))
        .with_emit_options(config.emit_options());

    let mut registry =
        RuleRegistry::from_specs(&config.rule_specs()).unwrap_or_else(|e| fatal(e));
    if let Some(names) = matches.get_many::<String>("rule") {
        let names: Vec<&String> = names.collect();
        registry.retain(&names).unwrap_or_else(|e| fatal(e));
    }

    handle_convert_command(&registry, &ctx, json);
}

// Logs share stdout with the summary, except in JSON mode where stdout must
// stay machine readable.
fn setup_logging(quiet: bool, json: bool) {
    let level = if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };
    let target = if json {
        env_logger::Target::Stderr
    } else {
        env_logger::Target::Stdout
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .target(target)
        .init();
}

/// Handle the default conversion run
fn handle_convert_command(registry: &RuleRegistry, ctx: &ConvertContext, json: bool) {
    let summary = registry.convert(ctx);

    if json {
        println!("{}", report::summary_json(&summary));
    } else {
        print!("{}", report::summary_text(&summary));
    }
}

/// Handle the --list-rules flag
fn handle_list_rules_command(config: &SnipConfig, json: bool) {
    let specs = config.rule_specs();
    if json {
        let text = serde_json::to_string_pretty(&specs).unwrap_or_else(|e| fatal(e));
        println!("{text}");
        return;
    }

    println!("Enabled rules:\n");
    print!("{}", report::rules_text(&specs));
}

/// Handle the --list-sections flag
fn handle_list_sections_command(source: &GeanyConfig, json: bool) {
    let sections = source.section_names();
    if json {
        println!("{}", serde_json::Value::from(sections));
        return;
    }

    for name in sections {
        println!("{name}");
    }
}

fn load_cli_config(matches: &ArgMatches) -> SnipConfig {
    let loader = Loader::new().with_optional_file(LOCAL_CONFIG_FILE);
    let loader = if let Some(path) = matches.get_one::<String>("config") {
        loader.with_file(path)
    } else {
        loader
    };

    let overrides = matches
        .get_many::<String>("set")
        .map(|values| values.map(String::as_str).collect::<Vec<_>>())
        .unwrap_or_default();
    let loader = apply_overrides(loader, &overrides).unwrap_or_else(|e| fatal(e));

    loader
        .build()
        .unwrap_or_else(|err| fatal(format!("Failed to load configuration: {err}")))
}

fn apply_overrides(mut loader: Loader, overrides: &[&str]) -> Result<Loader, String> {
    for raw in overrides {
        let (key, value) = parse_override(raw)?;
        loader = loader
            .set_override(key, value.to_string())
            .map_err(|err| format!("Invalid override '{raw}': {err}"))?;
    }
    Ok(loader)
}

fn parse_override(raw: &str) -> Result<(&str, &str), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Ok((key.trim(), value.trim())),
        _ => Err(format!("Invalid override '{raw}': expected KEY=VALUE")),
    }
}

fn required_path(matches: &ArgMatches, arg: &str, env: &str) -> PathBuf {
    match matches.get_one::<String>(arg) {
        Some(value) if !value.is_empty() => PathBuf::from(value),
        _ => fatal(format!("Missing --{arg}: set {env} or pass --{arg} <path>")),
    }
}

fn resolve_template_path(matches: &ArgMatches, config: &SnipConfig) -> PathBuf {
    if let Some(path) = matches.get_one::<String>("template") {
        return PathBuf::from(path);
    }

    let exe = std::env::current_exe()
        .unwrap_or_else(|e| fatal(format!("Cannot locate the executable: {e}")));
    match exe.parent() {
        Some(dir) => dir.join(&config.template.file),
        None => fatal(format!(
            "Cannot locate the directory of '{}'",
            exe.display()
        )),
    }
}

fn fatal(message: impl Display) -> ! {
    eprintln!("Error: {message}");
    std::process::exit(1);
}
