use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the flags from src/main.rs
// We need to duplicate this here since build scripts can't access src/ modules
fn main() -> Result<(), Error> {
    println!("cargo:rerun-if-changed=build.rs");

    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("snipconv")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert Geany snippets into Sublime Text snippets")
        .arg(
            Arg::new("dest")
                .long("dest")
                .short('d')
                .help("Destination root for generated snippet folders")
                .value_hint(ValueHint::DirPath),
        )
        .arg(
            Arg::new("source")
                .long("source")
                .short('s')
                .help("Geany snippets.conf to read")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("template")
                .long("template")
                .short('t')
                .help("Snippet template")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Path to a snip.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("set")
                .long("set")
                .help("Override a configuration value")
                .action(ArgAction::Append)
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("rule")
                .long("rule")
                .short('r')
                .help("Only convert the named rule")
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
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "snipconv", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "snipconv", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "snipconv", &outdir)?;

    Ok(())
}
