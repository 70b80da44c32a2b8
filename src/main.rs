// SPDX-License-Identifier: Apache-2.0

//! Command line driver that generates the reciprocal seed table artifacts.
//!
//! Commands are given like:
//!
//! ```text
//! recip-lut <global-options> [command] <command-options>
//! ```
//!
//! Commands are:
//!
//! - generate: Writes the `$readmemh` data file and the Verilog ROM module.
//!   This is also what runs when no command is given.
//! - check: Compares an existing data file against the generated table.
//! - version: Prints the version of the tool.
//!
//! Sample usage:
//!
//! ```shell
//! $ cargo run
//! $ cargo run -- generate --output_dir=rtl --lut_bits=8 --nsig=23
//! $ cargo run -- --config=$HOME/recip-lut.toml check --output_dir=rtl
//! ```

use std::path::{Path, PathBuf};

use clap::{Arg, ArgAction, ArgMatches};
use recip_lut::config_file::{
    find_default_config, load_config_file, resolve_config, LutFileConfig,
    DEFAULT_CONFIG_FILE_NAME,
};
use recip_lut::generate::{generate_artifacts_with_progress, ArtifactKind};
use recip_lut::report_cli_error::report_cli_error_and_exit;
use recip_lut::verify::verify_hex_artifact;
use recip_lut::DirSink;

trait AppExt {
    fn add_lut_args(self) -> Self;
    fn add_u32_arg(self, long: &'static str, help: &'static str) -> Self;
    fn add_string_arg(
        self,
        long: &'static str,
        value_name: &'static str,
        help: &'static str,
    ) -> Self;
    fn add_bool_arg(self, long: &'static str, help: &'static str) -> Self;
}

impl AppExt for clap::Command {
    fn add_lut_args(self) -> Self {
        (self as clap::Command)
            .add_string_arg(
                "output_dir",
                "DIR",
                "Directory holding the artifacts (default: current directory)",
            )
            .add_u32_arg(
                "input_bits",
                "Mantissa bits indexing the table (default 10)",
            )
            .add_u32_arg(
                "lut_bits",
                "Width of each table entry, at most 8 (default 7)",
            )
            .add_string_arg(
                "hex_file",
                "FILE",
                "Name of the $readmemh data file (default X0.hex)",
            )
            .add_string_arg(
                "module_file",
                "FILE",
                "Name of the Verilog module file (default X0.v)",
            )
            .add_string_arg(
                "module_name",
                "NAME",
                "Verilog module name (default: stem of the module file)",
            )
            .add_u32_arg(
                "nsig",
                "Default for the NSIG module parameter, at most 112 (default 11)",
            )
            .add_u32_arg("nexp", "Default for the NEXP module parameter (default 5)")
            .add_bool_arg(
                "use_system_verilog",
                "Whether to emit SystemVerilog (default false; plain Verilog)",
            )
    }

    fn add_u32_arg(self, long: &'static str, help: &'static str) -> Self {
        (self as clap::Command).arg(
            Arg::new(long)
                .long(long)
                .value_name("N")
                .value_parser(clap::value_parser!(u32))
                .action(ArgAction::Set)
                .help(help),
        )
    }

    fn add_string_arg(
        self,
        long: &'static str,
        value_name: &'static str,
        help: &'static str,
    ) -> Self {
        (self as clap::Command).arg(
            Arg::new(long)
                .long(long)
                .value_name(value_name)
                .action(ArgAction::Set)
                .help(help),
        )
    }

    /// Adds a boolean argument to the command -- the helper ensures we have a
    /// uniform style/handling for boolean arguments.
    fn add_bool_arg(self, long: &'static str, help: &'static str) -> Self {
        (self as clap::Command).arg(
            Arg::new(long)
                .long(long)
                .value_name("BOOL")
                .action(ArgAction::Set)
                .value_parser(["true", "false"])
                .num_args(1)
                .help(help),
        )
    }
}

fn output_dir(matches: Option<&ArgMatches>) -> PathBuf {
    matches
        .and_then(|m| m.get_one::<String>("output_dir"))
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}

fn handle_generate(matches: Option<&ArgMatches>, file_config: &Option<LutFileConfig>) {
    log::info!("handle_generate");
    let config = resolve_config(matches, file_config);
    let dir = output_dir(matches);
    let mut sink = DirSink::new(&dir);
    let result = generate_artifacts_with_progress(&config, &mut sink, |kind, report| {
        match kind {
            ArtifactKind::Hex => println!("{}", report.hex_summary()),
            ArtifactKind::Module => println!("{}", report.module_summary()),
        }
    });
    if let Err(e) = result {
        report_cli_error_and_exit(
            &e.0,
            Some("generate"),
            vec![("output_dir", &dir.display().to_string())],
        );
    }
}

fn handle_check(matches: &ArgMatches, file_config: &Option<LutFileConfig>) {
    log::info!("handle_check");
    let config = resolve_config(Some(matches), file_config);
    let dir = output_dir(Some(matches));
    let hex_path = dir.join(&config.hex_file).display().to_string();
    match verify_hex_artifact(&config, &dir) {
        Ok(report) if report.is_match() => println!("{}: {}", hex_path, report),
        Ok(report) => report_cli_error_and_exit(
            "data file does not match the generated table",
            Some("check"),
            vec![("path", &hex_path), ("detail", &report.to_string())],
        ),
        Err(e) => report_cli_error_and_exit(&e.0, Some("check"), vec![("path", &hex_path)]),
    }
}

/// Uses `--config` if given, else `recip-lut.toml` in the working directory if
/// that exists.
fn load_file_config(matches: &ArgMatches) -> Option<LutFileConfig> {
    let mut config_path: Option<PathBuf> = matches.get_one::<String>("config").map(PathBuf::from);

    if config_path.is_none() {
        let cwd = std::env::current_dir().unwrap_or_else(|e| {
            report_cli_error_and_exit(
                "cannot determine working directory",
                None,
                vec![("error", &e.to_string())],
            )
        });
        config_path = find_default_config(&cwd);
        if let Some(path) = &config_path {
            log::info!(
                "Using {} in current directory: {}",
                DEFAULT_CONFIG_FILE_NAME,
                path.display()
            );
        }
    }

    config_path.map(|path| {
        if !Path::new(&path).exists() {
            report_cli_error_and_exit(
                "config file does not exist",
                None,
                vec![("path", &path.display().to_string())],
            );
        }
        load_config_file(&path).unwrap_or_else(|e| report_cli_error_and_exit(&e.0, None, vec![]))
    })
}

fn main() {
    let _ = env_logger::try_init();

    log::info!("recip-lut starting; version: {}", env!("CARGO_PKG_VERSION"));

    let matches = clap::Command::new("recip-lut")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generates the reciprocal seed lookup table and its Verilog ROM module")
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("CONFIG")
                .help("Path to a recip-lut.toml file")
                .action(ArgAction::Set),
        )
        .subcommand(clap::Command::new("version").about("Prints the version of the tool"))
        .subcommand(
            clap::Command::new("generate")
                .about("Writes the hex data file and the Verilog module")
                .add_lut_args(),
        )
        .subcommand(
            clap::Command::new("check")
                .about("Checks an existing hex data file against the generated table")
                .add_lut_args(),
        )
        .get_matches();

    if let Some(_matches) = matches.subcommand_matches("version") {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return;
    }

    let file_config = load_file_config(&matches);

    if let Some(sub_matches) = matches.subcommand_matches("generate") {
        handle_generate(Some(sub_matches), &file_config);
    } else if let Some(sub_matches) = matches.subcommand_matches("check") {
        handle_check(sub_matches, &file_config);
    } else {
        // No command: same as a bare `generate`.
        handle_generate(None, &file_config);
    }
}
