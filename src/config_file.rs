// SPDX-License-Identifier: Apache-2.0

//! `recip-lut.toml` handling and flag/file/default resolution.
//!
//! Each setting is taken from the command line flag if given, else from the
//! config file if present, else from the built-in default.

use std::path::Path;

use clap::ArgMatches;
use serde::Deserialize;

use crate::lut_config::{LutConfig, LutShape};
use crate::lut_error::LutError;
use crate::verilog_version::VerilogVersion;

/// File picked up from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE_NAME: &str = "recip-lut.toml";

#[derive(Deserialize)]
pub struct RecipLutToml {
    pub lut: LutFileConfig,
}

#[derive(Deserialize, Default, Debug, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LutFileConfig {
    /// Number of mantissa bits indexing the table.
    pub input_bits: Option<u32>,

    /// Width of each stored entry.
    pub lut_bits: Option<u32>,

    /// Name of the `$readmemh` data file, relative to the output directory.
    pub hex_file: Option<String>,

    /// Name of the Verilog module file, relative to the output directory.
    pub module_file: Option<String>,

    /// Verilog module name. Defaults to the stem of `module_file`.
    pub module_name: Option<String>,

    /// Default for the module's `NSIG` parameter.
    pub nsig: Option<u32>,

    /// Default for the module's `NEXP` parameter.
    pub nexp: Option<u32>,

    /// Emit SystemVerilog (`logic`) rather than Verilog (`wire`/`reg`).
    pub use_system_verilog: Option<bool>,
}

pub fn parse_config_text(text: &str) -> Result<LutFileConfig, LutError> {
    let parsed: RecipLutToml =
        toml::from_str(text).map_err(|e| LutError(format!("invalid config: {}", e)))?;
    Ok(parsed.lut)
}

pub fn load_config_file(path: &Path) -> Result<LutFileConfig, LutError> {
    let path_str = path.display().to_string();
    log::info!("load_config_file; path: {}", path_str);
    let text = std::fs::read_to_string(path).map_err(|e| LutError::io("read", &path_str, e))?;
    parse_config_text(&text).map_err(|e| LutError(format!("{}: {}", path_str, e.0)))
}

/// Returns the config file in `dir` if one exists.
pub fn find_default_config(dir: &Path) -> Option<std::path::PathBuf> {
    let candidate = dir.join(DEFAULT_CONFIG_FILE_NAME);
    if candidate.exists() {
        Some(candidate)
    } else {
        None
    }
}

fn flag_u32(matches: Option<&ArgMatches>, id: &str) -> Option<u32> {
    matches.and_then(|m| m.get_one::<u32>(id).copied())
}

fn flag_string(matches: Option<&ArgMatches>, id: &str) -> Option<String> {
    matches.and_then(|m| m.get_one::<String>(id).cloned())
}

fn flag_bool(matches: Option<&ArgMatches>, id: &str) -> Option<bool> {
    flag_string(matches, id).map(|s| s == "true")
}

fn module_name_from_file(module_file: &str) -> Option<String> {
    Path::new(module_file)
        .file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}

/// Builds the run configuration. `matches` is `None` when no subcommand was
/// given, in which case only the file and defaults apply.
///
/// The result is not validated here; `LutConfig::validate` does that.
pub fn resolve_config(matches: Option<&ArgMatches>, file: &Option<LutFileConfig>) -> LutConfig {
    let defaults = LutConfig::default();
    let empty = LutFileConfig::default();
    let file = file.as_ref().unwrap_or(&empty);

    let input_bits = flag_u32(matches, "input_bits")
        .or(file.input_bits)
        .unwrap_or(defaults.shape.input_bits);
    let lut_bits = flag_u32(matches, "lut_bits")
        .or(file.lut_bits)
        .unwrap_or(defaults.shape.lut_bits);
    let verilog_version = VerilogVersion::from_use_system_verilog(
        flag_bool(matches, "use_system_verilog")
            .or(file.use_system_verilog)
            .unwrap_or(false),
    );

    let module_file = flag_string(matches, "module_file")
        .or_else(|| file.module_file.clone())
        .unwrap_or_else(|| {
            if verilog_version.is_system_verilog() {
                format!("{}.sv", defaults.module_name)
            } else {
                defaults.module_file.clone()
            }
        });
    let module_name = flag_string(matches, "module_name")
        .or_else(|| file.module_name.clone())
        .or_else(|| module_name_from_file(&module_file))
        .unwrap_or(defaults.module_name);

    LutConfig {
        shape: LutShape::new(input_bits, lut_bits),
        hex_file: flag_string(matches, "hex_file")
            .or_else(|| file.hex_file.clone())
            .unwrap_or(defaults.hex_file),
        module_file,
        module_name,
        nsig: flag_u32(matches, "nsig").or(file.nsig).unwrap_or(defaults.nsig),
        nexp: flag_u32(matches, "nexp").or(file.nexp).unwrap_or(defaults.nexp),
        verilog_version,
    }
}
