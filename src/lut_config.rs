// SPDX-License-Identifier: Apache-2.0

//! Run configuration for the reciprocal seed table and its artifacts.

use crate::lut_error::LutError;
use crate::verilog_version::VerilogVersion;

pub const DEFAULT_INPUT_BITS: u32 = 10;
pub const DEFAULT_LUT_BITS: u32 = 7;
pub const DEFAULT_HEX_FILE: &str = "X0.hex";
pub const DEFAULT_MODULE_FILE: &str = "X0.v";
pub const DEFAULT_MODULE_NAME: &str = "X0";
pub const DEFAULT_NSIG: u32 = 11;
pub const DEFAULT_NEXP: u32 = 5;

/// Table size is `2^input_bits`; cap it so a typo cannot ask for gigabytes.
pub const MAX_INPUT_BITS: u32 = 20;

/// Entries are written as exactly two hex digits.
pub const MAX_LUT_BITS: u32 = 8;

/// Widest mantissa among the IEEE interchange formats (binary128).
pub const MAX_NSIG: u32 = 112;

/// Numeric shape of the table: how many mantissa bits index it and how wide
/// each stored entry is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LutShape {
    pub input_bits: u32,
    pub lut_bits: u32,
}

impl LutShape {
    pub fn new(input_bits: u32, lut_bits: u32) -> Self {
        Self {
            input_bits,
            lut_bits,
        }
    }

    pub fn entry_count(&self) -> usize {
        1usize << self.input_bits
    }

    /// Mask applied to every quotient; drops the implicit leading one.
    pub fn entry_mask(&self) -> u64 {
        (1u64 << self.lut_bits) - 1
    }

    /// Numerator shift: puts the `lut_bits` bits below the quotient's leading
    /// one at the bottom of the word, i.e. 18 for a 10-in/7-out table.
    pub fn scale_shift(&self) -> u32 {
        self.input_bits + self.lut_bits + 1
    }

    pub fn validate(&self) -> Result<(), LutError> {
        if self.input_bits == 0 || self.input_bits > MAX_INPUT_BITS {
            return Err(LutError(format!(
                "input_bits must be in 1..={}; got {}",
                MAX_INPUT_BITS, self.input_bits
            )));
        }
        if self.lut_bits == 0 || self.lut_bits > MAX_LUT_BITS {
            return Err(LutError(format!(
                "lut_bits must be in 1..={} to fit two hex digits; got {}",
                MAX_LUT_BITS, self.lut_bits
            )));
        }
        if self.lut_bits > self.input_bits {
            return Err(LutError(format!(
                "lut_bits ({}) must not exceed input_bits ({})",
                self.lut_bits, self.input_bits
            )));
        }
        Ok(())
    }
}

impl Default for LutShape {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT_BITS, DEFAULT_LUT_BITS)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LutConfig {
    pub shape: LutShape,
    /// Name of the `$readmemh` data file; also embedded in the module text.
    pub hex_file: String,
    pub module_file: String,
    pub module_name: String,
    /// Default of the module's `NSIG` parameter (mantissa precision).
    pub nsig: u32,
    /// Default of the module's `NEXP` parameter. Declared for interface
    /// compatibility with the surrounding datapath; the lookup logic does not
    /// reference it.
    pub nexp: u32,
    pub verilog_version: VerilogVersion,
}

impl Default for LutConfig {
    fn default() -> Self {
        Self {
            shape: LutShape::default(),
            hex_file: DEFAULT_HEX_FILE.to_string(),
            module_file: DEFAULT_MODULE_FILE.to_string(),
            module_name: DEFAULT_MODULE_NAME.to_string(),
            nsig: DEFAULT_NSIG,
            nexp: DEFAULT_NEXP,
            verilog_version: VerilogVersion::default(),
        }
    }
}

fn is_verilog_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

fn validate_file_name(what: &str, name: &str) -> Result<(), LutError> {
    if name.is_empty() {
        return Err(LutError(format!("{} must not be empty", what)));
    }
    if name.contains(|c| matches!(c, '"' | '\\' | '\n' | '\r')) {
        return Err(LutError(format!(
            "{} must not contain quotes, backslashes or line breaks; got {:?}",
            what, name
        )));
    }
    Ok(())
}

impl LutConfig {
    /// Checks every constraint the generator and serializers rely on. Called
    /// before anything is computed or written.
    pub fn validate(&self) -> Result<(), LutError> {
        self.shape.validate()?;
        if self.nsig <= self.shape.lut_bits {
            return Err(LutError(format!(
                "nsig ({}) must be greater than lut_bits ({})",
                self.nsig, self.shape.lut_bits
            )));
        }
        if self.nsig > MAX_NSIG {
            return Err(LutError(format!(
                "nsig must be at most {}; got {}",
                MAX_NSIG, self.nsig
            )));
        }
        validate_file_name("hex_file", &self.hex_file)?;
        validate_file_name("module_file", &self.module_file)?;
        if self.hex_file == self.module_file {
            return Err(LutError(format!(
                "hex_file and module_file must differ; both are '{}'",
                self.hex_file
            )));
        }
        if !is_verilog_identifier(&self.module_name) {
            return Err(LutError(format!(
                "module_name must be a Verilog identifier; got {:?}",
                self.module_name
            )));
        }
        Ok(())
    }
}
