// SPDX-License-Identifier: Apache-2.0

//! Verilog wrapper around the seed table.
//!
//! The module is filled in as a typed model first (`RomLookupModule`) and only
//! then rendered, so widths, depths and padding can be checked without looking
//! at the text.
//!
//! The output is `NSIG+2` bits wide and carries the seed below a leading-bit
//! pattern. Code 0 is the mantissa 1.0 exactly, whose reciprocal needs one
//! more integer bit than every other code:
//!
//! ```text
//! mant == 0 : {1'b1,  seed, NSIG-(LUT_BITS-1) zeros}
//! otherwise : {2'b01, seed, NSIG-LUT_BITS zeros}
//! ```

use crate::lut_config::LutConfig;
use crate::reciprocal_lut::ReciprocalLut;
use crate::verilog_version::VerilogVersion;
use crate::verilog_writer::{binary_literal, bit_span, VerilogWriter};

pub const NSIG_PARAM: &str = "NSIG";
pub const NEXP_PARAM: &str = "NEXP";
pub const INPUT_PORT: &str = "mant";
pub const OUTPUT_PORT: &str = "x0";
pub const ROM_NAME: &str = "rom";
pub const SEED_NAME: &str = "seed";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleParam {
    pub name: &'static str,
    pub default: u32,
}

/// One arm of the output select.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutputCase {
    /// Width of the constant placed above the seed.
    pub lead_bits: u32,
    pub lead_value: u32,
    /// The zero fill below the seed is `NSIG - fill_offset` bits wide.
    pub fill_offset: u32,
}

impl OutputCase {
    pub fn fill_bits(&self, nsig: u32) -> u32 {
        nsig - self.fill_offset
    }

    /// Total width for a given `NSIG`, which must equal `NSIG + 2`.
    pub fn width(&self, seed_bits: u32, nsig: u32) -> u32 {
        self.lead_bits + seed_bits + self.fill_bits(nsig)
    }

    fn render(&self) -> String {
        let fill_count = if self.fill_offset == 0 {
            NSIG_PARAM.to_string()
        } else {
            format!("{}-{}", NSIG_PARAM, self.fill_offset)
        };
        format!(
            "{{{}, {}, {{({}){{1'b0}}}}}}",
            binary_literal(self.lead_bits, self.lead_value),
            SEED_NAME,
            fill_count
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RomLookupModule {
    pub name: String,
    pub version: VerilogVersion,
    pub params: Vec<ModuleParam>,
    pub input_bits: u32,
    pub rom_bits: u32,
    pub rom_depth: usize,
    /// Data file named in `$readmemh`; the module embeds no table data.
    pub init_file: String,
    /// Arm taken when the input code is zero.
    pub unity_case: OutputCase,
    pub normal_case: OutputCase,
}

impl RomLookupModule {
    /// `config` must already have passed `LutConfig::validate`; the fill
    /// offsets and spans assume `1 <= lut_bits < nsig`.
    pub fn new(config: &LutConfig, lut: &ReciprocalLut) -> Self {
        debug_assert!(config.validate().is_ok(), "unvalidated config");
        let rom_bits = lut.shape().lut_bits;
        RomLookupModule {
            name: config.module_name.clone(),
            version: config.verilog_version,
            params: vec![
                ModuleParam {
                    name: NEXP_PARAM,
                    default: config.nexp,
                },
                ModuleParam {
                    name: NSIG_PARAM,
                    default: config.nsig,
                },
            ],
            input_bits: lut.shape().input_bits,
            rom_bits,
            rom_depth: lut.len(),
            init_file: config.hex_file.clone(),
            unity_case: OutputCase {
                lead_bits: 1,
                lead_value: 0b1,
                fill_offset: rom_bits - 1,
            },
            normal_case: OutputCase {
                lead_bits: 2,
                lead_value: 0b01,
                fill_offset: rom_bits,
            },
        }
    }

    pub fn param_default(&self, name: &str) -> Option<u32> {
        self.params.iter().find(|p| p.name == name).map(|p| p.default)
    }

    /// Upper address in the memory declaration `[0:N-1]`.
    pub fn rom_max_index(&self) -> usize {
        self.rom_depth - 1
    }

    /// Output width with the parameters at their defaults.
    pub fn default_output_width(&self) -> Option<u32> {
        self.param_default(NSIG_PARAM).map(|nsig| nsig + 2)
    }

    pub fn render(&self) -> String {
        let net = self.version.net_keyword();
        let mut w = VerilogWriter::new();
        w.line("// Generated by recip-lut. Do not edit.");
        w.line(&format!(
            "// Reciprocal seed ROM: {} x {}-bit entries loaded with $readmemh.",
            self.rom_depth, self.rom_bits
        ));
        w.line(&format!("module {} #(", self.name));
        w.indented(|w| {
            for (i, param) in self.params.iter().enumerate() {
                let sep = if i + 1 == self.params.len() { "" } else { "," };
                w.line(&format!("parameter {} = {}{}", param.name, param.default, sep));
            }
        });
        w.line(") (");
        w.indented(|w| {
            w.line(&format!(
                "input {} {}{},",
                net,
                bit_span(self.input_bits),
                INPUT_PORT
            ));
            w.line(&format!("output {} [{}+1:0] {}", net, NSIG_PARAM, OUTPUT_PORT));
        });
        w.line(");");
        w.indented(|w| {
            w.line(&format!(
                "{} {}{} [0:{}];",
                self.version.memory_keyword(),
                bit_span(self.rom_bits),
                ROM_NAME,
                self.rom_max_index()
            ));
            w.line(&format!("{} {}{};", net, bit_span(self.rom_bits), SEED_NAME));
            w.blank();
            w.block("initial begin", "end", |w| {
                w.line(&format!("$readmemh(\"{}\", {});", self.init_file, ROM_NAME));
            });
            w.blank();
            w.line(&format!("assign {} = {}[{}];", SEED_NAME, ROM_NAME, INPUT_PORT));
            w.line(&format!(
                "assign {} = ({} == {}'d0)",
                OUTPUT_PORT, INPUT_PORT, self.input_bits
            ));
            w.indented(|w| {
                w.line(&format!("? {}", self.unity_case.render()));
                w.line(&format!(": {};", self.normal_case.render()));
            });
        });
        w.line("endmodule");
        w.build()
    }
}
