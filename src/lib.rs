// SPDX-License-Identifier: Apache-2.0

//! Generator for the lookup table that seeds Newton-Raphson reciprocal
//! refinement in hardware.
//!
//! A run computes the table, writes it as a `$readmemh` data file, and writes
//! a Verilog module whose ROM is initialized from that file.

pub mod artifact_sink;
pub mod config_file;
pub mod generate;
pub mod hex_file;
pub mod lut_config;
pub mod lut_error;
pub mod reciprocal_lut;
pub mod report_cli_error;
pub mod rom_module;
pub mod verify;
pub mod verilog_version;
pub mod verilog_writer;

pub use artifact_sink::{ArtifactSink, DirSink, MemorySink};
pub use generate::{
    generate_artifacts, generate_artifacts_with_progress, ArtifactKind, GenerationReport,
};
pub use lut_config::{LutConfig, LutShape};
pub use lut_error::LutError;
pub use reciprocal_lut::ReciprocalLut;
pub use rom_module::RomLookupModule;
pub use verilog_version::VerilogVersion;
