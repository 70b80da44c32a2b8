// SPDX-License-Identifier: Apache-2.0

//! One generation run: validate, build the table, write the data file, then
//! the module that loads it.

use crate::artifact_sink::ArtifactSink;
use crate::hex_file::emit_hex;
use crate::lut_config::LutConfig;
use crate::lut_error::LutError;
use crate::reciprocal_lut::ReciprocalLut;
use crate::rom_module::RomLookupModule;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationReport {
    pub entry_count: usize,
    pub lut_bits: u32,
    pub input_bits: u32,
    pub nsig: u32,
    /// Where each artifact went, in write order: data file first.
    pub hex_location: String,
    pub module_location: String,
}

impl GenerationReport {
    pub fn hex_summary(&self) -> String {
        format!(
            "Generated {} with {} entries ({} bits each).",
            self.hex_location, self.entry_count, self.lut_bits
        )
    }

    pub fn module_summary(&self) -> String {
        format!(
            "Generated {}: {} x {}-bit ROM, {}-bit input, {}-bit output (NSIG={}).",
            self.module_location,
            self.entry_count,
            self.lut_bits,
            self.input_bits,
            self.nsig + 2,
            self.nsig
        )
    }
}

/// Which artifact a progress callback is being told about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArtifactKind {
    Hex,
    Module,
}

/// Runs the whole generation against `sink`.
///
/// Nothing is written when the configuration is invalid. A failed data file
/// write aborts before the module is written; whatever the sink already
/// received is left as is.
pub fn generate_artifacts(
    config: &LutConfig,
    sink: &mut dyn ArtifactSink,
) -> Result<GenerationReport, LutError> {
    generate_artifacts_with_progress(config, sink, |_, _| {})
}

/// Like `generate_artifacts`, but calls `on_written` right after each artifact
/// reaches the sink, so a caller can report the data file even when the
/// module write fails afterwards.
pub fn generate_artifacts_with_progress<F>(
    config: &LutConfig,
    sink: &mut dyn ArtifactSink,
    mut on_written: F,
) -> Result<GenerationReport, LutError>
where
    F: FnMut(ArtifactKind, &GenerationReport),
{
    config.validate()?;

    log::info!(
        "generate_artifacts; input_bits: {} lut_bits: {} hex_file: {} module_file: {}",
        config.shape.input_bits,
        config.shape.lut_bits,
        config.hex_file,
        config.module_file
    );
    let lut = ReciprocalLut::generate(&config.shape);
    let report = GenerationReport {
        entry_count: lut.len(),
        lut_bits: config.shape.lut_bits,
        input_bits: config.shape.input_bits,
        nsig: config.nsig,
        hex_location: sink.describe(&config.hex_file),
        module_location: sink.describe(&config.module_file),
    };

    sink.write_artifact(&config.hex_file, emit_hex(&lut).as_bytes())
        .map_err(|e| LutError::io("write", &report.hex_location, e))?;
    log::info!("wrote data file: {}", report.hex_location);
    on_written(ArtifactKind::Hex, &report);

    let module_text = RomLookupModule::new(config, &lut).render();
    sink.write_artifact(&config.module_file, module_text.as_bytes())
        .map_err(|e| LutError::io("write", &report.module_location, e))?;
    log::info!("wrote module file: {}", report.module_location);
    on_written(ArtifactKind::Module, &report);

    Ok(report)
}
