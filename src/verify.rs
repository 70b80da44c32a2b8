// SPDX-License-Identifier: Apache-2.0

//! Checks a data file on disk against a freshly generated table.

use std::path::Path;

use crate::hex_file::parse_hex;
use crate::lut_config::LutConfig;
use crate::lut_error::LutError;
use crate::reciprocal_lut::ReciprocalLut;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VerifyReport {
    Match { entry_count: usize },
    LengthMismatch { want: usize, got: usize },
    /// First differing address.
    ValueMismatch { index: usize, want: u32, got: u32 },
}

impl VerifyReport {
    pub fn is_match(&self) -> bool {
        matches!(self, VerifyReport::Match { .. })
    }
}

impl std::fmt::Display for VerifyReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VerifyReport::Match { entry_count } => {
                write!(f, "all {} entries match", entry_count)
            }
            VerifyReport::LengthMismatch { want, got } => {
                write!(f, "expected {} entries; found {}", want, got)
            }
            VerifyReport::ValueMismatch { index, want, got } => write!(
                f,
                "entry {} differs: expected {:02X}; found {:02X}",
                index, want, got
            ),
        }
    }
}

pub fn compare_entries(want: &ReciprocalLut, got: &[u32]) -> VerifyReport {
    if want.len() != got.len() {
        return VerifyReport::LengthMismatch {
            want: want.len(),
            got: got.len(),
        };
    }
    match want
        .entries()
        .iter()
        .zip(got.iter())
        .position(|(w, g)| w != g)
    {
        Some(index) => VerifyReport::ValueMismatch {
            index,
            want: want.entries()[index],
            got: got[index],
        },
        None => VerifyReport::Match {
            entry_count: want.len(),
        },
    }
}

/// Reads `config.hex_file` under `dir` and compares it entry by entry with the
/// table the configuration describes.
pub fn verify_hex_artifact(config: &LutConfig, dir: &Path) -> Result<VerifyReport, LutError> {
    config.validate()?;
    let path = dir.join(&config.hex_file);
    let path_str = path.display().to_string();
    log::info!("verify_hex_artifact; path: {}", path_str);
    let text = std::fs::read_to_string(&path).map_err(|e| LutError::io("read", &path_str, e))?;
    let got = parse_hex(&text).map_err(|e| LutError(format!("{}: {}", path_str, e.0)))?;
    let want = ReciprocalLut::generate(&config.shape);
    Ok(compare_entries(&want, &got))
}
