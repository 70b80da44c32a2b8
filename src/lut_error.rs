// SPDX-License-Identifier: Apache-2.0

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LutError(pub String);

impl LutError {
    /// Wraps an I/O failure on `path` so the report names the artifact that
    /// could not be read or written.
    pub fn io(action: &str, path: &str, e: std::io::Error) -> Self {
        LutError(format!("failed to {} '{}': {}", action, path, e))
    }
}

impl std::fmt::Display for LutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "recip-lut error: {}", self.0)
    }
}

impl std::error::Error for LutError {}
