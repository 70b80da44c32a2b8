// SPDX-License-Identifier: Apache-2.0

//! Destinations for generated artifacts.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

pub trait ArtifactSink {
    /// Creates or truncates the artifact `name` and writes `contents` to it.
    fn write_artifact(&mut self, name: &str, contents: &[u8]) -> std::io::Result<()>;

    /// Human-readable location of `name`, used in reports.
    fn describe(&self, name: &str) -> String;
}

/// Writes artifacts as files under a directory. The directory must exist.
pub struct DirSink {
    dir: PathBuf,
}

impl DirSink {
    pub fn new(dir: &Path) -> Self {
        Self {
            dir: dir.to_path_buf(),
        }
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }
}

impl ArtifactSink for DirSink {
    fn write_artifact(&mut self, name: &str, contents: &[u8]) -> std::io::Result<()> {
        let path = self.path_for(name);
        log::debug!(
            "DirSink::write_artifact; path: {} bytes: {}",
            path.display(),
            contents.len()
        );
        let mut f = std::io::BufWriter::new(std::fs::File::create(&path)?);
        f.write_all(contents)?;
        f.flush()
    }

    fn describe(&self, name: &str) -> String {
        self.path_for(name).display().to_string()
    }
}

/// Keeps artifacts in memory, keyed by name.
#[derive(Default)]
pub struct MemorySink {
    pub artifacts: BTreeMap<String, Vec<u8>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_text(&self, name: &str) -> Option<String> {
        self.artifacts
            .get(name)
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }
}

impl ArtifactSink for MemorySink {
    fn write_artifact(&mut self, name: &str, contents: &[u8]) -> std::io::Result<()> {
        self.artifacts.insert(name.to_string(), contents.to_vec());
        Ok(())
    }

    fn describe(&self, name: &str) -> String {
        format!("<memory>/{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dir_sink_truncates_existing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut sink = DirSink::new(temp_dir.path());
        sink.write_artifact("a.txt", b"first contents\n").unwrap();
        sink.write_artifact("a.txt", b"second\n").unwrap();
        let got = std::fs::read_to_string(temp_dir.path().join("a.txt")).unwrap();
        assert_eq!(got, "second\n");
    }

    #[test]
    fn test_dir_sink_missing_directory_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut sink = DirSink::new(&temp_dir.path().join("does_not_exist"));
        assert!(sink.write_artifact("a.txt", b"x").is_err());
    }

    #[test]
    fn test_memory_sink_overwrites() {
        let mut sink = MemorySink::new();
        sink.write_artifact("a", b"1").unwrap();
        sink.write_artifact("a", b"2").unwrap();
        assert_eq!(sink.get_text("a").as_deref(), Some("2"));
        assert_eq!(sink.artifacts.len(), 1);
        assert_eq!(sink.describe("a"), "<memory>/a");
    }
}
