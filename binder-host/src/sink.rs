//! Output collaborator: registration of generated units.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use thiserror::Error;

/// Error from registering a generated unit.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("generated unit '{0}' was registered twice")]
    DuplicateUnit(String),

    #[error("failed to write generated unit '{unit}'")]
    Io {
        unit: String,
        #[source]
        source: std::io::Error,
    },
}

/// Accepts generated units by name.
///
/// The host owns what happens next — merging into a build, writing to disk,
/// holding in memory for assertions. Unit names are expected to be unique;
/// implementations may reject duplicates.
pub trait SourceSink {
    /// Register one generated unit.
    fn add_source(&mut self, unit_name: &str, contents: &str) -> Result<(), SinkError>;
}

/// In-memory sink preserving registration order.
///
/// Rejects duplicate unit names, which makes it double as a collision check
/// in tests and simple hosts.
#[derive(Debug, Default)]
pub struct MemorySink {
    units: IndexMap<String, String>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Contents of a registered unit.
    pub fn get(&self, unit_name: &str) -> Option<&str> {
        self.units.get(unit_name).map(String::as_str)
    }

    /// Registered units in registration order.
    pub fn units(&self) -> impl Iterator<Item = (&str, &str)> {
        self.units.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Registered unit names in registration order.
    pub fn unit_names(&self) -> Vec<&str> {
        self.units.keys().map(String::as_str).collect()
    }

    /// Number of registered units.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Returns true if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

impl SourceSink for MemorySink {
    fn add_source(&mut self, unit_name: &str, contents: &str) -> Result<(), SinkError> {
        if self.units.contains_key(unit_name) {
            return Err(SinkError::DuplicateUnit(unit_name.to_string()));
        }
        self.units.insert(unit_name.to_string(), contents.to_string());
        Ok(())
    }
}

/// Sink writing each unit as a file under a root directory.
///
/// Parent directories are created as needed; an existing unit file is
/// overwritten, so re-running the pipeline converges on identical output.
#[derive(Debug)]
pub struct FsSink {
    root: PathBuf,
}

impl FsSink {
    /// Create a sink rooted at the given directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The root directory units are written under.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl SourceSink for FsSink {
    fn add_source(&mut self, unit_name: &str, contents: &str) -> Result<(), SinkError> {
        let path = self.root.join(unit_name);
        let io = |source| SinkError::Io {
            unit: unit_name.to_string(),
            source,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io)?;
        }
        std::fs::write(&path, contents).map_err(io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_memory_sink_preserves_order() {
        let mut sink = MemorySink::new();
        sink.add_source("B.g.cs", "b").unwrap();
        sink.add_source("A.g.cs", "a").unwrap();

        assert_eq!(sink.unit_names(), vec!["B.g.cs", "A.g.cs"]);
        assert_eq!(sink.get("A.g.cs"), Some("a"));
    }

    #[test]
    fn test_memory_sink_rejects_duplicates() {
        let mut sink = MemorySink::new();
        sink.add_source("Player.g.cs", "first").unwrap();

        let err = sink.add_source("Player.g.cs", "second").unwrap_err();
        assert!(matches!(err, SinkError::DuplicateUnit(name) if name == "Player.g.cs"));
        // First registration is untouched
        assert_eq!(sink.get("Player.g.cs"), Some("first"));
    }

    #[test]
    fn test_fs_sink_writes_units() {
        let temp = TempDir::new().unwrap();
        let mut sink = FsSink::new(temp.path());

        sink.add_source("Game.Player.g.cs", "// generated").unwrap();

        let written = std::fs::read_to_string(temp.path().join("Game.Player.g.cs")).unwrap();
        assert_eq!(written, "// generated");
    }

    #[test]
    fn test_fs_sink_overwrites() {
        let temp = TempDir::new().unwrap();
        let mut sink = FsSink::new(temp.path());

        sink.add_source("Player.g.cs", "old").unwrap();
        sink.add_source("Player.g.cs", "new").unwrap();

        let written = std::fs::read_to_string(temp.path().join("Player.g.cs")).unwrap();
        assert_eq!(written, "new");
    }
}
