use std::path::{Path, PathBuf};

/// Anything the table builder can read name data from.
///
/// The read happens exactly once, while the engine is being built. A
/// failed read aborts construction; there is no partially loaded state.
pub trait NameSource {
    /// Human-readable origin used in diagnostics (usually a file path).
    fn origin(&self) -> String;

    /// Read the whole source as UTF-8 text.
    fn read_text(&self) -> std::io::Result<String>;
}

/// A `DerivedName.txt`-style file on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl NameSource for FileSource {
    fn origin(&self) -> String {
        self.path.display().to_string()
    }

    fn read_text(&self) -> std::io::Result<String> {
        std::fs::read_to_string(&self.path)
    }
}

/// Name data already held in memory, e.g. embedded with `include_str!`.
#[derive(Debug, Clone)]
pub struct InlineSource<'a> {
    origin: &'a str,
    text: &'a str,
}

impl<'a> InlineSource<'a> {
    pub fn new(origin: &'a str, text: &'a str) -> Self {
        Self { origin, text }
    }
}

impl NameSource for InlineSource<'_> {
    fn origin(&self) -> String {
        self.origin.to_string()
    }

    fn read_text(&self) -> std::io::Result<String> {
        Ok(self.text.to_string())
    }
}
