use std::collections::HashMap;
use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::RwLock;

use crate::error::{BuildError, BuildResult};
use crate::types::{BuildStats, CodePoint, NameRecord, SourceFingerprint};

/// Code point to name mapping exactly as declared by the source.
///
/// Entries keep declaration order: range expansions in ascending order
/// within their line, lines in file order. Each code point appears once;
/// a second insert for the same code point is an error, never an overwrite.
#[derive(Debug, Clone)]
pub struct ForwardTable {
    pub(crate) origin: String,
    pub(crate) ucd_version: String,
    pub(crate) fingerprint: SourceFingerprint,
    pub(crate) stats: BuildStats,
    names: IndexMap<CodePoint, Arc<str>>,
    /// Source line of each entry, aligned with `names` indices.
    lines: Vec<usize>,
}

impl ForwardTable {
    pub(crate) fn new(origin: &str, ucd_version: &str, fingerprint: SourceFingerprint) -> Self {
        Self {
            origin: origin.to_string(),
            ucd_version: ucd_version.to_string(),
            fingerprint,
            stats: BuildStats::default(),
            names: IndexMap::new(),
            lines: Vec::new(),
        }
    }

    /// Insert one record produced by source line `line`.
    pub(crate) fn insert(
        &mut self,
        code_point: CodePoint,
        name: String,
        line: usize,
    ) -> BuildResult<()> {
        if let Some(idx) = self.names.get_index_of(&code_point) {
            return Err(BuildError::DuplicateCodePoint {
                origin: self.origin.clone(),
                code_point,
                first_line: self.lines[idx],
                second_line: line,
            });
        }
        self.names.insert(code_point, Arc::from(name));
        self.lines.push(line);
        Ok(())
    }

    pub fn get(&self, code_point: CodePoint) -> Option<&Arc<str>> {
        self.names.get(&code_point)
    }

    /// Entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (CodePoint, &Arc<str>)> + '_ {
        self.names.iter().map(|(cp, name)| (*cp, name))
    }

    /// Owned copies of the entries, in declaration order.
    pub fn records(&self) -> impl Iterator<Item = NameRecord> + '_ {
        self.names.iter().map(|(cp, name)| NameRecord {
            code_point: *cp,
            name: name.to_string(),
        })
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn ucd_version(&self) -> &str {
        &self.ucd_version
    }

    pub fn fingerprint(&self) -> &SourceFingerprint {
        &self.fingerprint
    }

    pub fn stats(&self) -> &BuildStats {
        &self.stats
    }
}

/// The forward table as seen by queries: the source names plus labels
/// memoized on first lookup.
///
/// Source names are read without locking. Memoized labels live in a
/// separate overlay behind one `RwLock`, taken only to look up or insert a
/// label. An inserted label is never replaced, so every caller asking for
/// the same code point gets the same `Arc`.
#[derive(Debug)]
pub struct NameTable {
    base: ForwardTable,
    synthetic: RwLock<HashMap<CodePoint, Arc<str>>>,
}

impl NameTable {
    pub fn new(base: ForwardTable) -> Self {
        Self {
            base,
            synthetic: RwLock::new(HashMap::new()),
        }
    }

    /// The name or memoized label of `code_point`, if either exists yet.
    pub fn get(&self, code_point: CodePoint) -> Option<Arc<str>> {
        if let Some(name) = self.base.get(code_point) {
            return Some(Arc::clone(name));
        }
        self.synthetic.read().get(&code_point).cloned()
    }

    /// Look `code_point` up, memoizing `make_label()` on a miss.
    ///
    /// `make_label` runs outside the lock and must be deterministic: when two
    /// threads race on the same code point, the first insert wins and both
    /// observe it.
    pub fn get_or_insert_with(
        &self,
        code_point: CodePoint,
        make_label: impl FnOnce() -> String,
    ) -> Arc<str> {
        if let Some(name) = self.get(code_point) {
            return name;
        }
        let label: Arc<str> = Arc::from(make_label());
        let mut synthetic = self.synthetic.write();
        Arc::clone(synthetic.entry(code_point).or_insert(label))
    }

    /// Number of labels memoized so far.
    pub fn synthesized_len(&self) -> usize {
        self.synthetic.read().len()
    }

    /// Total entries, source names and memoized labels together.
    pub fn len(&self) -> usize {
        self.base.len() + self.synthesized_len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn base(&self) -> &ForwardTable {
        &self.base
    }
}
