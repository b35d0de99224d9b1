use std::iter::FusedIterator;
use std::sync::Arc;

use indexmap::map::Iter;
use indexmap::IndexMap;

use super::table::ForwardTable;
use crate::error::{BuildError, BuildResult};
use crate::types::CodePoint;

/// Reverse index from names to code points.
///
/// Built once from the source names of a [`ForwardTable`] and never
/// updated afterwards, so memoized `<category-XXXX>` labels are never
/// found by lookups or searches. Lookups are exact and case-sensitive.
#[derive(Debug, Clone, Default)]
pub struct NameIndex {
    name_to_code_point: IndexMap<Arc<str>, CodePoint>,
}

impl NameIndex {
    /// Invert `table`, failing on the first name claimed by two code points.
    pub fn build(table: &ForwardTable) -> BuildResult<Self> {
        let mut name_to_code_point = IndexMap::with_capacity(table.len());
        for (code_point, name) in table.iter() {
            if let Some(first) = name_to_code_point.insert(Arc::clone(name), code_point) {
                return Err(BuildError::NameCollision {
                    origin: table.origin().to_string(),
                    name: name.to_string(),
                    first,
                    second: code_point,
                });
            }
        }
        debug_assert_eq!(name_to_code_point.len(), table.len());
        Ok(Self { name_to_code_point })
    }

    pub fn lookup(&self, name: &str) -> Option<CodePoint> {
        self.name_to_code_point.get(name).copied()
    }

    /// Case-insensitive substring search in declaration order.
    ///
    /// The term is uppercased once; names are uppercase already.
    pub fn search(&self, term: &str) -> Search<'_> {
        Search {
            entries: self.name_to_code_point.iter(),
            needle: term.to_uppercase(),
        }
    }

    pub fn len(&self) -> usize {
        self.name_to_code_point.len()
    }

    pub fn is_empty(&self) -> bool {
        self.name_to_code_point.is_empty()
    }
}

/// Lazy scan over a [`NameIndex`] yielding `(code point, name)` matches.
///
/// Each search owns its own cursor; starting a new search rescans the
/// whole index.
#[derive(Debug, Clone)]
pub struct Search<'a> {
    entries: Iter<'a, Arc<str>, CodePoint>,
    needle: String,
}

impl<'a> Search<'a> {
    /// The uppercased term being searched for.
    pub fn term(&self) -> &str {
        &self.needle
    }
}

impl<'a> Iterator for Search<'a> {
    type Item = (CodePoint, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let needle = self.needle.as_str();
        self.entries
            .find(|(name, _)| name.contains(needle))
            .map(|(name, code_point)| (*code_point, &**name))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.entries.size_hint().1)
    }
}

impl FusedIterator for Search<'_> {}
