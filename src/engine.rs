use std::sync::Arc;

use tracing::{info, trace};

use crate::builder;
use crate::category::Category;
use crate::config::Config;
use crate::error::{BuildError, BuildResult, QueryError, QueryResult};
use crate::source::{FileSource, InlineSource, NameSource};
use crate::store::{ForwardTable, NameIndex, NameTable, Search};
use crate::types::{CodePoint, TableSummary};

/// Bidirectional lookup between code points and Unicode character names.
///
/// An engine is built once from a name source and is immutable afterwards
/// except for labels memoized by [`charname`](Self::charname). It is
/// `Send + Sync`; share it behind an `Arc` to query from many threads.
///
/// ```no_run
/// use unicode_charnames::{CharNames, Config};
///
/// let names = CharNames::load(&Config::default())?;
/// assert_eq!(&*names.charname("\u{C9}")?, "LATIN CAPITAL LETTER E WITH ACUTE");
/// let bubble_tea = names.codepoint("BUBBLE TEA").map(|cp| cp.to_string());
/// assert_eq!(bubble_tea.as_deref(), Some("1F9CB"));
/// for (code_point, name) in names.search_charnames("sextile")? {
///     println!("{code_point} {name}");
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct CharNames {
    table: NameTable,
    index: NameIndex,
}

impl CharNames {
    /// Build an engine from the file named by `config.source`.
    pub fn load(config: &Config) -> BuildResult<Self> {
        Self::from_source(&FileSource::new(&config.source), config)
    }

    /// Build an engine from name data held in memory, such as a
    /// `DerivedName.txt` embedded with `include_str!`.
    pub fn from_text(origin: &str, text: &str, config: &Config) -> BuildResult<Self> {
        Self::from_source(&InlineSource::new(origin, text), config)
    }

    /// Build an engine from any [`NameSource`].
    pub fn from_source<S: NameSource + ?Sized>(source: &S, config: &Config) -> BuildResult<Self> {
        let table = builder::build(source, &config.ucd_version)?;
        Self::from_table(table, config.verify_categories)
    }

    /// Wrap an already built forward table, deriving its inverse.
    pub fn from_table(table: ForwardTable, verify_categories: bool) -> BuildResult<Self> {
        if verify_categories {
            verify_unnamed_categories(&table)?;
        }
        let index = NameIndex::build(&table)?;
        info!(
            origin = table.origin(),
            ucd_version = table.ucd_version(),
            names = index.len(),
            "charnames engine ready"
        );
        Ok(Self {
            table: NameTable::new(table),
            index,
        })
    }

    /// The name or code point label of the single character in `text`.
    ///
    /// Fails unless `text` holds exactly one `char`.
    pub fn charname(&self, text: &str) -> QueryResult<Arc<str>> {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(self.name(c)),
            _ => Err(QueryError::invalid(
                "a string of length 1",
                format!("'{}' of length {}", text, text.chars().count()),
            )),
        }
    }

    /// The name or label of a raw code point, including surrogates.
    pub fn charname_of(&self, value: u32) -> QueryResult<Arc<str>> {
        CodePoint::new(value)
            .map(|cp| self.label(cp))
            .ok_or_else(|| {
                QueryError::invalid("a code point in 0..=10FFFF", format!("{value:X}"))
            })
    }

    /// The name or label of `c`.
    pub fn name(&self, c: char) -> Arc<str> {
        self.label(CodePoint::from(c))
    }

    /// The name of `cp`, or its synthesized `<category-XXXX>` label.
    ///
    /// Labels are memoized: later calls for the same code point return the
    /// same allocation.
    pub fn label(&self, cp: CodePoint) -> Arc<str> {
        self.table.get_or_insert_with(cp, || {
            let category = Category::of(cp);
            trace!(code_point = %cp, %category, "synthesized code point label");
            category.synthesize(cp)
        })
    }

    /// The code point named exactly `name`.
    ///
    /// Only source names match; synthesized labels never do.
    pub fn codepoint(&self, name: &str) -> Option<CodePoint> {
        self.index.lookup(name)
    }

    /// Case-insensitive substring search over the source names, in
    /// declaration order.
    pub fn search_charnames(&self, term: &str) -> QueryResult<Search<'_>> {
        if term.is_empty() {
            return Err(QueryError::invalid("a non-empty string for search", "''"));
        }
        Ok(self.index.search(term))
    }

    /// UCD version the source was checked against.
    pub fn ucd_version(&self) -> &str {
        self.table.base().ucd_version()
    }

    /// Number of names taken from the source.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// The source names, without memoized labels.
    pub fn forward_table(&self) -> &ForwardTable {
        self.table.base()
    }

    pub fn summary(&self) -> TableSummary {
        let base = self.table.base();
        TableSummary {
            ucd_version: base.ucd_version().to_string(),
            origin: base.origin().to_string(),
            fingerprint: base.fingerprint().clone(),
            named_code_points: self.index.len(),
            synthesized_labels: self.table.synthesized_len(),
            stats: base.stats().clone(),
        }
    }
}

/// No named code point may fall into one of the fixed label categories.
fn verify_unnamed_categories(table: &ForwardTable) -> BuildResult<()> {
    for (code_point, name) in table.iter() {
        if let Some(category) = Category::fixed(code_point) {
            return Err(BuildError::NamedCategoryConflict {
                origin: table.origin().to_string(),
                code_point,
                category,
                name: name.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build_from_text;

    const SAMPLE: &str = "\
# DerivedName-16.0.0.txt
0020          ; SPACE
00C9          ; LATIN CAPITAL LETTER E WITH ACUTE
26B9          ; SEXTILE
26BA          ; SEMISEXTILE
3400..4DBF    ; CJK UNIFIED IDEOGRAPH-*
";

    fn engine() -> CharNames {
        let table = build_from_text("sample", SAMPLE, "16.0.0").unwrap();
        CharNames::from_table(table, true).unwrap()
    }

    #[test]
    fn engine_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CharNames>();
    }

    #[test]
    fn charname_rejects_wrong_lengths() {
        let names = engine();
        assert_eq!(
            names.charname("ABC").unwrap_err().to_string(),
            "expected a string of length 1, but got 'ABC' of length 3"
        );
        assert_eq!(
            names.charname("").unwrap_err().to_string(),
            "expected a string of length 1, but got '' of length 0"
        );
    }

    #[test]
    fn charname_counts_chars_not_bytes() {
        let names = engine();
        assert_eq!(
            &*names.charname("\u{C9}").unwrap(),
            "LATIN CAPITAL LETTER E WITH ACUTE"
        );
    }

    #[test]
    fn charname_of_rejects_values_past_the_code_space() {
        let err = engine().charname_of(0x110000).unwrap_err();
        assert_eq!(
            err.to_string(),
            "expected a code point in 0..=10FFFF, but got 110000"
        );
    }

    #[test]
    fn labels_do_not_leak_into_the_inverse_table() {
        let names = engine();
        assert_eq!(&*names.name('\u{0378}'), "<reserved-0378>");
        assert_eq!(names.codepoint("<reserved-0378>"), None);
        assert_eq!(names.len(), 4 + 0x4DBF - 0x3400 + 1);
        assert_eq!(names.summary().synthesized_labels, 1);
    }

    #[test]
    fn empty_search_is_rejected() {
        let err = engine().search_charnames("").unwrap_err();
        assert_eq!(
            err.to_string(),
            "expected a non-empty string for search, but got ''"
        );
    }

    #[test]
    fn named_control_character_is_rejected() {
        let text = "# DerivedName-16.0.0.txt\n0007 ; BELL\n";
        let table = build_from_text("bell", text, "16.0.0").unwrap();
        match CharNames::from_table(table.clone(), true).unwrap_err() {
            BuildError::NamedCategoryConflict {
                origin,
                code_point,
                category,
                name,
            } => {
                assert_eq!(origin, "bell");
                assert_eq!(code_point.to_string(), "0007");
                assert_eq!(category, Category::Control);
                assert_eq!(name, "BELL");
            }
            other => panic!("unexpected error: {other}"),
        }
        let names = CharNames::from_table(table, false).unwrap();
        assert_eq!(&*names.name('\u{7}'), "BELL");
    }
}
