//! Table Builder: turns a range-encoded name source into a [`ForwardTable`].
//!
//! Pipeline:
//! 1. Read the source once through a [`NameSource`]
//! 2. Check the first line for the expected UCD version
//! 3. Parse each data line, skipping blanks and `#` comments
//! 4. Expand `START..END; PREFIX*` ranges into one record per code point
//! 5. Insert records in declaration order, rejecting duplicate code points

pub mod fingerprint;
pub mod parser;

use tracing::{debug, info};

use crate::error::{BuildError, BuildResult};
use crate::source::NameSource;
use crate::store::ForwardTable;
use parser::{expand_name, is_skippable, parse_line, SourceLine};

/// Read `source` and build its forward table.
pub fn build<S: NameSource + ?Sized>(
    source: &S,
    expected_version: &str,
) -> BuildResult<ForwardTable> {
    let origin = source.origin();
    let text = source.read_text().map_err(|error| BuildError::Io {
        origin: origin.clone(),
        error,
    })?;
    build_from_text(&origin, &text, expected_version)
}

/// Build a forward table from source text already in memory.
///
/// The first line is metadata only and must contain `expected_version`;
/// data lines start on line 2.
pub fn build_from_text(
    origin: &str,
    text: &str,
    expected_version: &str,
) -> BuildResult<ForwardTable> {
    let mut lines = text.lines();
    let first_line = lines.next().unwrap_or_default();
    if !first_line.contains(expected_version) {
        return Err(BuildError::VersionMismatch {
            origin: origin.to_string(),
            expected: expected_version.to_string(),
            found: first_line.to_string(),
        });
    }

    let mut table = ForwardTable::new(origin, expected_version, fingerprint::fingerprint(text));

    for (idx, raw) in lines.enumerate() {
        let line_no = idx + 2;
        if is_skippable(raw) {
            table.stats.skipped_lines += 1;
            continue;
        }

        let parsed = parse_line(raw).map_err(|reason| BuildError::MalformedLine {
            origin: origin.to_string(),
            line: line_no,
            text: raw.to_string(),
            reason,
        })?;

        match parsed {
            SourceLine::Single { code_point, name } => {
                table.insert(code_point, name.to_string(), line_no)?;
                table.stats.single_entries += 1;
            }
            SourceLine::Wildcard { code_point, prefix } => {
                table.insert(code_point, expand_name(prefix, code_point), line_no)?;
                table.stats.single_entries += 1;
            }
            SourceLine::Range { start, end, prefix } => {
                let before = table.len();
                for code_point in start.through(end) {
                    table.insert(code_point, expand_name(prefix, code_point), line_no)?;
                }
                let expanded = table.len() - before;
                debug_assert_eq!(expanded, (end.value() - start.value() + 1) as usize);
                debug!(
                    origin,
                    line = line_no,
                    start = %start,
                    end = %end,
                    prefix,
                    expanded,
                    "expanded name range"
                );
                table.stats.range_entries += 1;
                table.stats.expanded_records += expanded;
            }
        }
    }

    info!(
        origin,
        ucd_version = expected_version,
        records = table.len(),
        ranges = table.stats.range_entries,
        fingerprint = %fingerprint::short_hex(&table.fingerprint, 12),
        "built forward name table"
    );

    Ok(table)
}
