//! Error types for table construction, queries and configuration.

use std::path::PathBuf;

use thiserror::Error;

use crate::category::Category;
use crate::types::CodePoint;

/// Fatal errors raised while building the name tables.
///
/// None of these are recoverable: an engine is either fully built or not
/// built at all.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The name source could not be read.
    #[error("failed to read name source {origin}: {error}")]
    Io {
        /// Where the source was expected to come from.
        origin: String,
        /// The underlying I/O error.
        #[source]
        error: std::io::Error,
    },

    /// The first line of the source does not carry the expected UCD version.
    #[error(
        "UCD version mismatch in {origin}: expected {expected}, found {found:?}"
    )]
    VersionMismatch {
        origin: String,
        expected: String,
        /// The first line of the source as read.
        found: String,
    },

    /// A data line could not be parsed.
    #[error("{origin}:{line}: malformed data line ({reason}): {text:?}")]
    MalformedLine {
        origin: String,
        /// 1-based line number.
        line: usize,
        text: String,
        reason: &'static str,
    },

    /// Two source lines produced a record for the same code point.
    #[error(
        "{origin}: code point {code_point} named twice (lines {first_line} and {second_line})"
    )]
    DuplicateCodePoint {
        origin: String,
        code_point: CodePoint,
        first_line: usize,
        second_line: usize,
    },

    /// Two code points share one name, so the inverse table cannot be built.
    #[error("{origin}: name {name:?} is shared by {first} and {second}")]
    NameCollision {
        origin: String,
        name: String,
        first: CodePoint,
        second: CodePoint,
    },

    /// A code point is both named by the source and reserved to a category.
    #[error(
        "{origin}: code point {code_point} is named {name:?} but belongs to category {category}"
    )]
    NamedCategoryConflict {
        origin: String,
        code_point: CodePoint,
        category: Category,
        name: String,
    },
}

/// Usage errors reported synchronously to the caller of a query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The argument does not satisfy the query's contract.
    #[error("expected {expected}, but got {found}")]
    InvalidArgument {
        /// The contract the argument must satisfy.
        expected: &'static str,
        /// A rendering of the value actually received.
        found: String,
    },
}

impl QueryError {
    pub(crate) fn invalid(expected: &'static str, found: impl Into<String>) -> Self {
        QueryError::InvalidArgument {
            expected,
            found: found.into(),
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Error reading a configuration file.
    #[error("I/O error reading {path}: {error}")]
    Io {
        path: PathBuf,
        #[source]
        error: std::io::Error,
    },

    /// Error parsing TOML syntax or shape.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type for table construction.
pub type BuildResult<T> = std::result::Result<T, BuildError>;

/// Result type for queries.
pub type QueryResult<T> = std::result::Result<T, QueryError>;
