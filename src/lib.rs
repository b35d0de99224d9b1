//! Look up Unicode character names and code point labels, and search the
//! Unicode name space.
//!
//! Names are loaded once from a `DerivedName.txt` file of the Unicode
//! Character Database, whose compact `START..END; PREFIX*` ranges are
//! expanded into one name per code point. Code points without a name get a
//! label such as `<control-0000>` or `<reserved-2EE5E>`.
//!
//! ```no_run
//! use unicode_charnames::{CharNames, Config};
//!
//! let config = Config::default().with_source("/usr/share/unicode/DerivedName.txt");
//! let names = CharNames::load(&config)?;
//!
//! assert_eq!(&*names.charname("\u{3400}")?, "CJK UNIFIED IDEOGRAPH-3400");
//! assert_eq!(&*names.charname_of(0xD800)?, "<surrogate-D800>");
//! assert_eq!(names.codepoint("SUPERCALIFRAGILISTICEXPIALIDOCIOUS"), None);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod builder;
pub mod category;
pub mod config;
pub mod engine;
pub mod error;
pub mod source;
pub mod store;
pub mod types;

pub use category::Category;
pub use config::Config;
pub use engine::CharNames;
pub use error::{BuildError, ConfigError, QueryError};
pub use source::{FileSource, InlineSource, NameSource};
pub use store::Search;
pub use types::{CodePoint, NameRecord, SourceFingerprint, TableSummary};

/// Version of the Unicode Standard the names describe.
pub const UNICODE_VERSION: &str = "16.0.0";

/// Version of the Unicode Character Database a source must declare.
pub const UCD_VERSION: &str = UNICODE_VERSION;

/// Conventional file name of the name source in the UCD.
pub const SOURCE_FILE_NAME: &str = "DerivedName.txt";
