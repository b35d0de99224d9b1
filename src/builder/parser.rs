use crate::types::CodePoint;

/// The shape of one data line after parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLine<'a> {
    /// `CCCC; NAME`
    Single {
        code_point: CodePoint,
        name: &'a str,
    },
    /// `CCCC; PREFIX*`: a one-point range, named like a range member.
    Wildcard {
        code_point: CodePoint,
        prefix: &'a str,
    },
    /// `START..END; PREFIX*`
    Range {
        start: CodePoint,
        end: CodePoint,
        prefix: &'a str,
    },
}

/// Returns `true` for lines that carry no data.
pub fn is_skippable(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with('#')
}

/// Parse one non-blank, non-comment line.
///
/// On failure the error is a short reason suitable for
/// [`BuildError::MalformedLine`](crate::error::BuildError::MalformedLine).
pub fn parse_line(line: &str) -> Result<SourceLine<'_>, &'static str> {
    let (key, value) = line.split_once(';').ok_or("missing ';' separator")?;
    let key = key.trim();
    let value = value.trim();

    if key.is_empty() {
        return Err("missing code point");
    }
    if value.is_empty() {
        return Err("missing name");
    }

    let prefix = value.strip_suffix('*');

    match key.split_once("..") {
        Some((start, end)) => {
            let prefix = prefix.ok_or("range without trailing '*'")?;
            let start = parse_hex(start.trim())?;
            let end = parse_hex(end.trim())?;
            if start > end {
                return Err("range start after range end");
            }
            Ok(SourceLine::Range { start, end, prefix })
        }
        None => {
            let code_point = parse_hex(key)?;
            Ok(match prefix {
                Some(prefix) => SourceLine::Wildcard { code_point, prefix },
                None => SourceLine::Single {
                    code_point,
                    name: value,
                },
            })
        }
    }
}

fn parse_hex(digits: &str) -> Result<CodePoint, &'static str> {
    if digits.len() < 4 || digits.len() > 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err("code point is not 4 to 6 hex digits");
    }
    u32::from_str_radix(digits, 16)
        .ok()
        .and_then(CodePoint::new)
        .ok_or("code point beyond 10FFFF")
}

/// `PREFIX` followed by the padded hex of `cp`.
pub fn expand_name(prefix: &str, cp: CodePoint) -> String {
    format!("{prefix}{cp}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cp(value: u32) -> CodePoint {
        CodePoint::new(value).unwrap()
    }

    #[test]
    fn skips_blank_and_comment_lines() {
        assert!(is_skippable(""));
        assert!(is_skippable("   "));
        assert!(is_skippable("# DerivedName-16.0.0.txt"));
        assert!(!is_skippable("0041 ; LATIN CAPITAL LETTER A"));
    }

    #[test]
    fn parses_single_entry_with_padding() {
        assert_eq!(
            parse_line("00C9          ; LATIN CAPITAL LETTER E WITH ACUTE"),
            Ok(SourceLine::Single {
                code_point: cp(0xC9),
                name: "LATIN CAPITAL LETTER E WITH ACUTE",
            })
        );
    }

    #[test]
    fn parses_range_and_strips_wildcard() {
        assert_eq!(
            parse_line("3400..4DBF    ; CJK UNIFIED IDEOGRAPH-*"),
            Ok(SourceLine::Range {
                start: cp(0x3400),
                end: cp(0x4DBF),
                prefix: "CJK UNIFIED IDEOGRAPH-",
            })
        );
    }

    #[test]
    fn parses_single_point_wildcard() {
        assert_eq!(
            parse_line("18CFF         ; KHITAN SMALL SCRIPT CHARACTER-*"),
            Ok(SourceLine::Wildcard {
                code_point: cp(0x18CFF),
                prefix: "KHITAN SMALL SCRIPT CHARACTER-",
            })
        );
    }

    #[test]
    fn rejects_malformed_lines() {
        assert_eq!(
            parse_line("0041 LATIN CAPITAL LETTER A"),
            Err("missing ';' separator")
        );
        assert_eq!(parse_line("; SPACE"), Err("missing code point"));
        assert_eq!(parse_line("0041 ;   "), Err("missing name"));
        assert_eq!(
            parse_line("3400..4DBF ; CJK UNIFIED IDEOGRAPH-"),
            Err("range without trailing '*'")
        );
        assert_eq!(
            parse_line("4DBF..3400 ; CJK UNIFIED IDEOGRAPH-*"),
            Err("range start after range end")
        );
        assert_eq!(
            parse_line("GGGG ; NOT HEX"),
            Err("code point is not 4 to 6 hex digits")
        );
        assert_eq!(
            parse_line("41 ; SHORT"),
            Err("code point is not 4 to 6 hex digits")
        );
        assert_eq!(
            parse_line("110000 ; TOO HIGH"),
            Err("code point beyond 10FFFF")
        );
    }

    #[test]
    fn expansion_grows_past_four_digits() {
        assert_eq!(
            expand_name("CJK UNIFIED IDEOGRAPH-", cp(0x3400)),
            "CJK UNIFIED IDEOGRAPH-3400"
        );
        assert_eq!(
            expand_name("TANGUT IDEOGRAPH-", cp(0x17000)),
            "TANGUT IDEOGRAPH-17000"
        );
        assert_eq!(expand_name("X-", cp(0x100000)), "X-100000");
    }
}
