//! Reads an emitted if/return chain back into blocks.
//!
//! The accepted grammar is exactly what the generator writes: a 4-space
//! indented `if (i == N)` line followed by an 8-space indented `return V;`
//! line, repeated. Anything else is rejected with its 1-based line number.

use thiserror::Error;

const IF_PREFIX: &str = "    if (i == ";
const IF_SUFFIX: &str = ")";
const RETURN_PREFIX: &str = "        return ";
const RETURN_SUFFIX: &str = ";";

/// One block as it appeared in the file.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedBlock {
    /// Line number of the `if` line.
    pub line: usize,
    /// Index tested by the `if`.
    pub index: usize,
    /// Returned value.
    pub value: f64,
    /// The value exactly as written.
    pub text: String,
}

/// A line that does not fit the block grammar.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Expected `    if (i == N)`.
    #[error("line {line}: expected `if (i == N)`, found {found:?}")]
    MalformedIf {
        /// 1-based line number.
        line: usize,
        /// The offending line.
        found: String,
    },
    /// Expected `        return V;`.
    #[error("line {line}: expected `return V;`, found {found:?}")]
    MalformedReturn {
        /// 1-based line number.
        line: usize,
        /// The offending line.
        found: String,
    },
    /// The file ended after an `if` line.
    #[error("line {line}: `if` has no matching `return`")]
    MissingReturn {
        /// 1-based line number of the dangling `if`.
        line: usize,
    },
    /// An index or value did not parse as a number, or the value is not finite.
    #[error("line {line}: {text:?} is not a valid number")]
    BadNumber {
        /// 1-based line number.
        line: usize,
        /// The unparseable text.
        text: String,
    },
}

/// Parses every block in `input`.
///
/// # Errors
///
/// Returns the first [`ParseError`] encountered.
pub fn parse_chain(input: &str) -> Result<Vec<ParsedBlock>, ParseError> {
    let mut blocks = Vec::new();
    let mut lines = input.lines().enumerate().map(|(i, l)| (i + 1, l));

    while let Some((if_line, if_text)) = lines.next() {
        let index_text = if_text
            .strip_prefix(IF_PREFIX)
            .and_then(|rest| rest.strip_suffix(IF_SUFFIX))
            .ok_or_else(|| ParseError::MalformedIf {
                line: if_line,
                found: if_text.to_string(),
            })?;
        let index = index_text.parse().map_err(|_| ParseError::BadNumber {
            line: if_line,
            text: index_text.to_string(),
        })?;

        let (ret_line, ret_text) = lines
            .next()
            .ok_or(ParseError::MissingReturn { line: if_line })?;
        let value_text = ret_text
            .strip_prefix(RETURN_PREFIX)
            .and_then(|rest| rest.strip_suffix(RETURN_SUFFIX))
            .ok_or_else(|| ParseError::MalformedReturn {
                line: ret_line,
                found: ret_text.to_string(),
            })?;
        let value = value_text
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| ParseError::BadNumber {
                line: ret_line,
                text: value_text.to_string(),
            })?;

        blocks.push(ParsedBlock {
            line: if_line,
            index,
            value,
            text: value_text.to_string(),
        });
    }

    log::debug!("parsed {} blocks", blocks.len());
    Ok(blocks)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_blocks() {
        let input = "    if (i == 0)\n        return 1.0;\n    if (i == 1)\n        return 6.123233995736766e-17;\n";
        let blocks = parse_chain(input).unwrap();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].index, 0);
        assert_eq!(blocks[0].value, 1.0);
        assert_eq!(blocks[1].line, 3);
        assert_eq!(blocks[1].text, "6.123233995736766e-17");
    }

    #[test]
    fn empty_input_has_no_blocks() {
        assert!(parse_chain("").unwrap().is_empty());
    }

    #[test]
    fn wrong_indent_is_rejected() {
        let err = parse_chain("if (i == 0)\n        return 1.0;\n").unwrap_err();
        assert!(matches!(err, ParseError::MalformedIf { line: 1, .. }));
    }

    #[test]
    fn missing_semicolon_is_rejected() {
        let err = parse_chain("    if (i == 0)\n        return 1.0\n").unwrap_err();
        assert!(matches!(err, ParseError::MalformedReturn { line: 2, .. }));
    }

    #[test]
    fn dangling_if_is_rejected() {
        let err = parse_chain("    if (i == 0)\n").unwrap_err();
        assert_eq!(err, ParseError::MissingReturn { line: 1 });
    }

    #[test]
    fn bad_numbers_are_rejected() {
        let err = parse_chain("    if (i == x)\n        return 1.0;\n").unwrap_err();
        assert!(matches!(err, ParseError::BadNumber { line: 1, .. }));
        let err = parse_chain("    if (i == 0)\n        return one;\n").unwrap_err();
        assert!(matches!(err, ParseError::BadNumber { line: 2, .. }));
    }

    #[test]
    fn non_finite_values_are_rejected() {
        for text in ["NaN", "inf", "-inf"] {
            let input = format!("    if (i == 0)\n        return 1.0;\n    if (i == 1)\n        return {text};\n");
            let err = parse_chain(&input).unwrap_err();
            assert_eq!(
                err,
                ParseError::BadNumber {
                    line: 4,
                    text: text.to_string()
                }
            );
        }
    }
}
