//! Value check: every returned value matches a fresh recomputation of
//! `cos(i · π / n)`.
//!
//! Numeric disagreement beyond [`TOLERANCE`] fails. Text that parses to a
//! matching number but differs from the generator's own rendering only warns.

use cos_table::cos_sample;
use cos_table_codegen::render_value;

use crate::parse::ParsedBlock;
use crate::report::{CheckResult, ConformanceReport};
use crate::validators::cap_details;

/// Absolute tolerance between a parsed value and its recomputation.
pub const TOLERANCE: f64 = 1e-15;

const CHECK: &str = "chain/values";
const TEXT_CHECK: &str = "chain/values-text";

/// Checks each block's value against `cos_sample(index, count)`.
pub fn validate(blocks: &[ParsedBlock], count: usize, report: &mut ConformanceReport) {
    let mut wrong = Vec::new();
    let mut restyled = Vec::new();

    for block in blocks {
        let expected = cos_sample(block.index, count);
        let diff = (block.value - expected).abs();
        if diff.is_nan() || diff > TOLERANCE {
            wrong.push(format!(
                "line {}: i == {} returns {}, expected {}",
                block.line + 1,
                block.index,
                block.text,
                render_value(expected)
            ));
        } else if block.text != render_value(block.value) {
            restyled.push(format!(
                "line {}: {} is written as {}",
                block.line + 1,
                block.text,
                render_value(block.value)
            ));
        }
    }

    if wrong.is_empty() {
        report.push(CheckResult::pass(
            CHECK,
            format!("{} values within {TOLERANCE:e} of cos(i*pi/{count})", blocks.len()),
        ));
    } else {
        report.push(
            CheckResult::fail(CHECK, format!("{} values disagree", wrong.len()))
                .with_details(cap_details(wrong)),
        );
    }

    if !restyled.is_empty() {
        report.push(
            CheckResult::warn(
                TEXT_CHECK,
                format!("{} values not in shortest form", restyled.len()),
            )
            .with_details(cap_details(restyled)),
        );
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn block(index: usize, value: f64) -> ParsedBlock {
        ParsedBlock {
            line: index * 2 + 1,
            index,
            value,
            text: render_value(value),
        }
    }

    #[test]
    fn nan_value_fails() {
        let blocks: Vec<ParsedBlock> = (0..8)
            .map(|i| block(i, if i == 2 { f64::NAN } else { cos_sample(i, 8) }))
            .collect();
        let mut report = ConformanceReport::new();
        validate(&blocks, 8, &mut report);
        let values = report.find(CHECK).unwrap();
        assert!(values.is_failure());
        assert_eq!(values.details.len(), 1);
        assert!(values.details[0].contains("i == 2"));
    }

    #[test]
    fn exact_values_pass() {
        let blocks: Vec<ParsedBlock> = (0..8).map(|i| block(i, cos_sample(i, 8))).collect();
        let mut report = ConformanceReport::new();
        validate(&blocks, 8, &mut report);
        assert!(report.all_passed());
        assert!(report.find(TEXT_CHECK).is_none());
    }
}
