//! Boundary check: `cos(0)` is exactly 1, and the last sample stops short of
//! `cos(π) = -1` because the interval is half-open.

use std::f64::consts::PI;

use crate::parse::ParsedBlock;
use crate::report::{CheckResult, ConformanceReport};

const CHECK: &str = "chain/boundaries";

/// Checks the first and last blocks.
pub fn validate(blocks: &[ParsedBlock], count: usize, report: &mut ConformanceReport) {
    let (Some(first), Some(last)) = (blocks.first(), blocks.last()) else {
        report.push(CheckResult::fail(CHECK, "no blocks"));
        return;
    };

    let mut problems = Vec::new();
    if first.value != 1.0 {
        problems.push(format!(
            "line {}: first value is {}, expected 1.0",
            first.line + 1,
            first.text
        ));
    }

    // 1 - cos(pi/n) <= (pi/n)^2 / 2
    let max_gap = (PI / count as f64).powi(2);
    if last.value.is_nan() || last.value <= -1.0 {
        problems.push(format!(
            "line {}: last value {} is not above -1; pi must be excluded",
            last.line + 1,
            last.text
        ));
    } else if last.value + 1.0 > max_gap {
        problems.push(format!(
            "line {}: last value {} is not within {max_gap:e} of -1",
            last.line + 1,
            last.text
        ));
    }

    if problems.is_empty() {
        report.push(CheckResult::pass(
            CHECK,
            format!("starts at 1.0, ends at {} > -1", last.text),
        ));
    } else {
        report.push(
            CheckResult::fail(CHECK, "boundary samples are wrong").with_details(problems),
        );
    }
}
