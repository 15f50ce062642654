//! Ordering check: block `k` tests index `k`, so indices run 0..n with no gaps
//! or duplicates.

use crate::parse::ParsedBlock;
use crate::report::{CheckResult, ConformanceReport};
use crate::validators::cap_details;

const CHECK: &str = "chain/ordering";

/// Checks that indices are strictly ascending from zero in steps of one.
pub fn validate(blocks: &[ParsedBlock], report: &mut ConformanceReport) {
    let misplaced: Vec<String> = blocks
        .iter()
        .enumerate()
        .filter(|(pos, block)| block.index != *pos)
        .map(|(pos, block)| {
            format!(
                "line {}: block #{pos} tests i == {}",
                block.line, block.index
            )
        })
        .collect();

    if misplaced.is_empty() {
        report.push(CheckResult::pass(CHECK, "indices ascend from 0 without gaps"));
    } else {
        report.push(
            CheckResult::fail(
                CHECK,
                format!("{} blocks out of place", misplaced.len()),
            )
            .with_details(cap_details(misplaced)),
        );
    }
}
