//! Block count check: the chain holds exactly `n` blocks.

use crate::parse::ParsedBlock;
use crate::report::{CheckResult, ConformanceReport};

const CHECK: &str = "chain/count";

/// Checks that there is one block per sample.
pub fn validate(blocks: &[ParsedBlock], count: usize, report: &mut ConformanceReport) {
    let found = blocks.len();
    if found == count {
        report.push(CheckResult::pass(CHECK, format!("{found} blocks")));
    } else {
        report.push(CheckResult::fail(
            CHECK,
            format!("expected {count} blocks, found {found}"),
        ));
    }
}
