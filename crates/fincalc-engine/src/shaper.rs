//! Result shaping: echoed inputs merged with rounded outputs.

use fincalc_core::rounding::{round_money, truncate_units};
use fincalc_core::{Report, Value};

use crate::evaluators::{Computed, Outputs};

/// Assembles the success record for one evaluation.
///
/// The echo record arrives with the caller's original values
/// (percentages un-divided, nothing rounded); computed outputs are
/// shaped by their tag: money to 2 decimal places, unit counts
/// truncated, breakdowns rounded entry by entry.
pub fn shape(echo: Report, outputs: Outputs) -> Report {
    let mut report = echo;
    for (name, computed) in outputs {
        let value = match computed {
            Computed::Money(x) => Value::Number(round_money(x)),
            Computed::Units(x) => Value::Integer(truncate_units(x)),
            Computed::Breakdown(entries) => Value::Map(
                entries
                    .into_iter()
                    .map(|(asset, amount)| (asset, round_money(amount)))
                    .collect(),
            ),
        };
        report.insert(name.to_string(), value);
    }
    report
}
