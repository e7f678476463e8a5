//! Portfolio rebalancing against target allocations.

use std::collections::BTreeMap;

/// Per-asset adjustments that move a portfolio to its target weights.
///
/// The target for each asset is its percentage of the portfolio's total
/// current value; the adjustment is the signed amount to buy (positive)
/// or sell (negative). Assets present in the current allocation but
/// absent from the target mapping are skipped.
///
/// # Formula
///
/// ```text
/// total        = Σ current
/// target_value = total × target_pct / 100
/// adjustment   = target_value − current_value
/// ```
///
/// Over the assets whose targets are fully specified and sum to 100%,
/// the adjustments are zero-sum.
pub fn rebalance_adjustments(
    current: &BTreeMap<String, f64>,
    target_pct: &BTreeMap<String, f64>,
) -> BTreeMap<String, f64> {
    let total: f64 = current.values().sum();

    let mut adjustments = BTreeMap::new();
    for (asset, current_value) in current {
        let Some(pct) = target_pct.get(asset) else {
            continue;
        };
        let target_value = total * pct / 100.0;
        adjustments.insert(asset.clone(), target_value - current_value);
    }
    adjustments
}
