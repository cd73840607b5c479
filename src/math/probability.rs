/// Running totals of `weights`, so entry `i` covers units
/// `totals[i - 1]..totals[i]`
///
/// Zero weights produce empty intervals and can never be located.
pub fn cumulative_weights(weights: impl IntoIterator<Item = u32>) -> Vec<usize> {
    weights
        .into_iter()
        .scan(0_usize, |total, weight| {
            *total = total.saturating_add(weight as usize);
            Some(*total)
        })
        .collect()
}

/// Index of the entry whose weight interval contains `unit`
///
/// Returns `None` when `unit` is at or past the total weight.
pub fn locate_weighted(cumulative: &[usize], unit: usize) -> Option<usize> {
    let index = cumulative.partition_point(|&total| total <= unit);
    (index < cumulative.len()).then_some(index)
}

/// Weight of entry `index` recovered from a cumulative table
pub fn weight_at(cumulative: &[usize], index: usize) -> usize {
    let upper = cumulative.get(index).copied().unwrap_or(0);
    let lower = index
        .checked_sub(1)
        .and_then(|previous| cumulative.get(previous))
        .copied()
        .unwrap_or(0);
    upper.saturating_sub(lower)
}
