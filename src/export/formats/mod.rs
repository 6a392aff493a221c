pub mod compact;
pub mod prism;

use bigdecimal::BigDecimal;

/// Re-express a stored fraction as the percentage the user typed in.
pub(crate) fn percent_cell(fraction: &BigDecimal) -> String {
    (fraction * BigDecimal::from(100)).to_string()
}

/// Ignored ancestor gates have no count and render as a blank cell.
pub(crate) fn count_cell(count: &Option<BigDecimal>) -> String {
    count.as_ref().map(BigDecimal::to_string).unwrap_or_default()
}
