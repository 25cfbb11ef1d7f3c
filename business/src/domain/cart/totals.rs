use super::model::LineItem;

/// Totals derived from a list of line items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CartTotals {
    pub total_count: u64,
    pub total_price: u64,
}

/// Sums counts and `price * count` over `items`.
///
/// Pure; an empty list yields zero for both totals. Sums saturate at
/// `u64::MAX` instead of wrapping.
pub fn calculate_total(items: &[LineItem]) -> CartTotals {
    items.iter().fold(CartTotals::default(), |acc, item| CartTotals {
        total_count: acc.total_count.saturating_add(u64::from(item.count)),
        total_price: acc.total_price.saturating_add(item.subtotal()),
    })
}
