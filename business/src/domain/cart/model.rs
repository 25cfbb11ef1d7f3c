use super::totals::{CartTotals, calculate_total};
use super::value_objects::{ProductId, Quantity};

/// Product fields as supplied by the catalog when adding to a cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItemPayload {
    pub id: ProductId,
    pub title: String,
    /// Unit price in the smallest currency unit.
    pub price: u64,
    pub description: Option<String>,
    pub category_id: Option<String>,
    pub image: Option<String>,
}

/// One product entry in a cart with its requested quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    pub id: ProductId,
    pub title: String,
    pub price: u64,
    pub description: Option<String>,
    pub category_id: Option<String>,
    pub image: Option<String>,
    pub count: u32,
}

impl LineItem {
    pub fn new(payload: CartItemPayload, quantity: Quantity) -> Self {
        Self {
            id: payload.id,
            title: payload.title,
            price: payload.price,
            description: payload.description,
            category_id: payload.category_id,
            image: payload.image,
            count: quantity.get(),
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(payload: CartItemPayload, count: u32) -> Self {
        Self {
            id: payload.id,
            title: payload.title,
            price: payload.price,
            description: payload.description,
            category_id: payload.category_id,
            image: payload.image,
            count,
        }
    }

    pub fn subtotal(&self) -> u64 {
        self.price.saturating_mul(u64::from(self.count))
    }
}

/// A user's cart: the ordered line items plus totals derived from them.
///
/// Totals are only ever produced by [`calculate_total`], so they cannot drift
/// from `items`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartState {
    items: Vec<LineItem>,
    totals: CartTotals,
}

impl CartState {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<LineItem>) -> Self {
        let totals = calculate_total(&items);
        Self { items, totals }
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn into_items(self) -> Vec<LineItem> {
        self.items
    }

    pub fn total_count(&self) -> u64 {
        self.totals.total_count
    }

    pub fn total_price(&self) -> u64 {
        self.totals.total_price
    }

    pub fn totals(&self) -> CartTotals {
        self.totals
    }

    pub fn find(&self, id: &ProductId) -> Option<&LineItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(id: &str, price: u64) -> CartItemPayload {
        CartItemPayload {
            id: ProductId::new(id),
            title: format!("Product {id}"),
            price,
            description: None,
            category_id: None,
            image: None,
        }
    }

    #[test]
    fn should_build_line_item_with_quantity() {
        let item = LineItem::new(payload("p1", 1000), Quantity::new(2).unwrap());

        assert_eq!(item.id, ProductId::new("p1"));
        assert_eq!(item.count, 2);
        assert_eq!(item.subtotal(), 2000);
    }

    #[test]
    fn should_start_empty_with_zero_totals() {
        let state = CartState::empty();

        assert!(state.is_empty());
        assert_eq!(state.total_count(), 0);
        assert_eq!(state.total_price(), 0);
    }

    #[test]
    fn should_derive_totals_from_items() {
        let state = CartState::from_items(vec![
            LineItem::from_repository(payload("p1", 1000), 2),
            LineItem::from_repository(payload("p2", 250), 4),
        ]);

        assert_eq!(state.len(), 2);
        assert_eq!(state.total_count(), 6);
        assert_eq!(state.total_price(), 3000);
    }

    #[test]
    fn should_find_item_by_id() {
        let state = CartState::from_items(vec![LineItem::from_repository(payload("p1", 10), 1)]);

        assert!(state.find(&ProductId::new("p1")).is_some());
        assert!(state.find(&ProductId::new("missing")).is_none());
    }
}
