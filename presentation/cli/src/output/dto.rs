use serde::Serialize;

use business::domain::cart::model::LineItem;
use business::domain::cart::outcome::CartOutcome;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemView {
    pub id: String,
    pub title: String,
    pub price: u64,
    pub count: u32,
    pub subtotal: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl From<&LineItem> for CartItemView {
    fn from(item: &LineItem) -> Self {
        Self {
            id: item.id.as_str().to_string(),
            title: item.title.clone(),
            price: item.price,
            count: item.count,
            subtotal: item.subtotal(),
            description: item.description.clone(),
            category_id: item.category_id.clone(),
            image: item.image.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub total_count: u64,
    pub total_price: u64,
    /// Set when the cart changed in memory but could not be stored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl From<CartOutcome> for CartView {
    fn from(outcome: CartOutcome) -> Self {
        Self {
            items: outcome.state.items().iter().map(CartItemView::from).collect(),
            total_count: outcome.state.total_count(),
            total_price: outcome.state.total_price(),
            warning: outcome.warning.map(|w| w.to_string()),
        }
    }
}

impl CartView {
    pub fn render_text(&self) -> String {
        if self.items.is_empty() {
            return "Cart is empty".to_string();
        }

        let mut out = String::new();
        for item in &self.items {
            out.push_str(&format!(
                "{:<12} {:<30} {:>4} x {:>10} = {:>12}\n",
                item.id, item.title, item.count, item.price, item.subtotal
            ));
        }
        out.push_str(&format!(
            "Total: {} items, {}",
            self.total_count, self.total_price
        ));
        out
    }
}
