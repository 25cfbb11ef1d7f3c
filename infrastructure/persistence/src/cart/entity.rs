use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use business::domain::cart::model::{CartItemPayload, LineItem};
use business::domain::cart::value_objects::ProductId;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;

/// Stored shape of one cart line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItemEntity {
    pub id: String,
    pub title: String,
    pub price: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub count: u32,
}

impl LineItemEntity {
    pub fn from_domain(item: &LineItem) -> Self {
        Self {
            id: item.id.as_str().to_string(),
            title: item.title.clone(),
            price: item.price,
            description: item.description.clone(),
            category_id: item.category_id.clone(),
            image: item.image.clone(),
            count: item.count,
        }
    }

    /// A stored line with a zero count can only come from tampered storage.
    pub fn into_domain(self) -> Result<LineItem, RepositoryError> {
        if self.count == 0 {
            return Err(RepositoryError::Corrupted);
        }

        Ok(LineItem::from_repository(
            CartItemPayload {
                id: ProductId::new(self.id),
                title: self.title,
                price: self.price,
                description: self.description,
                category_id: self.category_id,
                image: self.image,
            },
            self.count,
        ))
    }
}

/// Whole-cart record written under one user key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartRecord {
    pub user_id: String,
    pub items: Vec<LineItemEntity>,
    pub updated_at: DateTime<Utc>,
}

impl CartRecord {
    pub fn new(user_id: &UserId, items: &[LineItem]) -> Self {
        Self {
            user_id: user_id.as_str().to_string(),
            items: items.iter().map(LineItemEntity::from_domain).collect(),
            updated_at: Utc::now(),
        }
    }

    pub fn encode(&self) -> Result<String, RepositoryError> {
        serde_json::to_string(self).map_err(|e| {
            tracing::warn!("Failed to serialize cart of user {}: {e}", self.user_id);
            RepositoryError::Serialization
        })
    }

    pub fn decode(raw: &str) -> Result<Self, RepositoryError> {
        serde_json::from_str(raw).map_err(|e| {
            tracing::error!("Stored cart is not valid JSON: {e}");
            RepositoryError::Corrupted
        })
    }

    /// Converts the record into domain items, checking it belongs to `user_id`.
    pub fn into_items(self, user_id: &UserId) -> Result<Vec<LineItem>, RepositoryError> {
        if self.user_id != user_id.as_str() {
            tracing::error!(
                "Stored cart belongs to {}, expected {}",
                self.user_id,
                user_id
            );
            return Err(RepositoryError::Corrupted);
        }

        // Lines are unique by product id.
        let mut seen = HashSet::with_capacity(self.items.len());
        for entity in &self.items {
            if !seen.insert(entity.id.as_str()) {
                tracing::error!("Stored cart of {} lists {} twice", self.user_id, entity.id);
                return Err(RepositoryError::Corrupted);
            }
        }

        self.items
            .into_iter()
            .map(LineItemEntity::into_domain)
            .collect()
    }
}
