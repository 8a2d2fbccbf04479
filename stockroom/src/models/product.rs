use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// The product record as exchanged with callers: the transfer shape,
/// addressed by an opaque string `id` assigned by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub code: String,
    pub count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PartialEq<Self> for Product {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Product {}

/// The mutable fields of a product, as submitted on create and update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductInput {
    pub name: String,
    pub code: String,
    pub count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// The product record as persisted: the storage shape, keyed by a
/// store-generated primary key distinct from the transfer `id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredProduct {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<Uuid>,
    pub name: String,
    pub code: String,
    pub count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("storage record has no primary key")]
    MissingKey,
}

impl StoredProduct {
    /// Builds the storage shape from a transfer patch. `created_at` keeps the
    /// given value or defaults to now; `updated_at` is refreshed on every
    /// write. The key is left unset. No validation happens here.
    pub fn from_input(input: ProductInput, created_at: Option<DateTime<Utc>>) -> Self {
        let now = Utc::now();

        StoredProduct {
            key: None,
            name: input.name,
            code: input.code,
            count: input.count,
            description: input.description,
            created_at: created_at.unwrap_or(now),
            updated_at: now,
        }
    }

    /// Converts to the transfer shape, mapping the primary key to the string
    /// `id`. A record without a key has never been persisted; converting one
    /// is a programming error, not a user-facing condition.
    pub fn into_product(self) -> Result<Product, RecordError> {
        let key = self.key.ok_or(RecordError::MissingKey)?;

        Ok(Product {
            id: key.to_string(),
            name: self.name,
            code: self.code,
            count: self.count,
            description: self.description,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample_input;

    #[test]
    fn from_input_keeps_given_created_at() {
        let created = Utc::now() - chrono::Duration::days(3);
        let record = StoredProduct::from_input(sample_input("Widget", "W-1", 10), Some(created));

        assert_eq!(record.created_at, created);
        assert!(record.updated_at > created);
        assert!(record.key.is_none());
    }

    #[test]
    fn from_input_defaults_created_at_to_now() {
        let before = Utc::now();
        let record = StoredProduct::from_input(sample_input("Widget", "W-1", 10), None);

        assert!(record.created_at >= before);
        assert_eq!(record.created_at, record.updated_at);
    }

    #[test]
    fn into_product_maps_key_to_string_id() {
        let mut record = StoredProduct::from_input(sample_input("Widget", "W-1", 10), None);
        let key = Uuid::new_v4();
        record.key = Some(key);

        let product = record.into_product().unwrap();
        assert_eq!(product.id, key.to_string());
        assert_eq!(product.name, "Widget");
        assert_eq!(product.count, 10);
    }

    #[test]
    fn into_product_rejects_record_without_key() {
        let record = StoredProduct::from_input(sample_input("Widget", "W-1", 10), None);
        assert_eq!(record.into_product(), Err(RecordError::MissingKey));
    }

    #[test]
    fn timestamps_use_camel_case_on_the_wire() {
        let mut record = StoredProduct::from_input(sample_input("Widget", "W-1", 10), None);
        record.key = Some(Uuid::new_v4());

        let json = serde_json::to_value(record.into_product().unwrap()).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert!(json.get("created_at").is_none());
    }
}
