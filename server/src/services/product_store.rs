use redis::{Client, Commands, RedisError};
use std::sync::{Arc, Mutex};
use stockroom::models::StoredProduct;
use uuid::Uuid;

pub type SharedProductStore = Arc<Mutex<ProductStore>>;

/// Thin data-access layer over the document store: one JSON document per
/// product under `{base_key}:{key}`. Uniqueness of `code` is checked here
/// with a scan; the check is a separate round trip from the insert.
#[derive(Debug, Clone)]
pub struct ProductStore {
    client: Client,
    base_key: String,
}

impl ProductStore {
    pub fn new<S: Into<String>>(client: Client, key: S) -> Self {
        let base_key = key.into();
        Self { client, base_key }
    }

    fn entry_key(&self, key: &Uuid) -> String {
        format!("{}:{}", self.base_key, key)
    }

    pub fn get(&mut self, key: &Uuid) -> Result<Option<StoredProduct>, RedisError> {
        let json: Option<String> = self.client.get(self.entry_key(key))?;

        match json {
            Some(json) => Ok(Some(decode(&json)?)),
            None => Ok(None),
        }
    }

    pub fn set(&mut self, key: &Uuid, record: &StoredProduct) -> Result<(), RedisError> {
        let json = encode(record)?;
        self.client.set(self.entry_key(key), json)
    }

    pub fn delete(&mut self, key: &Uuid) -> Result<Option<StoredProduct>, RedisError> {
        let entry_key = self.entry_key(key);
        let json: Option<String> = self.client.get(entry_key.clone())?;

        match json {
            Some(json) => {
                let record = decode(&json)?;
                let _: () = self.client.del(entry_key)?;
                Ok(Some(record))
            }
            None => Ok(None),
        }
    }

    pub fn all(&mut self) -> Result<Vec<StoredProduct>, RedisError> {
        let pattern = format!("{}:*", self.base_key);
        let iter: redis::Iter<String> = self.client.scan_match(pattern)?;
        let keys = iter.collect::<Vec<String>>();

        let mut records = Vec::new();
        for key in keys {
            let json: String = self.client.get(key)?;
            records.push(decode(&json)?);
        }

        Ok(records)
    }

    pub fn find_by_code(&mut self, code: &str) -> Result<Option<StoredProduct>, RedisError> {
        Ok(self.all()?.into_iter().find(|record| record.code == code))
    }
}

fn encode(record: &StoredProduct) -> Result<String, RedisError> {
    serde_json::to_string(record).map_err(|e| {
        RedisError::from((
            redis::ErrorKind::TypeError,
            "Failed to serialize record",
            e.to_string(),
        ))
    })
}

fn decode(json: &str) -> Result<StoredProduct, RedisError> {
    serde_json::from_str(json).map_err(|e| {
        RedisError::from((
            redis::ErrorKind::TypeError,
            "Failed to deserialize record",
            e.to_string(),
        ))
    })
}
