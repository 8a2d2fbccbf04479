use mediator::{DefaultMediator, Mediator, Request, RequestHandler};
use serde::{Deserialize, Serialize};
use stockroom::models::{Product, ProductInput, StoredProduct};
use uuid::Uuid;

use crate::error::ProductError;
use crate::events::ProductAddedEvent;
use crate::services::SharedProductStore;

/// Body of `POST /api/products`. Fields are optional at the wire level so
/// an incomplete submission gets an envelope error instead of a bare
/// deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddProductCommand {
    pub name: Option<String>,
    pub code: Option<String>,
    pub count: Option<u32>,
    pub description: Option<String>,
}

impl AddProductCommand {
    fn into_input(self) -> Result<ProductInput, ProductError> {
        let name = self.name.unwrap_or_default();
        let code = self.code.unwrap_or_default();
        let count = self.count.unwrap_or(0);

        // a zero count is as good as missing here: new products carry stock
        if name.trim().is_empty() || code.trim().is_empty() || count == 0 {
            return Err(ProductError::MissingFields);
        }

        Ok(ProductInput {
            name,
            code,
            count,
            description: self.description,
        })
    }
}

impl Request<Result<Product, ProductError>> for AddProductCommand {}

pub struct AddProductRequestHandler(pub SharedProductStore, pub DefaultMediator);

impl RequestHandler<AddProductCommand, Result<Product, ProductError>> for AddProductRequestHandler {
    fn handle(&mut self, command: AddProductCommand) -> Result<Product, ProductError> {
        let input = command.into_input()?;
        let mut store = self.0.lock().expect("could not lock the product store");

        // check-then-insert: two round trips, not atomic. Two concurrent
        // creations with the same code can both pass the check.
        if let Some(existing) = store.find_by_code(&input.code)? {
            return Err(ProductError::DuplicateCode(existing.code));
        }

        let mut record = StoredProduct::from_input(input, None);
        let key = Uuid::new_v4();
        record.key = Some(key);
        store.set(&key, &record)?;
        drop(store);

        let product = record.into_product()?;
        self.1
            .publish(ProductAddedEvent(product.clone()))
            .expect("could not publish the event");

        Ok(product)
    }
}
