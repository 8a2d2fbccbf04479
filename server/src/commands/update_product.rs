use mediator::{DefaultMediator, Mediator, Request, RequestHandler};
use serde::{Deserialize, Serialize};
use stockroom::models::{Product, ProductInput, StoredProduct};

use crate::error::{parse_id, ProductError};
use crate::events::ProductUpdatedEvent;
use crate::services::SharedProductStore;

/// Body of `PUT /api/products/{id}`. A field left out keeps its stored
/// value; a present field replaces it wholesale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProductBody {
    pub name: Option<String>,
    pub code: Option<String>,
    pub count: Option<u32>,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct UpdateProductCommand {
    pub id: String,
    pub body: UpdateProductBody,
}

impl Request<Result<Product, ProductError>> for UpdateProductCommand {}

pub struct UpdateProductRequestHandler(pub SharedProductStore, pub DefaultMediator);

impl RequestHandler<UpdateProductCommand, Result<Product, ProductError>>
    for UpdateProductRequestHandler
{
    fn handle(&mut self, command: UpdateProductCommand) -> Result<Product, ProductError> {
        let key = parse_id(&command.id)?;
        let mut store = self.0.lock().expect("could not lock the product store");
        let existing = store.get(&key)?.ok_or(ProductError::NotFound)?;

        let created_at = existing.created_at;
        let body = command.body;
        let input = ProductInput {
            name: body.name.unwrap_or(existing.name),
            code: body.code.unwrap_or(existing.code),
            // edits may deplete the count to zero; only creation insists on stock
            count: body.count.unwrap_or(existing.count),
            description: body.description.or(existing.description),
        };

        // rewrite through the storage conversion: created_at survives,
        // updated_at is refreshed on every write
        let mut record = StoredProduct::from_input(input, Some(created_at));
        record.key = Some(key);
        store.set(&key, &record)?;
        drop(store);

        let product = record.into_product()?;
        self.1
            .publish(ProductUpdatedEvent(product.clone()))
            .expect("could not publish the event");

        Ok(product)
    }
}
