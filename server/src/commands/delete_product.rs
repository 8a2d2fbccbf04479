use mediator::{DefaultMediator, Mediator, Request, RequestHandler};
use stockroom::models::Product;

use crate::error::{parse_id, ProductError};
use crate::events::ProductDeletedEvent;
use crate::services::SharedProductStore;

pub struct DeleteProductCommand(pub String);

impl Request<Result<Product, ProductError>> for DeleteProductCommand {}

pub struct DeleteProductRequestHandler(pub SharedProductStore, pub DefaultMediator);

impl RequestHandler<DeleteProductCommand, Result<Product, ProductError>>
    for DeleteProductRequestHandler
{
    fn handle(&mut self, request: DeleteProductCommand) -> Result<Product, ProductError> {
        let key = parse_id(&request.0)?;
        let removed = self
            .0
            .lock()
            .expect("could not lock the product store")
            .delete(&key)?
            .ok_or(ProductError::NotFound)?;

        let product = removed.into_product()?;
        self.1
            .publish(ProductDeletedEvent(product.clone()))
            .expect("could not publish the event");

        Ok(product)
    }
}
