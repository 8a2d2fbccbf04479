use mediator::{Request, RequestHandler};
use stockroom::models::Product;

use crate::error::{parse_id, ProductError};
use crate::services::SharedProductStore;

pub struct GetProductRequest(pub String);

impl Request<Result<Product, ProductError>> for GetProductRequest {}

pub struct GetProductRequestHandler(pub SharedProductStore);

impl RequestHandler<GetProductRequest, Result<Product, ProductError>> for GetProductRequestHandler {
    fn handle(&mut self, req: GetProductRequest) -> Result<Product, ProductError> {
        let key = parse_id(&req.0)?;
        let record = self
            .0
            .lock()
            .expect("could not lock the product store")
            .get(&key)?
            .ok_or(ProductError::NotFound)?;

        Ok(record.into_product()?)
    }
}
