use mediator::{Request, RequestHandler};
use stockroom::models::{Product, StoredProduct};

use crate::error::ProductError;
use crate::services::SharedProductStore;

pub struct GetAllProductsRequest;

impl Request<Result<Vec<Product>, ProductError>> for GetAllProductsRequest {}

pub struct GetAllProductsRequestHandler(pub SharedProductStore);

impl RequestHandler<GetAllProductsRequest, Result<Vec<Product>, ProductError>>
    for GetAllProductsRequestHandler
{
    fn handle(&mut self, _: GetAllProductsRequest) -> Result<Vec<Product>, ProductError> {
        let records = self
            .0
            .lock()
            .expect("could not lock the product store")
            .all()?;

        let mut products = records
            .into_iter()
            .map(StoredProduct::into_product)
            .collect::<Result<Vec<_>, _>>()?;

        // the resource lists newest-created first
        products.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(products)
    }
}
