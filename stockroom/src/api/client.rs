use anyhow::Result;
use async_trait::async_trait;

use crate::models::{Product, ProductInput};

use super::Envelope;

/// The remote access client for the products resource. Each operation is a
/// single request/response round trip; failures are generic and carry the
/// server's message when the envelope reports one.
#[async_trait]
pub trait ProductsApi {
    async fn list(&self) -> Result<Vec<Product>>;
    async fn create(&self, input: &ProductInput) -> Result<Product>;
    async fn update(&self, id: &str, input: &ProductInput) -> Result<Product>;
    async fn delete(&self, id: &str) -> Result<()>;
}

/// HTTP implementation against `{base_url}/api/products`.
pub struct HttpProductsApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpProductsApi {
    pub fn new<S: Into<String>>(base_url: S) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();

        HttpProductsApi {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    fn url(&self, tail: &str) -> String {
        format!("{}/api/products{}", self.base_url, tail)
    }
}

#[async_trait]
impl ProductsApi for HttpProductsApi {
    async fn list(&self) -> Result<Vec<Product>> {
        let envelope: Envelope<Vec<Product>> =
            self.http.get(self.url("/")).send().await?.json().await?;

        envelope.into_result("could not load products")
    }

    async fn create(&self, input: &ProductInput) -> Result<Product> {
        let envelope: Envelope<Product> = self
            .http
            .post(self.url("/"))
            .json(input)
            .send()
            .await?
            .json()
            .await?;

        envelope.into_result("could not create the product")
    }

    async fn update(&self, id: &str, input: &ProductInput) -> Result<Product> {
        let envelope: Envelope<Product> = self
            .http
            .put(self.url(&format!("/{}", id)))
            .json(input)
            .send()
            .await?
            .json()
            .await?;

        envelope.into_result("could not update the product")
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let envelope: Envelope<()> = self
            .http
            .delete(self.url(&format!("/{}", id)))
            .send()
            .await?
            .json()
            .await?;

        envelope.into_ack("could not delete the product")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_loses_its_trailing_slash() {
        let api = HttpProductsApi::new("http://localhost:8080/");
        assert_eq!(api.url("/"), "http://localhost:8080/api/products/");
        assert_eq!(api.url("/abc"), "http://localhost:8080/api/products/abc");
    }
}
