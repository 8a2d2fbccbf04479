use actix_web::http::StatusCode;
use stockroom::models::RecordError;
use thiserror::Error;
use uuid::Uuid;

/// Everything a products request can fail with. `Display` is the
/// client-facing message; store and record failures stay generic on the
/// wire and are logged in full server-side.
#[derive(Debug, Error)]
pub enum ProductError {
    #[error("name, code and count are required")]
    MissingFields,
    #[error("a product with code '{0}' already exists")]
    DuplicateCode(String),
    #[error("'{0}' is not a valid product id")]
    InvalidId(String),
    #[error("product not found")]
    NotFound,
    #[error("unexpected error")]
    Store(#[from] redis::RedisError),
    #[error("unexpected error")]
    Record(#[from] RecordError),
}

impl ProductError {
    pub fn status(&self) -> StatusCode {
        match self {
            ProductError::MissingFields
            | ProductError::DuplicateCode(_)
            | ProductError::InvalidId(_) => StatusCode::BAD_REQUEST,
            ProductError::NotFound => StatusCode::NOT_FOUND,
            ProductError::Store(_) | ProductError::Record(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

pub fn parse_id(id: &str) -> Result<Uuid, ProductError> {
    Uuid::parse_str(id).map_err(|_| ProductError::InvalidId(id.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_follow_the_taxonomy() {
        assert_eq!(ProductError::MissingFields.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ProductError::DuplicateCode("W-1".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ProductError::InvalidId("nope".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(ProductError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ProductError::Record(RecordError::MissingKey).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn store_failures_stay_generic_on_the_wire() {
        let err = ProductError::Record(RecordError::MissingKey);
        assert_eq!(err.to_string(), "unexpected error");
    }

    #[test]
    fn parse_id_rejects_malformed_identifiers() {
        assert!(matches!(parse_id("not-a-uuid"), Err(ProductError::InvalidId(_))));

        let uuid = Uuid::new_v4();
        assert_eq!(parse_id(&uuid.to_string()).unwrap(), uuid);
    }
}
