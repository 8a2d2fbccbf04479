use serde::{Deserialize, Serialize};

/// The `{success, data | error | message}` wrapper carried by every response
/// of the products resource, shared by the server and the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: Deserialize<'de>"
))]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Envelope {
            success: true,
            data: Some(data),
            error: None,
            message: None,
        }
    }

    pub fn fail<S: Into<String>>(error: S) -> Self {
        Envelope {
            success: false,
            data: None,
            error: Some(error.into()),
            message: None,
        }
    }

    pub fn message<S: Into<String>>(message: S) -> Self {
        Envelope {
            success: true,
            data: None,
            error: None,
            message: Some(message.into()),
        }
    }

    /// Unwraps the envelope into its payload. A failed envelope yields the
    /// server-supplied error message, or `fallback` when none was sent; a
    /// successful envelope without a payload is treated the same way.
    pub fn into_result(self, fallback: &str) -> anyhow::Result<T> {
        if self.success {
            return self
                .data
                .ok_or_else(|| anyhow::anyhow!("{}", fallback));
        }

        match self.error {
            Some(error) => Err(anyhow::anyhow!(error)),
            None => Err(anyhow::anyhow!("{}", fallback)),
        }
    }

    /// Like [`Envelope::into_result`] but for responses that carry no
    /// payload, such as delete acknowledgements.
    pub fn into_ack(self, fallback: &str) -> anyhow::Result<()> {
        if self.success {
            return Ok(());
        }

        match self.error {
            Some(error) => Err(anyhow::anyhow!(error)),
            None => Err(anyhow::anyhow!("{}", fallback)),
        }
    }
}
