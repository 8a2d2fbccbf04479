use crate::models::ProductInput;

/// The messages the session coordinator consumes. All mutation of the
/// in-memory collection travels through one of these; presentation code
/// emits them and never touches the collection directly.
#[derive(Debug, Clone)]
pub enum SessionCommand {
    /// Replace the collection with a fresh load from the remote resource.
    Reload,
    /// The creation form was submitted.
    AddRequested(ProductInput),
    /// A full-row or inline count edit was committed.
    EditConfirmed { id: String, input: ProductInput },
    /// The confirmation gate accepted a delete.
    DeleteConfirmed { id: String },
    /// The user dismissed the error banner.
    DismissError,
}
