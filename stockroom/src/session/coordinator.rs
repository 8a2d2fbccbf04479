use crate::api::ProductsApi;
use crate::models::{validate, Intent, Product, ProductInput};

use super::SessionCommand;

/// Everything the session knows: the authoritative in-memory collection,
/// the loading flag and the one dismissible error slot every failure
/// funnels into.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub products: Vec<Product>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Owns the collection for the current session and applies local mutations
/// after each successful remote call. Commands are consumed one at a time
/// through `dispatch`; a failure sets the error slot and leaves the
/// collection in its last-known-good state, never ending the session.
pub struct Session<A: ProductsApi> {
    api: A,
    state: SessionState,
}

impl<A: ProductsApi> Session<A> {
    pub fn new(api: A) -> Self {
        Session {
            api,
            state: SessionState::default(),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn products(&self) -> &[Product] {
        &self.state.products
    }

    pub async fn dispatch(&mut self, command: SessionCommand) {
        match command {
            SessionCommand::Reload => self.reload().await,
            SessionCommand::AddRequested(input) => self.add(input).await,
            SessionCommand::EditConfirmed { id, input } => self.apply_edit(&id, input).await,
            SessionCommand::DeleteConfirmed { id } => self.remove(&id).await,
            SessionCommand::DismissError => self.state.error = None,
        }
    }

    async fn reload(&mut self) {
        self.state.loading = true;

        match self.api.list().await {
            Ok(products) => {
                self.state.products = products;
                self.state.error = None;
            }
            Err(err) => self.fail(err),
        }

        self.state.loading = false;
    }

    async fn add(&mut self, input: ProductInput) {
        if let Err(err) = validate(&input, Intent::Create) {
            self.state.error = Some(err.to_string());
            return;
        }

        match self.api.create(&input).await {
            // newest first: the session's display convention, independent of
            // whatever order the store hands back
            Ok(product) => self.state.products.insert(0, product),
            Err(err) => self.fail(err),
        }
    }

    async fn apply_edit(&mut self, id: &str, input: ProductInput) {
        if let Err(err) = validate(&input, Intent::Edit) {
            self.state.error = Some(err.to_string());
            return;
        }

        match self.api.update(id, &input).await {
            Ok(product) => {
                if let Some(entry) = self.state.products.iter_mut().find(|p| p.id == id) {
                    *entry = product;
                }
            }
            Err(err) => self.fail(err),
        }
    }

    async fn remove(&mut self, id: &str) {
        match self.api.delete(id).await {
            Ok(()) => self.state.products.retain(|p| p.id != id),
            Err(err) => self.fail(err),
        }
    }

    fn fail(&mut self, err: anyhow::Error) {
        log::warn!("products request failed: {}", err);
        self.state.error = Some(err.to_string());
    }
}
