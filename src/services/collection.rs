use serde::de::DeserializeOwned;
use tracing::{error, info};

use super::endpoint::{codespace_name, collection_url, Collection};
use super::fetch::{ApiTransport, FetchError};
use super::normalize::{decode_records, normalize_records};

/// The three canonical states every collection view renders.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Error(String),
    Ready(Vec<T>),
}

/// Token tying an in-flight read to the activation that started it. A stale
/// token means the view was deactivated or reactivated while the read was
/// outstanding, and its result must be dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivationToken(u64);

/// Load-once-per-activation state machine, one instance per collection.
///
/// `activate` starts a new read cycle and hands back a token; the eventual
/// result is fed to `apply` with that token. At most one read is live per
/// activation, and only the transition carrying the current token is applied,
/// so completions racing a deactivated or superseded view are no-ops.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceController<T> {
    collection: Collection,
    state: FetchState<T>,
    generation: u64,
}

impl<T> ResourceController<T> {
    pub fn new(collection: Collection) -> Self {
        Self {
            collection,
            state: FetchState::Loading,
            generation: 0,
        }
    }

    pub fn collection(&self) -> Collection {
        self.collection
    }

    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    /// The loaded items, when ready. Used by the member editor to splice a
    /// confirmed update over the matching entry in place.
    pub fn items_mut(&mut self) -> Option<&mut Vec<T>> {
        match &mut self.state {
            FetchState::Ready(items) => Some(items),
            _ => None,
        }
    }

    /// Resolve this collection's endpoint from the current deployment
    /// context. Called once per activation, never cached.
    pub fn endpoint_url(&self) -> String {
        collection_url(codespace_name().as_deref(), self.collection)
    }

    /// Begin a read cycle: back to `Loading`, supersede any outstanding read.
    pub fn activate(&mut self) -> ActivationToken {
        self.generation += 1;
        self.state = FetchState::Loading;
        ActivationToken(self.generation)
    }

    /// The view went away. Any read still in flight will present a stale
    /// token and be ignored.
    pub fn deactivate(&mut self) {
        self.generation += 1;
    }

    /// Apply the outcome of the read started by `token`. Stale tokens are
    /// dropped silently.
    pub fn apply(&mut self, token: ActivationToken, result: Result<Vec<T>, FetchError>) {
        if token.0 != self.generation {
            info!(collection = %self.collection, "dropping stale fetch result");
            return;
        }
        match result {
            Ok(items) => {
                self.state = FetchState::Ready(items);
            }
            Err(err) => {
                error!(collection = %self.collection, error = %err, "fetch failed");
                self.state = FetchState::Error(err.to_string());
            }
        }
    }
}

/// One GET against a collection endpoint: fetch, normalize the envelope
/// shape away, decode into typed records in server order.
pub async fn load_collection<T: DeserializeOwned>(
    transport: &dyn ApiTransport,
    url: &str,
) -> Result<Vec<T>, FetchError> {
    info!(url, "fetching from REST API endpoint");
    let body = transport.get_json(url).await?;
    decode_records(normalize_records(body))
}
