//! Resolver instances: settle a request once its asset set arrives

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::catalog::{AssetSet, CatalogProvider};

use super::request::{IconRequest, Resolution};
use super::select::{select_with_kind, Selection};

/// Resolve a single request against a provider
///
/// Awaits the provider once and returns a settled resolution.
pub async fn resolve<P: CatalogProvider + ?Sized>(provider: &P, request: &IconRequest) -> Resolution {
    let assets = provider.fetch_assets(&request.name).await;
    settle(assets, request)
}

/// Run selection against a freshly arrived asset set
fn settle(assets: AssetSet, request: &IconRequest) -> Resolution {
    let selection = select_with_kind(&assets, request);
    let outcome = match selection {
        Selection::Exact(_) => "exact",
        Selection::Fallback(_) => "fallback",
        Selection::None => "unresolved",
    };
    let reference = selection.descriptor().map(|a| a.reference().to_string());

    tracing::trace!(
        name = %request.name,
        size = ?request.size,
        variant = ?request.variant,
        outcome,
        available = assets.len(),
        "selection finished"
    );

    Resolution::settled(reference, assets)
}

/// Mutable state of one resolver instance
#[derive(Default)]
struct State {
    /// Bumped on every new catalog query; older fetches are stale
    generation: u64,
    /// Most recent request
    request: Option<IconRequest>,
    /// Asset set of the current query, once it arrived
    snapshot: Option<AssetSet>,
    /// In-flight fetch
    task: Option<JoinHandle<()>>,
}

fn lock(state: &Mutex<State>) -> MutexGuard<'_, State> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// One icon resolution, kept current as its request changes
///
/// Each instance owns its asset snapshot and its resolution; instances never
/// share resolution state, even when they share a provider. Changing the
/// requested name cancels the in-flight fetch, and a result belonging to a
/// superseded query is never published.
///
/// ```no_run
/// # async fn demo(provider: icon_resolver::StaticProvider) {
/// use icon_resolver::{IconRequest, IconResolver};
///
/// let resolver = IconResolver::new(provider);
/// resolver.request(IconRequest::new("bat").with_size(16));
/// let resolution = resolver.settled().await;
/// println!("{:?}", resolution.reference());
/// # }
/// ```
pub struct IconResolver<P> {
    provider: Arc<P>,
    state: Arc<Mutex<State>>,
    tx: Arc<watch::Sender<Resolution>>,
}

impl<P: CatalogProvider + 'static> IconResolver<P> {
    /// Create a resolver owning its provider
    pub fn new(provider: P) -> Self {
        Self::shared(Arc::new(provider))
    }

    /// Create a resolver over a provider shared with other resolvers
    pub fn shared(provider: Arc<P>) -> Self {
        let (tx, _rx) = watch::channel(Resolution::unsettled());
        Self {
            provider,
            state: Arc::new(Mutex::new(State::default())),
            tx: Arc::new(tx),
        }
    }

    /// Issue or update the request
    ///
    /// A new name starts a fresh catalog query and publishes an unsettled
    /// resolution. With the same name, the held asset set is re-selected in
    /// place; if the query is still in flight, the latest request is the one
    /// applied when it lands. Must be called within a tokio runtime.
    pub fn request(&self, request: IconRequest) {
        let mut state = lock(&self.state);
        let same_query = state
            .request
            .as_ref()
            .is_some_and(|current| current.same_query(&request));
        state.request = Some(request.clone());

        if !same_query {
            self.start_fetch(&mut state, request.name);
            return;
        }

        if let Some(snapshot) = state.snapshot.clone() {
            self.tx.send_replace(settle(snapshot, &request));
        }
    }

    /// Query the provider again for the current name
    pub fn refresh(&self) {
        let mut state = lock(&self.state);
        if let Some(name) = state.request.as_ref().map(|r| r.name.clone()) {
            self.start_fetch(&mut state, name);
        }
    }

    fn start_fetch(&self, state: &mut State, name: String) {
        if let Some(task) = state.task.take() {
            task.abort();
            tracing::debug!(generation = state.generation, "superseded in-flight fetch");
        }

        state.generation += 1;
        state.snapshot = None;
        self.tx.send_replace(Resolution::unsettled());

        let generation = state.generation;
        let provider = Arc::clone(&self.provider);
        let shared = Arc::clone(&self.state);
        let tx = Arc::clone(&self.tx);

        tracing::debug!(%name, generation, "fetching assets");
        state.task = Some(tokio::spawn(async move {
            let assets = provider.fetch_assets(&name).await;

            let mut state = lock(&shared);
            if state.generation != generation {
                tracing::debug!(%name, generation, "discarding stale asset set");
                return;
            }
            let Some(request) = state.request.clone() else {
                return;
            };

            state.snapshot = Some(assets.clone());
            state.task = None;
            tx.send_replace(settle(assets, &request));
            tracing::debug!(%name, generation, "resolution settled");
        }));
    }

    /// Latest published resolution
    pub fn current(&self) -> Resolution {
        self.tx.borrow().clone()
    }

    /// Watch every published resolution
    pub fn subscribe(&self) -> watch::Receiver<Resolution> {
        self.tx.subscribe()
    }

    /// Wait until the current request has settled
    pub async fn settled(&self) -> Resolution {
        let mut rx = self.tx.subscribe();
        let settled = rx.wait_for(Resolution::is_settled).await.map(|r| r.clone());
        settled.unwrap_or_else(|_| self.current())
    }

    /// The request currently being resolved
    pub fn current_request(&self) -> Option<IconRequest> {
        lock(&self.state).request.clone()
    }
}

impl<P> Drop for IconResolver<P> {
    fn drop(&mut self) {
        if let Some(task) = lock(&self.state).task.take() {
            task.abort();
        }
    }
}
