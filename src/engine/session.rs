use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::RouteResolver;
use crate::entities::{GeoPoint, Route};

/// What a route screen currently shows.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionRoute {
    /// Bumped each time the endpoints change.
    pub generation: u64,
    pub endpoints: Option<(GeoPoint, GeoPoint)>,
    /// Pending while the route for the current endpoints is being resolved.
    pub route: Route,
}

/// Owns the route for a single visit of the route screen.
///
/// Every endpoint change starts a new resolution and abandons the previous
/// one. Results are only published for the latest endpoints, and nothing is
/// published once the session is dropped. Must be used from within a Tokio
/// runtime.
pub struct RouteSession {
    resolver: RouteResolver,
    state: Arc<watch::Sender<SessionRoute>>,
    task: Option<JoinHandle<()>>,
}

impl RouteSession {
    pub fn new(resolver: RouteResolver) -> Self {
        let (tx, _) = watch::channel(SessionRoute::default());

        Self {
            resolver,
            state: Arc::new(tx),
            task: None,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionRoute> {
        self.state.subscribe()
    }

    pub fn current(&self) -> SessionRoute {
        self.state.borrow().clone()
    }

    #[tracing::instrument(skip(self))]
    pub fn update_endpoints(&mut self, origin: GeoPoint, destination: GeoPoint) {
        if let Some(task) = self.task.take() {
            task.abort();
        }

        let mut generation = 0;
        self.state.send_modify(|state| {
            state.generation += 1;
            state.endpoints = Some((origin, destination));
            state.route = Route::new();
            generation = state.generation;
        });

        let resolver = self.resolver.clone();
        let state = self.state.clone();

        self.task = Some(tokio::spawn(async move {
            let route = resolver.resolve(origin, destination).await;
            let status = route.status.name();

            // the check runs under the channel lock, so a newer update or a
            // teardown always wins
            let published = state.send_if_modified(|current| {
                if current.generation != generation {
                    return false;
                }

                current.route = route;
                true
            });

            if published {
                tracing::debug!(generation, %status, "route published");
            } else {
                tracing::debug!(generation, "discarding stale route");
            }
        }));
    }
}

impl Drop for RouteSession {
    fn drop(&mut self) {
        // invalidate whatever is in flight before aborting it
        self.state.send_if_modified(|state| {
            state.generation += 1;
            false
        });

        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
