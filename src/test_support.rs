//! Deterministic stand-ins for the external collaborators, so the engine
//! can be exercised without Postgres, Google Maps or a device.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    db::BusinessDirectory,
    engine::{Engine, RouteResolver},
    entities::{Business, Coordinates, GeoPoint},
    error::Error,
    external::{DirectionsRoute, OverviewPolyline, RoutingService, TravelMode},
    navigation::{AssumedSpeed, Permission, PositionProvider},
};

type Request = (GeoPoint, GeoPoint, TravelMode);

/// Directions service returning a canned answer.
#[derive(Debug)]
pub struct StubRoutingService {
    response: Result<Vec<String>, Error>,
    delay: Duration,
    requests: Mutex<Vec<Request>>,
}

impl StubRoutingService {
    /// Answers with one candidate per polyline. An empty list is returned as
    /// is, unlike the Google Maps client which reports it as no route.
    pub fn with_polylines(polylines: Vec<String>) -> Self {
        Self {
            response: Ok(polylines),
            delay: Duration::ZERO,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_error(error: Error) -> Self {
        Self {
            response: Err(error),
            delay: Duration::ZERO,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().map(|r| r.len()).unwrap_or_default()
    }

    pub fn last_request(&self) -> Option<Request> {
        self.requests.lock().ok()?.last().copied()
    }
}

#[async_trait]
impl RoutingService for StubRoutingService {
    async fn find_directions(
        &self,
        origin: GeoPoint,
        destination: GeoPoint,
        mode: TravelMode,
    ) -> Result<Vec<DirectionsRoute>, Error> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push((origin, destination, mode));
        }

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        match &self.response {
            Ok(polylines) => Ok(polylines
                .iter()
                .map(|points| DirectionsRoute {
                    overview_polyline: OverviewPolyline {
                        points: points.clone(),
                    },
                })
                .collect()),
            Err(err) => Err(err.clone()),
        }
    }
}

/// Business directory kept in memory.
#[derive(Debug, Default)]
pub struct MemoryDirectory {
    businesses: tokio::sync::Mutex<HashMap<Uuid, Business>>,
}

#[async_trait]
impl BusinessDirectory for MemoryDirectory {
    async fn insert_business(&self, business: &Business) -> Result<(), Error> {
        self.businesses
            .lock()
            .await
            .insert(business.id, business.clone());

        Ok(())
    }

    async fn fetch_business(&self, id: Uuid) -> Result<Option<Business>, Error> {
        Ok(self.businesses.lock().await.get(&id).cloned())
    }
}

/// Device that answers permission and fix requests from fixed values and
/// counts how often it was asked.
#[derive(Debug)]
pub struct StubPositionProvider {
    permission: Permission,
    fix: Option<Coordinates>,
    permission_requests: AtomicUsize,
    fix_requests: AtomicUsize,
}

impl StubPositionProvider {
    pub fn granted(latitude: f64, longitude: f64) -> Self {
        Self::new(
            Permission::Granted,
            Some(Coordinates {
                latitude,
                longitude,
            }),
        )
    }

    pub fn denied() -> Self {
        Self::new(Permission::Denied, None)
    }

    pub fn no_fix() -> Self {
        Self::new(Permission::Granted, None)
    }

    fn new(permission: Permission, fix: Option<Coordinates>) -> Self {
        Self {
            permission,
            fix,
            permission_requests: AtomicUsize::new(0),
            fix_requests: AtomicUsize::new(0),
        }
    }

    pub fn permission_requests(&self) -> usize {
        self.permission_requests.load(Ordering::SeqCst)
    }

    pub fn fix_requests(&self) -> usize {
        self.fix_requests.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PositionProvider for StubPositionProvider {
    async fn request_permission(&self) -> Permission {
        self.permission_requests.fetch_add(1, Ordering::SeqCst);
        self.permission
    }

    async fn current_position(&self) -> Option<Coordinates> {
        self.fix_requests.fetch_add(1, Ordering::SeqCst);
        self.fix
    }
}

/// Engine over an empty in-memory directory and a stub directions service
/// answering with `polylines`.
pub fn test_engine(polylines: Vec<String>) -> (Engine, Arc<StubRoutingService>) {
    let routing = Arc::new(StubRoutingService::with_polylines(polylines));
    let resolver = RouteResolver::new(routing.clone(), AssumedSpeed::default());

    (
        Engine::new(Arc::new(MemoryDirectory::default()), resolver),
        routing,
    )
}
