mod business;
mod location;
mod plan;
mod route;

pub use business::Business;
pub use location::{Coordinates, GeoPoint};
pub use plan::RoutePlan;
pub use route::{FallbackReason, Route, Status as RouteStatus};
