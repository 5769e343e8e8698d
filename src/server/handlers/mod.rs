pub mod businesses;
pub mod routes;
