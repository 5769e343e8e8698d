pub mod api;
pub mod config;
pub mod db;
pub mod engine;
pub mod entities;
pub mod error;
pub mod external;
pub mod navigation;
pub mod server;

#[doc(hidden)]
pub mod test_support;
