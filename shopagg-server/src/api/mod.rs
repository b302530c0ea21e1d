//! HTTP API handlers for shopagg-server

pub mod health;
pub mod request_log;
pub mod shops;

pub use health::health_routes;
pub use request_log::log_requests;
pub use shops::list_shops;
