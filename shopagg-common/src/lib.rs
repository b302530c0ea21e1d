//! # Shop Aggregator Common Library
//!
//! Shared code for the shop aggregation service including:
//! - Source and merged record types
//! - Configuration loading (port, upstream endpoints)
//! - Outbound HTTP client construction
//! - Common error type

pub mod config;
pub mod error;
pub mod http_client;
pub mod model;

pub use error::{Error, Result};
pub use model::{MergedShop, ShopsResponse, Source, SourceRecord};
