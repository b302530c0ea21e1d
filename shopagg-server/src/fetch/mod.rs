//! Upstream shop listing fetchers
//!
//! One function per provider. Each performs a single outbound GET and returns
//! records stamped with their origin; any failure aborts the whole request.

pub mod sas;
pub mod trumf;

pub use sas::fetch_sas_shops;
pub use trumf::{extract_shop_names, fetch_trumf_shops};
