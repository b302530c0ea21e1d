//! Response assembly: wraps merged shops as `{"data": [...]}`

use shopagg_common::{MergedShop, ShopsResponse};

/// Serialize merged shops into the response body
pub fn assemble(shops: Vec<MergedShop>) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(&ShopsResponse { data: shops })
}
