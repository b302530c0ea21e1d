//! SAS OnlineShopping JSON API fetcher

use shopagg_common::model::SasShopsData;
use shopagg_common::{Source, SourceRecord};
use tracing::debug;

use crate::error::FetchError;

const SOURCE: Source = Source::SasOnlineShopping;

/// Fetch and decode the SAS shop listing
///
/// Expects `{"data": [{"uuid", "name", "slug"}, ...]}`.
pub async fn fetch_sas_shops(
    client: &reqwest::Client,
    url: &str,
) -> Result<Vec<SourceRecord>, FetchError> {
    debug!(url = %url, "Querying SAS shop API");

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| FetchError::Network(SOURCE, e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(SOURCE, status.as_u16()));
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| FetchError::Network(SOURCE, e.to_string()))?;

    let shops: SasShopsData =
        serde_json::from_slice(&body).map_err(|e| FetchError::Decode(SOURCE, e.to_string()))?;

    Ok(shops.data.into_iter().map(SourceRecord::sas).collect())
}
