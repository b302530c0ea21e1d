//! Aggregated shop listing endpoint

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use tracing::info;

use crate::assemble::assemble;
use crate::error::ApiResult;
use crate::fetch::{fetch_sas_shops, fetch_trumf_shops};
use crate::merge::merge;
use crate::AppState;

/// GET /
///
/// Fetches both providers one after the other, merges by name and returns
/// `{"data": [...]}`. Any upstream failure answers 502.
pub async fn list_shops(State(state): State<AppState>) -> ApiResult<Response> {
    info!("Request received");

    info!("Fetching SAS shops");
    let sas_shops = fetch_sas_shops(&state.client, &state.upstream.sas_url).await?;
    info!("Found {} SAS shops", sas_shops.len());

    info!("Fetching Trumf shops");
    let trumf_shops = fetch_trumf_shops(&state.client, &state.upstream.trumf_url).await?;
    info!("Found {} Trumf shops", trumf_shops.len());

    info!("Combining data");
    let merged = merge(sas_shops, trumf_shops, &state.links);

    info!("Marshalling data");
    let body = assemble(merged)?;

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}
