//! Trumf Netthandel listing page scraper
//!
//! Shop names live in the `data-name` attribute of anchor elements.

use scraper::{Html, Selector};
use shopagg_common::{Source, SourceRecord};
use tracing::debug;

use crate::error::FetchError;

const SOURCE: Source = Source::TrumfNetthandel;
const SHOP_ANCHOR_SELECTOR: &str = "a[data-name]";

/// Fetch the listing page and extract one record per shop anchor
pub async fn fetch_trumf_shops(
    client: &reqwest::Client,
    url: &str,
) -> Result<Vec<SourceRecord>, FetchError> {
    debug!(url = %url, "Fetching Trumf listing page");

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| FetchError::Network(SOURCE, e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(SOURCE, status.as_u16()));
    }

    let html = response
        .text()
        .await
        .map_err(|e| FetchError::Network(SOURCE, e.to_string()))?;

    let names = extract_shop_names(&html)?;
    Ok(names.into_iter().map(SourceRecord::trumf).collect())
}

/// Collect `data-name` values of all `<a>` elements in document order
///
/// Values are taken verbatim; empty and repeated names are kept.
pub fn extract_shop_names(html: &str) -> Result<Vec<String>, FetchError> {
    let selector = Selector::parse(SHOP_ANCHOR_SELECTOR)
        .map_err(|e| FetchError::Decode(SOURCE, format!("invalid selector: {:?}", e)))?;

    let document = Html::parse_document(html);
    let names = document
        .select(&selector)
        .filter_map(|anchor| anchor.value().attr("data-name"))
        .map(str::to_string)
        .collect();

    Ok(names)
}
