//! Merge engine: joins both providers' records on shop name
//!
//! **Algorithm:**
//! 1. Seed one entry per SAS record, `source = [sasonlineshopping]`,
//!    SAS extension attached
//! 2. For each Trumf record: extend the existing entry (origin appended once)
//!    or insert a new Trumf-only entry; Trumf extension attached
//! 3. Every entry without a Trumf origin gets an empty Trumf extension
//!
//! The SAS extension stays absent for Trumf-only shops; only the Trumf block
//! is back-filled. Output order is unspecified.

use shopagg_common::config::UpstreamConfig;
use shopagg_common::model::{SasOnlineShoppingExtra, SourceAttributes, TrumfNetthandelExtra};
use shopagg_common::{MergedShop, Source, SourceRecord};
use std::collections::HashMap;
use tracing::debug;

/// Public link bases used to derive extension URLs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopLinks {
    pub sas_store_base_url: String,
    pub trumf_base_url: String,
}

impl ShopLinks {
    pub fn from_upstream(upstream: &UpstreamConfig) -> Self {
        Self {
            sas_store_base_url: upstream.sas_store_base_url.clone(),
            trumf_base_url: upstream.trumf_base_url.clone(),
        }
    }

    /// `{base}/{slug}/{uuid}`
    pub fn sas_extra(&self, uuid: &str, slug: &str) -> SasOnlineShoppingExtra {
        SasOnlineShoppingExtra {
            uuid: uuid.to_string(),
            slug: slug.to_string(),
            url: format!("{}/{}/{}", self.sas_store_base_url, slug, uuid),
        }
    }

    /// `{base}/{name}`, name used as slug without escaping
    pub fn trumf_extra(&self, name: &str) -> TrumfNetthandelExtra {
        TrumfNetthandelExtra {
            slug: name.to_string(),
            url: format!("{}/{}", self.trumf_base_url, name),
        }
    }
}

impl Default for ShopLinks {
    fn default() -> Self {
        Self::from_upstream(&UpstreamConfig::default())
    }
}

/// Join SAS and Trumf records by exact name
pub fn merge(
    sas_records: Vec<SourceRecord>,
    trumf_records: Vec<SourceRecord>,
    links: &ShopLinks,
) -> Vec<MergedShop> {
    let mut shops: HashMap<String, MergedShop> =
        HashMap::with_capacity(sas_records.len() + trumf_records.len());

    // Later duplicates replace earlier entries wholesale
    for record in sas_records {
        let mut shop = MergedShop {
            name: record.name.clone(),
            source: vec![record.source],
            trumfnetthandel_extra: None,
            sasonlineshopping_extra: None,
        };
        attach_extension(&mut shop, &record, links);
        shops.insert(record.name, shop);
    }

    for record in trumf_records {
        let shop = shops
            .entry(record.name.clone())
            .or_insert_with(|| MergedShop {
                name: record.name.clone(),
                source: Vec::with_capacity(1),
                trumfnetthandel_extra: None,
                sasonlineshopping_extra: None,
            });

        if !shop.has_source(record.source) {
            shop.source.push(record.source);
        }
        attach_extension(shop, &record, links);
    }

    let merged: Vec<MergedShop> = shops
        .into_values()
        .map(|mut shop| {
            if !shop.has_source(Source::TrumfNetthandel) {
                shop.trumfnetthandel_extra = Some(TrumfNetthandelExtra::default());
            }
            shop
        })
        .collect();

    debug!(shops = merged.len(), "Merged shop listings");
    merged
}

fn attach_extension(shop: &mut MergedShop, record: &SourceRecord, links: &ShopLinks) {
    match &record.attributes {
        SourceAttributes::SasOnlineShopping { uuid, slug } => {
            shop.sasonlineshopping_extra = Some(links.sas_extra(uuid, slug));
        }
        SourceAttributes::TrumfNetthandel => {
            shop.trumfnetthandel_extra = Some(links.trumf_extra(&record.name));
        }
    }
}
