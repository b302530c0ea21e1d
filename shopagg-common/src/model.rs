//! Shop record types
//!
//! Two upstream providers feed the aggregator:
//! - SAS OnlineShopping: JSON API, records carry uuid + slug
//! - Trumf Netthandel: scraped HTML page, records carry only a name
//!
//! Upstream records are normalized into [`SourceRecord`] and joined by name
//! into [`MergedShop`].

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Upstream provider a record came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// JSON API (`"sasonlineshopping"`)
    SasOnlineShopping,
    /// Scraped HTML page (`"trumfnetthandel"`)
    TrumfNetthandel,
}

impl Source {
    /// Wire tag used in the `source` array
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::SasOnlineShopping => "sasonlineshopping",
            Source::TrumfNetthandel => "trumfnetthandel",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read `null` the same as a missing key: the type's zero value
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Shop as returned by the SAS listing API
///
/// Missing or `null` fields decode as empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SasShop {
    #[serde(default, deserialize_with = "null_as_default")]
    pub uuid: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub slug: String,
}

/// Envelope of the SAS listing API: `{"data": [...]}`
///
/// `"data": null` decodes as an empty listing.
#[derive(Debug, Clone, Deserialize)]
pub struct SasShopsData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<SasShop>,
}

/// Source-specific fields of a normalized record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceAttributes {
    SasOnlineShopping { uuid: String, slug: String },
    TrumfNetthandel,
}

/// A shop as seen by one provider, stamped with its origin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRecord {
    /// Join key (exact, case-sensitive)
    pub name: String,
    pub source: Source,
    pub attributes: SourceAttributes,
}

impl SourceRecord {
    pub fn sas(shop: SasShop) -> Self {
        Self {
            name: shop.name,
            source: Source::SasOnlineShopping,
            attributes: SourceAttributes::SasOnlineShopping {
                uuid: shop.uuid,
                slug: shop.slug,
            },
        }
    }

    pub fn trumf(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: Source::TrumfNetthandel,
            attributes: SourceAttributes::TrumfNetthandel,
        }
    }
}

/// SAS-specific block of a merged shop
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SasOnlineShoppingExtra {
    pub uuid: String,
    pub slug: String,
    pub url: String,
}

/// Trumf-specific block of a merged shop
///
/// The `Default` value (empty slug and url) is what shops without a Trumf
/// listing carry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrumfNetthandelExtra {
    pub slug: String,
    pub url: String,
}

/// One shop after joining both providers by name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergedShop {
    pub name: String,
    /// Contributing providers in discovery order, never empty, no repeats
    pub source: Vec<Source>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub trumfnetthandel_extra: Option<TrumfNetthandelExtra>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub sasonlineshopping_extra: Option<SasOnlineShoppingExtra>,
}

impl MergedShop {
    pub fn has_source(&self, source: Source) -> bool {
        self.source.contains(&source)
    }
}

/// Top-level response body of `GET /`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopsResponse {
    pub data: Vec<MergedShop>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_wire_tags() {
        let json = serde_json::to_string(&vec![Source::SasOnlineShopping, Source::TrumfNetthandel])
            .unwrap();
        assert_eq!(json, r#"["sasonlineshopping","trumfnetthandel"]"#);
        assert_eq!(Source::TrumfNetthandel.to_string(), "trumfnetthandel");
    }

    #[test]
    fn test_sas_payload_tolerates_missing_and_extra_fields() {
        let payload = r#"{"data":[{"uuid":"u1","name":"Acme","slug":"acme","logo":"x.png"},{"name":"NoIds"}],"meta":{}}"#;
        let parsed: SasShopsData = serde_json::from_str(payload).unwrap();

        assert_eq!(parsed.data.len(), 2);
        assert_eq!(parsed.data[0].slug, "acme");
        assert_eq!(parsed.data[1].uuid, "");
    }

    #[test]
    fn test_sas_payload_null_fields_decode_as_empty() {
        let payload = r#"{"data":[{"uuid":"u1","name":"Acme","slug":"acme"},{"uuid":"u2","name":"Bravo","slug":null},{"uuid":null,"name":null}]}"#;
        let parsed: SasShopsData = serde_json::from_str(payload).unwrap();

        assert_eq!(parsed.data.len(), 3);
        assert_eq!(parsed.data[1].name, "Bravo");
        assert_eq!(parsed.data[1].slug, "");
        assert_eq!(parsed.data[2].uuid, "");
        assert_eq!(parsed.data[2].name, "");
    }

    #[test]
    fn test_sas_payload_null_data_is_empty_listing() {
        let parsed: SasShopsData = serde_json::from_str(r#"{"data":null}"#).unwrap();
        assert!(parsed.data.is_empty());

        let parsed: SasShopsData = serde_json::from_str("{}").unwrap();
        assert!(parsed.data.is_empty());
    }

    #[test]
    fn test_absent_extension_is_omitted() {
        let shop = MergedShop {
            name: "Bravo".to_string(),
            source: vec![Source::TrumfNetthandel],
            trumfnetthandel_extra: Some(TrumfNetthandelExtra::default()),
            sasonlineshopping_extra: None,
        };

        let value = serde_json::to_value(&shop).unwrap();
        assert!(value.get("sasonlineshopping_extra").is_none());
        assert_eq!(value["trumfnetthandel_extra"]["slug"], "");
        assert_eq!(value["trumfnetthandel_extra"]["url"], "");
    }
}
