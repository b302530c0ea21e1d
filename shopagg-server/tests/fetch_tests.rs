//! Fetcher tests against a mocked upstream
//!
//! Verifies record normalization and the fetch error taxonomy
//! (network / status / decode) for both providers.

use shopagg_common::model::SourceAttributes;
use shopagg_common::Source;
use shopagg_server::fetch::{fetch_sas_shops, fetch_trumf_shops};
use shopagg_server::FetchError;

#[tokio::test]
async fn test_sas_records_stamped_with_source() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/shops")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"data":[{"uuid":"u1","name":"Acme","slug":"acme","commission":"3%"}]}"#)
        .create_async()
        .await;

    let client = reqwest::Client::new();
    let records = fetch_sas_shops(&client, &format!("{}/shops", server.url()))
        .await
        .unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "Acme");
    assert_eq!(records[0].source, Source::SasOnlineShopping);
    assert_eq!(
        records[0].attributes,
        SourceAttributes::SasOnlineShopping {
            uuid: "u1".to_string(),
            slug: "acme".to_string(),
        }
    );
}

#[tokio::test]
async fn test_sas_null_fields_keep_listing() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/shops")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"data":[{"uuid":"u1","name":"Acme","slug":"acme"},{"uuid":"u2","name":"Bravo","slug":null}]}"#,
        )
        .create_async()
        .await;

    let client = reqwest::Client::new();
    let records = fetch_sas_shops(&client, &format!("{}/shops", server.url()))
        .await
        .unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[1].name, "Bravo");
    assert_eq!(
        records[1].attributes,
        SourceAttributes::SasOnlineShopping {
            uuid: "u2".to_string(),
            slug: String::new(),
        }
    );
}

#[tokio::test]
async fn test_sas_decode_failure() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/shops")
        .with_status(200)
        .with_body(r#"{"data": "not a list"}"#)
        .create_async()
        .await;

    let client = reqwest::Client::new();
    let result = fetch_sas_shops(&client, &format!("{}/shops", server.url())).await;

    assert!(matches!(
        result,
        Err(FetchError::Decode(Source::SasOnlineShopping, _))
    ));
}

#[tokio::test]
async fn test_sas_status_failure() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/shops")
        .with_status(503)
        .create_async()
        .await;

    let client = reqwest::Client::new();
    let result = fetch_sas_shops(&client, &format!("{}/shops", server.url())).await;

    assert!(matches!(
        result,
        Err(FetchError::Status(Source::SasOnlineShopping, 503))
    ));
}

#[tokio::test]
async fn test_trumf_records_in_document_order() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/all")
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body(
            r#"<ul>
                 <li><a data-name="Zalando">Zalando</a></li>
                 <li><a data-name="Apotek 1">Apotek 1</a></li>
               </ul>"#,
        )
        .create_async()
        .await;

    let client = reqwest::Client::new();
    let records = fetch_trumf_shops(&client, &format!("{}/all", server.url()))
        .await
        .unwrap();

    let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Zalando", "Apotek 1"]);
    assert!(records
        .iter()
        .all(|r| r.source == Source::TrumfNetthandel
            && r.attributes == SourceAttributes::TrumfNetthandel));
}

#[tokio::test]
async fn test_trumf_network_failure() {
    let client = reqwest::Client::new();
    let result = fetch_trumf_shops(&client, "http://127.0.0.1:1/all").await;

    assert!(matches!(
        result,
        Err(FetchError::Network(Source::TrumfNetthandel, _))
    ));
}
