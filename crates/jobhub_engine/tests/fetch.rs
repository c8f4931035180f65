use std::time::Duration;

use jobhub_engine::{FailureKind, FetchSettings, ListingFetcher, ReqwestFetcher};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings_for(server: &MockServer, route: &str) -> FetchSettings {
    FetchSettings {
        endpoint: format!("{}{}", server.uri(), route),
        ..FetchSettings::default()
    }
}

#[tokio::test]
async fn fetcher_returns_raw_records_in_order() {
    jobhub_logging::initialize_for_tests();
    let server = MockServer::start().await;
    let body = json!([
        {"id": 2, "date_posted": "Feb 1", "title": "Data Engineer", "company": "Acme",
         "location": "ON", "job_url": "https://x/2"},
        {"id": 1, "date_posted": "Jan 5", "title": "Engineer", "company": "Initech",
         "location": "BC", "job_url": "https://x/1"}
    ]);
    Mock::given(method("GET"))
        .and(path("/prod/jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(settings_for(&server, "/prod/jobs"));
    let output = fetcher.fetch().await.expect("fetch ok");

    assert_eq!(output.records, body.as_array().cloned().unwrap());
    assert_eq!(output.metadata.status, 200);
    assert!(output
        .metadata
        .content_type
        .as_deref()
        .unwrap()
        .starts_with("application/json"));
}

#[tokio::test]
async fn request_carries_no_query_parameters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(settings_for(&server, "/jobs"));
    let output = fetcher.fetch().await.expect("fetch ok");
    assert!(output.records.is_empty());

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.query(), None);
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn fetcher_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jobs"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(settings_for(&server, "/jobs"));
    let err = fetcher.fetch().await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(503));
}

#[tokio::test]
async fn non_200_success_status_is_treated_as_no_data() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jobs"))
        .respond_with(ResponseTemplate::new(203).set_body_json(json!([{"id": 1}])))
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(settings_for(&server, "/jobs"));
    let err = fetcher.fetch().await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(203));
}

#[tokio::test]
async fn fetcher_rejects_body_that_is_not_a_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"statusCode": 200})))
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(settings_for(&server, "/jobs"));
    let err = fetcher.fetch().await.unwrap_err();
    assert_eq!(err.kind, FailureKind::NotAList);
}

#[tokio::test]
async fn fetcher_rejects_malformed_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[{\"id\": 1,"))
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(settings_for(&server, "/jobs"));
    let err = fetcher.fetch().await.unwrap_err();
    assert_eq!(err.kind, FailureKind::MalformedBody);
}

#[tokio::test]
async fn fetcher_times_out_on_slow_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!([])),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        request_timeout: Duration::from_millis(50),
        ..settings_for(&server, "/slow")
    };
    let fetcher = ReqwestFetcher::new(settings);
    let err = fetcher.fetch().await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn fetcher_rejects_too_large_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/large"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "application/json")
                .set_body_string("[1,2,3,4,5]"),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        max_bytes: 10,
        ..settings_for(&server, "/large")
    };
    let fetcher = ReqwestFetcher::new(settings);
    let err = fetcher.fetch().await.unwrap_err();
    assert_eq!(
        err.kind,
        FailureKind::TooLarge {
            max_bytes: 10,
            actual: Some(11)
        }
    );
}

#[tokio::test]
async fn invalid_endpoint_is_reported() {
    let settings = FetchSettings {
        endpoint: "not a url".to_string(),
        ..FetchSettings::default()
    };
    let err = ReqwestFetcher::new(settings).fetch().await.unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidUrl);
}

#[tokio::test]
async fn unreachable_host_is_a_network_failure() {
    let settings = FetchSettings {
        endpoint: "http://127.0.0.1:9/jobs".to_string(),
        connect_timeout: Duration::from_millis(500),
        ..FetchSettings::default()
    };
    let err = ReqwestFetcher::new(settings).fetch().await.unwrap_err();
    assert!(matches!(err.kind, FailureKind::Network | FailureKind::Timeout));
}
