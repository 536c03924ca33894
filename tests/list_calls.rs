//! End-to-end tests for the list calls, against a mock Helix server.

use chrono::{TimeZone, Utc};
use twitch_helix::options::RequestOption;
use twitch_helix::{Client, Error};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Match, Mock, MockServer, Request, ResponseTemplate};

/// Matches when the named query parameter occurs with exactly these values,
/// in this order. `query_param` alone cannot pin repeated parameters.
struct RepeatedParam {
    name: &'static str,
    values: &'static [&'static str],
}

impl Match for RepeatedParam {
    fn matches(&self, request: &Request) -> bool {
        let got: Vec<String> = request
            .url
            .query_pairs()
            .filter(|(name, _)| name == self.name)
            .map(|(_, value)| value.into_owned())
            .collect();
        got == self.values
    }
}

async fn client_for(server: &MockServer) -> Client {
    Client::builder("test-client-id")
        .token("test-token")
        .base_url(server.uri())
        .build()
        .unwrap()
}

#[tokio::test]
async fn followed_list_decodes_records_and_cursor() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    let body = r#"{
        "data": [{
            "broadcaster_id": "55",
            "broadcaster_login": "foo",
            "broadcaster_name": "Foo",
            "followed_at": "2023-01-01T00:00:00Z"
        }],
        "pagination": {"cursor": "abc123"}
    }"#;

    Mock::given(method("GET"))
        .and(path("/channels/followed"))
        .and(query_param("user_id", "100"))
        .and(query_param("first", "50"))
        .and(header("Client-Id", "test-client-id"))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let response = client
        .channels()
        .followed()
        .list()
        .user_id("100")
        .first(50)
        .send()
        .await?;

    assert_eq!(response.data.len(), 1);
    assert_eq!(response.data[0].broadcaster_id(), "55");
    assert_eq!(response.data[0].broadcaster_login(), "foo");
    assert_eq!(
        response.data[0].followed_at(),
        Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap()
    );
    assert_eq!(response.cursor, "abc123");
    Ok(())
}

#[tokio::test]
async fn channels_list_repeats_broadcaster_id_in_order() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    let body = r#"{
        "data": [{
            "broadcaster_id": "1",
            "broadcaster_login": "one",
            "broadcaster_name": "One",
            "game_id": "509658",
            "game_name": "Just Chatting",
            "title": "hello",
            "delay": 0,
            "tags": ["English"],
            "content_classification_labels": [],
            "is_branded_content": false
        }]
    }"#;

    Mock::given(method("GET"))
        .and(path("/channels"))
        .and(RepeatedParam {
            name: "broadcaster_id",
            values: &["1", "2", "3"],
        })
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let response = client
        .channels()
        .list()
        .broadcaster_ids(["1", "2", "3"])
        .send()
        .await?;

    assert_eq!(response.data.len(), 1);
    assert_eq!(response.data[0].id(), "1");
    assert_eq!(response.data[0].game_name(), "Just Chatting");
    assert!(!response.data[0].is_branded_content());
    Ok(())
}

#[tokio::test]
async fn extra_set_option_overrides_stored_one() -> anyhow::Result<()> {
    let server = MockServer::start().await;

    // exactly one `first`, carrying the extra's value
    Mock::given(method("GET"))
        .and(path("/channels/followed"))
        .and(RepeatedParam {
            name: "first",
            values: &["50"],
        })
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(r#"{"data":[],"pagination":{}}"#, "application/json"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let response = client
        .channels()
        .followed()
        .list()
        .user_id("100")
        .first(20)
        .send_with([RequestOption::set_query("first", "50")])
        .await?;

    assert!(response.data.is_empty());
    assert_eq!(response.cursor, "");
    Ok(())
}

#[tokio::test]
async fn absent_pagination_yields_empty_cursor() -> anyhow::Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/channels/followers"))
        .and(query_param("broadcaster_id", "55"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(r#"{"data":[]}"#, "application/json"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let response = client
        .channels()
        .followers()
        .list()
        .broadcaster_id("55")
        .send()
        .await?;

    assert!(response.data.is_empty());
    assert_eq!(response.cursor, "");
    Ok(())
}

#[tokio::test]
async fn malformed_envelope_is_a_decode_error() {
    let server = MockServer::start().await;

    // a single request reaches the wire even though decoding fails
    Mock::given(method("GET"))
        .and(path("/channels/followed"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(r#"{"pagination":{"cursor":"abc"}}"#, "application/json"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client
        .channels()
        .followed()
        .list()
        .user_id("100")
        .send()
        .await
        .unwrap_err();

    assert!(err.is_decode());
    assert!(!err.is_transport());
}

#[tokio::test]
async fn non_success_status_is_a_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/channels/followed"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client
        .channels()
        .followed()
        .list()
        .user_id("100")
        .send()
        .await
        .unwrap_err();

    assert!(err.is_transport());
    match err {
        Error::Status { status, message } => {
            assert_eq!(status.as_u16(), 401);
            assert_eq!(message, "Unauthorized");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}
