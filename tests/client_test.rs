//! End-to-end feed pipeline tests against a mock HTTP server.

use std::path::Path;

use mysportsfeeds::{Client, Error, FeedData, FeedRequest, Format};
use wiremock::matchers::{any, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GAMELOG_BODY: &str = r#"{"playergamelogs":{"gamelogs":[{"game":{"id":"31151"}}]}}"#;

fn gamelog_request() -> FeedRequest {
    FeedRequest::new("nba", "player_gamelogs", Format::Json)
        .season("2016-2017-regular")
        .param("player", "stephen-curry")
        .param("playerstats", "FGA,FGM")
}

fn authed_client(server: &MockServer, store: Option<&Path>) -> Client {
    let mut builder = Client::builder("1.2").base_url(server.uri());
    if let Some(location) = store {
        builder = builder.store_location(location);
    }
    let mut client = builder.build().unwrap();
    client.authenticate("user", "pass").unwrap();
    client
}

#[tokio::test]
async fn fresh_response_is_decoded_and_stored() {
    let server = MockServer::start().await;
    let store = tempfile::tempdir().unwrap();

    Mock::given(method("GET"))
        .and(path("/nba/2016-2017-regular/player_gamelogs.json"))
        .and(query_param("player", "stephen-curry"))
        .and(query_param("playerstats", "FGA,FGM"))
        .and(query_param("force", "false"))
        .and(header("authorization", "Basic dXNlcjpwYXNz"))
        .respond_with(ResponseTemplate::new(200).set_body_string(GAMELOG_BODY))
        .expect(1)
        .mount(&server)
        .await;

    let client = authed_client(&server, Some(store.path()));
    let data = client.get_data(gamelog_request()).await.unwrap();

    let expected: serde_json::Value = serde_json::from_str(GAMELOG_BODY).unwrap();
    assert_eq!(data.as_json(), Some(&expected));

    // The raw body is written verbatim under the derived filename.
    let stored = std::fs::read_to_string(
        store
            .path()
            .join("player_gamelogs-nba-2016-2017-regular.json"),
    )
    .unwrap();
    assert_eq!(stored, GAMELOG_BODY);
}

#[tokio::test]
async fn not_modified_is_served_from_the_store() {
    let server = MockServer::start().await;
    let store = tempfile::tempdir().unwrap();

    Mock::given(method("GET"))
        .and(path("/nba/2016-2017-regular/player_gamelogs.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(GAMELOG_BODY))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/nba/2016-2017-regular/player_gamelogs.json"))
        .respond_with(ResponseTemplate::new(304))
        .mount(&server)
        .await;

    let client = authed_client(&server, Some(store.path()));

    let fresh = client.get_data(gamelog_request()).await.unwrap();
    let cached = client.get_data(gamelog_request()).await.unwrap();
    assert_eq!(fresh, cached);
}

#[tokio::test]
async fn not_modified_without_store_is_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(304))
        .mount(&server)
        .await;

    let client = authed_client(&server, None);
    let err = client.get_data(gamelog_request()).await.unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }));
}

#[tokio::test]
async fn not_modified_with_empty_store_is_not_found() {
    let server = MockServer::start().await;
    let store = tempfile::tempdir().unwrap();

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(304))
        .mount(&server)
        .await;

    let client = authed_client(&server, Some(store.path()));
    let err = client.get_data(gamelog_request()).await.unwrap_err();
    assert!(matches!(
        err,
        Error::NotFound { filename } if filename == "player_gamelogs-nba-2016-2017-regular.json"
    ));
}

#[tokio::test]
async fn unexpected_status_is_a_typed_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = authed_client(&server, None);
    let err = client.get_data(gamelog_request()).await.unwrap_err();
    assert!(matches!(err, Error::Http { status: 500, .. }));
}

#[tokio::test]
async fn get_data_before_authenticate_is_rejected() {
    for version in ["1.0", "1.1", "1.2"] {
        let client = Client::builder(version).build().unwrap();
        let err = client.get_data(gamelog_request()).await.unwrap_err();
        assert!(matches!(err, Error::AuthRequired), "version {version}");
    }
}

#[tokio::test]
async fn invalid_feed_fails_before_any_request_or_store_write() {
    let server = MockServer::start().await;
    let store = tempfile::tempdir().unwrap();

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = authed_client(&server, Some(store.path()));
    let request = FeedRequest::new("nba", "no_such_feed", Format::Json).season("2017");
    let err = client.get_data(request).await.unwrap_err();

    assert!(matches!(err, Error::InvalidFeed { feed } if feed == "no_such_feed"));
    assert_eq!(std::fs::read_dir(store.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn v1_0_rejects_feeds_from_the_later_catalog() {
    let server = MockServer::start().await;
    let mut client = Client::builder("1.0").base_url(server.uri()).build().unwrap();
    client.authenticate("user", "pass").unwrap();

    let request = FeedRequest::new("nba", "daily_dfs", Format::Json).season("2017");
    let err = client.get_data(request).await.unwrap_err();
    assert!(matches!(err, Error::InvalidFeed { .. }));
}

#[tokio::test]
async fn season_scoped_feed_without_season_is_rejected() {
    let server = MockServer::start().await;
    let client = authed_client(&server, None);

    let request = FeedRequest::new("nba", "scoreboard", Format::Json);
    let err = client.get_data(request).await.unwrap_err();
    assert!(matches!(err, Error::MissingSeason { feed } if feed == "scoreboard"));
}

#[tokio::test]
async fn league_only_feed_omits_the_season_segment() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/nhl/current_season.json"))
        .and(query_param("force", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"season":"2016-2017"}"#))
        .expect(1)
        .mount(&server)
        .await;

    let client = authed_client(&server, None);
    let data = client
        .get_data(FeedRequest::new("nhl", "current_season", Format::Json))
        .await
        .unwrap();
    assert_eq!(data.as_json().unwrap()["season"], "2016-2017");
}

#[tokio::test]
async fn explicit_force_param_wins_over_the_default() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/nba/2017/scoreboard.json"))
        .and(query_param("force", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&server)
        .await;

    let client = authed_client(&server, None);
    let request = FeedRequest::new("nba", "scoreboard", Format::Json)
        .season("2017")
        .param("force", "true");
    client.get_data(request).await.unwrap();
}

#[tokio::test]
async fn xml_and_csv_bodies_pass_through_as_text() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/nba/2017/scoreboard.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<scoreboard/>"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/nba/2017/scoreboard.csv"))
        .respond_with(ResponseTemplate::new(200).set_body_string("game,score\n1,99"))
        .mount(&server)
        .await;

    let client = authed_client(&server, None);

    let xml = client
        .get_data(FeedRequest::new("nba", "scoreboard", Format::Xml).season("2017"))
        .await
        .unwrap();
    assert_eq!(xml, FeedData::Xml("<scoreboard/>".into()));

    let csv = client
        .get_data(FeedRequest::new("nba", "scoreboard", Format::Csv).season("2017"))
        .await
        .unwrap();
    assert_eq!(csv.as_text(), Some("game,score\n1,99"));
}

#[tokio::test]
async fn malformed_json_body_is_a_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = authed_client(&server, None);
    let err = client
        .get_data(FeedRequest::new("nba", "scoreboard", Format::Json).season("2017"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
}

#[tokio::test]
async fn reserved_characters_in_query_values_are_encoded() {
    let server = MockServer::start().await;

    // wiremock decodes the query string, so a match here proves the value
    // survived encoding intact.
    Mock::given(method("GET"))
        .and(path("/nba/2017/scoreboard.json"))
        .and(query_param("team", "new york"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&server)
        .await;

    let client = authed_client(&server, None);
    let request = FeedRequest::new("nba", "scoreboard", Format::Json)
        .season("2017")
        .param("team", "new york");
    client.get_data(request).await.unwrap();
}

#[tokio::test]
async fn gameid_param_lands_in_the_stored_filename() {
    let server = MockServer::start().await;
    let store = tempfile::tempdir().unwrap();

    Mock::given(method("GET"))
        .and(path("/nba/2016-2017-regular/game_boxscore.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .mount(&server)
        .await;

    let client = authed_client(&server, Some(store.path()));
    let request = FeedRequest::new("nba", "game_boxscore", Format::Json)
        .season("2016-2017-regular")
        .param("gameid", "20170415-BOS-CHI");
    client.get_data(request).await.unwrap();

    assert!(store
        .path()
        .join("game_boxscore-nba-2016-2017-regular-20170415-BOS-CHI.json")
        .exists());
}
