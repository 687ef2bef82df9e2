//! Unit tests for the Yahoo HTTP client

use super::*;
use crate::{cli::types::LeagueId, FflError};
use serde_json::json;
use wiremock::{
    matchers::{header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

fn league() -> LeagueKey {
    LeagueKey::new("nfl", LeagueId::new(387432))
}

#[tokio::test]
async fn test_league_teams_sends_bearer_and_format() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/league/nfl.l.387432/teams"))
        .and(query_param("format", "json"))
        .and(header("authorization", "Bearer tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "fantasy_content": {"league": [{"league_key": "nfl.l.387432"}, {"teams": {
                "0": {"team": [[{"team_key": "nfl.l.387432.t.1"}, {"name": "Foo Bar"}]]},
                "count": 1
            }}]}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = YahooClient::with_base_url("tok", mock_server.uri()).unwrap();
    let teams = client.league_teams(&league()).await.unwrap();

    assert_eq!(teams, vec![TeamEntry::new("nfl.l.387432.t.1", "Foo Bar")]);
}

#[tokio::test]
async fn test_team_roster_with_and_without_week() {
    let mock_server = MockServer::start().await;
    let body = json!({"fantasy_content": {"team": [[{"team_key": "nfl.l.387432.t.1"}], {"roster": {
        "0": {"players": {
            "0": {"player": [[{"player_id": "1"}, {"name": {"full": "Only Guy"}}],
                             {"selected_position": [{"position": "QB"}]}]},
            "count": 1
        }}
    }}]}});

    Mock::given(method("GET"))
        .and(path("/team/nfl.l.387432.t.1/roster;week=4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/team/nfl.l.387432.t.1/roster"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = YahooClient::with_base_url("tok", format!("{}/", mock_server.uri())).unwrap();
    let team = TeamKey::new("nfl.l.387432.t.1");

    let weekly = client
        .team_roster(&team, Some(Week::new(4).unwrap()))
        .await
        .unwrap();
    let current = client.team_roster(&team, None).await.unwrap();

    assert_eq!(weekly.len(), 1);
    assert_eq!(weekly[0].name.as_deref(), Some("Only Guy"));
    assert_eq!(weekly, current);
}

#[tokio::test]
async fn test_player_points_builds_player_keys() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(
            "/league/nfl.l.387432/players;player_keys=nfl.p.1,nfl.p.2/stats;type=week;week=2",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "fantasy_content": {"league": [{}, {"players": {
                "0": {"player": [[{"player_id": "1"}], {"player_points": {"total": "4.5"}}]},
                "1": {"player": [[{"player_id": "2"}], {"player_projected_points": {"total": "11"}}]},
                "count": 2
            }}]}
        })))
        .mount(&mock_server)
        .await;

    let client = YahooClient::with_base_url("tok", mock_server.uri()).unwrap();
    let points = client
        .player_points(
            &league(),
            &[PlayerId::new(1), PlayerId::new(2)],
            Week::new(2).unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(points.get(&PlayerId::new(1)), Some(&4.5));
    assert_eq!(points.get(&PlayerId::new(2)), Some(&11.0));
}

#[tokio::test]
async fn test_http_error_status_is_propagated() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    let client = YahooClient::with_base_url("expired", mock_server.uri()).unwrap();
    let err = client.league_teams(&league()).await.unwrap_err();

    assert!(matches!(err, FflError::Http(_)));
}

#[tokio::test]
async fn test_unexpected_shape_is_reported() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"error": {"description": "x"}})))
        .mount(&mock_server)
        .await;

    let client = YahooClient::with_base_url("tok", mock_server.uri()).unwrap();
    let err = client.league_teams(&league()).await.unwrap_err();

    assert!(matches!(err, FflError::UnexpectedResponse { .. }));
}
