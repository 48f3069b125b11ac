//! Integration tests for the Linear GraphQL client against a mock server.
//!
//! Test coverage:
//! - Authorization header carries the raw key
//! - Query and mutation variables on the wire
//! - GraphQL not-found errors vs other GraphQL errors vs HTTP failures
//! - Secret scrubbing of remote error messages

use linear_context::adapters::plugins::linear::{LinearClient, LinearConnector};
use linear_context::domain::models::{IssueCreate, IssueUpdate};
use linear_context::domain::ports::{IssueTracker, TrackerConnector};
use linear_context::TrackerError;
use mockito::{Matcher, Server};
use serde_json::json;

const KEY: &str = "lin_api_testkey";

fn issue_json(id: &str, identifier: &str) -> serde_json::Value {
    json!({
        "id": id,
        "identifier": identifier,
        "title": "Fix the login flow",
        "branchName": "eng-1-fix-the-login-flow",
        "url": format!("https://linear.app/acme/issue/{identifier}"),
        "description": null,
        "priority": 2,
        "estimate": 3.0,
        "state": { "id": "s1", "name": "Todo", "type": "unstarted" },
        "team": { "id": "t1", "key": "ENG" },
        "updatedAt": "2024-05-01T10:00:00.000Z"
    })
}

#[tokio::test]
async fn test_viewer_sends_raw_authorization_key() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .match_header("authorization", KEY)
        .match_header("content-type", "application/json")
        .match_body(Matcher::Regex("query Viewer".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "data": { "viewer": {
                    "id": "u1", "name": "Ada Lovelace", "displayName": "ada",
                    "email": "ada@example.com"
                } }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = LinearClient::with_base_url(KEY, server.url());
    let viewer = client.viewer().await.unwrap();

    assert_eq!(viewer.id, "u1");
    assert_eq!(viewer.display_name, "ada");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_connector_binds_key() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .match_header("authorization", "lin_api_other")
        .with_status(200)
        .with_body(json!({ "data": { "issuePriorityValues": [] } }).to_string())
        .create_async()
        .await;

    let tracker = LinearConnector::new(server.url()).connect("lin_api_other");
    assert!(tracker.priority_values().await.unwrap().is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_issue_lookup_by_identifier() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .match_body(Matcher::PartialJson(json!({ "variables": { "id": "ENG-1" } })))
        .with_status(200)
        .with_body(json!({ "data": { "issue": issue_json("uuid-1", "ENG-1") } }).to_string())
        .create_async()
        .await;

    let client = LinearClient::with_base_url(KEY, server.url());
    let issue = client.issue("ENG-1").await.unwrap();

    assert_eq!(issue.id, "uuid-1");
    assert_eq!(issue.priority, 2);
    assert_eq!(issue.estimate, Some(3.0));
    assert_eq!(issue.team_id(), Some("t1"));
    assert!(issue.updated_at.is_some());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_issue_not_found_error() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/")
        .with_status(200)
        .with_body(
            json!({
                "data": null,
                "errors": [{
                    "message": "Entity not found: Issue",
                    "extensions": { "type": "invalid input", "userPresentableMessage": "Could not find referenced Issue." }
                }]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = LinearClient::with_base_url(KEY, server.url());
    match client.issue("ENG-404").await {
        Err(TrackerError::NotFound(what)) => assert_eq!(what, "issue ENG-404"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_issue_null_is_not_found() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/")
        .with_status(200)
        .with_body(json!({ "data": { "issue": null } }).to_string())
        .create_async()
        .await;

    let client = LinearClient::with_base_url(KEY, server.url());
    assert!(matches!(
        client.issue("ENG-404").await,
        Err(TrackerError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_server_error_is_transport() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/")
        .with_status(502)
        .with_body("Bad Gateway")
        .create_async()
        .await;

    let client = LinearClient::with_base_url(KEY, server.url());
    assert!(matches!(
        client.issue("ENG-1").await,
        Err(TrackerError::Transport(_))
    ));
}

#[tokio::test]
async fn test_unreachable_endpoint_is_transport() {
    let client = LinearClient::with_base_url(KEY, "http://127.0.0.1:9");
    assert!(matches!(
        client.viewer().await,
        Err(TrackerError::Transport(_))
    ));
}

#[tokio::test]
async fn test_graphql_error_is_api_and_scrubbed() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/")
        .with_status(400)
        .with_body(
            json!({
                "errors": [{
                    "message": "Authentication required, got lin_api_abcdefghijklmnopqrstuvwxyz",
                    "extensions": { "type": "authentication error" }
                }]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = LinearClient::with_base_url(KEY, server.url());
    match client.viewer().await {
        Err(TrackerError::Api(message)) => {
            assert!(message.contains("Authentication required"));
            assert!(!message.contains("abcdefghijklmnop"));
            assert!(message.contains("[API_KEY_REDACTED]"));
        }
        other => panic!("expected Api, got {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_data_is_api_error() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/")
        .with_status(200)
        .with_body(json!({ "data": null }).to_string())
        .create_async()
        .await;

    let client = LinearClient::with_base_url(KEY, server.url());
    assert!(matches!(
        client.workflow_states().await,
        Err(TrackerError::Api(_))
    ));
}

#[tokio::test]
async fn test_assigned_issues_and_reference_lists() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/")
        .match_body(Matcher::Regex("query ViewerAssignedIssues".to_string()))
        .with_status(200)
        .with_body(
            json!({ "data": { "viewer": { "assignedIssues": { "nodes": [
                issue_json("uuid-2", "ENG-2"),
                issue_json("uuid-1", "ENG-1")
            ] } } } })
            .to_string(),
        )
        .create_async()
        .await;
    server
        .mock("POST", "/")
        .match_body(Matcher::Regex("query WorkflowStates".to_string()))
        .with_status(200)
        .with_body(
            json!({ "data": { "workflowStates": { "nodes": [
                { "id": "s1", "name": "Todo", "type": "unstarted", "color": "#ccc",
                  "position": 0.0, "team": { "id": "t1", "key": "ENG" } },
                { "id": "s2", "name": "In Progress", "type": "started", "color": "#0af",
                  "position": 1.0, "team": { "id": "t1", "key": "ENG" } }
            ] } } })
            .to_string(),
        )
        .create_async()
        .await;
    server
        .mock("POST", "/")
        .match_body(Matcher::Regex("query TeamMembers".to_string()))
        .with_status(200)
        .with_body(json!({ "data": { "team": null } }).to_string())
        .create_async()
        .await;

    let client = LinearClient::with_base_url(KEY, server.url());

    let issues = client.viewer_assigned_issues().await.unwrap();
    assert_eq!(issues[0].identifier, "ENG-2");
    assert_eq!(issues[1].identifier, "ENG-1");

    let states = client.workflow_states().await.unwrap();
    assert_eq!(states.len(), 2);
    assert_eq!(states[1].state_type, "started");
    assert!(states[1].belongs_to("t1"));

    assert!(matches!(
        client.team_members("t-missing").await,
        Err(TrackerError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_comment_create_payload() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .match_body(Matcher::PartialJson(json!({
            "variables": { "input": { "issueId": "uuid-1", "body": "Shipped" } }
        })))
        .with_status(200)
        .with_body(
            json!({ "data": { "commentCreate": { "success": true, "comment": { "id": "c1" } } } })
                .to_string(),
        )
        .create_async()
        .await;

    let client = LinearClient::with_base_url(KEY, server.url());
    let payload = client.create_comment("uuid-1", "Shipped").await.unwrap();

    assert!(payload.success);
    assert_eq!(payload.comment_id.as_deref(), Some("c1"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_issue_update_reports_remote_flag() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .match_body(Matcher::PartialJson(json!({
            "variables": { "id": "uuid-1", "input": { "stateId": "s2" } }
        })))
        .with_status(200)
        .with_body(json!({ "data": { "issueUpdate": { "success": false, "issue": null } } }).to_string())
        .create_async()
        .await;

    let client = LinearClient::with_base_url(KEY, server.url());
    let payload = client
        .update_issue("uuid-1", &IssueUpdate::state("s2"))
        .await
        .unwrap();

    assert!(!payload.success);
    assert!(payload.issue.is_none());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_issue_create_sends_only_set_fields() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .match_body(Matcher::PartialJson(json!({
            "variables": { "input": { "title": "Fix the login flow", "teamId": "t1", "priority": 2 } }
        })))
        .with_status(200)
        .with_body(
            json!({ "data": { "issueCreate": {
                "success": true,
                "issue": issue_json("uuid-9", "ENG-9")
            } } })
            .to_string(),
        )
        .create_async()
        .await;

    let client = LinearClient::with_base_url(KEY, server.url());
    let input = IssueCreate::new("Fix the login flow", "t1").with_priority(2);
    let payload = client.create_issue(&input).await.unwrap();

    assert!(payload.success);
    assert_eq!(payload.issue.unwrap().identifier, "ENG-9");
    mock.assert_async().await;
}
