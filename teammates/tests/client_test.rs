//! Integration tests for the teammates REST client.
//!
//! A wiremock server stands in for the SendGrid API so each test can pin the
//! status code and verify what the client sent.

use teammates::{
    AccountRequest, CreateOutcome, TeammatesClient, TeammatesConfig, TeammatesError,
    UpdateOutcome,
};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_KEY: &str = "SG.test-key";

fn client_for(server: &MockServer) -> TeammatesClient {
    TeammatesClient::new(TeammatesConfig {
        api_host: server.uri(),
        api_key: API_KEY.to_string(),
    })
    .unwrap()
}

fn developer(scopes: &[String]) -> AccountRequest<'_> {
    AccountRequest {
        first_name: "Bob",
        last_name: "Builder",
        email: "bob@example.com",
        is_admin: false,
        scopes,
    }
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_create_201_is_created() {
    let server = MockServer::start().await;
    let scopes = vec!["mail.send".to_string()];

    Mock::given(method("POST"))
        .and(path("/v3/sso/teammates"))
        .and(header("authorization", "Bearer SG.test-key"))
        .and(body_json(serde_json::json!({
            "first_name": "Bob",
            "last_name": "Builder",
            "email": "bob@example.com",
            "is_admin": false,
            "scopes": ["mail.send"]
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = client_for(&server)
        .create_account(&developer(&scopes))
        .await
        .unwrap();
    assert_eq!(outcome, CreateOutcome::Created);
}

#[tokio::test]
async fn test_create_400_is_already_exists() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v3/sso/teammates"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_string(r#"{"errors":[{"message":"email already exists"}]}"#),
        )
        .mount(&server)
        .await;

    let outcome = client_for(&server)
        .create_account(&developer(&[]))
        .await
        .unwrap();
    assert_eq!(outcome, CreateOutcome::AlreadyExists);
}

#[tokio::test]
async fn test_create_500_is_failed_with_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v3/sso/teammates"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal"))
        .mount(&server)
        .await;

    let outcome = client_for(&server)
        .create_account(&developer(&[]))
        .await
        .unwrap();
    assert_eq!(
        outcome,
        CreateOutcome::Failed {
            status: 500,
            body: "internal".to_string()
        }
    );
}

#[tokio::test]
async fn test_create_admin_sends_empty_scopes() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v3/sso/teammates"))
        .and(body_json(serde_json::json!({
            "first_name": "Alice",
            "last_name": "Admin",
            "email": "alice@example.com",
            "is_admin": true,
            "scopes": []
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let req = AccountRequest {
        first_name: "Alice",
        last_name: "Admin",
        email: "alice@example.com",
        is_admin: true,
        scopes: &[],
    };
    let outcome = client_for(&server).create_account(&req).await.unwrap();
    assert_eq!(outcome, CreateOutcome::Created);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_update_200_is_updated_and_email_in_path() {
    let server = MockServer::start().await;
    let scopes = vec!["stats.read".to_string(), "mail.send".to_string()];

    Mock::given(method("PATCH"))
        .and(path("/v3/sso/teammates/bob@example.com"))
        .and(header("authorization", "Bearer SG.test-key"))
        .and(body_json(serde_json::json!({
            "first_name": "Bob",
            "last_name": "Builder",
            "is_admin": false,
            "scopes": ["stats.read", "mail.send"]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = client_for(&server)
        .update_account(&developer(&scopes))
        .await
        .unwrap();
    assert_eq!(outcome, UpdateOutcome::Updated);
}

#[tokio::test]
async fn test_update_non_200_is_failed() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such teammate"))
        .mount(&server)
        .await;

    let outcome = client_for(&server)
        .update_account(&developer(&[]))
        .await
        .unwrap();
    assert_eq!(
        outcome,
        UpdateOutcome::Failed {
            status: 404,
            body: "no such teammate".to_string()
        }
    );
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_list_decodes_accounts_in_order() {
    let server = MockServer::start().await;
    let body = r#"{
        "result": [
            {
                "username": "alice",
                "first_name": "Alice",
                "last_name": "Admin",
                "email": "alice@example.com",
                "is_admin": true,
                "is_sso": true,
                "user_type": "owner"
            },
            {
                "username": "bob",
                "first_name": "Bob",
                "last_name": "Builder",
                "email": "bob@example.com",
                "is_admin": false,
                "is_sso": false,
                "user_type": "teammate"
            }
        ]
    }"#;

    Mock::given(method("GET"))
        .and(path("/v3/teammates"))
        .and(query_param("limit", "100"))
        .and(header("authorization", "Bearer SG.test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(1)
        .mount(&server)
        .await;

    let accounts = client_for(&server).list_accounts(100).await.unwrap();
    assert_eq!(accounts.len(), 2);
    assert_eq!(accounts[0].username, "alice");
    assert!(accounts[0].is_admin);
    assert!(accounts[0].is_sso);
    assert_eq!(accounts[1].username, "bob");
    assert_eq!(accounts[1].user_type, "teammate");
    assert!(!accounts[1].is_sso);
}

#[tokio::test]
async fn test_list_tolerates_missing_account_fields() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/teammates"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"{"result":[{"username":"carol"}]}"#),
        )
        .mount(&server)
        .await;

    let accounts = client_for(&server).list_accounts(200).await.unwrap();
    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0].username, "carol");
    assert!(!accounts[0].is_sso);
}

#[tokio::test]
async fn test_list_garbage_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/teammates"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).list_accounts(200).await.unwrap_err();
    assert!(matches!(err, TeammatesError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn test_list_non_2xx_is_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/teammates"))
        .respond_with(ResponseTemplate::new(401).set_body_string("unauthorized"))
        .mount(&server)
        .await;

    let err = client_for(&server).list_accounts(200).await.unwrap_err();
    match err {
        TeammatesError::Http { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "unauthorized");
        }
        other => panic!("expected Http error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // Reserve a free port, then release it so nothing listens there.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = TeammatesClient::new(TeammatesConfig {
        api_host: format!("http://{addr}"),
        api_key: API_KEY.to_string(),
    })
    .unwrap();

    let err = client.create_account(&developer(&[])).await.unwrap_err();
    assert!(matches!(err, TeammatesError::Transport(_)), "got {err:?}");
}
