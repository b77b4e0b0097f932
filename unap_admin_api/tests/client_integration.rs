use unap_admin_api::types::{BlastDraft, UsersPage};
use unap_admin_api::{AdminClient, PageQuery, PagedQuery, SessionStore, UserListQuery};
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> (AdminClient, SessionStore) {
    let session = SessionStore::in_memory();
    session.set_base_url(&server.uri());
    let client = AdminClient::new(session.clone()).unwrap();
    (client, session)
}

fn users_body() -> serde_json::Value {
    serde_json::json!({
        "users": [
            { "id": "u1", "name": "Ada", "email": "ada@example.com", "ublastBlocked": false },
            { "id": "u2", "name": "Grace", "email": "grace@example.com", "ublastBlocked": true }
        ],
        "page": 2,
        "totalPages": 5
    })
}

#[tokio::test]
async fn get_users_returns_ok_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/users"))
        .and(query_param("page", "2"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(users_body()))
        .mount(&server)
        .await;

    let (client, _) = client_for(&server);
    let query = UserListQuery::default().with_page(2).with_limit(10);
    let envelope = client.get_users(&query).await.unwrap();
    assert!(envelope.ok);
    assert_eq!(envelope.status, 200);

    let page: UsersPage = envelope.decode();
    assert_eq!(page.users.len(), 2);
    assert_eq!(page.page, 2);
    assert_eq!(page.total_pages, 5);
    assert_eq!(page.users[0].id, "u1");
}

#[tokio::test]
async fn bearer_token_wins_over_admin_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/stats"))
        .and(header("authorization", "Bearer tok-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let (client, session) = client_for(&server);
    session.set_admin_key("static-key");
    session.set_token("tok-123");
    let envelope = client.get_stats().await.unwrap();
    assert!(envelope.ok);
}

#[tokio::test]
async fn admin_key_header_used_without_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/stats"))
        .and(header("x-admin-key", "static-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let (client, session) = client_for(&server);
    session.set_admin_key("static-key");
    let envelope = client.get_stats().await.unwrap();
    assert!(envelope.ok);
}

#[tokio::test]
async fn no_cache_header_is_always_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/stats"))
        .and(header("cache-control", "no-cache"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let (client, _) = client_for(&server);
    assert!(client.get_stats().await.unwrap().ok);
}

#[tokio::test]
async fn non_success_status_is_a_normal_return() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/admin/auth/login"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(serde_json::json!({ "error": "Invalid credentials" })),
        )
        .mount(&server)
        .await;

    let (client, _) = client_for(&server);
    let envelope = client.login("admin@admin.com", "wrong").await.unwrap();
    assert!(!envelope.ok);
    assert_eq!(envelope.status, 401);
    assert_eq!(
        envelope.error_message("Login failed."),
        "Invalid credentials"
    );
}

#[tokio::test]
async fn malformed_body_degrades_to_empty_object() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let (client, _) = client_for(&server);
    let envelope = client.get_stats().await.unwrap();
    assert!(envelope.ok);
    assert_eq!(envelope.data, serde_json::json!({}));
    assert_eq!(envelope.error_message("fallback"), "fallback");
}

#[tokio::test]
async fn minimal_blast_draft_sends_only_title() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/admin/ublasts"))
        .and(body_string_contains("name=\"title\""))
        .and(body_string_contains("Flash Sale"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "ublast": { "_id": "b1", "title": "Flash Sale" } })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (client, _) = client_for(&server);
    let draft = BlastDraft {
        title: Some("Flash Sale".to_string()),
        ..BlastDraft::default()
    };
    let envelope = client.create_blast(draft).await.unwrap();
    assert!(envelope.ok);
    let created: unap_admin_api::types::BlastResponse = envelope.decode();
    assert_eq!(created.ublast.id, "b1");
}

#[tokio::test]
async fn delete_targets_the_given_id() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/admin/posts/p42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _) = client_for(&server);
    assert!(client.delete_post("p42").await.unwrap().ok);
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    let session = SessionStore::in_memory();
    session.set_base_url("http://127.0.0.1:1");
    let client = AdminClient::new(session).unwrap();
    let err = client.get_stats().await;
    assert!(err.is_err());
}

#[tokio::test]
async fn page_query_reaches_nested_paths() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/support/threads/t1/messages"))
        .and(query_param("page", "1"))
        .and(query_param("limit", "30"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "messages": [{ "id": "m1", "text": "hello", "isAdmin": false }],
            "page": 1,
            "totalPages": 1
        })))
        .mount(&server)
        .await;

    let (client, _) = client_for(&server);
    let query = PageQuery::default().with_limit(30);
    let envelope = client.get_thread_messages("t1", &query).await.unwrap();
    let page: unap_admin_api::types::MessagesPage = envelope.decode();
    assert_eq!(page.messages.len(), 1);
    assert_eq!(page.messages[0].text, "hello");
}
