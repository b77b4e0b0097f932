use serde_json::json;
use unap_admin_api::{AdminClient, SessionStore, UserFilter};
use unap_admin_lib::{
    CommunicationsSlice, ModerationSlice, OpError, RecipientFilter, SubmissionsSlice, UsersSlice,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> AdminClient {
    let session = SessionStore::in_memory();
    session.set_base_url(&server.uri());
    session.set_admin_key("test-key");
    AdminClient::new(session).expect("client should build")
}

fn user_json(id: &str) -> serde_json::Value {
    json!({
        "_id": id,
        "name": format!("User {}", id),
        "username": format!("user_{}", id),
        "status": "active",
        "ublastBlocked": false,
    })
}

#[tokio::test]
async fn users_page_turn_replaces_the_window() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/users"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "users": [user_json("u11"), user_json("u12")],
            "page": 2,
            "totalPages": 5,
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/admin/users"))
        .and(query_param("page", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "users": [user_json("u21")],
            "page": 3,
            "totalPages": 5,
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut slice = UsersSlice::default();
    slice.users.set_page(1);
    slice.users.apply(Vec::new(), 2, 5);
    slice.fetch_users(&client, 10).await;

    assert_eq!(slice.users.page, 2);
    assert_eq!(slice.users.total_pages, 5);
    assert_eq!(slice.users.items.len(), 2);
    assert!(slice.request.error.is_empty());

    slice.users.set_page(slice.users.next_page());
    slice.fetch_users(&client, 10).await;
    assert_eq!(slice.users.page, 3);
    assert_eq!(slice.users.items.len(), 1);
    assert_eq!(slice.users.items[0].id, "u21");
}

#[tokio::test]
async fn filter_switch_resets_cursor_and_clears_error() {
    let mut slice = UsersSlice::default();
    slice.users.apply(Vec::new(), 4, 9);
    slice.request.fail("Failed to load users.");

    slice.set_filter(UserFilter::Restricted);

    assert_eq!(slice.filter, UserFilter::Restricted);
    assert_eq!(slice.users.page, 1);
    assert!(slice.request.error.is_empty());
}

#[tokio::test]
async fn restrict_patches_only_the_confirmed_fields() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/api/admin/users/u1/restrict"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "restricted",
            "ublastBlocked": true,
        })))
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/api/admin/users/u1/unrestrict"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "active",
            "ublastBlocked": false,
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut slice = ModerationSlice::default();
    let mut row: unap_admin_api::types::AdminUser = serde_json::from_value(user_json("u1")).unwrap();
    row.followers = 7;
    slice.users.apply(vec![row], 1, 1);

    slice.restrict_user(&client, "u1").await.unwrap();
    assert_eq!(slice.users.items[0].status, "restricted");
    assert!(slice.users.items[0].ublast_blocked);
    // Fields the server did not mention keep their cached values.
    assert_eq!(slice.users.items[0].followers, 7);

    slice.unrestrict_user(&client, "u1").await.unwrap();
    assert_eq!(slice.users.items[0].status, "active");
    assert!(!slice.users.items[0].ublast_blocked);
}

#[tokio::test]
async fn bulk_delete_drops_rows_and_selection() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/admin/users/delete"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "deleted": 2 })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut slice = ModerationSlice::default();
    let rows = vec![
        serde_json::from_value(user_json("a")).unwrap(),
        serde_json::from_value(user_json("b")).unwrap(),
        serde_json::from_value(user_json("c")).unwrap(),
    ];
    slice.users.apply(rows, 1, 1);
    slice.selected_users.toggle("a");
    slice.selected_users.toggle("c");

    slice.delete_selected_users(&client).await.unwrap();

    let ids: Vec<&str> = slice.users.items.iter().map(|u| u.id.as_str()).collect();
    assert_eq!(ids, vec!["b"]);
    assert!(slice.selected_users.is_empty());
}

#[tokio::test]
async fn bulk_delete_with_empty_selection_never_hits_the_server() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/admin/users/delete"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut slice = ModerationSlice::default();
    let err = slice.delete_selected_users(&client).await.unwrap_err();
    assert_eq!(
        err,
        OpError::Validation("Select at least one user.".to_string())
    );
}

#[tokio::test]
async fn sms_to_selected_users_with_no_selection_never_hits_the_server() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/admin/communications/sms"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut slice = CommunicationsSlice::default();
    slice.filter = RecipientFilter::Selected;

    let err = slice.send_sms(&client, "Hello").await.unwrap_err();
    assert_eq!(
        err,
        OpError::Validation("Select at least one user.".to_string())
    );
}

#[tokio::test]
async fn email_send_reports_delivery_counts() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/admin/communications/email"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "sent": 120, "failed": 4 })),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let slice = CommunicationsSlice::default();
    let report = slice
        .send_email(&client, "Launch day", "We are live.")
        .await
        .unwrap();
    assert_eq!(report.summary(), "Sent 120. Failed 4.");
}

#[tokio::test]
async fn failed_mutation_leaves_the_collection_unchanged() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/admin/posts/p1"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "error": "Database offline" })),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut slice = ModerationSlice::default();
    let post = unap_admin_api::types::Post {
        id: "p1".to_string(),
        ..Default::default()
    };
    slice.posts.apply(vec![post], 1, 1);
    let before = slice.posts.clone();

    let err = slice.delete_post(&client, "p1").await.unwrap_err();
    assert_eq!(
        err,
        OpError::Server("Database offline".to_string())
    );
    assert_eq!(slice.posts, before);
}

#[tokio::test]
async fn failed_fetch_stores_the_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/ublasts/submissions"))
        .respond_with(
            ResponseTemplate::new(503).set_body_json(json!({ "error": "Queue unavailable" })),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut slice = SubmissionsSlice::default();
    slice.fetch(&client, 20).await;

    assert!(!slice.request.loading);
    assert_eq!(slice.request.error, "Queue unavailable");
    assert!(slice.submissions.items.is_empty());
}
