//! HTTP client adapter for the UNAP admin API.

use std::time::Duration;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use url::Url;

use crate::query::{
    PageQuery, Query, SubmissionListQuery, TrendingOverviewQuery, UserListQuery,
};
use crate::session::SessionStore;
use crate::types::BlastDraft;
use crate::Error;

/// Base URL used when no override is stored.
pub const DEFAULT_BASE_URL: &str = "http://localhost:4000";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Uniform response envelope: the only success/failure contract the state
/// layer consumes.
///
/// `ok` mirrors the HTTP success range; `data` is the parsed JSON body, or
/// an empty object when the body is not valid JSON. A non-2xx status is a
/// normal, inspectable return, never an `Err`.
#[derive(Debug, Clone)]
pub struct Envelope {
    pub ok: bool,
    pub status: u16,
    pub data: Value,
}

impl Envelope {
    /// Leniently decodes `data` into a typed payload. Shapes that don't
    /// match fall back to the payload's defaults, mirroring how the view
    /// layer treats missing fields.
    pub fn decode<T: DeserializeOwned + Default>(&self) -> T {
        serde_json::from_value(self.data.clone()).unwrap_or_default()
    }

    /// The server-supplied `error` message, or `fallback` when absent.
    pub fn error_message(&self, fallback: &str) -> String {
        self.data
            .get("error")
            .and_then(|e| e.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| fallback.to_string())
    }
}

enum Payload {
    None,
    Json(Value),
    Multipart(reqwest::multipart::Form),
}

/// Authenticated client for the admin API.
///
/// Session state is injected rather than read from ambient globals; the
/// stored token (bearer) takes precedence over the static admin key header.
pub struct AdminClient {
    session: SessionStore,
    http: reqwest::Client,
}

impl AdminClient {
    pub fn new(session: SessionStore) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        Ok(Self { session, http })
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    fn base_url(&self) -> String {
        self.session
            .base_url_override()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }

    fn url(&self, path: &str, query: Option<&impl Query>) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", self.base_url(), path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::RequestFailed
        })?;
        Ok(match query {
            Some(query) => query.add_to_url(&url),
            None => url,
        })
    }

    async fn request<Q: Query>(
        &self,
        method: Method,
        path: &str,
        query: Option<&Q>,
        payload: Payload,
    ) -> Result<Envelope, Error> {
        let url = self.url(path, query)?;
        let mut req = self
            .http
            .request(method, url)
            .header("cache-control", "no-cache")
            .header("accept", "application/json, text/plain, */*");

        req = match self.session.token() {
            Some(token) => req.bearer_auth(token),
            None => match self.session.admin_key() {
                Some(key) => req.header("x-admin-key", key),
                None => req,
            },
        };

        req = match payload {
            Payload::None => req,
            Payload::Json(body) => req.json(&body),
            Payload::Multipart(form) => req.multipart(form),
        };

        let resp = req.send().await.map_err(|e| {
            tracing::error!("Request failed: {}", e);
            Error::RequestFailed
        })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        // Malformed bodies degrade to an empty object; callers still see
        // the real status.
        let data = serde_json::from_str::<Value>(&body).unwrap_or_else(|_| json!({}));
        if !status.is_success() {
            tracing::debug!("Request to {} returned {}", path, status);
        }
        Ok(Envelope {
            ok: status.is_success(),
            status: status.as_u16(),
            data,
        })
    }

    async fn get<Q: Query>(&self, path: &str, query: Option<&Q>) -> Result<Envelope, Error> {
        self.request(Method::GET, path, query, Payload::None).await
    }

    async fn send_json(
        &self,
        method: Method,
        path: &str,
        body: Value,
    ) -> Result<Envelope, Error> {
        self.request(method, path, Option::<&PageQuery>::None, Payload::Json(body))
            .await
    }

    // -- Auth --

    /// `POST /api/admin/auth/login`. The caller stores the returned token.
    pub async fn login(&self, email: &str, password: &str) -> Result<Envelope, Error> {
        self.send_json(
            Method::POST,
            "/api/admin/auth/login",
            json!({ "email": email, "password": password }),
        )
        .await
    }

    // -- Overview --

    pub async fn get_stats(&self) -> Result<Envelope, Error> {
        self.get("/api/admin/stats", Option::<&PageQuery>::None).await
    }

    // -- Users --

    pub async fn get_users(&self, query: &UserListQuery) -> Result<Envelope, Error> {
        self.get("/api/admin/users", Some(query)).await
    }

    pub async fn restrict_user(&self, user_id: &str) -> Result<Envelope, Error> {
        self.send_json(
            Method::PATCH,
            &format!("/api/admin/users/{}/restrict", user_id),
            json!({}),
        )
        .await
    }

    pub async fn unrestrict_user(&self, user_id: &str) -> Result<Envelope, Error> {
        self.send_json(
            Method::PATCH,
            &format!("/api/admin/users/{}/unrestrict", user_id),
            json!({}),
        )
        .await
    }

    pub async fn delete_users(&self, user_ids: &[String]) -> Result<Envelope, Error> {
        self.send_json(
            Method::POST,
            "/api/admin/users/delete",
            json!({ "userIds": user_ids }),
        )
        .await
    }

    pub async fn clear_linked_accounts(&self, user_id: &str) -> Result<Envelope, Error> {
        self.request(
            Method::DELETE,
            &format!("/api/admin/users/{}/linked-accounts", user_id),
            Option::<&PageQuery>::None,
            Payload::None,
        )
        .await
    }

    // -- Posts --

    pub async fn get_posts(&self, query: &PageQuery) -> Result<Envelope, Error> {
        self.get("/api/admin/posts", Some(query)).await
    }

    pub async fn get_official_posts(&self, query: &PageQuery) -> Result<Envelope, Error> {
        self.get("/api/admin/official-posts", Some(query)).await
    }

    pub async fn delete_post(&self, post_id: &str) -> Result<Envelope, Error> {
        self.request(
            Method::DELETE,
            &format!("/api/admin/posts/{}", post_id),
            Option::<&PageQuery>::None,
            Payload::None,
        )
        .await
    }

    // -- Blasts --

    pub async fn get_blasts(&self, query: &PageQuery) -> Result<Envelope, Error> {
        self.get("/api/admin/ublasts", Some(query)).await
    }

    pub async fn create_blast(&self, draft: BlastDraft) -> Result<Envelope, Error> {
        self.request(
            Method::POST,
            "/api/admin/ublasts",
            Option::<&PageQuery>::None,
            Payload::Multipart(draft.into_form()),
        )
        .await
    }

    pub async fn update_blast(&self, blast_id: &str, draft: BlastDraft) -> Result<Envelope, Error> {
        self.request(
            Method::PATCH,
            &format!("/api/admin/ublasts/{}", blast_id),
            Option::<&PageQuery>::None,
            Payload::Multipart(draft.into_form()),
        )
        .await
    }

    pub async fn delete_blast(&self, blast_id: &str) -> Result<Envelope, Error> {
        self.request(
            Method::DELETE,
            &format!("/api/admin/ublasts/{}", blast_id),
            Option::<&PageQuery>::None,
            Payload::None,
        )
        .await
    }

    pub async fn release_blast(&self, blast_id: &str) -> Result<Envelope, Error> {
        self.send_json(
            Method::POST,
            &format!("/api/admin/ublasts/{}/release", blast_id),
            json!({}),
        )
        .await
    }

    pub async fn reward_blast(&self, blast_id: &str, user_id: &str) -> Result<Envelope, Error> {
        self.send_json(
            Method::POST,
            &format!("/api/admin/ublasts/{}/reward", blast_id),
            json!({ "userId": user_id }),
        )
        .await
    }

    pub async fn offer_blast(
        &self,
        blast_id: &str,
        user_id: &str,
        price_dollars: f64,
        currency: &str,
    ) -> Result<Envelope, Error> {
        self.send_json(
            Method::POST,
            &format!("/api/admin/ublasts/{}/offer", blast_id),
            json!({
                "userId": user_id,
                "priceDollars": price_dollars,
                "currency": currency,
            }),
        )
        .await
    }

    // -- Submissions --

    pub async fn get_submissions(&self, query: &SubmissionListQuery) -> Result<Envelope, Error> {
        self.get("/api/admin/ublasts/submissions", Some(query)).await
    }

    pub async fn review_submission(
        &self,
        submission_id: &str,
        status: &str,
        review_notes: Option<&str>,
    ) -> Result<Envelope, Error> {
        self.send_json(
            Method::PATCH,
            &format!("/api/admin/ublasts/submissions/{}", submission_id),
            json!({ "status": status, "reviewNotes": review_notes }),
        )
        .await
    }

    // -- Moderation --

    pub async fn get_moderation_actions(&self, query: &PageQuery) -> Result<Envelope, Error> {
        self.get("/api/admin/moderation/actions", Some(query)).await
    }

    // -- Trending --

    pub async fn get_trending_overview(
        &self,
        query: &TrendingOverviewQuery,
    ) -> Result<Envelope, Error> {
        self.get("/api/admin/trending/overview", Some(query)).await
    }

    pub async fn pin_trending(&self, post_id: &str) -> Result<Envelope, Error> {
        self.send_json(
            Method::POST,
            "/api/admin/trending/manual",
            json!({ "postId": post_id }),
        )
        .await
    }

    pub async fn unpin_trending(&self, placement_id: &str) -> Result<Envelope, Error> {
        self.request(
            Method::DELETE,
            &format!("/api/admin/trending/manual/{}", placement_id),
            Option::<&PageQuery>::None,
            Payload::None,
        )
        .await
    }

    pub async fn move_trending(
        &self,
        placement_id: &str,
        position: i64,
    ) -> Result<Envelope, Error> {
        self.send_json(
            Method::PATCH,
            &format!("/api/admin/trending/manual/{}", placement_id),
            json!({ "position": position }),
        )
        .await
    }

    // -- Communications --

    pub async fn send_email_blast(
        &self,
        subject: &str,
        content: &str,
        filter: &str,
        user_ids: &[String],
    ) -> Result<Envelope, Error> {
        self.send_json(
            Method::POST,
            "/api/admin/communications/email",
            json!({
                "subject": subject,
                "content": content,
                "filter": filter,
                "userIds": user_ids,
            }),
        )
        .await
    }

    pub async fn send_sms_blast(
        &self,
        content: &str,
        filter: &str,
        user_ids: &[String],
    ) -> Result<Envelope, Error> {
        self.send_json(
            Method::POST,
            "/api/admin/communications/sms",
            json!({
                "content": content,
                "filter": filter,
                "userIds": user_ids,
            }),
        )
        .await
    }

    // -- Support --

    pub async fn get_support_threads(&self, query: &PageQuery) -> Result<Envelope, Error> {
        self.get("/api/admin/support/threads", Some(query)).await
    }

    pub async fn get_thread_messages(
        &self,
        thread_id: &str,
        query: &PageQuery,
    ) -> Result<Envelope, Error> {
        self.get(
            &format!("/api/admin/support/threads/{}/messages", thread_id),
            Some(query),
        )
        .await
    }

    pub async fn set_thread_status(
        &self,
        thread_id: &str,
        status: &str,
    ) -> Result<Envelope, Error> {
        self.send_json(
            Method::PATCH,
            &format!("/api/admin/support/threads/{}/status", thread_id),
            json!({ "status": status }),
        )
        .await
    }

    // -- Offers & rewards --

    pub async fn get_offers_summary(&self) -> Result<Envelope, Error> {
        self.get("/api/admin/ublast-offers/summary", Option::<&PageQuery>::None)
            .await
    }

    pub async fn get_offers(&self, query: &PageQuery) -> Result<Envelope, Error> {
        self.get("/api/admin/ublast-offers", Some(query)).await
    }

    pub async fn get_rewarded(&self, query: &PageQuery) -> Result<Envelope, Error> {
        self.get("/api/admin/rewarded-ublasts", Some(query)).await
    }
}
