use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use client::domain::{content::vertical::Vertical, shared::session::SessionContext};
use client::infrastructure::http::rest_gateway::RestGateway;
use parking_lot::Mutex;
use serde_json::{Value, json};
use std::{sync::Arc, time::Duration};

pub const TOKEN: &str = "test-token";
pub const ME: &str = "user-1";

pub fn session() -> Arc<SessionContext> {
    Arc::new(
        SessionContext::new(ME)
            .with_profile(Some("Ada".to_string()), None)
            .with_token(Some(TOKEN.to_string())),
    )
}

/// Server-side state of the fake content API.
#[derive(Default)]
pub struct FakeApi {
    pub likers: Vec<Value>,
    pub other_likes: u64,
    pub comments: Vec<Value>,
    pub bodies: Vec<(String, Value)>,
    pub authorization: Vec<Option<String>>,
    /// When set, every mutation answers with this HTTP status and message.
    pub failure: Option<(u16, String)>,
    pub alert: bool,
}

pub type Shared = Arc<Mutex<FakeApi>>;

fn record(state: &Shared, path: &str, headers: &HeaderMap, body: &Value) {
    let mut api = state.lock();
    api.bodies.push((path.to_string(), body.clone()));
    api.authorization.push(
        headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
    );
}

fn failure(state: &Shared) -> Option<(StatusCode, Json<Value>)> {
    let api = state.lock();
    api.failure.as_ref().map(|(status, message)| {
        (
            StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            Json(json!({ "statusCode": status, "message": message })),
        )
    })
}

async fn toggle_like(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    record(&state, "like", &headers, &body);
    if let Some(failed) = failure(&state) {
        return failed;
    }
    let mut api = state.lock();
    let user = body["user_id"].clone();
    if let Some(pos) = api.likers.iter().position(|u| *u == user) {
        api.likers.remove(pos);
    } else {
        api.likers.push(user);
    }
    (
        StatusCode::OK,
        Json(json!({ "statusCode": 201, "message": "Like toggled" })),
    )
}

async fn likes(State(state): State<Shared>, Path(_id): Path<String>) -> Json<Value> {
    let api = state.lock();
    let rows: Vec<Value> = api.likers.iter().map(|u| json!({ "user_id": u })).collect();
    Json(json!({
        "statusCode": 200,
        "totalLikes": api.other_likes + api.likers.len() as u64,
        "AllLikes": rows,
    }))
}

async fn add_comment(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    record(&state, "comment", &headers, &body);
    if let Some(failed) = failure(&state) {
        return failed;
    }
    state.lock().comments.push(json!({
        "user_id": body["user_id"],
        "username": "Ada",
        "comment": body["comment"],
    }));
    (
        StatusCode::CREATED,
        Json(json!({ "statusCode": 201, "message": "Comment added" })),
    )
}

/// Video comments use the plain key.
async fn video_comments(State(state): State<Shared>, Path(_id): Path<String>) -> Json<Value> {
    let api = state.lock();
    Json(json!({
        "totalComments": api.comments.len(),
        "AllComments": api.comments,
    }))
}

/// Pic tour comments come nested and misspelled.
async fn tour_comments(State(state): State<Shared>, Path(_id): Path<String>) -> Json<Value> {
    let api = state.lock();
    Json(json!({
        "statusCode": 200,
        "data": {
            "totalComments": null,
            "AllComents": api.comments,
        }
    }))
}

async fn create(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    record(&state, "create", &headers, &body);
    if let Some(failed) = failure(&state) {
        return failed;
    }
    (
        StatusCode::CREATED,
        Json(json!({ "statusCode": 201, "message": "Created" })),
    )
}

async fn bookmark(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    record(&state, "bookmark", &headers, &body);
    (
        StatusCode::CONFLICT,
        Json(json!({ "statusCode": 409, "message": "Already bookmarked" })),
    )
}

async fn remove_bookmark(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Json<Value> {
    record(&state, "remove_bookmark", &headers, &body);
    Json(json!({ "statusCode": 201, "message": "Bookmark removed" }))
}

async fn toggle_alert(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Json<Value> {
    record(&state, "alert", &headers, &body);
    let mut api = state.lock();
    api.alert = !api.alert;
    Json(json!({ "statusCode": 201, "message": "Alert updated" }))
}

async fn check_alert(State(state): State<Shared>, Json(_body): Json<Value>) -> Json<Value> {
    Json(json!({ "statusCode": 200, "data": { "alert": state.lock().alert } }))
}

pub fn router(state: Shared) -> Router {
    Router::new()
        .route("/videomania/like-unlike", post(toggle_like))
        .route("/videomania/likes/{id}", get(likes))
        .route("/videomania/comment", post(add_comment))
        .route("/videomania/comments/{id}", get(video_comments))
        .route("/videomania/add", post(create))
        .route("/pictours/like-unlike", post(toggle_like))
        .route("/pictours/likes/{id}", get(likes))
        .route("/pictours/comment", post(add_comment))
        .route("/pictours/comments/{id}", get(tour_comments))
        .route("/mondomarket/bookmark", post(bookmark))
        .route("/mondomarket/bookmark/remove", post(remove_bookmark))
        .route("/mondomarket/alert/toggle", post(toggle_alert))
        .route("/mondomarket/alert/check", post(check_alert))
        .with_state(state)
}

/// Binds a router on an ephemeral port and returns its base URL.
pub async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind test listener");
    let addr = listener.local_addr().expect("listener has no address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("fake api stopped");
    });
    format!("http://{}", addr)
}

pub struct TestApi {
    pub state: Shared,
    pub base_url: String,
}

impl TestApi {
    pub async fn spawn(seed: FakeApi) -> Self {
        let state = Arc::new(Mutex::new(seed));
        let base_url = serve(router(state.clone())).await;
        Self { state, base_url }
    }

    pub fn gateway(&self, vertical: Vertical) -> RestGateway {
        RestGateway::new(
            &self.base_url,
            Some(TOKEN.to_string()),
            Duration::from_secs(5),
            vertical,
        )
        .expect("failed to build gateway")
    }

    pub fn last_body(&self, path: &str) -> Option<Value> {
        self.state
            .lock()
            .bodies
            .iter()
            .rev()
            .find(|(p, _)| p == path)
            .map(|(_, body)| body.clone())
    }
}
