#![allow(dead_code)]

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use cafe_likes::{Config, Context, ToContext};
use serde_json::{json, Value};
use std::{collections::HashMap, collections::VecDeque, sync::Arc, time::Duration};
use tokio::{net::TcpListener, sync::Mutex};

/// A canned reply for one mutation request.
pub struct Reply {
    pub delay: Duration,
    pub status: StatusCode,
    pub body: Value,
    pub raw: Option<&'static str>,
}

impl Reply {
    pub fn ok(body: Value) -> Self {
        Self {
            delay: Duration::ZERO,
            status: StatusCode::OK,
            body,
            raw: None,
        }
    }

    pub fn status(status: StatusCode, body: Value) -> Self {
        Self {
            status,
            ..Self::ok(body)
        }
    }

    /// Sends `text` as-is instead of a JSON body.
    pub fn text(status: StatusCode, text: &'static str) -> Self {
        Self {
            raw: Some(text),
            ..Self::status(status, Value::Null)
        }
    }

    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[derive(Default)]
pub struct Backend {
    pub likes: Value,
    pub status_code: Option<StatusCode>,
    pub status_queries: Vec<HashMap<String, String>>,
    pub mutations: Vec<(String, Value)>,
    pub replies: VecDeque<Reply>,
}

pub type Shared = Arc<Mutex<Backend>>;

async fn like_status(
    State(backend): State<Shared>,
    Query(query): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    let mut backend = backend.lock().await;
    backend.status_queries.push(query);

    match backend.status_code {
        Some(code) => (code, Json(json!({ "message": "boom" }))),
        None => (StatusCode::OK, Json(json!({ "likes": backend.likes }))),
    }
}

async fn mutate(backend: Shared, path: &str, body: Value) -> Response {
    let reply = {
        let mut backend = backend.lock().await;
        backend.mutations.push((path.to_string(), body.clone()));
        backend.replies.pop_front()
    };

    let reply = match reply {
        Some(reply) => reply,
        None => {
            let key = if path == "/api/like" { "liked" } else { "unliked" };
            let mut backend = backend.lock().await;
            backend.likes = Value::Bool(path == "/api/like");
            let mut reply = serde_json::Map::new();
            reply.insert(key.to_string(), body["cafeId"].clone());
            Reply::ok(Value::Object(reply))
        }
    };

    tokio::time::sleep(reply.delay).await;
    match reply.raw {
        Some(text) => (reply.status, text).into_response(),
        None => (reply.status, Json(reply.body)).into_response(),
    }
}

async fn like(State(backend): State<Shared>, Json(body): Json<Value>) -> impl IntoResponse {
    mutate(backend, "/api/like", body).await
}

async fn unlike(State(backend): State<Shared>, Json(body): Json<Value>) -> impl IntoResponse {
    mutate(backend, "/api/unlike", body).await
}

pub async fn spawn_backend(likes: Value) -> (String, Shared) {
    let backend: Shared = Arc::new(Mutex::new(Backend {
        likes,
        ..Default::default()
    }));

    let router = Router::new()
        .route("/api/likes", get(like_status))
        .route("/api/like", post(like))
        .route("/api/unlike", post(unlike))
        .with_state(backend.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    (format!("http://{}", addr), backend)
}

pub async fn context(url: &str) -> Arc<Context> {
    Arc::new(Config::new(url).to_context().await.unwrap())
}

pub async fn context_with_timeout(url: &str, timeout: Duration) -> Arc<Context> {
    Arc::new(
        Config::new(url)
            .with_timeout(timeout)
            .to_context()
            .await
            .unwrap(),
    )
}
