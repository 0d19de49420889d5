//! Axum web server exposing the tree store.
//!
//! Tags contain `/`, so in URL paths they are written with `|` in its place
//! (`0|0|1-2` for `0/0/1-2`). Handlers translate back before calling the
//! store.

use std::collections::BTreeMap;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use vsm_tree::{Bounds, NodeStyle, NodeView, Point, Tag, TreeStore};

use crate::error::ApiError;

type AppState = Arc<TreeStore>;

/// HTTP server over a shared [`TreeStore`].
pub struct VsmServer {
    store: AppState,
}

impl VsmServer {
    /// Serve `store`. Other holders of the same `Arc` see every write.
    pub fn new(store: Arc<TreeStore>) -> Self {
        Self { store }
    }

    /// Build the router for the server.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/health", get(health))
            .route("/nodes", get(get_nodes).post(create_seed))
            .route("/nodes/children/{tag}", post(add_children))
            .route("/nodes/{tag}", get(get_node).delete(delete_node))
            .route("/nodes/{tag}/name", put(rename_node))
            .route("/nodes/{tag}/subtree", get(get_subtree))
            .route("/nodes/{tag}/style", get(get_style))
            .route("/nearest", get(get_nearest))
            .route("/view", get(get_view))
            .layer(CorsLayer::permissive())
            .with_state(self.store.clone())
    }

    /// Run the server on the given address.
    pub async fn serve(self, addr: SocketAddr) -> crate::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("VSM server running on http://{}", addr);
        axum::serve(listener, self.router()).await?;
        Ok(())
    }
}

/// Undo the `|` path encoding.
fn decode_tag(raw: &str) -> String {
    raw.replace('|', "/")
}

async fn health() -> &'static str {
    "OK"
}

async fn get_nodes(State(store): State<AppState>) -> Json<BTreeMap<Tag, NodeView>> {
    Json(store.get_all_nodes())
}

async fn create_seed(
    State(store): State<AppState>,
) -> Result<(StatusCode, Json<NodeView>), ApiError> {
    let seed = store.create_seed()?;
    Ok((StatusCode::CREATED, Json(seed)))
}

async fn get_node(
    State(store): State<AppState>,
    Path(tag): Path<String>,
) -> Result<Json<NodeView>, ApiError> {
    Ok(Json(store.get_node(&decode_tag(&tag))?))
}

async fn delete_node(
    State(store): State<AppState>,
    Path(tag): Path<String>,
) -> Result<StatusCode, ApiError> {
    store.delete_node(&decode_tag(&tag))?;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Default, Deserialize)]
struct ExpandRequest {
    count: Option<u32>,
}

/// Expand a node. The body is optional; without `count` the node's stored
/// polygon order is used.
async fn add_children(
    State(store): State<AppState>,
    Path(tag): Path<String>,
    body: Bytes,
) -> Result<Json<Vec<NodeView>>, ApiError> {
    let req: ExpandRequest = if body.iter().all(u8::is_ascii_whitespace) {
        ExpandRequest::default()
    } else {
        serde_json::from_slice(&body)?
    };
    let created = store.expand_node(&decode_tag(&tag), req.count)?;
    Ok(Json(created))
}

#[derive(Debug, Deserialize)]
struct RenameRequest {
    name: String,
}

async fn rename_node(
    State(store): State<AppState>,
    Path(tag): Path<String>,
    Json(req): Json<RenameRequest>,
) -> Result<Json<NodeView>, ApiError> {
    Ok(Json(store.rename_node(&decode_tag(&tag), &req.name)?))
}

async fn get_subtree(
    State(store): State<AppState>,
    Path(tag): Path<String>,
) -> Result<Json<Vec<NodeView>>, ApiError> {
    Ok(Json(store.subtree(&decode_tag(&tag))?))
}

async fn get_style(
    State(store): State<AppState>,
    Path(tag): Path<String>,
) -> Result<Json<NodeStyle>, ApiError> {
    Ok(Json(store.node_style(&decode_tag(&tag))?))
}

#[derive(Debug, Deserialize)]
struct NearestQuery {
    x: f64,
    y: f64,
}

#[derive(Debug, Serialize)]
struct NearestResponse {
    node: NodeView,
    distance: f64,
}

async fn get_nearest(
    State(store): State<AppState>,
    Query(q): Query<NearestQuery>,
) -> Result<Json<NearestResponse>, ApiError> {
    let point = Point::new(q.x, q.y);
    if !point.is_finite() {
        return Err(ApiError::BadRequest(format!("non-finite point {point}")));
    }
    let (node, distance) = store
        .nearest_node(point)
        .ok_or_else(|| ApiError::Tree(vsm_tree::Error::NotFound("nearest node".into())))?;
    Ok(Json(NearestResponse { node, distance }))
}

async fn get_view(State(store): State<AppState>) -> Json<Bounds> {
    Json(store.view_bounds())
}
