//! HTTP boundary: the pattern routes as an axum service.
//!
//! Endpoints:
//!   GET /health                   → liveness probe
//!   GET /vine/init                → create a vine session (query-configured)
//!   GET /vine/grow/:id            → advance a session one step
//!   GET /circular/generate        → circular motif document
//!   GET /geometric/generate       → layered geometric document
//!   GET /tessellation/generate    → tessellation base-unit document
//!   GET /three_d/generate         → 3D element cloud document
//!   GET /basic/generate           → sine-wave vertex grid document

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};
use uuid::Uuid;

use crate::patterns::{circular, geometric, tessellation, three_d, wave};
use crate::registry::SessionRegistry;
use crate::transform::{self, VineDocument};
use crate::vine::{GrowthConfig, GrowthPattern, Obstacle, Season};

pub fn router(registry: Arc<SessionRegistry>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/vine/init", get(vine_init))
        .route("/vine/grow/:id", get(vine_grow))
        .route("/circular/generate", get(circular_generate))
        .route("/geometric/generate", get(geometric_generate))
        .route("/tessellation/generate", get(tessellation_generate))
        .route("/three_d/generate", get(three_d_generate))
        .route("/basic/generate", get(basic_generate))
        .layer(CorsLayer::permissive())
        .with_state(registry)
}

/// Bind and serve until the process is stopped.
pub async fn serve(registry: Arc<SessionRegistry>, addr: SocketAddr) -> std::io::Result<()> {
    let app = router(registry);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "patternforge listening");
    axum::serve(listener, app).await
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({"status": "healthy"}))
}

// ── Vine sessions ────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(default)]
struct VineInitParams {
    start_x: f64,
    start_y: f64,
    growth_pattern: String,
    growth_speed: f64,
    branch_probability: f64,
    leaf_probability: f64,
    flower_probability: f64,
    max_length: u32,
    season: Option<String>,
    /// JSON array of `{"x": .., "y": .., "radius": ..}`.
    obstacles: Option<String>,
    obstacle_margin: f64,
    seed: Option<u64>,
}

impl Default for VineInitParams {
    fn default() -> Self {
        Self {
            start_x: 0.0,
            start_y: 0.0,
            growth_pattern: "climbing".to_string(),
            growth_speed: 1.0,
            branch_probability: 0.3,
            leaf_probability: 0.4,
            flower_probability: 0.2,
            max_length: 10,
            season: None,
            obstacles: None,
            obstacle_margin: 5.0,
            seed: None,
        }
    }
}

#[derive(Serialize)]
struct VineInitResponse {
    session_id: Uuid,
    pattern: VineDocument,
}

#[derive(Serialize)]
struct VineGrowResponse {
    completed: bool,
    pattern: VineDocument,
}

async fn vine_init(
    State(registry): State<Arc<SessionRegistry>>,
    Query(params): Query<VineInitParams>,
) -> impl IntoResponse {
    let config = GrowthConfig {
        max_length: params.max_length,
        growth_speed: params.growth_speed,
        branch_probability: params.branch_probability,
        leaf_probability: params.leaf_probability,
        flower_probability: params.flower_probability,
        growth_pattern: GrowthPattern::from_label(&params.growth_pattern),
        season: params
            .season
            .as_deref()
            .map(Season::from_label)
            .unwrap_or_else(Season::current),
        start_pos: (params.start_x, params.start_y),
        obstacles: params
            .obstacles
            .as_deref()
            .map(parse_obstacles)
            .unwrap_or_default(),
        obstacle_margin: params.obstacle_margin,
        seed: params.seed,
    };

    let (id, snapshot) = registry.create(config);
    info!(session = %id, "vine session created");
    Json(VineInitResponse {
        session_id: id,
        pattern: transform::vine_document(&snapshot),
    })
}

async fn vine_grow(
    State(registry): State<Arc<SessionRegistry>>,
    Path(id): Path<String>,
) -> Response {
    // An unparseable id is indistinguishable from an unknown one to callers.
    let Ok(id) = Uuid::parse_str(&id) else {
        return not_found();
    };
    match registry.advance(id) {
        Ok(snapshot) => Json(VineGrowResponse {
            completed: snapshot.completed,
            pattern: transform::vine_document(&snapshot),
        })
        .into_response(),
        Err(error) => {
            warn!(session = %id, %error, "grow request rejected");
            not_found()
        }
    }
}

fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({"error": "pattern not found"})),
    )
        .into_response()
}

#[derive(Debug, Deserialize)]
struct ObstacleParam {
    x: f64,
    y: f64,
    radius: f64,
}

/// Parse an `obstacles` value, a JSON array of `{"x", "y", "radius"}`
/// objects. Malformed input yields no obstacles rather than an error.
pub fn parse_obstacles(raw: &str) -> Vec<Obstacle> {
    serde_json::from_str::<Vec<ObstacleParam>>(raw)
        .map(|list| {
            list.into_iter()
                .map(|o| Obstacle {
                    center: (o.x, o.y),
                    radius: o.radius,
                })
                .collect()
        })
        .unwrap_or_default()
}

// ── Stateless generators ─────────────────────────────────────────────────────

async fn circular_generate(Query(params): Query<circular::CircularParams>) -> impl IntoResponse {
    let mut rng = StdRng::from_entropy();
    Json(circular::generate(&params, &mut rng))
}

async fn geometric_generate(Query(params): Query<geometric::GeometricParams>) -> impl IntoResponse {
    let mut rng = StdRng::from_entropy();
    Json(geometric::generate(&params, &mut rng))
}

async fn tessellation_generate(
    Query(params): Query<tessellation::TessellationParams>,
) -> impl IntoResponse {
    let mut rng = StdRng::from_entropy();
    Json(tessellation::generate(&params, &mut rng))
}

async fn three_d_generate(Query(params): Query<three_d::ThreeDParams>) -> impl IntoResponse {
    let mut rng = StdRng::from_entropy();
    Json(three_d::generate(&params, &mut rng))
}

async fn basic_generate(Query(params): Query<wave::WaveParams>) -> impl IntoResponse {
    let mut rng = StdRng::from_entropy();
    Json(wave::generate(&params, &mut rng))
}
