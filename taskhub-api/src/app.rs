/// Application state and router builder
///
/// This module defines the shared application state and provides
/// a function to build the Axum router with all routes and middleware.
///
/// # Example
///
/// ```no_run
/// use taskhub_api::{app::AppState, config::Config};
/// use sqlx::PgPool;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let pool = PgPool::connect(&config.database.url).await?;
/// let state = AppState::new(pool, config);
/// let app = taskhub_api::app::build_router(state);
/// # Ok(())
/// # }
/// ```

use crate::routes;
use axum::{
    extract::Request,
    http::{header, HeaderValue, Method},
    middleware::Next,
    response::Response,
    routing::{delete, get, post},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use taskhub_shared::auth::{
    jwt,
    middleware::{extract_bearer, AuthContext},
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::config::Config;

/// Shared application state
///
/// This is cloned for each request handler via Axum's `State` extractor.
/// Uses Arc internally for cheap cloning.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: PgPool,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates new application state
    pub fn new(db: PgPool, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }

    /// Gets the token-signing secret
    pub fn jwt_secret(&self) -> &str {
        &self.config.jwt.secret
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Architecture
///
/// ```text
/// /
/// ├── GET  /health            # Health check (public)
/// ├── POST /register          # Create account + profile (public)
/// ├── POST /login             # Issue bearer token (public)
/// ├── GET  /info/:user_id     # Public user lookup
/// ├── GET  /todos             # List todos (bearer)
/// ├── POST /todos             # Add todo (bearer)
/// ├── DELETE /todos/:id       # Delete todo (bearer)
/// └── GET  /profile           # Profile aggregate of the token subject (bearer)
/// ```
///
/// # Middleware Stack
///
/// Applied in order (bottom to top):
/// 1. Logging (tower-http TraceLayer)
/// 2. CORS (tower-http CorsLayer)
/// 3. Bearer authentication (protected routes only)
pub fn build_router(state: AppState) -> Router {
    // Public routes, no auth required
    let public_routes = Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/register", post(routes::auth::register))
        .route("/login", post(routes::auth::login))
        .route("/info/:user_id", get(routes::users::user_info));

    // Protected routes, require a valid bearer token
    let protected_routes = Router::new()
        .route(
            "/todos",
            get(routes::todos::list_todos).post(routes::todos::add_todo),
        )
        .route("/todos/:id", delete(routes::todos::delete_todo))
        .route("/profile", get(routes::users::profile))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            bearer_auth_layer,
        ));

    // Configure CORS based on environment
    let cors = if state.config.api.cors_origins.contains(&"*".to_string()) {
        // Development mode: permissive CORS
        CorsLayer::permissive()
    } else {
        // Production mode: configure allowed origins
        let origins: Vec<HeaderValue> = state
            .config
            .api
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
            .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
            .allow_credentials(true)
            .max_age(std::time::Duration::from_secs(3600))
    };

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .with_state(state)
}

/// Bearer authentication middleware layer
///
/// Extracts and validates the bearer token from the Authorization header,
/// then injects [`AuthContext`] into request extensions.
async fn bearer_auth_layer(
    state: axum::extract::State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, crate::error::ApiError> {
    let token = extract_bearer(req.headers())?;

    let claims = jwt::validate_token(token, state.jwt_secret())?;

    let auth_context = AuthContext::new(claims.sub);
    req.extensions_mut().insert(auth_context);

    Ok(next.run(req).await)
}
