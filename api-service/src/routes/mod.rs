use std::sync::Arc;

use axum::{
    extract::Request,
    middleware,
    routing::{delete, get, patch, post},
    Router,
};
use http::header::{AUTHORIZATION, CONTENT_TYPE};
use http::{HeaderValue, Method};
use log::{info, warn};
use sqlx::PgPool;
use tower_http::cors::CorsLayer;

use mentorize_shared::auth::{auth_middleware, JwtKeys};
use mentorize_shared::config::AppConfig;
use mentorize_shared::store::postgres::{PgMentorshipStore, PgUserStore};
use mentorize_shared::store::{MentorshipStore, UserStore};

use crate::handlers::{
    auth_handlers::{login, logout, register},
    mentorship_handlers::{
        cancel_mentorship, confirm_mentorship, create_mentorship, list_mentorships,
    },
    user_handlers::list_users,
};
use crate::services::{auth_service::AuthService, mentorship_service::MentorshipService};

/// Shared application state handed to every handler
pub struct AppState<U, M> {
    pub auth: AuthService<U>,
    pub mentorships: MentorshipService<M>,
    pub user_store: Arc<U>,
}

impl<U, M> Clone for AppState<U, M> {
    fn clone(&self) -> Self {
        Self {
            auth: self.auth.clone(),
            mentorships: self.mentorships.clone(),
            user_store: Arc::clone(&self.user_store),
        }
    }
}

/// Creates a router with the default Postgres stores
pub fn create_router(pool: PgPool, config: &AppConfig) -> Router {
    info!("Creating router with Postgres stores");

    let user_store = Arc::new(PgUserStore::new(pool.clone()));
    let mentorship_store = Arc::new(PgMentorshipStore::new(pool));
    let keys = JwtKeys::new(&config.jwt_secret, config.token_ttl_secs);

    create_router_with_stores(
        user_store,
        mentorship_store,
        keys,
        config.bcrypt_cost,
        &config.cors_origin,
    )
}

/// Creates a router with the given store implementations
pub fn create_router_with_stores<U, M>(
    user_store: Arc<U>,
    mentorship_store: Arc<M>,
    keys: JwtKeys,
    bcrypt_cost: u32,
    cors_origin: &str,
) -> Router
where
    U: UserStore,
    M: MentorshipStore,
{
    info!("Setting up API routes");

    let state = AppState {
        auth: AuthService::new(Arc::clone(&user_store), keys.clone(), bcrypt_cost),
        mentorships: MentorshipService::new(mentorship_store),
        user_store,
    };

    // Mirror the frontend dev server's CORS policy: one allowed origin,
    // credentials enabled, so wildcard origins are off the table
    let cors = match cors_origin.parse::<HeaderValue>() {
        Ok(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([
                Method::GET,
                Method::HEAD,
                Method::PUT,
                Method::PATCH,
                Method::POST,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([AUTHORIZATION, CONTENT_TYPE])
            .allow_credentials(true),
        Err(_) => {
            warn!("Invalid CORS origin '{}', no origin allowed", cors_origin);
            CorsLayer::new()
        }
    };

    info!("CORS configured for origin: {}", cors_origin);

    // Logging middleware to trace all requests
    async fn logging_middleware(
        req: Request,
        next: axum::middleware::Next,
    ) -> impl axum::response::IntoResponse {
        info!(
            "Router received request: method={}, uri={}",
            req.method(),
            req.uri()
        );
        next.run(req).await
    }

    // Create the API routes
    let api_routes = Router::new()
        .route("/auth/login", post(login))
        .route("/auth/register", post(register))
        .route("/auth/logout", post(logout))
        .route("/users", get(list_users))
        .route("/mentorships", get(list_mentorships).post(create_mentorship))
        .route("/mentorships/:id", delete(cancel_mentorship))
        .route("/mentorships/:id/confirm", patch(confirm_mentorship))
        .layer(middleware::from_fn_with_state(keys, auth_middleware))
        .with_state(state);

    let router = api_routes
        .layer(cors)
        .layer(middleware::from_fn(logging_middleware));

    info!("Router configured with all routes and middleware");

    // Add a fallback handler for 404s
    router.fallback(|req: Request| async move {
        warn!("No route matched for: {} {}", req.method(), req.uri());
        (
            axum::http::StatusCode::NOT_FOUND,
            "The requested resource was not found".to_string(),
        )
    })
}
