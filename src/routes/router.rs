use axum::{
    Router,
    extract::{MatchedPath, Request},
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{services::ServeDir, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::info_span;

use crate::core::state::AppState;
use crate::routes::{auth, error, files, hello, request, view};

pub(crate) fn routes(state: AppState) -> Router {
    let request_timeout = state.request_timeout;

    // /api/...
    let api_router = Router::new()
        .route("/hello", get(hello::index))
        .route("/world", get(hello::index))
        .route_layer(middleware::from_fn(log_api));

    // /web/...
    let web_router = Router::new()
        .route("/hello", get(hello::index))
        .route("/world", get(hello::index));

    Router::new()
        .route("/", get(hello::index))
        .route("/hello", get(hello::greet).post(hello::greet_form))
        .route("/request", get(request::request_info))
        .route(
            "/users/{user_id}/orders/{order_id}",
            get(request::user_order),
        )
        .route("/login", post(auth::login))
        .route("/register", post(auth::register))
        .route("/user", get(auth::profile))
        .route("/upload", post(files::upload))
        .route("/download", get(files::download))
        .route("/error", get(error::fail))
        .route("/view", get(view::view))
        .nest("/api", api_router)
        .nest("/web", web_router)
        .nest_service("/public", ServeDir::new(&state.static_dir))
        .with_state(state)
        .route_layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                        let matched_path = request
                            .extensions()
                            .get::<MatchedPath>()
                            .map(MatchedPath::as_str);

                        info_span!(
                            "request",
                            method = ?request.method(),
                            matched_path,
                        )
                    }),
                )
                .layer(TimeoutLayer::new(request_timeout)),
        )
}

async fn log_api(request: Request, next: Next) -> Response {
    tracing::debug!("before handler");

    let response = next.run(request).await;

    tracing::debug!("after handler");

    response
}
