//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves the server-rendered app, the compiled client bundle
//! under `/pkg`, static images under `/images`, and a liveness probe. Paths
//! the app does not route still render the shell (its not-found page) with a
//! 404 status.

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

use std::path::Path;

use axum::Router;
use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use themeshell::app::{App, shell};

/// Health probe plus the static asset directories below `site_root`.
fn static_routes(site_root: &Path) -> Router<LeptosOptions> {
    Router::new()
        .route("/healthz", get(healthz))
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .nest_service("/images", ServeDir::new(site_root.join("images")))
}

/// Full application router: SSR routes, static assets, health probe.
pub fn app(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(App);
    let site_root = Path::new(leptos_options.site_root.as_ref()).to_path_buf();

    static_routes(&site_root)
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell(opts.clone())
        })
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options)
}

async fn not_found(State(options): State<LeptosOptions>, req: Request<Body>) -> Response {
    tracing::debug!(path = %req.uri().path(), "unrouted path");
    let render = leptos_axum::render_app_to_stream(move || shell(options.clone()));
    let mut response = render(req).await.into_response();
    *response.status_mut() = StatusCode::NOT_FOUND;
    response
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
