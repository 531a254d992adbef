use std::sync::Arc;

use crate::application::http::chat::router::chat_routes;
use crate::application::http::health::router::health_routes;
use crate::application::http::recipe::router::recipe_routes;
use crate::application::http::server::app_state::AppState;
use crate::application::http::server::openapi::ApiDoc;
use crate::args::Args;

use anyhow::Context;
use axum::http::HeaderValue;
use axum::routing::get;
use axum::{Json, Router};
use recipe_chat_core::{application::create_service, domain::common::RecipeChatConfig};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tracing::{debug, info_span};

pub async fn state(args: Arc<Args>) -> Result<AppState, anyhow::Error> {
    let config: RecipeChatConfig = RecipeChatConfig::from(args.as_ref().clone());
    let service = create_service(config).await?;

    Ok(AppState::new(args, service))
}

fn cors_layer(allowed_origins: &[String]) -> Result<CorsLayer, anyhow::Error> {
    // credentials are allowed, so a literal `*` is not permitted by browsers
    let allow_origin = if allowed_origins.iter().any(|origin| origin == "*") {
        AllowOrigin::mirror_request()
    } else {
        let origins = allowed_origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin)
                    .with_context(|| format!("invalid allowed origin: {origin}"))
            })
            .collect::<Result<Vec<HeaderValue>, _>>()?;
        AllowOrigin::list(origins)
    };

    debug!("Allowed origins: {:?}", allowed_origins);

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}

///  Returns the [`Router`] of this application.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    let cors = cors_layer(&state.args.server.allowed_origins)?;

    let root_path = state.args.server.root_path.clone();

    let mut openapi = ApiDoc::full();
    let mut paths = openapi.paths.clone();
    paths.paths = openapi
        .paths
        .paths
        .into_iter()
        .map(|(path, item)| (format!("{}{path}", root_path), item))
        .collect();
    openapi.paths = paths;

    let router = axum::Router::new()
        .route(
            &format!("{}/api-docs/openapi.json", root_path),
            get(move || async move { Json(openapi) }),
        )
        .merge(recipe_routes(state.clone()))
        .merge(chat_routes(state.clone()))
        .merge(health_routes(state.clone()))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state);
    Ok(router)
}
