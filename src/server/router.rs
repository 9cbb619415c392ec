//! HTTP routing and OpenAPI documentation configuration.
//!
//! Routes are registered with their utoipa specifications and collected into one OpenAPI
//! document, served through Swagger UI at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /api/alliance/{slug}/wars` - Active wars of an alliance, optionally synced first
/// - `POST /api/alliance/{slug}/wars` - Sync an alliance's wars and return them
/// - `GET /api/bot/alliances` - Alliances with war monitoring enabled
///
/// The OpenAPI specification is served at `/api/docs/openapi.json`.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Bastion", description = "Bastion war monitoring API"), tags(
        (name = controller::war::WAR_TAG, description = "Alliance war routes"),
        (name = controller::bot::BOT_TAG, description = "Discord bot configuration routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::war::get_alliance_wars,
            controller::war::sync_alliance_wars
        ))
        .routes(routes!(controller::bot::get_monitored_alliances))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
