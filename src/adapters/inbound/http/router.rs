use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use std::{path::PathBuf, sync::Arc};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use super::handlers::{
    create_owner, create_property, create_trace, delete_image, delete_owner, delete_property,
    get_owner, get_property, list_images, list_owners, list_traces, login, register,
    search_properties, set_image_enabled, update_owner, update_property, update_property_price,
    upload_image,
};
use crate::ports::{
    security::TokenProvider,
    services::{
        AuthService, OwnerService, PropertyImageService, PropertyService, PropertyTraceService,
    },
    storage::FileStore,
};

/// Everything the handlers need, injected as trait objects.
#[derive(Clone)]
pub struct AppState {
    pub owner_service: Arc<dyn OwnerService>,
    pub property_service: Arc<dyn PropertyService>,
    pub image_service: Arc<dyn PropertyImageService>,
    pub trace_service: Arc<dyn PropertyTraceService>,
    pub auth_service: Arc<dyn AuthService>,
    pub tokens: Arc<dyn TokenProvider>,
    pub files: Arc<dyn FileStore>,
    /// Upload root, served statically under `/files`.
    pub uploads_dir: PathBuf,
}

/// Reads are anonymous; every mutating route pulls the `AuthUser`
/// extractor and so requires a bearer token. Uploaded files are served
/// back under `/files`, matching the public URLs the upload handler
/// records.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest_service("/files", ServeDir::new(&state.uploads_dir))
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/owners", get(list_owners).post(create_owner))
        .route(
            "/api/owners/{id}",
            get(get_owner).put(update_owner).delete(delete_owner),
        )
        .route(
            "/api/properties",
            get(search_properties).post(create_property),
        )
        .route(
            "/api/properties/{id}",
            get(get_property)
                .put(update_property)
                .delete(delete_property),
        )
        .route(
            "/api/properties/{id}/price",
            patch(update_property_price).put(update_property_price),
        )
        .route(
            "/api/properties/{id}/images",
            get(list_images).post(upload_image),
        )
        .route("/api/properties/{id}/traces", get(list_traces))
        .route("/api/traces", post(create_trace))
        .route("/api/images/{id}/enabled", patch(set_image_enabled))
        .route("/api/images/{id}", delete(delete_image))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
