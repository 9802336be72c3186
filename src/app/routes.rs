use crate::app::render::PageRenderer;
use crate::core::{BreedGateway, BreedSource, RenderContext};
use crate::utils::error::{GalleryError, Result};
use axum::{
    extract::{rejection::FormRejection, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Router,
};
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    BreedList,
    SelectBreed,
    RandomBreed,
}

impl Route {
    pub fn name(self) -> &'static str {
        match self {
            Route::BreedList => "breed-list",
            Route::SelectBreed => "select-breed",
            Route::RandomBreed => "random-breed",
        }
    }

    /// The only text a failed request shows to the user.
    pub fn failure_message(self) -> &'static str {
        match self {
            Route::BreedList => "Error fetching breed list",
            Route::SelectBreed => "Error fetching selected breed",
            Route::RandomBreed => "Error fetching random breed",
        }
    }
}

pub struct AppState<S: BreedSource> {
    pub gateway: Arc<BreedGateway<S>>,
    pub renderer: Arc<PageRenderer>,
}

impl<S: BreedSource> AppState<S> {
    pub fn new(gateway: BreedGateway<S>, renderer: PageRenderer) -> Self {
        Self {
            gateway: Arc::new(gateway),
            renderer: Arc::new(renderer),
        }
    }

    fn respond(&self, route: Route, context: Result<RenderContext>) -> Response {
        match context.and_then(|ctx| self.renderer.render_index(&ctx)) {
            Ok(html) => Html(html).into_response(),
            Err(e) => failure(route, &e),
        }
    }
}

impl<S: BreedSource> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            gateway: Arc::clone(&self.gateway),
            renderer: Arc::clone(&self.renderer),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct SelectBreedForm {
    #[serde(rename = "selectBreed", default)]
    pub select_breed: String,
}

fn failure(route: Route, error: &GalleryError) -> Response {
    tracing::error!(
        route = route.name(),
        category = ?error.category(),
        "❌ Request failed: {}",
        error
    );
    (StatusCode::INTERNAL_SERVER_ERROR, route.failure_message()).into_response()
}

async fn breed_list<S: BreedSource + 'static>(State(state): State<AppState<S>>) -> Response {
    let context = state.gateway.load_breed_page().await;
    state.respond(Route::BreedList, context)
}

async fn select_breed<S: BreedSource + 'static>(
    State(state): State<AppState<S>>,
    form: std::result::Result<Form<SelectBreedForm>, FormRejection>,
) -> Response {
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            let err = GalleryError::InvalidSelection {
                value: rejection.body_text(),
            };
            return failure(Route::SelectBreed, &err);
        }
    };
    tracing::info!("Breed selected: {:?}", form.select_breed);
    let context = state
        .gateway
        .load_selected_breed_page(&form.select_breed)
        .await;
    state.respond(Route::SelectBreed, context)
}

async fn random_breed<S: BreedSource + 'static>(State(state): State<AppState<S>>) -> Response {
    let context = state.gateway.load_random_breed_page().await;
    state.respond(Route::RandomBreed, context)
}

/// Page routes plus static files from `static_dir` for every other path.
pub fn build_router<S, P>(state: AppState<S>, static_dir: P) -> Router
where
    S: BreedSource + 'static,
    P: AsRef<Path>,
{
    Router::new()
        .route("/", get(breed_list::<S>))
        .route("/select-breed", post(select_breed::<S>))
        .route("/random-breed", post(random_breed::<S>))
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
