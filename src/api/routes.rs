use axum::{
    routing::{get, post},
    Router,
    extract::{Form, Json, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use maud::Markup;
use tower_http::cors::{CorsLayer, Any};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api::models::{DispatchRequest, DispatchResponse, GenerateForm, PageQuery};
use crate::api::response;
use crate::error::ErrorResponse;
use crate::page;
use crate::session::Session;
use crate::theme::Theme;
use crate::view::{DispatchOutcome, Dispatched, ViewHandle};
use crate::AppState;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(page_handler))
        .route("/generate", post(generate_handler))
        .route("/api/dispatch", post(dispatch_handler))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(app_state)
}

async fn page_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<PageQuery>,
) -> Markup {
    let view = state
        .new_view(state.session(&headers))
        .with_topic(query.topic.unwrap_or_default())
        .with_result(query.result.unwrap_or_default())
        .with_theme(Theme::from_param(query.theme.as_deref()));

    page::render(&view, &state.links())
}

async fn generate_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<GenerateForm>,
) -> Markup {
    let view = state
        .new_view(state.session(&headers))
        .with_topic(form.topic)
        .with_theme(Theme::from_param(form.theme.as_deref()));
    let handle = ViewHandle::new(view);

    handle.dispatch(state.completion.as_ref(), &form.action).await;

    page::render(&handle.snapshot(), &state.links())
}

async fn dispatch_handler(
    State(state): State<AppState>,
    Json(req): Json<DispatchRequest>,
) -> impl IntoResponse {
    let start_time = std::time::Instant::now();

    let handle = ViewHandle::new(state.new_view(Session::Anonymous).with_topic(req.topic));
    let Dispatched { request, outcome } =
        handle.dispatch(state.completion.as_ref(), &req.action).await;
    info!(action = request.action.name(), elapsed = ?start_time.elapsed(), "dispatch finished");

    match outcome {
        DispatchOutcome::Success(result) => response::success(DispatchResponse {
            action: request.action,
            prompt: request.prompt,
            result,
        }),
        DispatchOutcome::Failure(err) => response::error(err.status_code(), err.to_string()),
    }
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new("route not found")),
    )
}
