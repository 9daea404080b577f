//! REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod bulk;
#[allow(clippy::missing_errors_doc)]
pub mod people;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};

use rolodex_app::ports::PersonRepository;

use crate::state::AppState;

/// Build the API router.
///
/// Every registered path carries a method fallback, so a matched path with
/// a disallowed method answers `405` with a fixed body instead of axum's
/// empty default.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: PersonRepository + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/people",
            get(people::list::<R>).fallback(method_not_allowed),
        )
        .route(
            "/person",
            post(people::create::<R>).fallback(method_not_allowed),
        )
        .route(
            "/person/{id}",
            get(people::read::<R>)
                .post(people::create_with_id::<R>)
                .put(people::update::<R>)
                .patch(people::update_partial::<R>)
                .delete(people::delete::<R>)
                .fallback(method_not_allowed),
        )
        .route(
            "/import",
            post(bulk::import::<R>).fallback(method_not_allowed),
        )
        .route(
            "/export",
            get(bulk::export::<R>).fallback(method_not_allowed),
        )
}

async fn method_not_allowed() -> (StatusCode, &'static str) {
    (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed.")
}
