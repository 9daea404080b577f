//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use rolodex_app::ports::PersonRepository;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Merges the API routes with a `/health` probe. Includes a [`TraceLayer`]
/// that logs each HTTP request/response at the `DEBUG` level using the
/// `tracing` ecosystem.
pub fn build<R>(state: AppState<R>) -> Router
where
    R: PersonRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .merge(crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use rolodex_app::services::person_service::PersonService;
    use rolodex_domain::error::RolodexError;
    use rolodex_domain::id::PersonId;
    use rolodex_domain::person::Person;
    use tower::ServiceExt;

    struct StubPersonRepo;

    impl rolodex_app::ports::PersonRepository for StubPersonRepo {
        async fn insert(&self, person: Person) -> Result<Person, RolodexError> {
            Ok(person)
        }
        async fn get_by_id(&self, _id: PersonId) -> Result<Option<Person>, RolodexError> {
            Ok(None)
        }
        async fn get_all(&self, _start: i64, _count: i64) -> Result<Vec<Person>, RolodexError> {
            Ok(vec![])
        }
        async fn update(&self, person: Person) -> Result<Person, RolodexError> {
            Ok(person)
        }
        async fn delete(&self, _id: PersonId) -> Result<(), RolodexError> {
            Ok(())
        }
        async fn next_id(&self) -> Result<PersonId, RolodexError> {
            Ok(PersonId::new(1))
        }
    }

    fn test_app() -> Router {
        build(AppState::new(PersonService::new(StubPersonRepo)))
    }

    async fn request(method: Method, uri: &str) -> StatusCode {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        response.status()
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        assert_eq!(request(Method::GET, "/health").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_route() {
        assert_eq!(request(Method::GET, "/nope").await, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_return_method_not_allowed_on_matched_path() {
        assert_eq!(
            request(Method::POST, "/people").await,
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            request(Method::GET, "/person").await,
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            request(Method::DELETE, "/import").await,
            StatusCode::METHOD_NOT_ALLOWED
        );
    }

    #[tokio::test]
    async fn should_treat_non_numeric_identifier_as_unknown_route() {
        assert_eq!(
            request(Method::GET, "/person/abc").await,
            StatusCode::NOT_FOUND
        );
    }

    #[tokio::test]
    async fn should_reject_identifier_above_supported_range() {
        assert_eq!(
            request(Method::GET, "/person/9223372036854775808").await,
            StatusCode::CONFLICT
        );
    }

    /// Insert failures during an import are logged and swallowed; every
    /// non-header record still counts.
    #[tokio::test]
    async fn should_count_import_records_whose_insert_fails() {
        use http_body_util::BodyExt;

        struct RejectingRepo;

        impl rolodex_app::ports::PersonRepository for RejectingRepo {
            async fn insert(&self, person: Person) -> Result<Person, RolodexError> {
                Err(RolodexError::AlreadyExists(person.id))
            }
            async fn get_by_id(&self, _id: PersonId) -> Result<Option<Person>, RolodexError> {
                Ok(None)
            }
            async fn get_all(
                &self,
                _start: i64,
                _count: i64,
            ) -> Result<Vec<Person>, RolodexError> {
                Ok(vec![])
            }
            async fn update(&self, person: Person) -> Result<Person, RolodexError> {
                Ok(person)
            }
            async fn delete(&self, _id: PersonId) -> Result<(), RolodexError> {
                Ok(())
            }
            async fn next_id(&self) -> Result<PersonId, RolodexError> {
                Ok(PersonId::new(1))
            }
        }

        let app = build(AppState::new(PersonService::new(RejectingRepo)));
        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/import")
                    .body(Body::from("Ada,Lovelace,ada@example.com,555-0100\n"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(bytes.as_ref(), b"Imported 1 entries.");
    }
}
